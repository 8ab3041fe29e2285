use std::{
    fmt::{self, Debug},
    iter,
};

use crate::debug;
use crate::error::StackError;

/// Capacity used by [`Stack::new`].
pub const DEFAULT_CAPACITY: usize = 256;

/// A last-in-first-out stack with a fixed maximum size.
///
/// All slots are allocated up front and never reallocated. Slots `0..len` hold the live values,
/// bottom to top; every slot above them is `None`.
#[derive(Clone)]
pub struct Stack<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> Stack<T> {
    /// A stack that holds at most [`DEFAULT_CAPACITY`] values.
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_CAPACITY)
    }

    /// A stack that holds at most `max_size` values.
    ///
    /// # Panics
    ///
    /// If `max_size` is zero.
    pub fn with_max_size(max_size: usize) -> Self {
        assert!(max_size > 0, "stack max size must be positive");

        Self {
            slots: iter::repeat_with(|| None).take(max_size).collect(),
            len: 0,
        }
    }

    /// Fails with [`StackError::Overflow`] if the stack is full, in which case `value` is dropped
    /// and the stack is left as it was.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                capacity: self.capacity(),
            });
        }

        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top value. Fails with [`StackError::Underflow`] if the stack is
    /// empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let Some(index) = self.top_index() else {
            return Err(StackError::Underflow);
        };

        // Clear the slot, so the store doesn't keep the value alive.
        let value = self.slots[index].take().expect("occupied slot below len");
        self.len = index;
        Ok(value)
    }

    /// The most recently pushed value, or `None` if the stack is empty.
    ///
    /// Unlike [`Stack::pop`], an empty stack is not an error here.
    pub fn top(&self) -> Option<&T> {
        self.top_index().and_then(|i| self.slots[i].as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the next `push` would overflow. A convenience pre-check; `push`
    /// reports the same condition on its own.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The max size given at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the top slot. `None` is the "one below the bottom" cursor of an empty stack.
    fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Live values, bottom to top.
    fn live(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> {
        self.slots[..self.len]
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|value| (i, value)))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Stack capacity={} length={}>", self.capacity(), self.len)?;
        if !f.alternate() {
            return self.debug_compact(f);
        }

        // Similar to a memory dump: occupied slots from the top down, then a
        // summary line for the free ones.

        if self.is_empty() {
            writeln!(f)?;
            return write!(f, "(empty)");
        }

        let width = debug::index_width(self.capacity());
        for (i, value) in self.live().rev() {
            writeln!(f)?;
            debug::write_slot(f, width, i, value)?;
            if Some(i) == self.top_index() {
                write!(f, " <- top")?;
            }
        }

        let free = self.capacity() - self.len;
        if free > 0 {
            writeln!(f)?;
            write!(f, "... ({free} empty slots)")?;
        }

        Ok(())
    }
}

impl<T: Debug> Stack<T> {
    /// Helper for <Stack as Debug>::fmt
    fn debug_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        f.debug_list()
            .entries(self.live().map(|(_i, value)| value))
            .finish()
    }
}
