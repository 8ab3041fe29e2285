use std::{
    error::Error,
    fmt::{self, Display},
};

/// Failure of a single push or pop. The stack is unchanged when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `push` on a full stack.
    Overflow { capacity: usize },
    /// `pop` on an empty stack.
    Underflow,
}

impl Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { capacity } => {
                write!(f, "the stack is currently at max capacity: {capacity} entries")
            }
            Self::Underflow => write!(f, "the stack is empty"),
        }
    }
}

impl Error for StackError {}
