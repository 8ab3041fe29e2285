//! Helpers for Debug impls.

use std::fmt::{self, Debug};

/// Digits needed to print every index of a store with `len` slots.
pub(crate) fn index_width(len: usize) -> usize {
    len.saturating_sub(1).to_string().len()
}

/// Write one occupied slot: zero-padded index, then the value on the same line.
pub(crate) fn write_slot<T: Debug>(
    f: &mut fmt::Formatter<'_>,
    width: usize,
    index: usize,
    value: &T,
) -> fmt::Result {
    write!(f, "{index:0width$}: {value:?}")
}
