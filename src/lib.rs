//! A fixed-capacity stack that reports overflow and underflow as errors
//! instead of growing or panicking.

mod debug;
mod error;
mod stack;

pub use error::StackError;
pub use stack::{Stack, DEFAULT_CAPACITY};
