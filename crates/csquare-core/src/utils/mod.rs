//! Supporting data structures.
//!
//! - [`BoundedBuffer`] - Fixed-capacity FIFO used for the transcript and command history

mod bounded;

pub use bounded::BoundedBuffer;
