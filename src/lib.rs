//! Ordered, variable-length bit streams.
//!
//! A [`BitStream`] stores bits LSB-first: bit 0 of the packed value is the
//! oldest pushed bit, and [`BitStream::pop`] reads from there. Converting
//! to an integer reads the bits the other way round, giving the natural
//! "left to right" binary value. [`BitIterator`] is a one-shot cursor over
//! a snapshot of the packed bits, and [`ops`] combines whole streams
//! bitwise, truncating to the shorter operand.

/// Errors reported by stream operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `pop()` on a stream with no bits left.
    #[error("pop from empty bit stream")]
    Underflow,
}

/// A general `Result` type.
pub type Result<T=()> = std::result::Result<T, Error>;

// ----------------------------------------------------------------------------

mod source;
pub use source::Source;

mod stream;
pub use stream::BitStream;

mod iter;
pub use iter::BitIterator;

pub mod ops;
pub use ops::{and, not, or, xor};
