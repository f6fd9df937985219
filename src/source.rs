use num_bigint::BigUint;

use super::{BitStream};

/// The closed set of inputs accepted by [`BitStream::push`].
///
/// The categories form a closed union and the interpretation of a value
/// is decided by the `From` conversion at the call site, so an
/// unsupported input kind is a compile error rather than a silent no-op.
///
/// [`BitStream::push`]: super::BitStream::push
#[derive(Debug, Clone)]
pub enum Source {
    /// A code point, 8 bits by default.
    Char(char),

    /// Another stream, copied bit for bit by default.
    Stream(BitStream),

    /// An unsigned integer, occupying the fewest bits that represent it by
    /// default (one bit for zero).
    Uint(BigUint),

    /// A sequence of inputs, each converted by its own default rule and
    /// concatenated in order.
    Seq(Vec<Source>),
}

// ----------------------------------------------------------------------------

impl From<char> for Source {
    fn from(c: char) -> Self { Source::Char(c) }
}

impl From<bool> for Source {
    fn from(bit: bool) -> Self { Source::Uint(BigUint::from(bit as u8)) }
}

impl From<u8> for Source {
    fn from(value: u8) -> Self { Source::Uint(BigUint::from(value)) }
}

impl From<u16> for Source {
    fn from(value: u16) -> Self { Source::Uint(BigUint::from(value)) }
}

impl From<u32> for Source {
    fn from(value: u32) -> Self { Source::Uint(BigUint::from(value)) }
}

impl From<u64> for Source {
    fn from(value: u64) -> Self { Source::Uint(BigUint::from(value)) }
}

impl From<u128> for Source {
    fn from(value: u128) -> Self { Source::Uint(BigUint::from(value)) }
}

impl From<usize> for Source {
    fn from(value: usize) -> Self { Source::Uint(BigUint::from(value)) }
}

impl From<BigUint> for Source {
    fn from(value: BigUint) -> Self { Source::Uint(value) }
}

impl From<BitStream> for Source {
    fn from(stream: BitStream) -> Self { Source::Stream(stream) }
}

impl From<&BitStream> for Source {
    fn from(stream: &BitStream) -> Self { Source::Stream(stream.clone()) }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self { Source::Seq(s.chars().map(Source::Char).collect()) }
}

impl From<String> for Source {
    fn from(s: String) -> Self { Source::from(s.as_str()) }
}

impl From<Vec<Source>> for Source {
    fn from(items: Vec<Source>) -> Self { Source::Seq(items) }
}

// ----------------------------------------------------------------------------
