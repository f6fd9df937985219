//! Bitwise combination of whole streams.
//!
//! The binary operators work on the raw LSB-first storage of both
//! operands, so bits pushed at the same index combine with each other and
//! the longer operand is truncated to the shorter one's length. Every
//! operator returns a fresh stream and leaves its operands unmodified.

use std::cmp::min;

use num_bigint::BigUint;
use num_traits::One;

use super::{BitStream};

/// Builds the result stream: the low `length` bits of `value` pushed into
/// a fresh stream, then reversed back into push-order convention.
fn combined(value: BigUint, length: usize) -> BitStream {
    let mut stream = BitStream::new();
    stream.push_uint(&value, length);
    stream.reverse();
    stream
}

/// All-ones over `length` bits.
fn mask(length: usize) -> BigUint {
    (BigUint::one() << length) - 1u8
}

/// The exclusive or of two streams, truncated to the shorter length.
pub fn xor(a: &BitStream, b: &BitStream) -> BitStream {
    combined(a.raw() ^ b.raw(), min(a.len(), b.len()))
}

/// The conjunction of two streams, truncated to the shorter length.
pub fn and(a: &BitStream, b: &BitStream) -> BitStream {
    combined(a.raw() & b.raw(), min(a.len(), b.len()))
}

/// The disjunction of two streams, truncated to the shorter length.
pub fn or(a: &BitStream, b: &BitStream) -> BitStream {
    combined(a.raw() | b.raw(), min(a.len(), b.len()))
}

/// The complement of a stream over its own width, i.e. `-v - 1` in two's
/// complement restricted to `len(a)` bits. Length is preserved.
pub fn not(a: &BitStream) -> BitStream {
    combined(mask(a.len()) ^ a.raw(), a.len())
}

// ----------------------------------------------------------------------------
