use std::hash::{Hash, Hasher};

use num_bigint::BigUint;
use num_traits::Zero;

use super::{Error, Result, Source, BitIterator};

/// Returns the low `length` bits of `value` in the opposite order. Bits at
/// index `length` and above are discarded.
pub(crate) fn reverse_bits(value: &BigUint, length: usize) -> BigUint {
    let mut reversed = BigUint::zero();
    for i in 0..length as u64 {
        if value.bit(i) {
            reversed.set_bit(length as u64 - 1 - i, true);
        }
    }
    reversed
}

// ----------------------------------------------------------------------------

/// An ordered, mutable, arbitrary-length sequence of bits.
///
/// Bits are stored LSB-first: bit `i` of the packed value is the `i`-th
/// pushed bit, so the oldest bit sits at index 0 and [`pop()`] reads from
/// there while pushes append at index [`len()`]. [`to_uint()`] reads the
/// bits the other way round, so a stream built by pushing an integer
/// converts back to that integer.
///
/// [`pop()`]: BitStream::pop
/// [`len()`]: BitStream::len
/// [`to_uint()`]: BitStream::to_uint
#[derive(Default, Debug, Clone)]
pub struct BitStream {
    /// Packed bit array. Bits at index `length` and above are zero.
    value: BigUint,

    /// The number of valid bits in `value`.
    length: usize,
}

impl BitStream {
    /// Constructs an empty `BitStream`.
    pub fn new() -> Self { Self::default() }

    /// Constructs a `BitStream` holding `bits`, using the default bit
    /// length of its [`Source`] category.
    pub fn from_bits(bits: impl Into<Source>) -> Self {
        let mut stream = Self::new();
        stream.push(bits);
        stream
    }

    /// Constructs a `BitStream` holding exactly `length` bits of `bits`.
    pub fn with_length(bits: impl Into<Source>, length: usize) -> Self {
        let mut stream = Self::new();
        stream.push_with_length(bits, length);
        stream
    }

    /// The number of bits in this `BitStream`.
    pub fn len(&self) -> usize { self.length }

    /// Returns `true` if this `BitStream` holds no bits.
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// The packed LSB-first storage value. Bit `i` is the `i`-th pushed bit.
    pub fn raw(&self) -> &BigUint { &self.value }

    /// Appends one bit at the end of the stream.
    pub fn push_bit(&mut self, bit: bool) {
        if bit {
            self.value.set_bit(self.length as u64, true);
        }
        self.length += 1;
    }

    /// Removes and returns the bit at the beginning of the stream, i.e. the
    /// oldest pushed bit, shifting the rest down one place.
    pub fn pop(&mut self) -> Result<bool> {
        if self.length == 0 {
            return Err(Error::Underflow);
        }
        let bit = self.value.bit(0);
        self.value >>= 1u32;
        self.length -= 1;
        Ok(bit)
    }

    /// Appends `bits` at the end of the stream, using the default bit
    /// length of its [`Source`] category: 8 for a char, the operand's own
    /// length for a stream, and the fewest bits that represent the value
    /// for an integer (1 for zero).
    pub fn push(&mut self, bits: impl Into<Source>) {
        self.push_source(bits.into(), None);
    }

    /// Appends exactly `length` bits of `bits`. Integers and chars are
    /// truncated to their low `length` bits; a sequence shorter than
    /// `length` is padded with cleared bits at the end.
    pub fn push_with_length(&mut self, bits: impl Into<Source>, length: usize) {
        self.push_source(bits.into(), Some(length));
    }

    fn push_source(&mut self, bits: Source, length: Option<usize>) {
        match bits {
            Source::Char(c) => {
                self.push_uint(&BigUint::from(c as u32), length.unwrap_or(8));
            },
            Source::Stream(stream) => {
                let length = length.unwrap_or(stream.length);
                self.push_uint(&stream.to_uint(), length);
            },
            Source::Uint(value) => {
                let length = length.unwrap_or_else(|| min_length(&value));
                self.push_uint(&value, length);
            },
            Source::Seq(items) => {
                let before = self.length;
                for item in items {
                    self.push_source(item, None);
                }
                if let Some(length) = length {
                    let added = self.length - before;
                    if length > added {
                        self.length += length - added;
                    }
                }
            },
        }
    }

    /// Appends the low `length` bits of `value`, most significant first, so
    /// that [`to_uint()`] reads back the pushed value. A zero `value` only
    /// reserves `length` cleared bits.
    ///
    /// [`to_uint()`]: BitStream::to_uint
    pub(crate) fn push_uint(&mut self, value: &BigUint, length: usize) {
        if value.is_zero() {
            self.length += length;
        } else {
            for i in (0..length as u64).rev() {
                self.push_bit(value.bit(i));
            }
        }
    }

    /// Reverses the stream in place: the bits at index `i` and
    /// `len() - 1 - i` swap for all `i`. Applying `reverse` twice is the
    /// identity, and the length never changes.
    pub fn reverse(&mut self) {
        self.value = reverse_bits(&self.value, self.length);
    }

    /// The big-endian integer value of the stream: the oldest pushed bit is
    /// the most significant, i.e. the bits read "left to right" in push
    /// order. This is the bit-reversal of [`raw()`](BitStream::raw).
    pub fn to_uint(&self) -> BigUint {
        reverse_bits(&self.value, self.length)
    }

    /// Returns an [`Iterator`] over a snapshot of the bits, oldest first.
    /// Later mutation of the stream does not affect the iterator.
    pub fn iter(&self) -> BitIterator {
        BitIterator::new(self.value.clone(), self.length)
    }

    /// Returns an [`Iterator`] over a snapshot of the bits, newest first.
    /// Unlike [`reverse()`](BitStream::reverse), the stream is unaffected.
    pub fn iter_reversed(&self) -> BitIterator {
        BitIterator::new(reverse_bits(&self.value, self.length), self.length)
    }
}

// ----------------------------------------------------------------------------

/// The fewest bits that represent `value`, with a floor of 1 so that zero
/// still occupies a bit slot.
fn min_length(value: &BigUint) -> usize {
    (value.bits() as usize).max(1)
}

// ----------------------------------------------------------------------------

/// Equality compares the packed storage value only, not the declared
/// length: a stream of cleared bits equals the empty stream. `Hash`
/// matches, so equal streams hash identically.
impl PartialEq for BitStream {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl Eq for BitStream {}

impl Hash for BitStream {
    fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state); }
}

/// Renders as a binary literal: `0b` followed by exactly `len()` digits of
/// the storage value, index `len() - 1` down to `0`.
impl std::fmt::Display for BitStream {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "0b")?;
        for i in (0..self.length as u64).rev() {
            write!(f, "{}", if self.value.bit(i) {'1'} else {'0'})?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BitStream {
    type Item = bool;
    type IntoIter = BitIterator;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// `+=` appends the right operand via the generic push contract.
impl<S: Into<Source>> std::ops::AddAssign<S> for BitStream {
    fn add_assign(&mut self, rhs: S) { self.push(rhs); }
}

/// `+` appends the right operand to a copy of the left; neither operand is
/// mutated.
impl<S: Into<Source>> std::ops::Add<S> for &BitStream {
    type Output = BitStream;
    fn add(self, rhs: S) -> BitStream {
        let mut clone = self.clone();
        clone.push(rhs);
        clone
    }
}

impl<S: Into<Source>> std::ops::Add<S> for BitStream {
    type Output = BitStream;
    fn add(mut self, rhs: S) -> BitStream {
        self.push(rhs);
        self
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic bit generator shared by the larger tests.
    fn pseudorandom_bits(n: usize) -> Vec<bool> {
        let mut seed: u32 = 1;
        (0..n).map(|_| {
            seed = seed.wrapping_mul(3141592653);
            seed = seed.wrapping_add(2718281845);
            (seed >> 31) != 0
        }).collect()
    }

    fn stream_of(bits: &[bool]) -> BitStream {
        let mut stream = BitStream::new();
        for &bit in bits {
            stream.push_bit(bit);
        }
        stream
    }

    #[test]
    pub fn push_pop_fifo() {
        let bits = pseudorandom_bits(300);
        let mut stream = stream_of(&bits);
        assert_eq!(stream.len(), 300);
        // `pop()` reads the oldest bit, not the most recent.
        for (i, &bit) in bits.iter().enumerate() {
            assert_eq!(stream.pop(), Ok(bit));
            assert_eq!(stream.len(), 300 - 1 - i);
        }
        assert_eq!(stream.pop(), Err(Error::Underflow));
    }

    #[test]
    pub fn push_bit_appends_at_the_back() {
        let mut stream = stream_of(&[true, false]);
        stream.push_bit(true);
        assert_eq!(stream.pop(), Ok(true));
        assert_eq!(stream.pop(), Ok(false));
        assert_eq!(stream.pop(), Ok(true));
    }

    #[test]
    pub fn char_defaults_to_eight_bits() {
        let stream = BitStream::from_bits('a');
        assert_eq!(stream.len(), 8);
        assert_eq!(stream.to_uint(), BigUint::from(97u32));
    }

    #[test]
    pub fn int_defaults_to_fewest_bits() {
        let stream = BitStream::from_bits(0b110110u32);
        assert_eq!(stream.len(), 6);
        assert_eq!(stream.to_uint(), BigUint::from(0b110110u32));
        assert_eq!(BitStream::from_bits(500u32).len(), 9);
    }

    #[test]
    pub fn zero_with_no_length_reserves_one_bit() {
        let stream = BitStream::from_bits(0u32);
        assert_eq!(stream.len(), 1);
        assert!(stream.raw().is_zero());
    }

    #[test]
    pub fn zero_with_explicit_length_reserves_it_all() {
        let stream = BitStream::with_length(0u32, 57);
        assert_eq!(stream.len(), 57);
        assert!(stream.raw().is_zero());
    }

    #[test]
    pub fn explicit_length_truncates() {
        let stream = BitStream::with_length('a', 4);
        assert_eq!(stream.len(), 4);
        assert_eq!(stream.to_uint(), BigUint::from(97u32 & 0xf));
    }

    #[test]
    pub fn string_concatenates_chars() {
        let stream = BitStream::from_bits("ab");
        assert_eq!(stream.len(), 16);
        assert_eq!(stream.to_uint(), BigUint::from(0x6162u32));
    }

    #[test]
    pub fn seq_excess_length_is_reserved_at_the_end() {
        let stream = BitStream::with_length("a", 12);
        assert_eq!(stream.len(), 12);
        assert_eq!(stream.to_uint(), BigUint::from(97u32 << 4));
    }

    #[test]
    pub fn pushing_a_stream_copies_its_bits() {
        let bits = pseudorandom_bits(20);
        let source = stream_of(&bits);
        let mut stream = BitStream::new();
        stream.push(&source);
        assert_eq!(stream.len(), 20);
        assert_eq!(stream.raw(), source.raw());
    }

    #[test]
    pub fn reverse_round_trips() {
        let bits = pseudorandom_bits(100);
        let mut stream = stream_of(&bits);
        let original = stream.raw().clone();
        stream.reverse();
        assert_eq!(stream.len(), 100);
        for (i, &bit) in bits.iter().enumerate() {
            assert_eq!(stream.raw().bit(99 - i as u64), bit);
        }
        stream.reverse();
        assert_eq!(stream.raw(), &original);
    }

    #[test]
    pub fn to_uint_reads_oldest_bit_as_most_significant() {
        let stream = stream_of(&[true, false, false]);
        assert_eq!(stream.to_uint(), BigUint::from(0b100u32));
    }

    #[test]
    pub fn concatenation_leaves_operands_alone() {
        let a = BitStream::from_bits('a');
        let b = BitStream::from_bits('b');
        let c = &a + &b;
        assert_eq!(c.len(), 16);
        assert_eq!(c.to_uint(), BigUint::from(0x6162u32));
        assert_eq!(a.len(), 8);
        assert_eq!(b.len(), 8);
    }

    #[test]
    pub fn add_assign_pushes() {
        let mut stream = BitStream::from_bits('a');
        stream += false;
        assert_eq!(stream.len(), 9);
        stream += 0b11u32;
        assert_eq!(stream.len(), 11);
    }

    #[test]
    pub fn clones_are_independent() {
        let mut stream = BitStream::from_bits('a');
        let clone = stream.clone();
        stream.push_bit(true);
        assert_eq!(clone.len(), 8);
        assert_eq!(stream.len(), 9);
    }

    #[test]
    pub fn equality_and_hashing_ignore_declared_length() {
        use std::collections::hash_map::DefaultHasher;

        let padded = BitStream::with_length(0u32, 3);
        let empty = BitStream::new();
        assert_eq!(padded, empty);

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        padded.hash(&mut h1);
        empty.hash(&mut h2);
        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    pub fn display_matches_storage_order() {
        assert_eq!(BitStream::from_bits(0b110110u32).to_string(), "0b011011");
        assert_eq!(BitStream::from_bits('a').to_string(), "0b10000110");
        assert_eq!(BitStream::new().to_string(), "0b");
    }
}
