use num_bigint::BigUint;

use super::stream::reverse_bits;

/// A one-shot cursor over a snapshot of a stream's packed bits.
///
/// Bits are yielded from index 0 upward, i.e. oldest pushed bit first. The
/// snapshot is independent of the stream it was taken from, and cloning
/// forks the cursor without affecting the original's progress. Exhaustion
/// is the ordinary end of iteration, not an error.
#[derive(Debug, Clone)]
pub struct BitIterator {
    /// The packed bits still to be yielded, low bit next.
    value: BigUint,

    /// The number of bits left.
    remaining: usize,
}

impl BitIterator {
    /// Constructs a cursor over the low `remaining` bits of `value`.
    pub fn new(value: BigUint, remaining: usize) -> Self {
        Self {value, remaining}
    }

    /// The number of bits left.
    pub fn remaining(&self) -> usize { self.remaining }

    /// Returns a new cursor yielding the remaining bits in the opposite
    /// order. `self` is unaffected and may continue to be advanced.
    pub fn reversed(&self) -> Self {
        Self::new(reverse_bits(&self.value, self.remaining), self.remaining)
    }
}

impl Iterator for BitIterator {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.value.bit(0);
        self.value >>= 1u32;
        self.remaining -= 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl std::iter::ExactSizeIterator for BitIterator {}
impl std::iter::FusedIterator for BitIterator {}

// ----------------------------------------------------------------------------
