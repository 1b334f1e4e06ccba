//! Representation invariant of the ring buffer, as a plain predicate.
//!
//! The check lives outside [`RingDeque`](crate::RingDeque) and takes a snapshot of the raw
//! fields, so tests and callers can run it in any build mode.  The deque additionally
//! asserts it around every mutation when `debug_assertions` or the `check-invariants`
//! feature is on.

/// Snapshot of the index fields of a ring buffer.
///
/// `tail` is the first valid slot; `head` is one past the last valid slot.  One slot is
/// always left free, so `head == tail` means empty and `head + 1 == tail` (mod capacity)
/// means full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawIndices {
    pub head: usize,
    pub tail: usize,
    pub buffer_capacity: usize,
}

/// A broken representation invariant.  Always a logic defect in the deque itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("buffer capacity {0} is not a nonzero power of two")]
    NotPowerOfTwo(usize),
    #[error("head {head} out of bounds for buffer capacity {buffer_capacity}")]
    HeadOutOfBounds { head: usize, buffer_capacity: usize },
    #[error("tail {tail} out of bounds for buffer capacity {buffer_capacity}")]
    TailOutOfBounds { tail: usize, buffer_capacity: usize },
}

impl RawIndices {
    /// Returns the first violated clause of the invariant, if any.
    pub fn check(&self) -> Result<(), InvariantViolation> {
        if !self.buffer_capacity.is_power_of_two() {
            return Err(InvariantViolation::NotPowerOfTwo(self.buffer_capacity));
        }
        if self.head >= self.buffer_capacity {
            return Err(InvariantViolation::HeadOutOfBounds {
                head: self.head,
                buffer_capacity: self.buffer_capacity,
            });
        }
        if self.tail >= self.buffer_capacity {
            return Err(InvariantViolation::TailOutOfBounds {
                tail: self.tail,
                buffer_capacity: self.buffer_capacity,
            });
        }
        Ok(())
    }

    /// Number of valid elements.  Only meaningful when [`check`](Self::check) passes.
    #[inline]
    pub fn len(&self) -> usize {
        self.head.wrapping_sub(self.tail) & (self.buffer_capacity.wrapping_sub(1))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        (self.head + 1) & (self.buffer_capacity.wrapping_sub(1)) == self.tail
    }
}
