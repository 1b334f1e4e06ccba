//! Capacity units for ring-buffer storage.
//!
//! A ring buffer that keeps one slot free as a sentinel has two different "capacities":
//! the number of slots it allocated and the number of elements a caller may store.
//! Mixing the two in a single comparison is an easy mistake that leaves `head`/`tail`
//! pointing into a buffer that was never resized.  The two newtypes below only compare
//! against themselves, so a mixed comparison does not type-check.

use core::fmt;

use crate::error::CapacityError;

/// Number of slots in the backing storage, sentinel included.
///
/// Always a nonzero power of two, which lets indices wrap with a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferCapacity(usize);

/// Number of elements a client may store: one less than the buffer capacity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsableCapacity(usize);

impl UsableCapacity {
    #[inline(always)]
    pub const fn new(elements: usize) -> Self {
        Self(elements)
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl BufferCapacity {
    /// Smallest buffer: one usable slot plus the sentinel.
    pub const MIN: BufferCapacity = BufferCapacity(2);

    /// Buffer able to hold `usable` elements: next power of two `>= usable + 1`.
    pub fn for_usable(usable: UsableCapacity) -> Result<Self, CapacityError> {
        let slots = usable
            .0
            .checked_add(1)
            .ok_or(CapacityError::CapacityOverflow {
                used: 1,
                additional: usable.0,
            })?;
        Self::for_slots(slots).map_err(|_| CapacityError::CapacityOverflow {
            used: 1,
            additional: usable.0,
        })
    }

    /// Buffer with at least `slots` slots (the caller has already counted the sentinel).
    pub fn for_slots(slots: usize) -> Result<Self, CapacityError> {
        slots
            .checked_next_power_of_two()
            .map(|cap| Self(cap.max(Self::MIN.0)))
            .ok_or(CapacityError::CapacityOverflow {
                used: slots,
                additional: 0,
            })
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }

    #[inline(always)]
    pub const fn usable(self) -> UsableCapacity {
        UsableCapacity(self.0 - 1)
    }

    /// Bitmask that maps any index onto `[0, get())`.
    #[inline(always)]
    pub const fn mask(self) -> usize {
        self.0 - 1
    }

    #[inline(always)]
    pub const fn wrap(self, index: usize) -> usize {
        index & self.mask()
    }
}

impl fmt::Debug for BufferCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BufferCapacity({})", self.0)
    }
}

impl fmt::Debug for UsableCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UsableCapacity({})", self.0)
    }
}

impl fmt::Display for BufferCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} slots", self.0)
    }
}

impl fmt::Display for UsableCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} elements", self.0)
    }
}
