//! # Ring Deque
//!
//! A growable double-ended queue stored in a single power-of-two ring buffer.
//!
//! `RingDeque<T>` keeps one slot of its buffer free so that `head == tail` always means
//! "empty".  That makes two capacities coexist: the *buffer capacity* (allocated slots)
//! and the *usable capacity* (elements a caller may store, one less).  This crate gives
//! them distinct types, [`BufferCapacity`] and [`UsableCapacity`], and grows the buffer
//! only by comparing buffer slots against buffer slots.
//!
//! ## Key Features
//!
//! * **O(1) pushes and pops at both ends**, amortized over doubling growth.
//! * **Fallible capacity requests:** [`RingDeque::with_capacity`] and
//!   [`RingDeque::reserve`] return [`CapacityError`] instead of panicking.
//! * **Checkable representation invariant:** [`RingDeque::check_invariant`] works in
//!   every build mode.  Debug builds, and release builds with the `check-invariants`
//!   feature, assert it around every mutation.
//! * **Interoperability:** `RingDeque` and `std::collections::VecDeque` both implement
//!   [`AnyDeque`].
//!
//! ## Examples
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! // Usable capacity 7 means a buffer of 8 slots.
//! let mut d: RingDeque<i32> = RingDeque::with_capacity(7).unwrap();
//! assert_eq!(d.capacity(), 7);
//!
//! d.push_back(1);
//! d.push_back(2);
//! d.push_front(0);
//! assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//!
//! // Already fits: 3 elements + sentinel + 4 more = 8 slots.
//! d.reserve(4).unwrap();
//! assert_eq!(d.capacity(), 7);
//!
//! // One more than fits doubles the buffer.
//! d.reserve(5).unwrap();
//! assert_eq!(d.capacity(), 15);
//!
//! assert_eq!(d.pop_front(), Some(0));
//! assert_eq!(d.pop_back(), Some(2));
//! assert!(d.check_invariant().is_ok());
//! ```
//!
//! ### Capacity errors
//!
//! ```rust
//! use ring_deque::{CapacityError, RingDeque};
//!
//! let mut d: RingDeque<u8> = RingDeque::new();
//! d.push_back(1);
//! assert!(matches!(d.reserve(usize::MAX), Err(CapacityError::CapacityOverflow { .. })));
//! assert_eq!(d.len(), 1);
//! ```

// --- Module Declarations ---

pub mod deque;
pub mod error;
pub mod invariant;
pub mod iter;
pub mod utils;

#[cfg(test)]
mod deque_proptest;

// --- Re-exports ---

pub use deque::{AnyDeque, RingDeque};
pub use error::CapacityError;
pub use invariant::{InvariantViolation, RawIndices};
pub use iter::{IntoIter, Iter, IterMut};
pub use utils::capacity::{BufferCapacity, UsableCapacity};
