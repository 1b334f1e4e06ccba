//! Growable double-ended queue on a power-of-two ring buffer.
//!
//! Storage is a boxed slice of `MaybeUninit<T>` whose length is the *buffer capacity*.
//! `tail` is the slot of the front element and `head` is the slot one past the back
//! element, so the live elements are `[tail, head)` taken modulo the buffer capacity.
//! One slot is always left unused: `head == tail` means empty, and the deque is full
//! when advancing `head` would land on `tail`.
//!
//! ```txt
//!  not wrapped                        wrapped
//!       T           H                      H           T
//!  [ . o o o o o o . ]                [ o o . . . . o o ]
//! ```
//!
//! The usable capacity is therefore one less than the buffer capacity.  The two numbers
//! are separate types ([`BufferCapacity`], [`UsableCapacity`]) and growth decisions are
//! made in buffer slots only.

use core::alloc::Layout;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut, Range};
use core::ptr;
use core::slice;
use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::CapacityError;
use crate::invariant::{InvariantViolation, RawIndices};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::utils::capacity::{BufferCapacity, UsableCapacity};

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` and [`RingDeque<T>`] so that code can operate on a
/// deque without knowing which implementation backs it.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes and returns the element at `index`, or `None` if out of bounds.
    fn remove(&mut self, index: usize) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the element at `index`, or `None`.
    fn get(&self, index: usize) -> Option<&T>;
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
    /// Returns an exclusive reference to the front element, or `None` if empty.
    fn front_mut(&mut self) -> Option<&mut T>;
    /// Returns an exclusive reference to the back element, or `None` if empty.
    fn back_mut(&mut self) -> Option<&mut T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn remove(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

impl<T> AnyDeque<T> for RingDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn remove(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

// ─── RingDeque ────────────────────────────────────────────────────────────────

/// A double-ended queue backed by a growable circular buffer.
///
/// # Representation
/// | Field | Meaning |
/// |-------|---------|
/// | `buf` | `cap` slots, only `[tail, head)` (mod `cap`) initialized |
/// | `tail` | slot of the front element |
/// | `head` | slot one past the back element |
/// | `cap` | buffer capacity, a power of two |
///
/// Before and after every public operation `cap` is a nonzero power of two and both
/// `head` and `tail` are below it.  [`check_invariant`](RingDeque::check_invariant)
/// evaluates that predicate on demand; with `debug_assertions` or the
/// `check-invariants` feature it is also asserted around every mutation.
///
/// # Growth
/// Pushing into a full deque reserves one more element, which doubles the buffer.
/// After the reallocation the elements keep their slot indices and the shorter of the
/// two wrapped runs is moved into the new space so the live range is again
/// `[tail, head)` modulo the new capacity.
pub struct RingDeque<T> {
    tail: usize,
    head: usize,
    cap: BufferCapacity,
    buf: Box<[MaybeUninit<T>]>,
}

/// Which run of elements `reindex_after_growth` relocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reindex {
    Contiguous,
    MovedPrefix,
    MovedSuffix,
}

/// Allocates `cap` uninitialized slots, refusing sizes `Layout` cannot describe.
fn allocate<T>(cap: BufferCapacity) -> Result<Box<[MaybeUninit<T>]>, CapacityError> {
    Layout::array::<T>(cap.get()).map_err(|_| CapacityError::CapacityOverflow {
        used: cap.get(),
        additional: 0,
    })?;
    Ok(Box::new_uninit_slice(cap.get()))
}

#[cold]
#[inline(never)]
fn capacity_overflow(err: CapacityError) -> ! {
    panic!("{err}");
}

impl<T> RingDeque<T> {
    /// Usable capacity of a deque created by [`new`](RingDeque::new).
    pub const INITIAL_CAPACITY: usize = 7;

    /// Creates an empty deque able to hold [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY)
    /// elements before growing.
    pub fn new() -> Self {
        match Self::with_capacity(Self::INITIAL_CAPACITY) {
            Ok(deque) => deque,
            Err(err) => capacity_overflow(err),
        }
    }

    /// Creates an empty deque able to hold at least `capacity` elements before growing.
    ///
    /// The buffer gets the next power of two `>= capacity + 1` slots (at least two).
    /// Fails with [`CapacityError::CapacityOverflow`] when that size is not representable.
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        let cap = BufferCapacity::for_usable(UsableCapacity::new(capacity))?;
        Self::with_buffer_capacity(cap)
    }

    fn with_buffer_capacity(cap: BufferCapacity) -> Result<Self, CapacityError> {
        Ok(Self {
            tail: 0,
            head: 0,
            cap,
            buf: allocate(cap)?,
        })
    }

    /// Returns the number of elements currently in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cap.wrap(self.head.wrapping_sub(self.tail))
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns `true` if the next push has to grow the buffer.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.cap.wrap(self.head + 1) == self.tail
    }

    /// Returns how many elements the deque can hold without growing.
    ///
    /// This is the usable capacity: one less than the number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap.usable().get()
    }

    /// Snapshot of the raw index fields, for inspection and invariant checks.
    #[inline]
    pub fn raw_indices(&self) -> RawIndices {
        RawIndices {
            head: self.head,
            tail: self.tail,
            buffer_capacity: self.cap.get(),
        }
    }

    /// Evaluates the representation invariant regardless of build mode.
    pub fn check_invariant(&self) -> Result<(), InvariantViolation> {
        self.raw_indices().check()
    }

    #[inline(always)]
    fn assert_invariant(&self) {
        if cfg!(any(debug_assertions, feature = "check-invariants")) {
            if let Err(violation) = self.check_invariant() {
                panic!("ring deque invariant violated: {violation}");
            }
        }
    }

    /// Physical slot of the logical position `idx + add`.
    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        self.cap.wrap(idx.wrapping_add(add))
    }

    /// Physical slot of the logical position `idx - sub`.
    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        self.cap.wrap(idx.wrapping_sub(sub))
    }

    /// Reads the value out of slot `off`, leaving it logically uninitialized.
    ///
    /// # Safety
    /// Slot `off` must hold an initialized element that is not read again.
    #[inline(always)]
    unsafe fn buffer_read(&mut self, off: usize) -> T {
        unsafe { self.buf[off].assume_init_read() }
    }

    /// Copies `len` slots from `src` to `dst` within the buffer.
    ///
    /// # Safety
    /// Both ranges must lie inside the buffer and must not overlap.
    #[inline]
    unsafe fn copy_nonoverlapping(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(
            dst + len <= self.cap.get(),
            "cno dst={} src={} len={} cap={}",
            dst,
            src,
            len,
            self.cap.get()
        );
        debug_assert!(
            src + len <= self.cap.get(),
            "cno dst={} src={} len={} cap={}",
            dst,
            src,
            len,
            self.cap.get()
        );
        let base = self.buf.as_mut_ptr();
        unsafe {
            ptr::copy_nonoverlapping(base.add(src), base.add(dst), len);
        }
    }

    /// Physical ranges of the front run and the wrapped-around back run.
    #[inline]
    fn slice_ranges(&self) -> (Range<usize>, Range<usize>) {
        if self.tail <= self.head {
            (self.tail..self.head, 0..0)
        } else {
            (self.tail..self.cap.get(), 0..self.head)
        }
    }

    /// Ensures room for at least `additional` more elements without another reallocation.
    ///
    /// The required buffer is the next power of two `>= len + 1 + additional` slots; the
    /// buffer only grows when that is strictly larger than the current buffer.  On
    /// [`CapacityError::CapacityOverflow`] the deque is left untouched.
    pub fn reserve(&mut self, additional: usize) -> Result<(), CapacityError> {
        self.assert_invariant();
        let used = self.len() + 1;
        let overflow = CapacityError::CapacityOverflow { used, additional };
        let needed = used.checked_add(additional).ok_or(overflow)?;
        let required = BufferCapacity::for_slots(needed).map_err(|_| overflow)?;

        if required > self.cap {
            self.grow_to(required)?;
        } else {
            trace!(
                "reserve({additional}) fits: {required} required, {} allocated",
                self.cap
            );
        }
        self.assert_invariant();
        Ok(())
    }

    /// Reallocates to `new_cap` slots, copying every old slot to the same index, then
    /// restores the ring layout.
    #[inline(never)]
    fn grow_to(&mut self, new_cap: BufferCapacity) -> Result<(), CapacityError> {
        let old_cap = self.cap;
        let mut new_buf = allocate::<T>(new_cap)?;
        // SAFETY: `new_cap > old_cap`, so both sides have `old_cap` slots; copying
        // `MaybeUninit<T>` moves the live elements and leaves the old box free of them.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), old_cap.get());
        }
        self.buf = new_buf;
        self.cap = new_cap;
        let moved = self.reindex_after_growth(old_cap);
        debug!("ring deque grew from {old_cap} to {new_cap} ({moved:?})");
        Ok(())
    }

    /// Moves the shorter wrapped run into the space opened by a reallocation.
    ///
    /// ```txt
    ///      T             H
    ///     [o o o o o o o . ]
    ///      T             H
    /// A   [o o o o o o o . . . . . . . . . ]
    ///
    ///          H T
    ///     [o o . o o o o o ]
    ///            T             H
    /// B   [. . . o o o o o o o . . . . . . ]
    ///
    ///                H T
    ///     [o o o o o . o o ]
    ///                H                 T
    /// C   [o o o o o . . . . . . . . . o o ]
    /// ```
    fn reindex_after_growth(&mut self, old_cap: BufferCapacity) -> Reindex {
        let old = old_cap.get();
        let new = self.cap.get();

        let moved = if self.tail <= self.head {
            Reindex::Contiguous
        } else if self.head < old - self.tail {
            // SAFETY: `head < old`, and `new >= 2 * old`, so `[old, old + head)` is fresh
            // space disjoint from `[0, head)`.
            unsafe {
                self.copy_nonoverlapping(old, 0, self.head);
            }
            self.head += old;
            Reindex::MovedPrefix
        } else {
            let new_tail = new - (old - self.tail);
            // SAFETY: `new_tail >= old` because `new >= 2 * old`, so the destination run
            // lies entirely in fresh space.
            unsafe {
                self.copy_nonoverlapping(new_tail, self.tail, old - self.tail);
            }
            self.tail = new_tail;
            Reindex::MovedSuffix
        };

        if let Err(violation) = self.check_invariant() {
            panic!("ring deque corrupted by growth from {old_cap} to {}: {violation}", self.cap);
        }
        moved
    }

    /// Prepends `value`, growing the buffer if the deque is full.
    ///
    /// # Panics
    /// Panics if the grown buffer size overflows `usize`.
    pub fn push_front(&mut self, value: T) {
        if let Err(err) = self.try_push_front(value) {
            capacity_overflow(err);
        }
    }

    /// Prepends `value`, growing the buffer if the deque is full.
    ///
    /// When growth fails the deque is unmodified and `value` is dropped.
    pub fn try_push_front(&mut self, value: T) -> Result<(), CapacityError> {
        self.assert_invariant();
        if self.is_full() {
            self.reserve(1)?;
        }
        self.tail = self.wrap_sub(self.tail, 1);
        let tail = self.tail;
        self.buf[tail].write(value);
        self.assert_invariant();
        Ok(())
    }

    /// Appends `value`, growing the buffer if the deque is full.
    ///
    /// # Panics
    /// Panics if the grown buffer size overflows `usize`.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            capacity_overflow(err);
        }
    }

    /// Appends `value`, growing the buffer if the deque is full.
    ///
    /// When growth fails the deque is unmodified and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), CapacityError> {
        self.assert_invariant();
        if self.is_full() {
            self.reserve(1)?;
        }
        let head = self.head;
        self.buf[head].write(value);
        self.head = self.wrap_add(head, 1);
        self.assert_invariant();
        Ok(())
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let tail = self.tail;
        self.tail = self.wrap_add(tail, 1);
        self.assert_invariant();
        // SAFETY: `tail` was the front slot of a non-empty deque and is no longer live.
        Some(unsafe { self.buffer_read(tail) })
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.head = self.wrap_sub(self.head, 1);
        let head = self.head;
        self.assert_invariant();
        // SAFETY: `head` now names the former back slot, which is no longer live.
        Some(unsafe { self.buffer_read(head) })
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Logical index 0 is the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            let idx = self.wrap_add(self.tail, index);
            // SAFETY: logical positions below `len` are live slots.
            Some(unsafe { self.buf[idx].assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let idx = self.wrap_add(self.tail, index);
            // SAFETY: logical positions below `len` are live slots.
            Some(unsafe { self.buf[idx].assume_init_mut() })
        } else {
            None
        }
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len().checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Removes the element at logical `index` and returns it, or `None` if out of bounds.
    ///
    /// Shifts whichever side of `index` is shorter by one slot.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len();
        if index >= len {
            return None;
        }
        self.assert_invariant();

        let real_idx = self.wrap_add(self.tail, index);
        // SAFETY: `index < len`; the slot is overwritten or retired below.
        let value = unsafe { self.buffer_read(real_idx) };

        if index < len / 2 {
            // Shift the front run one slot towards the back.
            for i in (0..index).rev() {
                let from = self.wrap_add(self.tail, i);
                let to = self.wrap_add(from, 1);
                unsafe { self.copy_nonoverlapping(to, from, 1) };
            }
            self.tail = self.wrap_add(self.tail, 1);
        } else {
            // Shift the back run one slot towards the front.
            for i in (index + 1)..len {
                let from = self.wrap_add(self.tail, i);
                let to = self.wrap_sub(from, 1);
                unsafe { self.copy_nonoverlapping(to, from, 1) };
            }
            self.head = self.wrap_sub(self.head, 1);
        }
        self.assert_invariant();
        Some(value)
    }

    /// Shortens the deque to at most `len` elements, dropping those at the back.
    ///
    /// If `len >= self.len()`, this is a no-op.  The buffer is kept.
    pub fn truncate(&mut self, len: usize) {
        while self.len() > len {
            self.head = self.wrap_sub(self.head, 1);
            let head = self.head;
            // SAFETY: the slot just left the live range, so it is dropped exactly once.
            unsafe { self.buf[head].assume_init_drop() };
        }
        self.assert_invariant();
    }

    /// Removes all elements, keeping the allocated buffer.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.head = 0;
        self.tail = 0;
    }

    /// Returns up to two contiguous slices covering the deque in logical order.
    ///
    /// The second slice is empty unless the elements wrap past the end of the buffer.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (front, back) = self.slice_ranges();
        let base = self.buf.as_ptr() as *const T;
        // SAFETY: both ranges cover exactly the live slots.
        unsafe {
            (
                slice::from_raw_parts(base.add(front.start), front.len()),
                slice::from_raw_parts(base.add(back.start), back.len()),
            )
        }
    }

    /// Mutable counterpart of [`as_slices`](RingDeque::as_slices).
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (front, back) = self.slice_ranges();
        let (low, high) = self.buf.split_at_mut(front.start);
        let front_len = front.len();
        let back_len = back.len();
        // SAFETY: `front` lies in `high` starting at its first slot and `back` lies at
        // the start of `low`; both cover only live slots.
        unsafe {
            (
                slice::from_raw_parts_mut(high.as_mut_ptr() as *mut T, front_len),
                slice::from_raw_parts_mut(low.as_mut_ptr() as *mut T, back_len),
            )
        }
    }

    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back)
    }

    /// Front-to-back iterator over exclusive references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut::new(front, back)
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        let (front, back) = self.as_mut_slices();
        // SAFETY: each live element is dropped once; the buffer itself only holds
        // `MaybeUninit<T>` and has no drop glue for the elements.
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        let mut out = match Self::with_buffer_capacity(self.cap) {
            Ok(deque) => deque,
            Err(err) => capacity_overflow(err),
        };
        for item in self {
            out.push_back(item.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: PartialOrd> PartialOrd for RingDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(item) => item,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        if let Err(err) = self.reserve(iter.size_hint().0) {
            capacity_overflow(err);
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for RingDeque<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut deque = match Self::with_capacity(vec.len()) {
            Ok(deque) => deque,
            Err(err) => capacity_overflow(err),
        };
        deque.extend(vec);
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for RingDeque<T> {
    fn from(array: [T; N]) -> Self {
        let mut deque = match Self::with_capacity(N) {
            Ok(deque) => deque,
            Err(err) => capacity_overflow(err),
        };
        deque.extend(array);
        deque
    }
}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
