//! Iterators over a [`RingDeque`], front to back.
//!
//! `Iter` and `IterMut` walk the two contiguous runs returned by `as_slices` /
//! `as_mut_slices`; `IntoIter` pops from the owned deque.

use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::slice;

use crate::deque::RingDeque;

/// Shared iterator, created by [`RingDeque::iter`].
pub struct Iter<'a, T> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: &'a [T], back: &'a [T]) -> Self {
        Self {
            front: front.iter(),
            back: back.iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.front.next() {
            Some(item) => Some(item),
            None => {
                mem::swap(&mut self.front, &mut self.back);
                self.front.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        match self.back.next_back() {
            Some(item) => Some(item),
            None => {
                mem::swap(&mut self.front, &mut self.back);
                self.back.next_back()
            }
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Exclusive iterator, created by [`RingDeque::iter_mut`].
pub struct IterMut<'a, T> {
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(front: &'a mut [T], back: &'a mut [T]) -> Self {
        Self {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        match self.front.next() {
            Some(item) => Some(item),
            None => {
                mem::swap(&mut self.front, &mut self.back);
                self.front.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.back.next_back() {
            Some(item) => Some(item),
            None => {
                mem::swap(&mut self.front, &mut self.back);
                self.back.next_back()
            }
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, created by `RingDeque::into_iter`.
pub struct IntoIter<T> {
    inner: RingDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: RingDeque<T>) -> Self {
        Self { inner }
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::RingDeque;

    fn wrapped() -> RingDeque<i32> {
        // Buffer of 8 with tail at 6: elements live in slots 6, 7, 0, 1.
        let mut d = RingDeque::with_capacity(7).unwrap();
        for i in 0..6 {
            d.push_back(i);
        }
        for _ in 0..6 {
            d.pop_front();
        }
        d.extend([1, 2, 3, 4]);
        d
    }

    #[test]
    fn test_iter_across_wrap() {
        let d = wrapped();
        let (front, back) = d.as_slices();
        assert_eq!(front, &[1, 2]);
        assert_eq!(back, &[3, 4]);
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(d.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_iter_both_ends() {
        let d = wrapped();
        let mut it = d.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_iter_mut() {
        let mut d = wrapped();
        for x in d.iter_mut() {
            *x *= 10;
        }
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 40]);
        for x in &mut d {
            *x += 1;
        }
        assert_eq!(d.back(), Some(&41));
    }

    #[test]
    fn test_into_iter() {
        let d = wrapped();
        let mut it = d.into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_ref_into_iter() {
        let d = wrapped();
        let mut sum = 0;
        for x in &d {
            sum += *x;
        }
        assert_eq!(sum, 10);
    }
}
