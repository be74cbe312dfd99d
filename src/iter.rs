//! Front-to-back iterators over the two physical segments of a buffer.
//!
//! Both buffer types store their elements in at most two contiguous runs,
//! so a single iterator shape serves them both: walk the front run, then
//! the back run.

use std::iter::FusedIterator;
use std::slice;

/// An iterator over the elements of a buffer.
pub struct Iter<'a, T> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(front: &'a [T], back: &'a [T]) -> Self {
        Iter {
            front: front.iter(),
            back: back.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

/// A mutable iterator over the elements of a buffer.
pub struct IterMut<'a, T> {
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(front: &'a mut [T], back: &'a mut [T]) -> Self {
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_segments_in_order() {
        let front = [1, 2];
        let back = [3, 4, 5];
        let collected: Vec<i32> = Iter::new(&front, &back).copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reverse() {
        let front = [1, 2];
        let back = [3, 4];
        let collected: Vec<i32> = Iter::new(&front, &back).rev().copied().collect();
        assert_eq!(collected, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_exact_size() {
        let front = [1];
        let back = [2, 3];
        let mut iter = Iter::new(&front, &back);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_iter_mut() {
        let mut front = [1, 2];
        let mut back = [3];
        for x in IterMut::new(&mut front, &mut back) {
            *x *= 10;
        }
        assert_eq!(front, [10, 20]);
        assert_eq!(back, [30]);
    }
}
