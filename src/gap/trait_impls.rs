use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::vec;

use super::GapBuffer;

impl<T> Drop for GapBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// An empty buffer with no gap and no reserved capacity; the first
/// insertion triggers growth.
impl<T> Default for GapBuffer<T> {
    #[inline]
    fn default() -> Self {
        GapBuffer::with_parts(0, 0)
    }
}

impl<T: Clone> Clone for GapBuffer<T> {
    fn clone(&self) -> Self {
        let mut new = GapBuffer::with_parts(self.gap_size(), self.capacity());
        new.initial_capacity = self.initial_capacity;
        let (front, back) = self.segments();
        let mut offset = 0;
        for element in front {
            unsafe {
                new.buffer_write(offset, element.clone());
            }
            offset += 1;
        }
        offset = self.gap_end;
        for element in back {
            unsafe {
                new.buffer_write(offset, element.clone());
            }
            offset += 1;
        }
        new.gap_start = self.gap_start;
        new.gap_end = self.gap_end;
        new.len = self.len;
        new
    }
}

impl<T: fmt::Debug> fmt::Debug for GapBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GapBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GapBuffer<T> {}

impl<T: Hash> Hash for GapBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for GapBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| panic!("index out of bounds: the len is {} but the index is {}", len, index))
    }
}

impl<T> IndexMut<usize> for GapBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index out of bounds: the len is {} but the index is {}", len, index))
    }
}

impl<T> Extend<T> for GapBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> FromIterator<T> for GapBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = GapBuffer::default();
        buffer.extend(iter);
        buffer
    }
}

/// A by-value iterator in logical order.
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for GapBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut elements = Vec::with_capacity(self.len());
        {
            let (front, back) = self.segments_mut();
            unsafe {
                for i in 0..front.len() {
                    elements.push(std::ptr::read(front.as_ptr().add(i)));
                }
                for i in 0..back.len() {
                    elements.push(std::ptr::read(back.as_ptr().add(i)));
                }
            }
        }
        // the elements were moved out; keep drop from touching them
        self.len = 0;
        self.gap_start = 0;
        self.gap_end = self.gap_size();
        IntoIter {
            inner: elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GapBuffer<T> {
    type Item = &'a T;
    type IntoIter = crate::iter::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GapBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = crate::iter::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
