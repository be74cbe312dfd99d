use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use super::CircularBuffer;

impl<T> Drop for CircularBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for CircularBuffer<T> {
    fn clone(&self) -> Self {
        let mut new = CircularBuffer::with_overwrite(self.capacity(), self.allow_overwrite());
        for element in self.iter() {
            // capacity >= len, so this cannot fail
            let _ = new.enqueue(element.clone());
        }
        new
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularBuffer<T> {}

impl<T: Hash> Hash for CircularBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| panic!("index out of bounds: the len is {} but the index is {}", len, index))
    }
}

impl<T> IndexMut<usize> for CircularBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index out of bounds: the len is {} but the index is {}", len, index))
    }
}

/// Extends the buffer under the current overwrite policy; stops silently
/// once a full, non-overwriting buffer rejects an element.
impl<T> Extend<T> for CircularBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if self.enqueue(element).is_err() {
                break;
            }
        }
    }
}

/// Collects into a buffer whose capacity equals the element count.
impl<T> FromIterator<T> for CircularBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        let mut buffer = CircularBuffer::new(elements.len());
        for element in elements {
            // the buffer was sized to fit
            let _ = buffer.enqueue(element);
        }
        buffer
    }
}

/// A by-value iterator that drains the buffer oldest first.
pub struct IntoIter<T> {
    inner: CircularBuffer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.dequeue().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = crate::iter::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = crate::iter::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clone_and_eq() {
        let mut buffer = CircularBuffer::new(3);
        buffer.extend([1, 2, 3, 4]); // overwrites 1
        let cloned = buffer.clone();
        assert_eq!(buffer, cloned);
        assert_eq!(cloned.to_vec(), vec![2, 3, 4]);
        assert_eq!(cloned.capacity(), 3);
    }

    #[test]
    fn test_debug() {
        let mut buffer = CircularBuffer::new(4);
        buffer.extend([1, 2]);
        assert_eq!(format!("{:?}", buffer), "[1, 2]");
    }

    #[test]
    fn test_extend_saturates_without_overwrite() {
        let mut buffer = CircularBuffer::with_overwrite(2, false);
        buffer.extend(0..10);
        assert_eq!(buffer.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_from_iterator() {
        let buffer: CircularBuffer<i32> = (0..5).collect();
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_into_iterator() {
        let buffer: CircularBuffer<i32> = (0..5).collect();
        let drained: Vec<i32> = buffer.into_iter().collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_eq_ignores_physical_layout() {
        let mut wrapped = CircularBuffer::new(3);
        wrapped.extend([0, 1, 2, 3]); // head moved by overwrite
        let packed: CircularBuffer<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(wrapped, packed);
    }
}
