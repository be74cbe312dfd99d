//! A wrap-around FIFO queue with bounded, resizable capacity.

mod internal;
mod trait_impls;

pub use self::trait_impls::IntoIter;

use std::mem::MaybeUninit;

use crate::error::{CapacityError, Error};
use crate::iter::{Iter, IterMut};
use crate::utils::{uninit_storage, wrap_add};

/// A fixed-capacity FIFO queue backed by a single contiguous array whose
/// write position wraps around.
///
/// Logical index 0 is always the oldest element. When the buffer is full,
/// `enqueue` either rejects the new element or overwrites the oldest one,
/// controlled by the overwrite policy (enabled by default). An overwriting
/// buffer always holds the most recent `capacity` elements in arrival
/// order.
///
/// Capacity is chosen at construction but can be changed explicitly with
/// [`set_capacity`](CircularBuffer::set_capacity) or
/// [`trim_excess`](CircularBuffer::trim_excess); no operation grows the
/// buffer implicitly.
///
/// All mutating operations take `&mut self`, so exclusive access is
/// enforced at compile time; wrap the buffer in a lock to share it across
/// threads.
///
/// # Examples
///
/// ```
/// use arraybuf::CircularBuffer;
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(3);
///
/// buffer.enqueue(1).unwrap();
/// buffer.enqueue(2).unwrap();
/// buffer.enqueue(3).unwrap();
/// buffer.enqueue(4).unwrap(); // overwrites 1
///
/// assert_eq!(buffer.to_vec(), vec![2, 3, 4]);
/// assert_eq!(buffer.dequeue(), Ok(2));
/// ```
pub struct CircularBuffer<T> {
    xs: Box<[MaybeUninit<T>]>,
    head: usize,
    tail: usize,
    len: usize,
    allow_overwrite: bool,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer with the given capacity and overwriting
    /// enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let buffer: CircularBuffer<u8> = CircularBuffer::new(8);
    /// assert_eq!(buffer.capacity(), 8);
    /// assert!(buffer.is_empty());
    /// assert!(buffer.allow_overwrite());
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::with_overwrite(capacity, true)
    }

    /// Creates an empty buffer with the given capacity and overwrite
    /// policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let buffer: CircularBuffer<u8> = CircularBuffer::with_overwrite(8, false);
    /// assert!(!buffer.allow_overwrite());
    /// ```
    #[inline]
    pub fn with_overwrite(capacity: usize, allow_overwrite: bool) -> Self {
        CircularBuffer {
            xs: uninit_storage(capacity),
            head: 0,
            tail: 0,
            len: 0,
            allow_overwrite,
        }
    }

    /// Returns the number of elements the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the buffer holds `capacity` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Physical index of the oldest element. Diagnostic; logical access
    /// goes through indexing and iteration.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Physical index one past the newest element.
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Returns `true` if a full buffer overwrites its oldest element on
    /// enqueue.
    #[inline]
    pub fn allow_overwrite(&self) -> bool {
        self.allow_overwrite
    }

    /// Changes the overwrite policy. Takes effect on the next enqueue.
    #[inline]
    pub fn set_allow_overwrite(&mut self, allow: bool) {
        self.allow_overwrite = allow;
    }

    /// Appends an element at the tail.
    ///
    /// On a full buffer this overwrites (and drops) the oldest element
    /// when overwriting is enabled, or hands the element back in a
    /// [`CapacityError`] when it is not. A zero-capacity buffer rejects
    /// every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::with_overwrite(2, false);
    /// assert!(buffer.enqueue('a').is_ok());
    /// assert!(buffer.enqueue('b').is_ok());
    /// assert_eq!(buffer.enqueue('c').unwrap_err().element, 'c');
    /// ```
    pub fn enqueue(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.is_full() && (!self.allow_overwrite || self.capacity() == 0) {
            return Err(CapacityError { element });
        }
        unsafe {
            self.enqueue_unchecked(element);
        }
        Ok(())
    }

    /// Appends an element, assuming room or an overwritable oldest slot.
    ///
    /// # Safety
    ///
    /// The capacity must be non-zero, and either the buffer is not full or
    /// overwriting is intended.
    unsafe fn enqueue_unchecked(&mut self, element: T) {
        debug_assert!(self.capacity() > 0);
        let tail = self.tail;
        if self.is_full() {
            // head == tail; replace the oldest element and advance both
            // cursors so logical order stays arrival order.
            drop(self.buffer_replace(tail, element));
            self.tail = wrap_add(tail, 1, self.capacity());
            self.head = self.tail;
        } else {
            self.buffer_write(tail, element);
            self.tail = wrap_add(tail, 1, self.capacity());
            self.len += 1;
        }
    }

    /// Appends `len` elements cloned from `source[start..start + len]`,
    /// one at a time, so the overwrite policy applies cumulatively.
    ///
    /// With overwriting disabled the room check happens up front and a
    /// failing call leaves the buffer untouched.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `start` is not a valid index of `source`,
    /// [`Error::InvalidArgument`] if the range overruns `source`, and
    /// [`Error::CapacityExceeded`] if the elements do not fit and
    /// overwriting is disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new(5);
    /// buffer.enqueue_range(&["a", "b", "c", "d", "e"], 1, 3).unwrap();
    /// assert_eq!(buffer.to_vec(), vec!["b", "c", "d"]);
    /// ```
    pub fn enqueue_range(&mut self, source: &[T], start: usize, len: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        if start >= source.len() && !(start == 0 && len == 0) {
            return Err(Error::OutOfRange {
                value: start,
                bound: source.len(),
            });
        }
        if start + len > source.len() {
            return Err(Error::InvalidArgument {
                start,
                len,
                bound: source.len(),
            });
        }
        if len > 0 && (self.capacity() == 0 || (!self.allow_overwrite && self.len + len > self.capacity())) {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        for element in &source[start..start + len] {
            unsafe {
                self.enqueue_unchecked(element.clone());
            }
        }
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the buffer holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::{CircularBuffer, Error};
    ///
    /// let mut buffer = CircularBuffer::new(4);
    /// buffer.enqueue(7).unwrap();
    /// assert_eq!(buffer.dequeue(), Ok(7));
    /// assert_eq!(buffer.dequeue(), Err(Error::Empty));
    /// ```
    pub fn dequeue(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let head = self.head;
        self.head = wrap_add(head, 1, self.capacity());
        self.len -= 1;
        unsafe { Ok(self.buffer_read(head)) }
    }

    /// Returns a reference to the oldest element without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the buffer holds no elements.
    pub fn peek(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        unsafe { Ok(&*self.ptr().add(self.head)) }
    }

    /// Retrieves an element by logical index, oldest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new(3);
    /// buffer.enqueue(3).unwrap();
    /// buffer.enqueue(4).unwrap();
    /// assert_eq!(buffer.get(1), Some(&4));
    /// assert_eq!(buffer.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let idx = self.physical_index(index);
            unsafe { Some(&*self.ptr().add(idx)) }
        } else {
            None
        }
    }

    /// Retrieves an element mutably by logical index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.physical_index(index);
            unsafe { Some(&mut *self.ptr_mut().add(idx)) }
        } else {
            None
        }
    }

    /// Returns `true` if the buffer contains an element equal to the
    /// given value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Resizes the buffer to hold exactly `new_capacity` elements,
    /// repacking the live elements at the start of the new storage.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `new_capacity` is smaller than the
    /// current length.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new(10);
    /// buffer.enqueue_range(&[1, 2, 3], 0, 3).unwrap();
    /// buffer.set_capacity(5).unwrap();
    /// assert_eq!(buffer.capacity(), 5);
    /// assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
    /// assert!(buffer.set_capacity(2).is_err());
    /// ```
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity < self.len {
            return Err(Error::OutOfRange {
                value: new_capacity,
                bound: self.len,
            });
        }
        if new_capacity != self.capacity() {
            self.reallocate(new_capacity);
        }
        Ok(())
    }

    /// Shrinks the capacity to the current length when occupancy is at or
    /// below 90 percent. An empty buffer only resets its cursors.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new(10);
    /// buffer.enqueue("a").unwrap();
    /// buffer.enqueue("b").unwrap();
    /// buffer.trim_excess();
    /// assert_eq!(buffer.capacity(), 2);
    /// assert_eq!(buffer.to_vec(), vec!["a", "b"]);
    /// ```
    pub fn trim_excess(&mut self) {
        if self.len == 0 {
            self.head = 0;
            self.tail = 0;
        } else if self.len * 100 <= self.capacity() * 90 {
            self.reallocate(self.len);
        }
    }

    /// Copies the contents into a `Vec`, oldest first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Clones the first `len` elements, oldest first, into
    /// `dest[dest_start..]`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `len` exceeds the buffer length and
    /// [`Error::InvalidArgument`] if the destination range overruns
    /// `dest`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new(10);
    /// buffer.enqueue_range(&[12, 4, 9, 43, 0], 0, 5).unwrap();
    ///
    /// let mut copy = [0; 5];
    /// buffer.copy_to(&mut copy, 0, 5).unwrap();
    /// assert_eq!(copy, [12, 4, 9, 43, 0]);
    /// ```
    pub fn copy_to(&self, dest: &mut [T], dest_start: usize, len: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        if len > self.len {
            return Err(Error::OutOfRange {
                value: len,
                bound: self.len,
            });
        }
        if dest_start + len > dest.len() {
            return Err(Error::InvalidArgument {
                start: dest_start,
                len,
                bound: dest.len(),
            });
        }
        for (slot, element) in dest[dest_start..dest_start + len].iter_mut().zip(self.iter()) {
            *slot = element.clone();
        }
        Ok(())
    }

    /// Removes all elements, keeping the current capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new(4);
    /// buffer.enqueue(1).unwrap();
    /// buffer.clear();
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        self.drop_elements();
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Returns a front-to-back iterator.
    ///
    /// The iterator borrows the buffer, so mutating the buffer while
    /// iterating is rejected at compile time; use
    /// [`to_vec`](CircularBuffer::to_vec) for a snapshot to walk
    /// independently.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (front, back) = self.segments();
        Iter::new(front, back)
    }

    /// Returns a front-to-back iterator of mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (front, back) = self.segments_mut();
        IterMut::new(front, back)
    }

    /// Returns the two initialized runs of storage which contain, in
    /// order, the contents of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::CircularBuffer;
    ///
    /// let mut buffer = CircularBuffer::new(3);
    /// buffer.enqueue_range(&[1, 2, 3], 0, 3).unwrap();
    /// buffer.enqueue(4).unwrap(); // wraps
    ///
    /// assert_eq!(buffer.as_slices(), (&[2, 3][..], &[4][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.segments()
    }

    /// Mutable variant of [`as_slices`](CircularBuffer::as_slices).
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        self.segments_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_enqueue() {
        let mut buffer = CircularBuffer::new(10);
        buffer.enqueue("test").unwrap();
        buffer.enqueue("string").unwrap();

        assert_eq!(buffer.to_vec(), vec!["test", "string"]);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.capacity(), 10);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 2);
        assert!(buffer.contains(&"string"));
        assert!(!buffer.contains(&"other string"));
    }

    #[test]
    fn test_enqueue_range_fills_buffer() {
        let data = ["a", "b", "c", "d", "e"];
        let mut buffer = CircularBuffer::new(data.len());
        buffer.enqueue_range(&data, 0, data.len()).unwrap();

        assert_eq!(buffer.to_vec(), data.to_vec());
        assert_eq!(buffer.len(), 5);
        assert!(buffer.is_full());
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
        assert!(buffer.contains(&"a"));
        assert!(!buffer.contains(&"z"));
    }

    #[test]
    fn test_enqueue_range_validation() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(4);
        assert_eq!(
            buffer.enqueue_range(&[1, 2], 5, 1),
            Err(Error::OutOfRange { value: 5, bound: 2 })
        );
        assert_eq!(
            buffer.enqueue_range(&[1, 2], 1, 4),
            Err(Error::InvalidArgument {
                start: 1,
                len: 4,
                bound: 2
            })
        );
        assert_eq!(buffer.enqueue_range(&[], 0, 0), Ok(()));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_enqueue_range_no_partial_write_when_overwrite_disabled() {
        let mut buffer = CircularBuffer::with_overwrite(4, false);
        buffer.enqueue_range(&[1, 2, 3], 0, 3).unwrap();
        assert_eq!(
            buffer.enqueue_range(&[4, 5], 0, 2),
            Err(Error::CapacityExceeded { capacity: 4 })
        );
        assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_enqueue_overwrite_not_allowed() {
        let data = [1, 2, 3, 4, 5];
        let mut buffer = CircularBuffer::with_overwrite(data.len(), false);
        buffer.enqueue_range(&data, 0, data.len()).unwrap();

        let err = buffer.enqueue(10).unwrap_err();
        assert_eq!(err.element, 10);
        assert_eq!(buffer.to_vec(), data.to_vec());
    }

    #[test]
    fn test_enqueue_overwrite_keeps_arrival_order() {
        let data = ["a", "b", "c", "d"];
        let mut buffer = CircularBuffer::new(data.len());
        buffer.enqueue_range(&data, 0, data.len()).unwrap();

        buffer.enqueue("z").unwrap();

        assert_eq!(buffer.to_vec(), vec!["b", "c", "d", "z"]);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.head(), 1);
        assert_eq!(buffer.tail(), 1);
        assert!(buffer.contains(&"z"));
        assert!(!buffer.contains(&"a"));
    }

    #[test]
    fn test_enqueue_after_trim_excess() {
        let mut buffer = CircularBuffer::new(10);
        buffer.enqueue_range(&["a", "b", "c"], 0, 3).unwrap();

        buffer.trim_excess();
        buffer.enqueue("z").unwrap();

        assert_eq!(buffer.to_vec(), vec!["b", "c", "z"]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.head(), 1);
        assert_eq!(buffer.tail(), 1);
    }

    #[test]
    fn test_last_capacity_elements_survive() {
        let mut buffer = CircularBuffer::new(4);
        for i in 1..=5 {
            buffer.enqueue(i).unwrap();
        }
        assert_eq!(buffer.to_vec(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_dequeue() {
        let data = [0, 1, 2, 3];
        let mut buffer = CircularBuffer::new(data.len());
        buffer.enqueue_range(&data, 0, data.len()).unwrap();

        assert_eq!(buffer.dequeue(), Ok(0));

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.head(), 1);
        assert_eq!(buffer.tail(), 0);
        assert!(buffer.contains(&1));
        assert!(!buffer.contains(&0));
        assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_dequeue_when_empty() {
        let mut buffer: CircularBuffer<String> = CircularBuffer::new(4);
        assert_eq!(buffer.dequeue(), Err(Error::Empty));
    }

    #[test]
    fn test_fifo_order_preserved_across_wrap() {
        let mut buffer = CircularBuffer::new(3);
        buffer.enqueue(1).unwrap();
        buffer.enqueue(2).unwrap();
        assert_eq!(buffer.dequeue(), Ok(1));
        buffer.enqueue(3).unwrap();
        buffer.enqueue(4).unwrap(); // tail wraps to 0

        assert_eq!(buffer.dequeue(), Ok(2));
        assert_eq!(buffer.dequeue(), Ok(3));
        assert_eq!(buffer.dequeue(), Ok(4));
        assert_eq!(buffer.dequeue(), Err(Error::Empty));
    }

    #[test]
    fn test_peek() {
        let mut buffer = CircularBuffer::new(4);
        assert_eq!(buffer.peek(), Err(Error::Empty));
        buffer.enqueue(7).unwrap();
        buffer.enqueue(8).unwrap();
        assert_eq!(buffer.peek(), Ok(&7));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_indexer() {
        let mut buffer = CircularBuffer::new(10);
        buffer.enqueue_range(&[12, 4, 9, 43, 0], 0, 5).unwrap();

        assert_eq!(buffer[0], 12);
        assert_eq!(buffer[4], 0);

        buffer.trim_excess();
        buffer.enqueue_range(&[99, 100], 0, 2).unwrap();

        // full at capacity 5; the two overwrites evicted 12 and 4
        assert_eq!(buffer.to_vec(), vec![9, 43, 0, 99, 100]);
        assert_eq!(buffer[0], 9);
        assert_eq!(buffer[2], 0);
        assert_eq!(buffer[3], 99);
    }

    #[test]
    #[should_panic]
    fn test_indexer_out_of_bounds() {
        let mut buffer = CircularBuffer::new(4);
        buffer.enqueue(1).unwrap();
        let _ = buffer[1];
    }

    #[test]
    fn test_get_mut() {
        let mut buffer = CircularBuffer::new(4);
        buffer.enqueue(1).unwrap();
        buffer.enqueue(2).unwrap();
        if let Some(x) = buffer.get_mut(1) {
            *x = 7;
        }
        assert_eq!(buffer.to_vec(), vec![1, 7]);
        assert_eq!(buffer.get_mut(2), None);
    }

    #[test]
    fn test_copy_to() {
        let data = [12, 4, 9, 43, 0];
        let mut buffer = CircularBuffer::new(10);
        buffer.enqueue_range(&data, 0, data.len()).unwrap();

        let mut copy = [0; 5];
        buffer.copy_to(&mut copy, 0, 5).unwrap();
        assert_eq!(copy, [12, 4, 9, 43, 0]);

        let mut short = [0; 3];
        assert_eq!(
            buffer.copy_to(&mut short, 2, 2),
            Err(Error::InvalidArgument {
                start: 2,
                len: 2,
                bound: 3
            })
        );
        assert_eq!(
            buffer.copy_to(&mut short, 0, 6),
            Err(Error::OutOfRange { value: 6, bound: 5 })
        );
    }

    #[test]
    fn test_trim_excess() {
        let mut buffer = CircularBuffer::new(10);
        buffer.enqueue("a").unwrap();
        buffer.enqueue("b").unwrap();

        buffer.trim_excess();

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.capacity(), 2);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
        assert!(buffer.contains(&"a"));
        assert_eq!(buffer.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_trim_excess_above_ninety_percent_is_noop() {
        let mut buffer = CircularBuffer::new(10);
        for i in 0..10 {
            buffer.enqueue(i).unwrap();
        }
        buffer.trim_excess();
        assert_eq!(buffer.capacity(), 10);
    }

    #[test]
    fn test_trim_excess_when_empty_resets_cursors() {
        let mut buffer = CircularBuffer::new(4);
        buffer.enqueue(1).unwrap();
        buffer.enqueue(2).unwrap();
        buffer.dequeue().unwrap();
        buffer.dequeue().unwrap();

        buffer.trim_excess();
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
    }

    #[test]
    fn test_trim_idempotent() {
        let mut buffer = CircularBuffer::new(10);
        buffer.enqueue_range(&[1, 2, 3], 0, 3).unwrap();
        buffer.trim_excess();
        let once = (buffer.capacity(), buffer.to_vec());
        buffer.trim_excess();
        assert_eq!((buffer.capacity(), buffer.to_vec()), once);
    }

    #[test]
    fn test_set_capacity() {
        let mut buffer = CircularBuffer::new(10);
        buffer.enqueue_range(&[1, 2, 3], 0, 3).unwrap();

        buffer.set_capacity(6).unwrap();
        assert_eq!(buffer.capacity(), 6);
        assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 3);

        assert_eq!(
            buffer.set_capacity(2),
            Err(Error::OutOfRange { value: 2, bound: 3 })
        );
        assert_eq!(buffer.capacity(), 6);
    }

    #[test]
    fn test_set_capacity_to_exact_len_wraps_tail() {
        let mut buffer = CircularBuffer::new(10);
        buffer.enqueue_range(&[1, 2, 3], 0, 3).unwrap();
        buffer.set_capacity(3).unwrap();
        assert!(buffer.is_full());
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
        assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(0);
        assert!(buffer.is_empty());
        assert!(buffer.is_full());
        assert_eq!(buffer.enqueue(1).unwrap_err().element, 1);
        assert_eq!(
            buffer.enqueue_range(&[1], 0, 1),
            Err(Error::CapacityExceeded { capacity: 0 })
        );
        assert_eq!(buffer.dequeue(), Err(Error::Empty));
    }

    #[test]
    fn test_clear() {
        let mut buffer = CircularBuffer::new(4);
        buffer.enqueue(1).unwrap();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 0);
    }

    #[test]
    fn test_as_slices_wrapped() {
        let mut buffer = CircularBuffer::new(3);
        buffer.enqueue_range(&[1, 2, 3], 0, 3).unwrap();
        buffer.enqueue(4).unwrap();
        assert_eq!(buffer.as_slices(), (&[2, 3][..], &[4][..]));
    }

    #[test]
    fn test_iter_mut() {
        let mut buffer = CircularBuffer::new(3);
        buffer.enqueue_range(&[1, 2, 3], 0, 3).unwrap();
        buffer.enqueue(4).unwrap(); // wrapped layout
        for x in buffer.iter_mut() {
            *x *= 10;
        }
        assert_eq!(buffer.to_vec(), vec![20, 30, 40]);
    }

    #[test]
    fn test_drop_accounting() {
        let item = Rc::new(());
        let mut buffer = CircularBuffer::new(2);
        buffer.enqueue(item.clone()).unwrap();
        buffer.enqueue(item.clone()).unwrap();
        assert_eq!(Rc::strong_count(&item), 3);

        // overwrite drops the evicted element
        buffer.enqueue(item.clone()).unwrap();
        assert_eq!(Rc::strong_count(&item), 3);

        let popped = buffer.dequeue().unwrap();
        drop(popped);
        assert_eq!(Rc::strong_count(&item), 2);

        buffer.clear();
        assert_eq!(Rc::strong_count(&item), 1);

        buffer.enqueue(item.clone()).unwrap();
        drop(buffer);
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[test]
    fn test_reallocation_with_wrapped_layout() {
        let mut buffer = CircularBuffer::new(4);
        buffer.enqueue_range(&[1, 2, 3, 4], 0, 4).unwrap();
        buffer.dequeue().unwrap();
        buffer.dequeue().unwrap();
        buffer.enqueue(5).unwrap();
        buffer.enqueue(6).unwrap(); // head 2, wrapped

        buffer.set_capacity(8).unwrap();
        assert_eq!(buffer.to_vec(), vec![3, 4, 5, 6]);
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.tail(), 4);
    }
}
