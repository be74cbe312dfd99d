//! An edit-optimized positional buffer with a movable gap.

mod internal;
mod trait_impls;

use std::mem::MaybeUninit;

use crate::error::Error;
use crate::iter::{Iter, IterMut};
use crate::utils::uninit_storage;

pub use self::trait_impls::IntoIter;

/// A sequence optimized for repeated insertion and removal around a
/// movable position.
///
/// The elements live in one contiguous array split by an uninitialized
/// *gap*. Inserting at the gap costs O(1); moving the gap costs O(distance)
/// block copies; elements on either side never move otherwise. Indexing
/// skips the gap, so logical index 0 is always the first element regardless
/// of where the gap sits.
///
/// The configured `gap_size` is the width the gap is regenerated to each
/// time insertions exhaust it. Capacity grows automatically by doubling;
/// [`set_capacity`](GapBuffer::set_capacity) and
/// [`trim_excess`](GapBuffer::trim_excess) shrink it explicitly.
///
/// All mutating operations take `&mut self`, so exclusive access is
/// enforced at compile time; wrap the buffer in a lock to share it across
/// threads.
///
/// # Examples
///
/// ```
/// use arraybuf::GapBuffer;
///
/// let mut buffer = GapBuffer::new(3, 6).unwrap();
/// buffer.add_range(&[1, 2, 3, 4], 0, 4).unwrap();
///
/// buffer.insert_at(1, 99).unwrap();
/// assert_eq!(buffer.to_vec(), vec![1, 99, 2, 3, 4]);
///
/// let removed = buffer.remove_range(1, 2).unwrap();
/// assert_eq!(removed, vec![99, 2]);
/// assert_eq!(buffer.to_vec(), vec![1, 3, 4]);
/// ```
pub struct GapBuffer<T> {
    xs: Box<[MaybeUninit<T>]>,
    gap_start: usize,
    gap_end: usize,
    len: usize,
    gap_size: usize,
    capacity: usize,
    initial_capacity: usize,
}

impl<T> GapBuffer<T> {
    /// Creates an empty buffer with the given gap width and capacity.
    ///
    /// Storage is allocated for `capacity + gap_size` cells (a minimum of
    /// four when both are zero), with the gap parked at the front.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `capacity` is smaller than `gap_size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let buffer: GapBuffer<bool> = GapBuffer::new(10, 20).unwrap();
    /// assert_eq!(buffer.gap_size(), 10);
    /// assert_eq!(buffer.capacity(), 20);
    /// assert_eq!(buffer.current_gap_size(), 10);
    /// assert_eq!(buffer.count_with_gap(), 10);
    /// assert_eq!(buffer.len(), 0);
    /// assert_eq!(buffer.gap_start(), 0);
    ///
    /// assert!(GapBuffer::<bool>::new(10, 5).is_err());
    /// ```
    pub fn new(gap_size: usize, capacity: usize) -> Result<Self, Error> {
        if capacity < gap_size {
            return Err(Error::OutOfRange {
                value: capacity,
                bound: gap_size,
            });
        }
        Ok(Self::with_parts(gap_size, capacity))
    }

    /// Builds the buffer without the `capacity >= gap_size` check.
    fn with_parts(gap_size: usize, capacity: usize) -> Self {
        let storage = capacity + gap_size;
        GapBuffer {
            xs: uninit_storage(if storage == 0 { 4 } else { storage }),
            gap_start: 0,
            gap_end: gap_size,
            len: 0,
            gap_size,
            capacity,
            initial_capacity: capacity,
        }
    }

    /// Returns the number of elements in the buffer, excluding the gap.
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
        self.len == self.capacity
    }

    /// Returns the number of elements the buffer can hold before growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The configured gap width, fixed at construction.
    #[inline]
    pub fn gap_size(&self) -> usize {
        self.gap_size
    }

    /// Remaining width of the current gap. Shrinks as insertions consume
    /// it and snaps back to [`gap_size`](GapBuffer::gap_size) when
    /// regenerated.
    #[inline]
    pub fn current_gap_size(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Element count plus the current gap width, the footprint that
    /// capacity checks operate on.
    #[inline]
    pub fn count_with_gap(&self) -> usize {
        self.len + self.current_gap_size()
    }

    /// Logical position of the gap, which is where
    /// [`insert`](GapBuffer::insert) places elements.
    #[inline]
    pub fn gap_start(&self) -> usize {
        self.gap_start
    }

    /// Moves the gap so it starts at `new_gap_start`.
    ///
    /// Only the elements between the old and new position are copied, so
    /// the cost is proportional to the move distance. Setting the current
    /// position is a no-op and always succeeds.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `new_gap_start` is not below the element
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new(3, 3).unwrap();
    /// buffer.add_range(&[1, 2, 3, 4, 5, 6, 7, 8], 0, 8).unwrap();
    ///
    /// buffer.set_gap_start(5).unwrap();
    /// assert_eq!(buffer.gap_start(), 5);
    /// assert_eq!(buffer.current_gap_size(), 3);
    /// assert_eq!(buffer.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn set_gap_start(&mut self, new_gap_start: usize) -> Result<(), Error> {
        if new_gap_start == self.gap_start {
            return Ok(());
        }
        if new_gap_start >= self.len {
            return Err(Error::OutOfRange {
                value: new_gap_start,
                bound: self.len,
            });
        }
        self.shift_gap_to(new_gap_start);
        Ok(())
    }

    /// Appends an element past the last live cell, growing if needed. The
    /// gap does not move.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new(3, 3).unwrap();
    /// buffer.add(1000);
    /// buffer.add(2000);
    /// assert_eq!(buffer[0], 1000);
    /// assert_eq!(buffer.to_vec(), vec![1000, 2000]);
    /// ```
    pub fn add(&mut self, element: T) {
        self.expand_capacity_if_necessary(1);
        let end = self.buffer_end();
        unsafe {
            self.buffer_write(end, element);
        }
        self.len += 1;
    }

    /// Appends `len` elements cloned from `source[start..start + len]`,
    /// growing at most once.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `start` is not a valid index of `source`
    /// and [`Error::InvalidArgument`] if the range overruns `source`.
    pub fn add_range(&mut self, source: &[T], start: usize, len: usize) -> Result<(), Error>
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
        self.expand_capacity_if_necessary(len);
        let mut end = self.buffer_end();
        for element in &source[start..start + len] {
            unsafe {
                self.buffer_write(end, element.clone());
            }
            end += 1;
            self.len += 1;
        }
        Ok(())
    }

    /// Inserts an element at the current gap position.
    ///
    /// Consuming the last gap cell regenerates a fresh gap of
    /// [`gap_size`](GapBuffer::gap_size) cells immediately after the
    /// insertion point.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new(3, 6).unwrap();
    /// buffer.add_range(&[1, 2, 3, 4], 0, 4).unwrap();
    ///
    /// buffer.insert(20);
    /// assert_eq!(buffer.to_vec(), vec![20, 1, 2, 3, 4]);
    /// assert_eq!(buffer.gap_start(), 1);
    /// ```
    pub fn insert(&mut self, element: T) {
        self.ensure_gap();
        let at = self.gap_start;
        unsafe {
            self.buffer_write(at, element);
        }
        self.gap_start += 1;
        self.len += 1;
        if self.gap_size > 0 {
            self.ensure_gap();
        }
    }

    /// Moves the gap to `new_gap_start`, then inserts there.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `new_gap_start` is neither the current gap
    /// position nor below the element count.
    pub fn insert_at(&mut self, new_gap_start: usize, element: T) -> Result<(), Error> {
        self.set_gap_start(new_gap_start)?;
        self.insert(element);
        Ok(())
    }

    /// Inserts a slice of elements at the current gap position.
    ///
    /// Elements are written in chunks sized to the current gap; each time
    /// a chunk exhausts it the gap is regenerated, so the trailing
    /// elements move at most `source.len() / gap_size` times. A partially
    /// consumed final gap is left as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new(2, 5).unwrap();
    /// buffer.add_range(&[1, 2, 3], 0, 3).unwrap();
    /// buffer.insert_range(&[20, 21, 22, 23]);
    /// assert_eq!(buffer.to_vec(), vec![20, 21, 22, 23, 1, 2, 3]);
    /// ```
    pub fn insert_range(&mut self, source: &[T])
    where
        T: Clone,
    {
        let mut inserted = 0;
        while inserted < source.len() {
            self.ensure_gap();
            let chunk = usize::min(self.current_gap_size(), source.len() - inserted);
            for element in &source[inserted..inserted + chunk] {
                let at = self.gap_start;
                unsafe {
                    self.buffer_write(at, element.clone());
                }
                self.gap_start += 1;
                self.len += 1;
            }
            inserted += chunk;
            if self.gap_size > 0 {
                self.ensure_gap();
            }
        }
    }

    /// Moves the gap to `new_gap_start`, then inserts the slice there.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `new_gap_start` is neither the current gap
    /// position nor below the element count; the buffer is untouched on
    /// error.
    pub fn insert_range_at(&mut self, new_gap_start: usize, source: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.set_gap_start(new_gap_start)?;
        self.insert_range(source);
        Ok(())
    }

    /// Removes `count` elements starting at logical `index` and returns
    /// them in order.
    ///
    /// The gap is parked at `index` and re-seeded to exactly
    /// [`gap_size`](GapBuffer::gap_size) cells, so a subsequent insertion
    /// at the removal point is O(1).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index` is not a valid element index and
    /// [`Error::InvalidArgument`] if the range overruns the element count.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new(4, 4).unwrap();
    /// buffer.add_range(&[1, 2, 3, 4, 5, 6], 0, 6).unwrap();
    ///
    /// assert_eq!(buffer.remove_range(2, 2).unwrap(), vec![3, 4]);
    /// assert_eq!(buffer.to_vec(), vec![1, 2, 5, 6]);
    /// assert_eq!(buffer.gap_start(), 2);
    /// ```
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<Vec<T>, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                value: index,
                bound: self.len,
            });
        }
        if index + count > self.len {
            return Err(Error::InvalidArgument {
                start: index,
                len: count,
                bound: self.len,
            });
        }
        self.shift_gap_to(index);

        let mut removed = Vec::with_capacity(count);
        for i in 0..count {
            let offset = self.gap_end + i;
            removed.push(unsafe { self.buffer_read(offset) });
        }
        self.gap_end += count;
        self.len -= count;

        // re-seed the gap to exactly the configured width
        let target_end = self.gap_start + self.gap_size;
        if self.gap_end != target_end {
            let tail_len = self.buffer_end() - self.gap_end;
            let cur_end = self.gap_end;
            unsafe {
                self.copy(target_end, cur_end, tail_len);
            }
            self.gap_end = target_end;
        }
        Ok(removed)
    }

    /// Retrieves an element by logical index.
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
        let (a, b) = self.segments();
        a.contains(x) || b.contains(x)
    }

    /// Returns the logical index of the first element equal to `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new(3, 10).unwrap();
    /// buffer.add_range(&[1, 2, 3, 4], 0, 4).unwrap();
    /// assert_eq!(buffer.index_of(&3), Some(2));
    /// assert_eq!(buffer.index_of(&1000), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item)
    }

    /// Returns the logical index of the first element equal to `item`
    /// within the window `[start, start + count)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `start` is not a valid element index and
    /// [`Error::InvalidArgument`] if the window overruns the element
    /// count.
    pub fn index_of_range(&self, item: &T, start: usize, count: usize) -> Result<Option<usize>, Error>
    where
        T: PartialEq,
    {
        if start >= self.len {
            return Err(Error::OutOfRange {
                value: start,
                bound: self.len,
            });
        }
        if start + count > self.len {
            return Err(Error::InvalidArgument {
                start,
                len: count,
                bound: self.len,
            });
        }
        Ok(self
            .iter()
            .enumerate()
            .skip(start)
            .take(count)
            .find(|(_, x)| *x == item)
            .map(|(i, _)| i))
    }

    /// Resizes the buffer to hold exactly `new_capacity` elements.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `new_capacity` is smaller than
    /// [`count_with_gap`](GapBuffer::count_with_gap).
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity == self.capacity {
            return Ok(());
        }
        if new_capacity < self.count_with_gap() {
            return Err(Error::OutOfRange {
                value: new_capacity,
                bound: self.count_with_gap(),
            });
        }
        self.capacity = new_capacity;
        let storage = new_capacity + self.gap_size;
        self.resize_storage(storage);
        Ok(())
    }

    /// Shrinks the capacity to the current footprint when occupancy is at
    /// or below 90 percent. An empty buffer is restored to its
    /// construction-time capacity and gap.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new(2, 5).unwrap();
    /// buffer.add_range(&[1, 2, 3, 4, 5, 6], 0, 6).unwrap();
    /// assert_eq!(buffer.capacity(), 10); // doubled while adding
    ///
    /// buffer.trim_excess();
    /// assert_eq!(buffer.capacity(), 8);
    /// assert_eq!(buffer.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn trim_excess(&mut self) {
        if self.len == 0 {
            self.capacity = self.initial_capacity;
            let storage = self.capacity + self.gap_size;
            self.xs = uninit_storage(if storage == 0 { 4 } else { storage });
            self.gap_start = 0;
            self.gap_end = self.gap_size;
        } else if self.count_with_gap() * 100 <= self.capacity * 90 {
            self.capacity = self.count_with_gap();
            let storage = self.capacity + self.gap_size;
            self.resize_storage(storage);
        }
    }

    /// Copies the contents into a `Vec` in logical order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Clones the whole contents into `dest[dest_start..]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the destination range overruns
    /// `dest`.
    pub fn copy_to(&self, dest: &mut [T], dest_start: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        self.copy_range_to(0, dest, dest_start, self.len)
    }

    /// Clones `count` elements starting at logical `index` into
    /// `dest[dest_start..]`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index` is not a valid element index and
    /// [`Error::InvalidArgument`] if either range overruns its buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use arraybuf::GapBuffer;
    ///
    /// let mut buffer = GapBuffer::new(3, 3).unwrap();
    /// buffer.add_range(&[1, 2, 3, 4, 5, 6, 7], 0, 7).unwrap();
    ///
    /// let mut copy = [0; 3];
    /// buffer.copy_range_to(2, &mut copy, 0, 3).unwrap();
    /// assert_eq!(copy, [3, 4, 5]);
    /// ```
    pub fn copy_range_to(
        &self,
        index: usize,
        dest: &mut [T],
        dest_start: usize,
        count: usize,
    ) -> Result<(), Error>
    where
        T: Clone,
    {
        if index >= self.len && !(index == 0 && count == 0) {
            return Err(Error::OutOfRange {
                value: index,
                bound: self.len,
            });
        }
        if index + count > self.len {
            return Err(Error::InvalidArgument {
                start: index,
                len: count,
                bound: self.len,
            });
        }
        if dest_start + count > dest.len() {
            return Err(Error::InvalidArgument {
                start: dest_start,
                len: count,
                bound: dest.len(),
            });
        }
        for (slot, element) in dest[dest_start..dest_start + count]
            .iter_mut()
            .zip(self.iter().skip(index))
        {
            *slot = element.clone();
        }
        Ok(())
    }

    /// Removes all elements, parking the gap at the front. Capacity and
    /// storage are kept.
    pub fn clear(&mut self) {
        self.drop_elements();
        self.gap_start = 0;
        self.gap_end = self.gap_size;
        self.len = 0;
    }

    /// Returns an iterator in logical order.
    ///
    /// The iterator borrows the buffer, so mutating the buffer while
    /// iterating is rejected at compile time; use
    /// [`to_vec`](GapBuffer::to_vec) for an independent snapshot.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (front, back) = self.segments();
        Iter::new(front, back)
    }

    /// Returns an iterator of mutable references in logical order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (front, back) = self.segments_mut();
        IterMut::new(front, back)
    }

    /// Returns the two element runs on either side of the gap, in logical
    /// order.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.segments()
    }
}
