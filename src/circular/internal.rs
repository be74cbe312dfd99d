use std::ptr;
use std::slice;

use super::CircularBuffer;
use crate::utils::{uninit_storage, wrap_add};

impl<T> CircularBuffer<T> {
    #[inline]
    pub(crate) fn ptr(&self) -> *const T {
        self.xs.as_ptr() as *const T
    }

    #[inline]
    pub(crate) fn ptr_mut(&mut self) -> *mut T {
        self.xs.as_mut_ptr() as *mut T
    }

    /// Maps a logical index onto the backing storage.
    #[inline]
    pub(crate) fn physical_index(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        wrap_add(self.head, index, self.capacity())
    }

    /// Length of the run starting at `head` before the storage edge.
    #[inline]
    pub(crate) fn front_len(&self) -> usize {
        usize::min(self.len, self.capacity() - self.head)
    }

    #[inline]
    pub(crate) unsafe fn buffer_read(&mut self, offset: usize) -> T {
        debug_assert!(offset < self.xs.len());
        ptr::read(self.ptr().add(offset))
    }

    #[inline]
    pub(crate) unsafe fn buffer_write(&mut self, offset: usize, element: T) {
        debug_assert!(offset < self.xs.len());
        ptr::write(self.ptr_mut().add(offset), element);
    }

    #[inline]
    pub(crate) unsafe fn buffer_replace(&mut self, offset: usize, element: T) -> T {
        debug_assert!(offset < self.xs.len());
        ptr::replace(self.ptr_mut().add(offset), element)
    }

    /// The two initialized runs, in logical order.
    pub(crate) fn segments(&self) -> (&[T], &[T]) {
        let front = self.front_len();
        unsafe {
            (
                slice::from_raw_parts(self.ptr().add(self.head), front),
                slice::from_raw_parts(self.ptr(), self.len - front),
            )
        }
    }

    pub(crate) fn segments_mut(&mut self) -> (&mut [T], &mut [T]) {
        let front = self.front_len();
        let back = self.len - front;
        let head = self.head;
        let ptr = self.ptr_mut();
        unsafe {
            (
                slice::from_raw_parts_mut(ptr.add(head), front),
                slice::from_raw_parts_mut(ptr, back),
            )
        }
    }

    /// Moves the live elements into fresh storage of `new_capacity` cells,
    /// packed at physical index 0.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(self.len <= new_capacity);
        let mut new_xs = uninit_storage::<T>(new_capacity);
        let front = self.front_len();
        let back = self.len - front;
        let dst = new_xs.as_mut_ptr() as *mut T;
        unsafe {
            ptr::copy_nonoverlapping(self.ptr().add(self.head), dst, front);
            ptr::copy_nonoverlapping(self.ptr(), dst.add(front), back);
        }
        self.xs = new_xs;
        self.head = 0;
        self.tail = if new_capacity == 0 {
            0
        } else {
            self.len % new_capacity
        };
    }

    /// Drops every live element in place. The caller resets the cursors.
    pub(crate) fn drop_elements(&mut self) {
        let (front, back) = self.segments_mut();
        unsafe {
            ptr::drop_in_place(front as *mut [T]);
            ptr::drop_in_place(back as *mut [T]);
        }
    }
}
