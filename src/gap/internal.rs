use std::ptr;
use std::slice;

use super::GapBuffer;
use crate::utils::{grow_capacity, uninit_storage};

impl<T> GapBuffer<T> {
    #[inline]
    pub(crate) fn ptr(&self) -> *const T {
        self.xs.as_ptr() as *const T
    }

    #[inline]
    pub(crate) fn ptr_mut(&mut self) -> *mut T {
        self.xs.as_mut_ptr() as *mut T
    }

    /// Maps a logical index onto the backing storage, skipping the gap.
    #[inline]
    pub(crate) fn physical_index(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        if index < self.gap_start {
            index
        } else {
            self.gap_end + (index - self.gap_start)
        }
    }

    /// Physical index one past the last live cell.
    #[inline]
    pub(crate) fn buffer_end(&self) -> usize {
        self.len + (self.gap_end - self.gap_start)
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

    /// Copies a contiguous block of memory len long from src to dst.
    #[inline]
    pub(crate) unsafe fn copy(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(
            dst + len <= self.xs.len(),
            "cpy dst={} src={} len={} storage={}",
            dst,
            src,
            len,
            self.xs.len()
        );
        debug_assert!(
            src + len <= self.xs.len(),
            "cpy dst={} src={} len={} storage={}",
            dst,
            src,
            len,
            self.xs.len()
        );
        ptr::copy(self.ptr_mut().add(src), self.ptr_mut().add(dst), len);
    }

    /// The two initialized runs around the gap, in logical order.
    pub(crate) fn segments(&self) -> (&[T], &[T]) {
        unsafe {
            (
                slice::from_raw_parts(self.ptr(), self.gap_start),
                slice::from_raw_parts(self.ptr().add(self.gap_end), self.len - self.gap_start),
            )
        }
    }

    pub(crate) fn segments_mut(&mut self) -> (&mut [T], &mut [T]) {
        let gap_start = self.gap_start;
        let gap_end = self.gap_end;
        let back_len = self.len - gap_start;
        let ptr = self.ptr_mut();
        unsafe {
            (
                slice::from_raw_parts_mut(ptr, gap_start),
                slice::from_raw_parts_mut(ptr.add(gap_end), back_len),
            )
        }
    }

    /// Relocates the gap so it starts at `new_start`, sliding the elements
    /// in between across it. Cost is proportional to the move distance.
    pub(crate) fn shift_gap_to(&mut self, new_start: usize) {
        debug_assert!(new_start <= self.len);
        let gap = self.gap_end - self.gap_start;
        if new_start > self.gap_start {
            let delta = new_start - self.gap_start;
            // elements just past the gap slide down into it
            unsafe {
                self.copy(self.gap_start, self.gap_end, delta);
            }
        } else {
            let delta = self.gap_start - new_start;
            unsafe {
                self.copy(self.gap_end - delta, new_start, delta);
            }
        }
        self.gap_start = new_start;
        self.gap_end = new_start + gap;
    }

    /// Replaces the storage with `new_len` cells, keeping the live prefix.
    pub(crate) fn resize_storage(&mut self, new_len: usize) {
        debug_assert!(self.buffer_end() <= new_len);
        let mut new_xs = uninit_storage::<T>(new_len);
        unsafe {
            ptr::copy_nonoverlapping(self.xs.as_ptr(), new_xs.as_mut_ptr(), self.buffer_end());
        }
        self.xs = new_xs;
    }

    /// Doubles the capacity until `items` more cells fit past the gap.
    pub(crate) fn expand_capacity_if_necessary(&mut self, items: usize) {
        let required = self.count_with_gap() + items;
        if required > self.capacity {
            self.capacity = grow_capacity(self.capacity, required);
            self.resize_storage(self.capacity + self.gap_size);
        }
    }

    /// Regenerates an exhausted gap in place, shifting the trailing
    /// elements right. A configured width of zero still yields one cell so
    /// insertion always has a slot.
    pub(crate) fn ensure_gap(&mut self) {
        if self.gap_start < self.gap_end {
            return;
        }
        let width = usize::max(self.gap_size, 1);
        // the gap is exhausted, so count_with_gap == len and the check
        // covers the full regenerated width
        self.expand_capacity_if_necessary(width);
        let tail_len = self.buffer_end() - self.gap_end;
        unsafe {
            self.copy(self.gap_end + width, self.gap_end, tail_len);
        }
        self.gap_end += width;
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
