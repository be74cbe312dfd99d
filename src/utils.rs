use std::iter;
use std::mem::MaybeUninit;

/// Allocates `n` uninitialized cells on the heap.
pub fn uninit_storage<T>(n: usize) -> Box<[MaybeUninit<T>]> {
    iter::repeat_with(MaybeUninit::uninit).take(n).collect()
}

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Doubling growth policy: doubles `current` (floor of 4) until it holds
/// `required`.
#[inline]
pub fn grow_capacity(current: usize, required: usize) -> usize {
    let mut new_capacity = if current == 0 { 4 } else { current };
    while new_capacity < required {
        new_capacity *= 2;
    }
    new_capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_add() {
        assert_eq!(wrap_add(3, 2, 4), 1);
        assert_eq!(wrap_add(0, 0, 1), 0);
        assert_eq!(wrap_add(2, 1, 3), 0);
    }

    #[test]
    fn test_grow_capacity() {
        assert_eq!(grow_capacity(0, 1), 4);
        assert_eq!(grow_capacity(0, 0), 4);
        assert_eq!(grow_capacity(4, 4), 4);
        assert_eq!(grow_capacity(4, 5), 8);
        assert_eq!(grow_capacity(4, 17), 32);
        assert_eq!(grow_capacity(10, 21), 40);
    }
}
