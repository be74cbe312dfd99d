//! Error types shared by both buffers.

use std::error;
use std::fmt;

use thiserror::Error;

/// The errors reported by fallible buffer operations.
///
/// Every fallible operation validates all of its arguments before touching
/// the buffer, so an `Err` return guarantees the buffer was not modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A range described by a start and a length overruns its source or
    /// destination.
    #[error("invalid range: {start} + {len} exceeds length {bound}")]
    InvalidArgument {
        /// Start of the offending range.
        start: usize,
        /// Length of the offending range.
        len: usize,
        /// Length of the slice or buffer the range was applied to.
        bound: usize,
    },

    /// A position or size argument lies outside its valid domain.
    #[error("value {value} out of range (bound {bound})")]
    OutOfRange {
        /// The rejected value.
        value: usize,
        /// The bound it violated.
        bound: usize,
    },

    /// The buffer holds no elements to remove or inspect.
    #[error("buffer is empty")]
    Empty,

    /// A bulk insertion does not fit and overwriting is disabled.
    #[error("buffer capacity {capacity} exceeded and overwriting is disabled")]
    CapacityExceeded {
        /// Capacity of the rejecting buffer.
        capacity: usize,
    },
}

/// Error value indicating insufficient capacity.
///
/// Returned by [`CircularBuffer::enqueue`](crate::CircularBuffer::enqueue)
/// when the buffer is full and overwriting is disabled; carries the
/// rejected element so the caller gets it back.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

impl<T> error::Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", CAPERROR)
    }
}
