//! Two index-addressable sequence containers over contiguous, resizable
//! storage: a circular buffer and a gap buffer.
//!
//! [`CircularBuffer`] is a bounded FIFO queue whose write position wraps
//! around a single array. It has `O(1)` enqueue and dequeue and `O(1)`
//! indexing, and a configurable policy for what happens when it fills up:
//! reject the new element, or overwrite the oldest one so the buffer
//! always holds the most recent `capacity` elements in arrival order.
//!
//! [`GapBuffer`] keeps its elements in one array split by a movable
//! uninitialized *gap*. Insertions and removals at the gap are `O(1)`;
//! moving the gap costs a block copy proportional to the distance. That
//! makes it a good fit for edit-heavy workloads with locality, like text
//! editing, where consecutive modifications cluster around a cursor.
//!
//! Neither container requires its elements to be copyable.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! arraybuf = "0.1"
//! ```
//!
//! # Concurrency
//!
//! Every mutating operation takes `&mut self`, so access to an instance
//! is serialized by the borrow checker at no runtime cost. Both types are
//! `Send` and `Sync` whenever their element type is; to share one across
//! threads, wrap it in the lock of your choice. Iterators borrow the
//! container, which rules out mutation during iteration at compile time;
//! `to_vec` and by-value iteration give snapshot semantics instead.
//!
//! # Examples
//!
//! ```
//! use arraybuf::CircularBuffer;
//!
//! let mut recent: CircularBuffer<u32> = CircularBuffer::new(3);
//!
//! recent.enqueue(1).unwrap();
//! recent.enqueue(2).unwrap();
//! recent.enqueue(3).unwrap();
//! recent.enqueue(4).unwrap(); // evicts 1
//!
//! assert_eq!(recent.to_vec(), vec![2, 3, 4]);
//! assert_eq!(recent.dequeue(), Ok(2));
//! ```
//!
//! ```
//! use arraybuf::GapBuffer;
//!
//! let mut text: GapBuffer<char> = GapBuffer::new(8, 16).unwrap();
//! text.add_range(&['h', 'e', 'l', 'o'], 0, 4).unwrap();
//!
//! // fix the typo: insertions near the cursor are cheap
//! text.insert_at(3, 'l').unwrap();
//! assert_eq!(text.to_vec(), vec!['h', 'e', 'l', 'l', 'o']);
//! ```

#![deny(missing_docs)]

mod utils;

pub mod circular;
pub mod error;
pub mod gap;
mod iter;

pub use circular::CircularBuffer;
pub use error::{CapacityError, Error};
pub use gap::GapBuffer;
pub use iter::{Iter, IterMut};
