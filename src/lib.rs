//! # Blocked Deque
//!
//! A double-ended, random-access sequence container built from a two-level
//! block layout: a growable directory of fixed-capacity rows, each row a
//! contiguous slab of `C` element slots.
//!
//! This crate provides [`BlockDeque`]. Unlike a single ring buffer, growth
//! reallocates only the small row directory and fresh rows; indexing stays
//! O(1) via one division and one modulo by the row size.
//!
//! ## Key Features
//!
//! * **Amortized O(1) pushes at both ends:** capacity doubles when a push
//!   finds the container full, and new elements are centered within the owned
//!   rows so both ends start with slack.
//! * **O(1) random access:** `deque[i]`, [`BlockDeque::get`], and the
//!   bounds-reporting [`BlockDeque::at`].
//! * **Row-crossing iteration:** double-ended, exact-size iterators plus an
//!   explicit [`Cursor`]/[`CursorMut`] position abstraction with a canonical
//!   end sentinel.
//! * **Cheap-side edits:** `insert` and `remove` shift whichever side of the
//!   position holds fewer elements.
//! * **Interoperability:** [`AnyDeque`] abstracts over `BlockDeque` and
//!   `std::collections::VecDeque`.
//!
//! ## Row size (`C`)
//!
//! The row capacity is a compile-time constant, identical for every row over
//! the container's lifetime; it must be non-zero. 10 is a reasonable default
//! for small elements.
//!
//! ## Examples
//!
//! ```rust
//! use blocked_deque::BlockDeque;
//!
//! let mut deque: BlockDeque<i32, 10> = BlockDeque::new();
//!
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_back(3);
//! deque.push_front(0);
//!
//! assert_eq!(deque.len(), 4);
//! assert_eq!(deque.front(), Some(&0));
//! assert_eq!(deque.back(), Some(&3));
//! assert_eq!(deque[2], 2);
//!
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! Bounds-checked access reports the failure instead of panicking:
//!
//! ```rust
//! use blocked_deque::{BlockDeque, Error};
//!
//! let deque: BlockDeque<u8, 10> = BlockDeque::from_elem(3, 7);
//! assert_eq!(deque.at(2), Ok(&7));
//! assert_eq!(deque.at(9), Err(Error::OutOfRange { index: 9, len: 3 }));
//! ```

// --- Module Declarations ---

pub mod cursor;
pub mod deque;
pub mod error;
pub mod iter;
mod row;

// --- Re-exports ---

pub use cursor::{Cursor, CursorMut};
pub use deque::{AnyDeque, BlockDeque};
pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};
