//! An indexed priority queue on a configurable array-backed heap.
//!
//! [`Heap`] keeps `(key, value)` entries in a complete [`Binary`] or [`KAry`]
//! tree laid out in a `Vec`, with the smallest or the largest key at the root
//! depending on its [`Orientation`]. [`PriorityQueue`] layers an
//! element-to-slot map on top, which buys the operation graph algorithms such
//! as Dijkstra, Prim and A* lean on: locate an element already in the queue
//! in O(1), change its key, and restore order in O(log n).
//!
//! Batches that already satisfy the heap order can be adopted without the
//! O(n) build by passing [`BatchOrder::AlreadyHeap`] at construction.
//!
//! # Examples
//!
//! ```
//! use indexed_heap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::min();
//! queue.push(4, 'd')?;
//! queue.push(1, 'a')?;
//! queue.push(3, 'c')?;
//!
//! queue.update_key(0, &'c')?;
//! assert_eq!(queue.pop(), Ok((0, 'c')));
//! assert_eq!(queue.pop(), Ok((1, 'a')));
//! assert_eq!(queue.pop(), Ok((4, 'd')));
//! assert!(queue.is_empty());
//! # Ok::<(), indexed_heap::Error>(())
//! ```
//!
//! Neither structure is synchronized; wrap the whole value in a lock to share
//! it across threads.

mod arity;
mod error;
mod heap;
mod queue;

pub use crate::arity::{Arity, Binary, KAry};
pub use crate::error::Error;
pub use crate::heap::{BatchOrder, Heap, Iter, Orientation};
pub use crate::queue::PriorityQueue;
