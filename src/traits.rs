//! Common traits for the priority queues
//!
//! This module provides the trait shared by both queue variants:
//!
//! - [`PriorityQueue`]: push/peek/pop over an array-backed min-heap
//!
//! Unlike `std::collections::BinaryHeap`, the queues in this crate do not
//! require `T: Ord`. Ordering comes from a predicate held by the queue (see
//! [`crate::order`]), and the element that is *least* under that predicate
//! is returned first.

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `pop` was called on a queue holding no elements
    #[error("queue is empty")]
    EmptyQueue,
    /// A queue was asked to adopt storage that already holds elements
    ///
    /// The heap invariant cannot be assumed for externally supplied data, so
    /// constructors only accept empty storage.
    #[error("initial storage must be empty, found {len} element(s)")]
    InvalidConstruction {
        /// Number of elements found in the rejected storage
        len: usize,
    },
}

/// Base trait for the priority queues in this crate
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use classic_collections::PriorityQueue;
/// use classic_collections::queue::Queue;
///
/// let mut queue = Queue::new(|a: &i32, b: &i32| a < b);
/// queue.push(3);
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.pop(), Ok(1));
/// ```
pub trait PriorityQueue<T> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) comparisons and swaps.
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these queues are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] when there is nothing to remove. The
    /// queue is left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n) comparisons and swaps.
    fn pop(&mut self) -> Result<T, QueueError>;
}
