//! Capacity-limited priority queue
//!
//! [`BoundedQueue`] answers "which `capacity` elements are smallest among
//! everything pushed so far". It keeps the [`Queue`] layout, so the minimum
//! is still at the root and `peek`/`pop` behave exactly as they do on the
//! unbounded queue.
//!
//! # Eviction
//!
//! When a push takes the queue over capacity, a *maximal* element under the
//! predicate is evicted and handed back to the caller. The queue therefore
//! always holds exactly the `capacity` least elements seen so far, with
//! ties broken arbitrarily.
//!
//! The maximum of a min-heap is always in the leaf half of the storage, so
//! locating it costs `capacity / 2` comparisons. Removing it is a
//! swap-with-last followed by sink and swim at that slot.
//!
//! | Operation            | Complexity   |
//! |----------------------|--------------|
//! | `push` (not full)    | O(log n)     |
//! | `push` (evicting)    | O(n)         |
//! | `pop`                | O(log n)     |
//! | `peek`               | O(1)         |
//!
//! # Example
//!
//! ```rust
//! use classic_collections::bounded::BoundedQueue;
//!
//! let mut top = BoundedQueue::new(|a: &i32, b: &i32| a < b, 2);
//! assert_eq!(top.offer(5), None);
//! assert_eq!(top.offer(1), None);
//! assert_eq!(top.offer(3), Some(5));
//!
//! assert_eq!(top.into_sorted_vec(), vec![1, 3]);
//! ```

use std::fmt;

use log::trace;

use crate::order::{LessThan, NaturalOrder};
use crate::queue::Queue;
use crate::traits::{PriorityQueue, QueueError};

/// A min-heap that never holds more than `capacity` elements
#[derive(Clone)]
pub struct BoundedQueue<T, C = NaturalOrder> {
    queue: Queue<T, C>,
    capacity: usize,
}

impl<T, C: LessThan<T>> PriorityQueue<T> for BoundedQueue<T, C> {
    fn len(&self) -> usize {
        self.queue.len()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Inserts an element, discarding a maximal element on overflow
    ///
    /// Use [`BoundedQueue::offer`] to get the discarded element back.
    fn push(&mut self, item: T) {
        self.offer(item);
    }

    fn peek(&self) -> Option<&T> {
        self.queue.peek()
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        self.queue.pop()
    }
}

impl<T, C: LessThan<T>> BoundedQueue<T, C> {
    /// Creates an empty queue that retains at most `capacity` elements
    ///
    /// A capacity of zero is allowed; such a queue retains nothing.
    pub fn new(less: C, capacity: usize) -> Self {
        Self {
            queue: Queue::new(less),
            capacity,
        }
    }

    /// Creates a bounded queue that reuses `storage` as its backing buffer
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConstruction`] if `storage` holds any
    /// elements.
    pub fn from_storage(storage: Vec<T>, less: C, capacity: usize) -> Result<Self, QueueError> {
        Ok(Self {
            queue: Queue::from_storage(storage, less)?,
            capacity,
        })
    }

    /// Returns the maximum number of retained elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the next push will evict
    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    /// Inserts an element and returns the element evicted to stay within
    /// capacity, if any
    ///
    /// The evicted element is maximal among the retained elements plus
    /// `item`. It may be `item` itself.
    pub fn offer(&mut self, item: T) -> Option<T> {
        self.queue.push(item);
        if self.queue.len() <= self.capacity {
            return None;
        }

        let index = self.queue.max_index()?;
        trace!(
            "evicting slot {} of {} to hold capacity {}",
            index,
            self.queue.len(),
            self.capacity
        );
        self.queue.remove_at(index)
    }

    /// Returns the retained elements in heap order
    pub fn as_slice(&self) -> &[T] {
        self.queue.as_slice()
    }

    /// Iterates over the retained elements in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.queue.iter()
    }

    /// Checks that no retained element ranks below its parent
    pub fn is_heap(&self) -> bool {
        self.queue.is_heap()
    }

    /// Removes every element, keeping capacity and allocation
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Consumes the queue and returns the retained elements in ascending
    /// order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.queue.into_sorted_vec()
    }
}

impl<T, C: LessThan<T>> Extend<T> for BoundedQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BoundedQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("queue", &self.queue)
            .finish()
    }
}
