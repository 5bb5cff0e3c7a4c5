//! Binary heap priority queue
//!
//! An array-backed binary min-heap ordered by a caller-supplied predicate.
//! The element that is least under the predicate sits at index 0; the
//! children of slot `k` live at `2k + 1` and `2k + 2`.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use classic_collections::PriorityQueue;
//! use classic_collections::queue::Queue;
//!
//! let mut queue = Queue::new(|a: &&str, b: &&str| a < b);
//! queue.push("banana");
//! queue.push("apple");
//! queue.push("cherry");
//!
//! assert_eq!(queue.peek(), Some(&"apple"));
//! assert_eq!(queue.pop(), Ok("apple"));
//! assert_eq!(queue.peek(), Some(&"banana"));
//! ```
//!
//! Ties are not broken in any particular way: elements that compare equal
//! under the predicate may come out in any order.

use std::fmt;

use crate::order::{LessThan, NaturalOrder};
use crate::traits::{PriorityQueue, QueueError};

/// A binary min-heap bound to one ordering predicate
#[derive(Clone)]
pub struct Queue<T, C = NaturalOrder> {
    /// Heap-ordered storage; `data[0]` is the minimum
    data: Vec<T>,
    less: C,
}

impl<T, C: LessThan<T>> PriorityQueue<T> for Queue<T, C> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        self.remove_at(0).ok_or(QueueError::EmptyQueue)
    }
}

impl<T, C: LessThan<T>> Queue<T, C> {
    /// Creates an empty queue ordered by `less`
    pub fn new(less: C) -> Self {
        Self {
            data: Vec::new(),
            less,
        }
    }

    /// Creates a queue that reuses `storage` as its backing buffer
    ///
    /// Only the allocation is adopted. The storage must be empty, because
    /// the heap invariant cannot be assumed for data that did not arrive
    /// through `push`.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConstruction`] if `storage` holds any
    /// elements.
    pub fn from_storage(storage: Vec<T>, less: C) -> Result<Self, QueueError> {
        if !storage.is_empty() {
            return Err(QueueError::InvalidConstruction { len: storage.len() });
        }
        Ok(Self {
            data: storage,
            less,
        })
    }

    /// Returns the predicate this queue was built with
    pub fn predicate(&self) -> &C {
        &self.less
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the storage in heap order
    ///
    /// Only `as_slice()[0]` has a defined rank (the minimum); the rest is
    /// laid out as an implicit binary tree.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in storage order, not sorted order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator that pops elements in ascending order until the
    /// queue is empty
    ///
    /// Elements not consumed by the iterator stay in the queue.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Consumes the queue and returns its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Checks that no element ranks below its parent
    pub fn is_heap(&self) -> bool {
        (1..self.data.len())
            .all(|i| !self.less.less_than(&self.data[i], &self.data[(i - 1) / 2]))
    }

    /// Returns the slot of a maximal element
    ///
    /// The maximum of a min-heap is always a leaf, so only the back half of
    /// the storage is scanned.
    pub(crate) fn max_index(&self) -> Option<usize> {
        let first_leaf = self.data.len() / 2;
        (first_leaf..self.data.len()).reduce(|best, i| {
            if self.less.less_than(&self.data[best], &self.data[i]) {
                i
            } else {
                best
            }
        })
    }

    /// Removes the element at `index` and restores the heap invariant
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(index, last_idx);
        let result = self.data.pop();

        if index < self.data.len() && self.sift_down(index) == index {
            // The moved element came from the bottom of another subtree and
            // may rank below its new parent.
            self.sift_up(index);
        }

        result
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less.less_than(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property, returning the
    /// slot it settled in
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less.less_than(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.less.less_than(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                return index;
            }
        }
    }
}

impl<T, C: LessThan<T> + Default> Default for Queue<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C: LessThan<T>> Extend<T> for Queue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Queue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`Queue::drain_sorted`]
pub struct DrainSorted<'a, T, C> {
    queue: &'a mut Queue<T, C>,
}

impl<T, C: LessThan<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: LessThan<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_queue() -> Queue<i32, impl LessThan<i32>> {
        Queue::new(|a: &i32, b: &i32| a < b)
    }

    #[test]
    fn test_basic_operations() {
        let mut queue = int_queue();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);

        for v in [5, 3, 8, 1, 9, 2] {
            queue.push(v);
        }

        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 6);
        assert_eq!(queue.peek(), Some(&1));

        for expected in [1, 2, 3, 5, 8, 9] {
            assert_eq!(queue.pop(), Ok(expected));
        }
        assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_pop_empty_leaves_queue_untouched() {
        let mut queue = int_queue();
        assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_strings() {
        let mut queue = Queue::new(|a: &String, b: &String| a < b);
        queue.push("banana".to_string());
        queue.push("apple".to_string());
        queue.push("cherry".to_string());

        assert_eq!(queue.peek().map(String::as_str), Some("apple"));
        assert_eq!(queue.pop().as_deref(), Ok("apple"));
        assert_eq!(queue.peek().map(String::as_str), Some("banana"));
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut queue = Queue::new(|a: &(i32, char), b: &(i32, char)| a.0 < b.0);

        queue.push((1, 'a'));
        queue.push((1, 'b'));
        queue.push((1, 'c'));

        assert_eq!(queue.len(), 3);

        // All three should pop with priority 1, in no particular order
        let mut tags: Vec<char> = queue
            .drain_sorted()
            .map(|(p, tag)| {
                assert_eq!(p, 1);
                tag
            })
            .collect();
        tags.sort_unstable();
        assert_eq!(tags, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_from_storage_rejects_data() {
        let err = Queue::from_storage(vec![0, 1, 2, 3], NaturalOrder).unwrap_err();
        assert_eq!(err, QueueError::InvalidConstruction { len: 4 });

        let queue = Queue::<i32>::from_storage(Vec::with_capacity(16), NaturalOrder).unwrap();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ascending_insertion() {
        let mut queue: Queue<i32> = Queue::default();

        for i in 0..100 {
            queue.push(i);
        }

        for i in 0..100 {
            assert_eq!(queue.pop(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut queue: Queue<i32> = Queue::default();

        for i in (0..=10).rev() {
            queue.push(i);
            assert!(queue.is_heap());
        }

        for i in 0..=10 {
            assert_eq!(queue.peek(), Some(&i));
            assert_eq!(queue.pop(), Ok(i));
        }
    }

    #[test]
    fn test_remove_at_middle_keeps_heap() {
        let mut queue: Queue<i32> = Queue::default();
        queue.extend([1, 10, 2, 11, 12, 3, 4]);

        // Slot 4 holds a leaf under 10; the last element (4) replaces it
        // and must swim above 10.
        let removed = queue.remove_at(4);
        assert!(removed.is_some());
        assert!(queue.is_heap());
        assert_eq!(queue.len(), 6);
        assert_eq!(queue.remove_at(6), None);
    }

    #[test]
    fn test_max_index() {
        let mut queue: Queue<i32> = Queue::default();
        assert_eq!(queue.max_index(), None);

        queue.extend([7, 3, 9, 1, 5]);
        let idx = queue.max_index().unwrap();
        assert_eq!(queue.as_slice()[idx], 9);
    }

    #[test]
    fn test_into_sorted_vec_and_clear() {
        let mut queue: Queue<i32> = Queue::default();
        queue.extend([4, 2, 6]);
        assert_eq!(queue.clone().into_sorted_vec(), vec![2, 4, 6]);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_debug_shows_storage() {
        let mut queue: Queue<i32> = Queue::default();
        queue.push(1);
        assert_eq!(format!("{queue:?}"), "Queue { data: [1], .. }");
    }
}
