//! Classic Data Structures for Rust
//!
//! This crate provides textbook data structures with small, strongly typed
//! APIs. The centrepiece is an array-backed binary heap ordered by a
//! caller-supplied predicate.
//!
//! # Contents
//!
//! - **Priority Queue** ([`queue::Queue`]): binary min-heap; O(log n) push and pop, O(1) peek
//! - **Bounded Queue** ([`bounded::BoundedQueue`]): keeps the `capacity` least elements ever pushed
//! - **K-way merge** ([`merge`]): merges whitespace-separated word streams through a queue
//! - **Union-Find** ([`union_find::QuickFind`]): quick-find disjoint sets
//! - **Search Tree** ([`search_tree::SearchTree`]): unbalanced binary search tree map
//! - **Graph** ([`graph::UniGraph`]): undirected graph with depth- and breadth-first paths
//!
//! # Example
//!
//! ```rust
//! use classic_collections::queue::Queue;
//! use classic_collections::PriorityQueue;
//!
//! let mut queue = Queue::new(|a: &i32, b: &i32| a < b);
//! for v in [5, 3, 8, 1, 9, 2] {
//!     queue.push(v);
//! }
//! assert_eq!(queue.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
//! ```

pub mod bounded;
pub mod graph;
pub mod merge;
pub mod order;
pub mod queue;
pub mod search_tree;
pub mod traits;
pub mod union_find;

// Re-export the main trait for convenience
pub use traits::{PriorityQueue, QueueError};
