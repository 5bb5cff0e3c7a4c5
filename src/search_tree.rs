//! Binary search tree
//!
//! An ordered map kept as a plain, unbalanced binary search tree. Every node
//! records the size of its subtree so `len` is O(1). Inserting keys in
//! sorted order degenerates the tree into a list; nothing rebalances it.
//!
//! All traversals are iterative, so a degenerate tree does not overflow the
//! stack on insert, lookup, iteration, or drop.
//!
//! # Example
//!
//! ```rust
//! use classic_collections::search_tree::SearchTree;
//!
//! let mut tree = SearchTree::new();
//! for (i, key) in ["S", "E", "A", "R", "C", "H"].into_iter().enumerate() {
//!     tree.insert(key, i);
//! }
//!
//! assert_eq!(tree.get(&"R"), Some(&3));
//! let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec!["A", "C", "E", "H", "R", "S"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    /// Number of nodes in the subtree rooted here, this one included
    size: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            size: 1,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced binary search tree mapping `K` to `V`
pub struct SearchTree<K, V> {
    root: Link<K, V>,
}

impl<K: Ord, V> SearchTree<K, V> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.size)
    }

    /// Returns true if the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`, returning the value it replaced
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }

        // The key is new, so every node on the way down gains one descendant.
        let mut link = &mut self.root;
        while let Some(node) = link {
            node.size += 1;
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::leaf(key, value));
        None
    }

    /// Iterates over entries in ascending key order
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.descend_left(self.root.as_deref());
        iter
    }
}

impl<K, V> Drop for SearchTree<K, V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Ord, V> Default for SearchTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for SearchTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a SearchTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for SearchTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// In-order iterator returned by [`SearchTree::iter`]
pub struct Iter<'a, K, V> {
    /// Nodes whose left subtree has been pushed but which are not yet
    /// yielded
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn descend_left(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
