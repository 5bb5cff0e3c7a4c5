//! Union-find (disjoint sets)
//!
//! [`QuickFind`] is the simplest union-find: every node stores the id of its
//! component directly, so `find` is a lookup and `union` relabels one whole
//! component. There is no path compression and no union-by-rank.
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `find`      | O(1)       |
//! | `connected` | O(1)       |
//! | `union`     | O(n)       |
//!
//! This module also reads the "node count, then pairs" text format used by
//! the `connect` binary; see [`read_connections`].

use std::io::{self, BufRead};

use log::debug;
use thiserror::Error;

/// Errors raised by union-find construction, lookups, and input parsing
#[derive(Debug, Error)]
pub enum UnionFindError {
    /// A structure over zero nodes was requested
    #[error("a union-find needs at least one node")]
    Empty,
    /// A node id at or beyond the number of nodes
    #[error("node {node} is out of range for {len} node(s)")]
    OutOfRange {
        /// Offending node id
        node: usize,
        /// Number of nodes in the structure
        len: usize,
    },
    /// A line of input could not be parsed
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },
    /// The input could not be read
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Common operations of union-find implementations
pub trait UnionFind {
    /// Joins the components containing `p` and `q`
    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError>;

    /// Returns the component id of `p`
    fn find(&self, p: usize) -> Result<usize, UnionFindError>;

    /// Returns true if `p` and `q` are in the same component
    fn connected(&self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Returns the number of components
    fn count(&self) -> usize;

    /// Returns the number of nodes
    fn len(&self) -> usize;

    /// Returns true if there are no nodes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Union-find with O(1) `find` and O(n) `union`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFind {
    /// Component id of each node
    ids: Vec<usize>,
    count: usize,
}

impl QuickFind {
    /// Creates `n` singleton components, node `i` in component `i`
    ///
    /// # Errors
    /// Returns [`UnionFindError::Empty`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        if n == 0 {
            return Err(UnionFindError::Empty);
        }
        Ok(Self {
            ids: (0..n).collect(),
            count: n,
        })
    }

    fn check(&self, node: usize) -> Result<(), UnionFindError> {
        if node < self.ids.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange {
                node,
                len: self.ids.len(),
            })
        }
    }
}

impl UnionFind for QuickFind {
    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
        let p_id = self.find(p)?;
        let q_id = self.find(q)?;

        if p_id == q_id {
            return Ok(());
        }

        for id in self.ids.iter_mut().filter(|id| **id == p_id) {
            *id = q_id;
        }
        self.count -= 1;
        Ok(())
    }

    fn find(&self, p: usize) -> Result<usize, UnionFindError> {
        self.check(p)?;
        Ok(self.ids[p])
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// A node count followed by the pairs to connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connections {
    /// Number of nodes declared on the first line
    pub nodes: usize,
    /// Pairs in input order
    pub pairs: Vec<(usize, usize)>,
}

/// Reads a node count line followed by `p q` lines
///
/// Blank lines are skipped. A missing count line yields zero nodes and no
/// pairs.
///
/// # Errors
/// Returns [`UnionFindError::Parse`] for a line that is not a single count
/// (first line) or two node ids (later lines), and [`UnionFindError::Io`]
/// if reading fails.
pub fn read_connections<R: BufRead>(reader: R) -> Result<Connections, UnionFindError> {
    let mut nodes = None;
    let mut pairs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        match (nodes, fields.as_slice()) {
            (None, [count]) => nodes = Some(parse_node(count, line_no)?),
            (None, _) => {
                return Err(UnionFindError::Parse {
                    line: line_no,
                    reason: format!("expected a node count, found {:?}", line.trim()),
                })
            }
            (Some(_), [p, q]) => pairs.push((parse_node(p, line_no)?, parse_node(q, line_no)?)),
            (Some(_), _) => {
                return Err(UnionFindError::Parse {
                    line: line_no,
                    reason: format!("expected two node ids, found {:?}", line.trim()),
                })
            }
        }
    }

    let nodes = nodes.unwrap_or(0);
    debug!("read {} node(s) and {} pair(s)", nodes, pairs.len());
    Ok(Connections { nodes, pairs })
}

fn parse_node(field: &str, line: usize) -> Result<usize, UnionFindError> {
    field.parse().map_err(|err| UnionFindError::Parse {
        line,
        reason: format!("{field:?} is not a node id: {err}"),
    })
}
