//! Undirected graphs and path search
//!
//! [`UniGraph`] stores adjacency lists in insertion order, keyed by vertex id
//! in an `FxHashMap`, so vertex ids do not have to be dense. Searches return
//! a [`Paths`] value that answers reachability and path queries from one
//! source vertex.
//!
//! - [`UniGraph::dfs`] visits neighbours in adjacency order and yields the
//!   same tree as the textbook recursive depth-first search.
//! - [`UniGraph::bfs`] yields paths with the fewest edges.
//!
//! # Example
//!
//! ```rust
//! use classic_collections::graph::UniGraph;
//!
//! let mut g = UniGraph::new();
//! g.add_edge(0, 1);
//! g.add_edge(1, 2);
//! g.add_edge(0, 2);
//!
//! assert_eq!(g.bfs(0).path_to(2), Some(vec![0, 2]));
//! assert_eq!(g.dfs(0).path_to(2), Some(vec![0, 1, 2]));
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead};

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Errors raised while reading a graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// A non-blank line that is not two vertex ids
    #[error("line {line}: expected two vertex ids, found {content:?}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
    },
    /// The input could not be read
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// An undirected graph without self-loops
#[derive(Debug, Clone, Default)]
pub struct UniGraph {
    adj: FxHashMap<usize, Vec<usize>>,
    edge_count: usize,
}

impl UniGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from one `v w` edge per line
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    /// Returns [`GraphError::Parse`] for any other line that is not exactly
    /// two non-negative integers.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut fields = trimmed.split_whitespace().map(str::parse::<usize>);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(Ok(v)), Some(Ok(w)), None) => graph.add_edge(v, w),
                _ => {
                    return Err(GraphError::Parse {
                        line: idx + 1,
                        content: trimmed.to_owned(),
                    })
                }
            }
        }

        debug!(
            "read graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if `v` is a vertex of the graph
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.adj.contains_key(&v)
    }

    /// Adds `v` with no edges; returns false if it was already present
    pub fn add_vertex(&mut self, v: usize) -> bool {
        if self.adj.contains_key(&v) {
            return false;
        }
        self.adj.insert(v, Vec::new());
        true
    }

    /// Connects `v` and `w`
    ///
    /// A self-loop adds the vertex but no edge. Parallel edges are kept.
    pub fn add_edge(&mut self, v: usize, w: usize) {
        self.add_vertex(v);
        if v == w {
            return;
        }
        self.add_vertex(w);

        self.adj.entry(v).or_default().push(w);
        self.adj.entry(w).or_default().push(v);
        self.edge_count += 1;
    }

    /// Returns the neighbours of `v` in the order their edges were added
    ///
    /// An unknown vertex has no neighbours.
    pub fn adjacent(&self, v: usize) -> &[usize] {
        self.adj.get(&v).map(Vec::as_slice).unwrap_or_default()
    }

    /// Depth-first search from `source`
    pub fn dfs(&self, source: usize) -> Paths {
        let mut paths = Paths::rooted_at(source);
        // (vertex, index of the next neighbour to try)
        let mut stack = vec![(source, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (v, cursor) = *frame;
            frame.1 += 1;

            match self.adjacent(v).get(cursor) {
                Some(&w) => {
                    if paths.mark(w, v) {
                        stack.push((w, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        paths
    }

    /// Breadth-first search from `source`
    pub fn bfs(&self, source: usize) -> Paths {
        let mut paths = Paths::rooted_at(source);
        let mut queue = VecDeque::from([source]);

        while let Some(v) = queue.pop_front() {
            for &w in self.adjacent(v) {
                if paths.mark(w, v) {
                    queue.push_back(w);
                }
            }
        }

        paths
    }
}

/// Search result: every vertex reached from one source, with a parent link
/// back toward the source
#[derive(Debug, Clone)]
pub struct Paths {
    source: usize,
    marked: FxHashSet<usize>,
    edge_to: FxHashMap<usize, usize>,
}

impl Paths {
    fn rooted_at(source: usize) -> Self {
        let mut marked = FxHashSet::default();
        marked.insert(source);
        Self {
            source,
            marked,
            edge_to: FxHashMap::default(),
        }
    }

    /// Records that `w` was first reached from `v`; false if already seen
    fn mark(&mut self, w: usize, v: usize) -> bool {
        if !self.marked.insert(w) {
            return false;
        }
        self.edge_to.insert(w, v);
        true
    }

    /// Returns the vertex the search started from
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the number of vertices reached, the source included
    pub fn reached(&self) -> usize {
        self.marked.len()
    }

    /// Returns true if `v` was reached
    ///
    /// The source always counts as reached.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked.contains(&v)
    }

    /// Returns the vertices from the source to `v`, both included
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }

        let mut path = vec![v];
        let mut x = v;
        while x != self.source {
            x = *self.edge_to.get(&x)?;
            path.push(x);
        }
        path.reverse();
        Some(path)
    }
}
