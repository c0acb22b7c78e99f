//! # Weighted Undirected Graph
//!
//! A small, simple (no loops, no parallel edges) weighted undirected graph with
//! contiguous vertex ids `0..n`. Edges are kept as a list in insertion order and
//! mirrored into an `n × n` weight matrix for O(1) adjacency and weight lookup.
//!
//! The matrix is never mutated on its own: every edge goes through
//! [`GraphBuilder::add_edge`], which validates it and writes both the list and
//! the symmetric matrix entries. [`GraphBuilder::build`] then freezes the result
//! into an immutable [`Graph`].
//!
//! ## Example
//! ```rust
//! use graph_cycles::graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new(4).unwrap();
//! builder.add_edge(0, 1, 3).unwrap();
//! builder.add_edge(1, 2, 2).unwrap();
//! builder.add_edge(2, 3, 3).unwrap();
//! builder.add_edge(3, 0, 2).unwrap();
//! let graph = builder.build();
//!
//! assert!(graph.has_edge(1, 0));
//! assert_eq!(graph.weight(3, 0), Some(2));
//! assert_eq!(graph.walk_weight(&[0, 1, 2, 3, 0]), Some(10));
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};

/// Vertex identity: an index in `0..vertex_count`.
pub type VertexId = usize;

/// Edge weight.
pub type Weight = u32;

/// Lightest edge weight.
pub const MIN_WEIGHT: Weight = 1;

/// Heaviest edge weight.
pub const MAX_WEIGHT: Weight = 9;

/// Smallest graph that can hold a cycle.
pub const MIN_VERTICES: usize = 3;

/// A vertex. Only the id carries meaning; the label is for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub id: VertexId,
}

impl Vertex {
    /// Display label: `A`, `B`, ... `Z`, then `V26`, `V27`, ...
    pub fn label(&self) -> String {
        match u8::try_from(self.id) {
            Ok(offset) if offset < 26 => char::from(b'A' + offset).to_string(),
            _ => format!("V{}", self.id),
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Unordered vertex pair, stored smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(VertexId, VertexId);

impl EdgeKey {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.0, self.1)
    }
}

/// An undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.u, self.v)
    }

    /// The endpoint opposite `vertex`, if `vertex` is an endpoint.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.u {
            Some(self.v)
        } else if vertex == self.v {
            Some(self.u)
        } else {
            None
        }
    }
}

/// Incremental constructor for [`Graph`]; the only path that writes edges.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    n: usize,
    edges: Vec<Edge>,
    /// Row-major `n × n`; zero means "no edge".
    weights: Vec<Weight>,
}

impl GraphBuilder {
    /// Start an edgeless graph on vertices `0..n`.
    ///
    /// # Errors
    /// [`Error::TooFewVertices`] when `n < MIN_VERTICES`.
    pub fn new(n: usize) -> Result<Self> {
        if n < MIN_VERTICES {
            return Err(Error::TooFewVertices {
                count: n,
                min: MIN_VERTICES,
            });
        }
        Ok(Self {
            n,
            edges: Vec::new(),
            weights: vec![0; n * n],
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        u < self.n && v < self.n && self.weights[u * self.n + v] != 0
    }

    pub fn degree(&self, v: VertexId) -> usize {
        if v >= self.n {
            return 0;
        }
        self.weights[v * self.n..(v + 1) * self.n]
            .iter()
            .filter(|&&w| w != 0)
            .count()
    }

    /// Add the undirected edge `u-v` with the given weight.
    ///
    /// # Errors
    /// Out-of-range endpoints, self loops, duplicate pairs and weights outside
    /// `[MIN_WEIGHT, MAX_WEIGHT]` are refused and leave the builder unchanged.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        for vertex in [u, v] {
            if vertex >= self.n {
                return Err(Error::VertexOutOfRange {
                    vertex,
                    count: self.n,
                });
            }
        }
        if u == v {
            return Err(Error::SelfLoop(u));
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(Error::WeightOutOfRange(weight));
        }
        if self.has_edge(u, v) {
            return Err(Error::DuplicateEdge(u, v));
        }

        self.weights[u * self.n + v] = weight;
        self.weights[v * self.n + u] = weight;
        self.edges.push(Edge { u, v, weight });
        Ok(())
    }

    pub fn build(self) -> Graph {
        Graph {
            n: self.n,
            edges: self.edges,
            weights: self.weights,
        }
    }
}

/// Immutable simple weighted undirected graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    edges: Vec<Edge>,
    weights: Vec<Weight>,
}

impl Graph {
    /// Build a graph from an edge list in one step.
    ///
    /// # Errors
    /// Any error [`GraphBuilder::new`] or [`GraphBuilder::add_edge`] reports.
    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId, Weight)]) -> Result<Self> {
        let mut builder = GraphBuilder::new(n)?;
        for &(u, v, weight) in edges {
            builder.add_edge(u, v, weight)?;
        }
        Ok(builder.build())
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        (0..self.n).map(|id| Vertex { id })
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.n
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.weight(u, v).is_some()
    }

    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        if u >= self.n || v >= self.n {
            return None;
        }
        match self.weights[u * self.n + v] {
            0 => None,
            w => Some(w),
        }
    }

    /// Neighbors of `v` in ascending id order.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.n).filter(move |&u| self.has_edge(v, u))
    }

    /// Row sum of the adjacency matrix.
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).count()
    }

    /// Degree of every vertex, indexed by id.
    pub fn degrees(&self) -> Vec<usize> {
        (0..self.n).map(|v| self.degree(v)).collect()
    }

    /// Degrees sorted from largest to smallest.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees = self.degrees();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    pub fn odd_vertices(&self) -> Vec<VertexId> {
        (0..self.n).filter(|&v| self.degree(v) % 2 != 0).collect()
    }

    /// Breadth-first reachability from vertex 0 covers every vertex.
    pub fn is_connected(&self) -> bool {
        let mut seen = vec![false; self.n];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(u) = queue.pop_front() {
            for w in self.neighbors(u) {
                if !seen[w] {
                    seen[w] = true;
                    reached += 1;
                    queue.push_back(w);
                }
            }
        }
        reached == self.n
    }

    /// Sum of edge weights along `walk`, or `None` if a step has no edge.
    pub fn walk_weight(&self, walk: &[VertexId]) -> Option<Weight> {
        walk.windows(2)
            .map(|step| self.weight(step[0], step[1]))
            .sum()
    }
}
