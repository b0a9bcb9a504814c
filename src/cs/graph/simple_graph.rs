use ndarray::Array2;
use std::collections::BTreeSet;

use crate::error::{GraphError, Result};

/// A mutable undirected simple graph over the dense vertex ids `0..n`.
///
/// Every vertex keeps an ordered neighbour set, so neighbour enumeration is
/// always in ascending id order and degree queries are O(1). Removing edges
/// never renumbers vertices: a vertex whose edges are all gone simply has
/// degree zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleGraph {
    adjacency: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl SimpleGraph {
    /// Creates a graph with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); n],
            edge_count: 0,
        }
    }

    /// Builds a graph with `n` vertices from an edge list.
    ///
    /// Repeated edges (in either orientation) are kept once.
    ///
    /// # Errors
    /// * `VertexNotFound` if an endpoint is not below `n`
    /// * `SelfLoop` if an edge joins a vertex to itself
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Builds a graph from a square 0/1 adjacency matrix.
    ///
    /// # Errors
    /// * `InvalidInput` if the matrix is not square or holds entries other than 0 and 1
    /// * `SelfLoop` if the diagonal is not zero
    /// * `AsymmetricAdjacency` if `m[i][j] != m[j][i]` for some pair
    pub fn from_adjacency_matrix(matrix: &Array2<u8>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(GraphError::invalid_input(format!(
                "adjacency matrix must be square, got {}x{}",
                rows, cols
            )));
        }

        let mut graph = Self::new(rows);
        for ((i, j), &entry) in matrix.indexed_iter() {
            match entry {
                0 => {}
                1 if i == j => return Err(GraphError::SelfLoop(i)),
                1 => {
                    if matrix[[j, i]] != 1 {
                        return Err(GraphError::AsymmetricAdjacency(i, j));
                    }
                    if i < j {
                        graph.add_edge(i, j)?;
                    }
                }
                other => {
                    return Err(GraphError::invalid_input(format!(
                        "adjacency entry ({}, {}) is {}, expected 0 or 1",
                        i, j, other
                    )))
                }
            }
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if at least one edge is present.
    pub fn has_edges(&self) -> bool {
        self.edge_count > 0
    }

    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.adjacency.len()
    }

    pub fn has_vertex(&self, v: usize) -> bool {
        v < self.adjacency.len()
    }

    /// Adds the edge `{u, v}`. Returns false if it was already present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        let inserted = self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Removes the edge `{u, v}`. Returns false if it was not present.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let removed = self.adjacency[u].remove(&v);
        self.adjacency[v].remove(&u);
        if removed {
            self.edge_count -= 1;
        }
        Ok(removed)
    }

    /// Returns true if `u` and `v` are adjacent. Out-of-range ids are never adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |neighbors| neighbors.contains(&v))
    }

    /// Degree of `v`; out-of-range ids report zero.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency.get(v).map_or(0, BTreeSet::len)
    }

    /// Neighbours of `v` in ascending id order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(v).into_iter().flatten().copied()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Every edge once, as `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            neighbors.range(u + 1..).map(move |&v| (u, v))
        })
    }

    /// Removes every edge incident to `v` and returns its former neighbours.
    ///
    /// The vertex keeps its id; only its edges disappear. Cost is proportional
    /// to the degree of `v`.
    pub fn disconnect(&mut self, v: usize) -> Result<Vec<usize>> {
        self.check_vertex(v)?;
        let neighbors = std::mem::take(&mut self.adjacency[v]);
        for &u in &neighbors {
            self.adjacency[u].remove(&v);
        }
        self.edge_count -= neighbors.len();
        Ok(neighbors.into_iter().collect())
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound)
        }
    }
}
