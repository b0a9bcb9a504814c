use bitvec::prelude::*;

use super::simple_graph::SimpleGraph;
use crate::error::{GraphError, Result};

/// Disjoint-set forest with union by rank and path compression.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut x = x;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`. Returns false if they were already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        match self.rank[x_root].cmp(&self.rank[y_root]) {
            std::cmp::Ordering::Less => self.parent[x_root] = y_root,
            std::cmp::Ordering::Greater => self.parent[y_root] = x_root,
            std::cmp::Ordering::Equal => {
                self.parent[y_root] = x_root;
                self.rank[x_root] += 1;
            }
        }
        true
    }
}

/// Returns true if `graph` has no cycle.
///
/// # Complexity
/// * Time: O(E α(V))
/// * Space: O(V)
pub fn is_forest(graph: &SimpleGraph) -> bool {
    let mut components = UnionFind::new(graph.vertex_count());
    graph.edges().all(|(u, v)| components.union(u, v))
}

/// Returns true if deleting `set` from `graph` leaves a forest.
///
/// The graph itself is not modified. Repeated ids in `set` are harmless.
///
/// # Errors
/// * `VertexNotFound` if `set` names a vertex outside the graph
///
/// # Examples
/// ```
/// use fvs_approx::cs::graph::{forest, SimpleGraph};
///
/// let triangle = SimpleGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert!(forest::is_feedback_vertex_set(&triangle, &[1]).unwrap());
/// assert!(!forest::is_feedback_vertex_set(&triangle, &[]).unwrap());
/// ```
pub fn is_feedback_vertex_set(graph: &SimpleGraph, set: &[usize]) -> Result<bool> {
    let mut removed = bitvec![0; graph.vertex_count()];
    for &v in set {
        if !graph.has_vertex(v) {
            return Err(GraphError::VertexNotFound);
        }
        removed.set(v, true);
    }

    let mut components = UnionFind::new(graph.vertex_count());
    Ok(graph
        .edges()
        .filter(|&(u, v)| !removed[u] && !removed[v])
        .all(|(u, v)| components.union(u, v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert_ne!(uf.find(0), uf.find(2));
        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
    }

    #[test]
    fn test_tree_is_forest() {
        let graph = SimpleGraph::from_edges(6, &[(0, 1), (0, 2), (2, 3), (4, 5)]).unwrap();
        assert!(is_forest(&graph));
        assert!(is_forest(&SimpleGraph::new(0)));
    }

    #[test]
    fn test_cycle_is_not_forest() {
        let graph = SimpleGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 1), (3, 4)]).unwrap();
        assert!(!is_forest(&graph));
    }

    #[test]
    fn test_feedback_vertex_set_two_triangles() {
        let edges = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)];
        let graph = SimpleGraph::from_edges(6, &edges).unwrap();
        assert!(is_feedback_vertex_set(&graph, &[0, 4]).unwrap());
        assert!(is_feedback_vertex_set(&graph, &[2, 3]).unwrap());
        assert!(!is_feedback_vertex_set(&graph, &[2]).unwrap());
        assert!(is_feedback_vertex_set(&graph, &[0, 0, 4]).unwrap());
    }

    #[test]
    fn test_feedback_vertex_set_rejects_unknown_vertex() {
        let graph = SimpleGraph::new(2);
        assert!(matches!(
            is_feedback_vertex_set(&graph, &[3]),
            Err(GraphError::VertexNotFound)
        ));
    }
}
