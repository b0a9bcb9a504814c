//! # Leaf Pruning
//!
//! A vertex of degree one cannot lie on a cycle, and neither can anything
//! that only hangs off the rest of the graph through such vertices. This
//! module strips those vertices until every remaining vertex has degree zero
//! or at least two.
//!
//! Removal is done by disconnecting: the vertex keeps its id and simply ends
//! up isolated. Disconnecting a leaf can demote its neighbour to a leaf, so
//! the pass runs on a worklist until it reaches a fixed point.
//!
//! ## Example
//!
//! ```rust
//! use fvs_approx::cs::graph::{leaf_pruning, SimpleGraph};
//!
//! // A triangle with a two-vertex tail hanging off vertex 0.
//! let mut graph =
//!     SimpleGraph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4)]).unwrap();
//!
//! assert!(leaf_pruning::prune(&mut graph));
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.degree(3), 0);
//! ```

use log::debug;

use super::simple_graph::SimpleGraph;

/// Disconnects degree-1 vertices until none remain.
///
/// Returns the number of vertices that were disconnected.
///
/// # Complexity
/// * Time: O(V + E) for the initial scan plus the removed edges
/// * Space: O(V)
pub fn prune_leaves(graph: &mut SimpleGraph) -> usize {
    let mut worklist: Vec<usize> = graph.vertices().filter(|&v| graph.degree(v) == 1).collect();
    let mut removed = 0;

    while let Some(leaf) = worklist.pop() {
        // Its only neighbour may have been pruned since it was queued.
        if graph.degree(leaf) != 1 {
            continue;
        }
        // `leaf` is in range, so disconnecting cannot fail.
        let Ok(former) = graph.disconnect(leaf) else {
            continue;
        };
        removed += 1;
        for neighbor in former {
            if graph.degree(neighbor) == 1 {
                worklist.push(neighbor);
            }
        }
    }

    if removed > 0 {
        debug!(
            "pruned {} leaves, {} edges remain",
            removed,
            graph.edge_count()
        );
    }
    removed
}

/// Prunes leaves to a fixed point and reports whether any edge survived.
///
/// An edge survives exactly when the graph still contains a cycle.
pub fn prune(graph: &mut SimpleGraph) -> bool {
    prune_leaves(graph);
    graph.has_edges()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_path_removes_everything() {
        let mut graph = SimpleGraph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert!(!prune(&mut graph));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_prune_tree_removes_everything() {
        let edges = [(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (3, 6), (6, 7)];
        let mut graph = SimpleGraph::from_edges(8, &edges).unwrap();
        assert!(!prune(&mut graph));
        assert!(graph.vertices().all(|v| graph.degree(v) == 0));
    }

    #[test]
    fn test_prune_keeps_cycle() {
        let mut graph = SimpleGraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (0, 3)]).unwrap();
        assert!(prune(&mut graph));
        assert_eq!(graph.degree(3), 0);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.vertices().all(|v| graph.degree(v) != 1));
    }

    #[test]
    fn test_prune_cascades_through_long_tail() {
        // Ring 0-1-2, then a long tail 2-3-4-...-9.
        let mut edges = vec![(0, 1), (1, 2), (2, 0)];
        edges.extend((2..9).map(|v| (v, v + 1)));
        let mut graph = SimpleGraph::from_edges(10, &edges).unwrap();

        assert_eq!(prune_leaves(&mut graph), 7);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(2), 2);
    }

    #[test]
    fn test_prune_is_idempotent() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (0, 6)];
        let mut graph = SimpleGraph::from_edges(7, &edges).unwrap();
        assert!(prune(&mut graph));
        let after_first = graph.clone();

        assert_eq!(prune_leaves(&mut graph), 0);
        assert_eq!(graph, after_first);
    }

    #[test]
    fn test_prune_empty_and_edgeless() {
        let mut empty = SimpleGraph::new(0);
        assert!(!prune(&mut empty));

        let mut isolated = SimpleGraph::new(3);
        assert!(!prune(&mut isolated));
        assert_eq!(prune_leaves(&mut isolated), 0);
    }

    #[test]
    fn test_prune_single_edge() {
        let mut graph = SimpleGraph::from_edges(2, &[(0, 1)]).unwrap();
        assert_eq!(prune_leaves(&mut graph), 1);
        assert!(!graph.has_edges());
    }
}
