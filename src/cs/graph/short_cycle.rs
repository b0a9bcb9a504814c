//! # Short Cycle Search with Chain Contraction
//!
//! Finds a simple cycle in a graph whose vertices all have degree zero or at
//! least two. The cycle is "short" in the sense that matters for the
//! feedback vertex set approximation: it passes through at most O(log n)
//! vertices of degree three or more.
//!
//! ## Overview
//!
//! Two regimes are handled separately:
//!
//! 1. **Every edge sits on a ring.** When the maximum degree is two, each
//!    component is a simple cycle, so walking forward from any vertex of
//!    degree two returns to it.
//! 2. **Branching exists.** A breadth-first search is rooted at a vertex of
//!    degree at least three. Runs of degree-2 vertices are followed to their
//!    far end before anything is queued, so the search is really a BFS over
//!    the graph in which each such run is one contracted edge. The first
//!    time a run ends at a vertex the search has already reached, the two
//!    breadcrumb trails are spliced into a cycle.
//!
//! In a graph of minimum degree three the contracted BFS tree doubles in
//! size per level, so it must close a cycle within O(log n) levels; that
//! bound is what the primal-dual analysis pays for.
//!
//! ## Example
//!
//! ```rust
//! use fvs_approx::cs::graph::{short_cycle, SimpleGraph};
//!
//! let graph = SimpleGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let cycle = short_cycle::find_cycle(&graph).unwrap();
//!
//! assert_eq!(cycle.as_slice(), &[0, 1, 2, 3]);
//! assert!(cycle.is_cycle_in(&graph));
//! ```

use bitvec::prelude::*;
use log::trace;
use std::collections::{HashSet, VecDeque};

use super::simple_graph::SimpleGraph;
use crate::error::{GraphError, Result};

/// A simple cycle given as its vertices in traversal order; the last vertex
/// is adjacent to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle(Vec<usize>);

impl Cycle {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.0.contains(&v)
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Checks that this is a simple closed walk of length at least three
    /// using only edges present in `graph`.
    pub fn is_cycle_in(&self, graph: &SimpleGraph) -> bool {
        let n = self.0.len();
        if n < 3 {
            return false;
        }
        let distinct: HashSet<_> = self.0.iter().collect();
        distinct.len() == n
            && (0..n).all(|i| graph.has_edge(self.0[i], self.0[(i + 1) % n]))
    }
}

impl<'a> IntoIterator for &'a Cycle {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Where the search came from when it first reached a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Breadcrumb {
    Unvisited,
    Root,
    From(usize),
}

/// Finds a cycle through few vertices of degree three or more.
///
/// The search is deterministic: traversals start at the lowest eligible id
/// and neighbours are tried in ascending id order.
///
/// # Arguments
/// * `graph` - A graph with at least one edge and no vertex of degree one,
///   e.g. the output of [`super::leaf_pruning::prune`]
///
/// # Returns
/// * `Ok(cycle)` - A simple cycle of length at least three
/// * `Err(GraphError::InvariantViolation)` - If the precondition does not hold
///
/// # Complexity
/// * Time: O(V + E)
/// * Space: O(V)
pub fn find_cycle(graph: &SimpleGraph) -> Result<Cycle> {
    if !graph.has_edges() {
        return Err(GraphError::invariant(
            "cycle search requires at least one edge",
        ));
    }
    if let Some(leaf) = graph.vertices().find(|&v| graph.degree(v) == 1) {
        return Err(GraphError::invariant(format!(
            "cycle search requires minimum degree two, vertex {} is a leaf",
            leaf
        )));
    }

    let cycle = if graph.max_degree() == 2 {
        ring_cycle(graph)?
    } else {
        contracted_bfs_cycle(graph)?
    };

    debug_assert!(cycle.is_cycle_in(graph));
    trace!("found cycle of length {}: {:?}", cycle.len(), cycle.as_slice());
    Ok(cycle)
}

/// Walks the ring through the lowest vertex of degree two.
fn ring_cycle(graph: &SimpleGraph) -> Result<Cycle> {
    let start = graph
        .vertices()
        .find(|&v| graph.degree(v) == 2)
        .ok_or_else(|| GraphError::invariant("no vertex of degree two to start a ring walk"))?;

    let mut cycle = vec![start];
    let mut prev = start;
    let mut current = graph
        .neighbors(start)
        .next()
        .ok_or_else(|| GraphError::invariant("ring start has no neighbour"))?;

    while current != start {
        if cycle.len() > graph.vertex_count() {
            return Err(GraphError::invariant("ring walk did not return to its start"));
        }
        cycle.push(current);
        let next = step_along_chain(graph, current, prev)?;
        prev = current;
        current = next;
    }

    Ok(Cycle(cycle))
}

/// Breadth-first search over the graph with degree-2 chains contracted.
fn contracted_bfs_cycle(graph: &SimpleGraph) -> Result<Cycle> {
    let root = graph
        .vertices()
        .find(|&v| graph.degree(v) >= 3)
        .ok_or_else(|| GraphError::invariant("no branching vertex to root the search"))?;

    let mut crumbs = vec![Breadcrumb::Unvisited; graph.vertex_count()];
    let mut queue = VecDeque::new();
    crumbs[root] = Breadcrumb::Root;
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        let came_from = match crumbs[current] {
            Breadcrumb::From(p) => Some(p),
            _ => None,
        };

        for neighbor in graph.neighbors(current) {
            if Some(neighbor) == came_from {
                continue;
            }

            // Follow the chain of degree-2 vertices to its far end.
            let mut prev = current;
            let mut end = neighbor;
            while graph.degree(end) == 2 {
                crumbs[end] = Breadcrumb::From(prev);
                let next = step_along_chain(graph, end, prev)?;
                prev = end;
                end = next;
            }

            if crumbs[end] != Breadcrumb::Unvisited {
                trace!(
                    "chain from {} closed at {} via {}",
                    current,
                    end,
                    prev
                );
                return splice(&crumbs, end, prev);
            }
            crumbs[end] = Breadcrumb::From(prev);
            queue.push_back(end);
        }
    }

    Err(GraphError::invariant(
        "contracted search exhausted the graph without closing a cycle",
    ))
}

/// The neighbour of degree-2 vertex `v` that is not `prev`.
fn step_along_chain(graph: &SimpleGraph, v: usize, prev: usize) -> Result<usize> {
    graph.neighbors(v).find(|&u| u != prev).ok_or_else(|| {
        GraphError::invariant(format!("vertex {} has no way forward from {}", v, prev))
    })
}

/// Joins the breadcrumb trails of `meet` and `end` into one cycle.
///
/// `end` is adjacent to `meet`. Walks from `meet` back to the root marking
/// every vertex, then from `end` until the first marked vertex, which is the
/// common ancestor. The cycle runs `meet .. ancestor` and then the `end`
/// trail in reverse, closing on the `end`-`meet` edge.
fn splice(crumbs: &[Breadcrumb], meet: usize, end: usize) -> Result<Cycle> {
    let mut on_meet_trail = bitvec![0; crumbs.len()];
    let mut meet_trail = Vec::new();
    let mut v = meet;
    loop {
        on_meet_trail.set(v, true);
        meet_trail.push(v);
        match crumbs[v] {
            Breadcrumb::From(p) => v = p,
            Breadcrumb::Root => break,
            Breadcrumb::Unvisited => {
                return Err(GraphError::invariant(format!(
                    "vertex {} on a breadcrumb trail was never visited",
                    v
                )))
            }
        }
    }

    let mut end_trail = Vec::new();
    let mut v = end;
    while !on_meet_trail[v] {
        end_trail.push(v);
        v = match crumbs[v] {
            Breadcrumb::From(p) => p,
            _ => {
                return Err(GraphError::invariant(format!(
                    "trail from {} reached the root without meeting the trail from {}",
                    end, meet
                )))
            }
        };
    }
    let ancestor = v;

    let mut cycle: Vec<usize> = meet_trail
        .iter()
        .copied()
        .take_while(|&u| u != ancestor)
        .collect();
    cycle.push(ancestor);
    cycle.extend(end_trail.into_iter().rev());

    if cycle.len() < 3 {
        return Err(GraphError::invariant(format!(
            "spliced walk {:?} is too short to be a cycle",
            cycle
        )));
    }
    Ok(Cycle(cycle))
}
