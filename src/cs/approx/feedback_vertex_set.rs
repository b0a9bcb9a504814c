use log::debug;
use num_traits::Float;
use std::fmt::Debug;

use crate::cs::graph::leaf_pruning::prune;
use crate::cs::graph::short_cycle::{find_cycle, Cycle};
use crate::cs::graph::SimpleGraph;
use crate::error::{GraphError, Result};

/// Which vertices of a cycle leave the graph once its duals have grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Remove only the first vertex of the cycle with the least headroom.
    #[default]
    SingleTight,
    /// Remove every vertex of the cycle whose headroom dropped to within the
    /// configured tolerance. The logarithmic bound is only proven for
    /// [`RemovalPolicy::SingleTight`].
    AllTight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FvsConfig {
    pub removal: RemovalPolicy,
    /// Headroom at or below this counts as tight under [`RemovalPolicy::AllTight`].
    pub tolerance: f64,
}

impl Default for FvsConfig {
    fn default() -> Self {
        Self {
            removal: RemovalPolicy::SingleTight,
            tolerance: 1e-9,
        }
    }
}

/// One round of dual growth.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimalDualStep<W> {
    /// The cycle whose duals were raised.
    pub cycle: Cycle,
    /// How much every dual on the cycle grew.
    pub delta: W,
    /// Vertices that went tight and were removed, in cycle order.
    pub tight: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FvsSolution<W> {
    /// The feedback vertex set in the order the vertices went tight.
    pub vertices: Vec<usize>,
    /// Total weight of `vertices`.
    pub weight: W,
    /// Final dual value of every vertex.
    pub duals: Vec<W>,
    /// Sum of the per-cycle increases; a lower bound on the optimum.
    pub dual_bound: W,
    pub iterations: usize,
}

/// The primal-dual loop for weighted Feedback Vertex Set, one cycle at a time.
///
/// Owns a working copy of the graph. Each step prunes leaves, finds a short
/// cycle, raises the dual of every vertex on it by the smallest headroom on
/// the cycle, and removes the vertex that went tight. Iterating yields each
/// step until the working graph is a forest.
///
/// # Examples
/// ```
/// use fvs_approx::cs::approx::feedback_vertex_set::{FvsConfig, PrimalDual};
/// use fvs_approx::cs::graph::SimpleGraph;
///
/// let ring = SimpleGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let weights = [3.0, 2.0, 1.0, 9.0];
///
/// let mut driver = PrimalDual::new(&ring, &weights, FvsConfig::default()).unwrap();
/// let step = driver.next().unwrap().unwrap();
/// assert_eq!(step.delta, 1.0);
/// assert_eq!(step.tight, vec![2]);
/// assert!(driver.next().is_none());
/// assert_eq!(driver.solution(), &[2]);
/// ```
#[derive(Debug, Clone)]
pub struct PrimalDual<'w, W> {
    graph: SimpleGraph,
    weights: &'w [W],
    duals: Vec<W>,
    solution: Vec<usize>,
    dual_bound: W,
    iterations: usize,
    removal: RemovalPolicy,
    tolerance: W,
    finished: bool,
}

impl<'w, W> PrimalDual<'w, W>
where
    W: Float + Debug,
{
    /// Validates the instance and prepares the loop. `graph` is copied, never
    /// modified.
    ///
    /// # Errors
    /// * `DimensionMismatch` if there is not exactly one weight per vertex
    /// * `InvalidWeight` if a weight is negative, NaN or infinite
    /// * `InvalidInput` if the tolerance is negative or not finite
    pub fn new(graph: &SimpleGraph, weights: &'w [W], config: FvsConfig) -> Result<Self> {
        validate_weights(graph, weights)?;
        if !(config.tolerance.is_finite() && config.tolerance >= 0.0) {
            return Err(GraphError::invalid_input(
                "tolerance must be a finite non-negative number",
            ));
        }
        let tolerance = num_traits::cast(config.tolerance).unwrap_or_else(W::zero);

        Ok(Self {
            graph: graph.clone(),
            weights,
            duals: vec![W::zero(); weights.len()],
            solution: Vec::new(),
            dual_bound: W::zero(),
            iterations: 0,
            removal: config.removal,
            tolerance,
            finished: false,
        })
    }

    /// Runs one round. Returns `Ok(None)` once no cycle is left.
    ///
    /// An error means the cycle search found the working graph in a state the
    /// loop should never produce; the driver is finished afterwards.
    pub fn step(&mut self) -> Result<Option<PrimalDualStep<W>>> {
        if self.finished {
            return Ok(None);
        }
        let outcome = self.advance();
        if !matches!(outcome, Ok(Some(_))) {
            self.finished = true;
        }
        outcome
    }

    fn advance(&mut self) -> Result<Option<PrimalDualStep<W>>> {
        if !prune(&mut self.graph) {
            debug!(
                "graph is acyclic after {} iterations, {} vertices selected",
                self.iterations,
                self.solution.len()
            );
            return Ok(None);
        }

        let cycle = find_cycle(&self.graph)?;

        // First vertex in cycle order with the least headroom.
        let mut first_tight = cycle.as_slice()[0];
        let mut delta = self.headroom(first_tight);
        for &v in cycle.iter().skip(1) {
            let headroom = self.headroom(v);
            if headroom < delta {
                first_tight = v;
                delta = headroom;
            }
        }

        for &v in &cycle {
            self.duals[v] = (self.duals[v] + delta).min(self.weights[v]);
        }
        self.duals[first_tight] = self.weights[first_tight];

        let tight: Vec<usize> = match self.removal {
            RemovalPolicy::SingleTight => vec![first_tight],
            RemovalPolicy::AllTight => cycle
                .iter()
                .copied()
                .filter(|&v| self.headroom(v) <= self.tolerance)
                .collect(),
        };

        for &v in &tight {
            self.duals[v] = self.weights[v];
            self.graph.disconnect(v)?;
            self.solution.push(v);
        }
        self.dual_bound = self.dual_bound + delta;
        self.iterations += 1;

        debug!(
            "iteration {}: cycle of {} vertices, delta {:?}, removed {:?}",
            self.iterations,
            cycle.len(),
            delta,
            tight
        );

        Ok(Some(PrimalDualStep {
            cycle,
            delta,
            tight,
        }))
    }

    fn headroom(&self, v: usize) -> W {
        self.weights[v] - self.duals[v]
    }

    /// Runs every remaining round and returns the result.
    pub fn run(mut self) -> Result<FvsSolution<W>> {
        while self.step()?.is_some() {}
        self.into_solution()
    }

    /// The result so far. Only a feedback vertex set once the loop finished.
    pub fn into_solution(self) -> Result<FvsSolution<W>> {
        let weight = total_weight(self.weights, &self.solution)?;
        Ok(FvsSolution {
            vertices: self.solution,
            weight,
            duals: self.duals,
            dual_bound: self.dual_bound,
            iterations: self.iterations,
        })
    }

    pub fn duals(&self) -> &[W] {
        &self.duals
    }

    pub fn solution(&self) -> &[usize] {
        &self.solution
    }

    pub fn dual_bound(&self) -> W {
        self.dual_bound
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The working graph with every selected vertex disconnected.
    pub fn graph(&self) -> &SimpleGraph {
        &self.graph
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<W> Iterator for PrimalDual<'_, W>
where
    W: Float + Debug,
{
    type Item = Result<PrimalDualStep<W>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

/// Computes a low-weight feedback vertex set with the primal-dual method.
///
/// The returned set is within a factor 4⌈log n⌉ of the optimum under
/// [`RemovalPolicy::SingleTight`].
///
/// # Arguments
/// * `graph` - The undirected graph; it is not modified
/// * `weights` - One finite non-negative weight per vertex
/// * `config` - Removal policy and tightness tolerance
///
/// # Returns
/// * `Ok(solution)` - The selected vertices in discovery order with their weight and duals
/// * `Err(GraphError)` - If the weights are malformed or an internal invariant broke
///
/// # Complexity
/// * Time: O(V (V + E)), at most V rounds of linear work
/// * Space: O(V + E) for the working copy
pub fn solve<W>(graph: &SimpleGraph, weights: &[W], config: &FvsConfig) -> Result<FvsSolution<W>>
where
    W: Float + Debug,
{
    PrimalDual::new(graph, weights, config.clone())?.run()
}

/// The vertices of a low-weight feedback vertex set, in the order they were
/// selected. Uses the default configuration.
///
/// # Examples
/// ```
/// use fvs_approx::cs::approx::feedback_vertex_set::feedback_vertex_set;
/// use fvs_approx::cs::graph::SimpleGraph;
///
/// let triangles = SimpleGraph::from_edges(
///     6,
///     &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
/// )
/// .unwrap();
/// let weights = [5.0, 3.0, 8.0, 2.0, 9.0, 4.0];
///
/// assert_eq!(feedback_vertex_set(&triangles, &weights).unwrap(), vec![1, 3]);
/// ```
pub fn feedback_vertex_set<W>(graph: &SimpleGraph, weights: &[W]) -> Result<Vec<usize>>
where
    W: Float + Debug,
{
    Ok(solve(graph, weights, &FvsConfig::default())?.vertices)
}

/// Sums the weights of `set`.
///
/// # Errors
/// * `VertexNotFound` if `set` names a vertex without a weight
pub fn total_weight<W: Float>(weights: &[W], set: &[usize]) -> Result<W> {
    set.iter().try_fold(W::zero(), |acc, &v| {
        weights
            .get(v)
            .map(|&w| acc + w)
            .ok_or(GraphError::VertexNotFound)
    })
}

fn validate_weights<W: Float>(graph: &SimpleGraph, weights: &[W]) -> Result<()> {
    if weights.len() != graph.vertex_count() {
        return Err(GraphError::DimensionMismatch {
            vertices: graph.vertex_count(),
            weights: weights.len(),
        });
    }
    for (vertex, &weight) in weights.iter().enumerate() {
        if !(weight.is_finite() && weight >= W::zero()) {
            return Err(GraphError::InvalidWeight {
                vertex,
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}
