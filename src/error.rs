use thiserror::Error;

/// Errors produced by the graph model and the algorithms built on it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vertex not found")]
    VertexNotFound,

    #[error("self-loop at vertex {0}")]
    SelfLoop(usize),

    #[error("adjacency is not symmetric between vertices {0} and {1}")]
    AsymmetricAdjacency(usize, usize),

    #[error("graph has {vertices} vertices but {weights} weights were given")]
    DimensionMismatch { vertices: usize, weights: usize },

    #[error("weight {weight} of vertex {vertex} is not a finite non-negative number")]
    InvalidWeight { vertex: usize, weight: f64 },

    /// A precondition an algorithm relies on internally did not hold. This
    /// points at a bug in the caller's loop, not at bad input.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl GraphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        GraphError::InvariantViolation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
