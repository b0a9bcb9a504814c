pub mod feedback_vertex_set;

// Re-export public types and functions
pub use feedback_vertex_set::{
    feedback_vertex_set, solve, total_weight, FvsConfig, FvsSolution, PrimalDual,
    PrimalDualStep, RemovalPolicy,
};
