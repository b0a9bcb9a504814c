pub mod approx;
pub mod graph;

// Re-export all modules
pub use approx::*;
pub use graph::*;
