pub mod forest;
pub mod leaf_pruning;
pub mod short_cycle;
pub mod simple_graph;

// Re-export public types and functions
pub use forest::{is_feedback_vertex_set, is_forest, UnionFind};
pub use leaf_pruning::{prune, prune_leaves};
pub use short_cycle::{find_cycle, Cycle};
pub use simple_graph::SimpleGraph;
