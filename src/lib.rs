//! Weighted Feedback Vertex Set by the primal-dual method.
//!
//! [`cs::graph`] holds the mutable graph model, leaf pruning, the
//! chain-contracting short cycle search and forest checks;
//! [`cs::approx`] holds the primal-dual driver built on them.

pub mod cs;
pub mod error;

pub use cs::{approx, graph};
pub use error::{GraphError, Result};
