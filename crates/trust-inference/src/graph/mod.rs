//! Trust graph: petgraph `StableGraph` wrapper, JSON edge-list loader, input validation.

pub mod loader;
pub mod trust_graph;
pub mod validation;

pub use trust_graph::{TrustEdge, TrustGraph, TrustNode, TrustStableGraph};
pub use validation::{validate_graph, validate_source};
