//! # trust-inference
//!
//! Inferred pairwise trust over a weighted directed graph. Each edge carries
//! direct trust in (0, 1]; for every requested source the engine discovers
//! simple paths best-first, accumulates a weighted trust contribution per
//! destination, and normalizes by the total weight that reached it.
//!
//! Uncapped runs (`n_paths = 0`) enumerate every simple path and can use
//! memory exponential in the graph size. Use a positive cap on large or
//! densely connected graphs.

pub mod engine;
pub mod expansion;
pub mod graph;
pub mod matrix;
pub mod normalize;
pub mod paths;
pub mod queue;

pub use engine::{InferenceEngine, Source};
pub use expansion::{expand_source, Expansion, ExpansionParams, ExpansionStats};
pub use graph::{TrustEdge, TrustGraph, TrustNode};
pub use matrix::TrustMatrix;
pub use queue::DualPriorityQueue;
