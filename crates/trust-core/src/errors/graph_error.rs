//! Input graph errors, raised by validation before any expansion starts.

use super::error_code::{self, TrustErrorCode};

/// Errors describing a trust graph or query that cannot be evaluated.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Edge {edge} ({source_node} -> {target_node}) has invalid trust {value}: must be in (0, 1]")]
    InvalidEdgeTrust {
        edge: usize,
        source_node: usize,
        target_node: usize,
        value: f64,
    },

    #[error("Edge {source_label} -> {target_label} has no trust value")]
    MissingEdgeTrust {
        source_label: String,
        target_label: String,
    },

    #[error("Invalid source vertex {index} (vertex bound {bound})")]
    InvalidSource { index: usize, bound: usize },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Graph parse error: {0}")]
    Parse(String),

    #[error("Failed to read graph file {path}: {message}")]
    Read { path: String, message: String },
}

impl TrustErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSource { .. } => error_code::INVALID_SOURCE,
            _ => error_code::GRAPH_ERROR,
        }
    }
}
