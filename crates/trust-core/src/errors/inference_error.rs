//! Inference run errors.

use super::error_code::{self, TrustErrorCode};
use super::{ConfigError, GraphError};

/// Errors that can occur during an inference run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Path store for source {source_node} exceeded {limit} paths")]
    PathLimitExceeded { source_node: usize, limit: usize },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Inference cancelled")]
    Cancelled,
}

impl TrustErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::PathLimitExceeded { .. } => error_code::PATH_LIMIT,
            Self::ThreadPool(_) => error_code::INFERENCE_ERROR,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
