//! Inference configuration.

use serde::{Deserialize, Serialize};

/// Default cap on the kept-path set per source.
pub const DEFAULT_N_PATHS: usize = 10_000;

/// Configuration for the path expansion algorithm.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InferenceConfig {
    /// Cap K on the kept-path set. 0 = uncapped (exhaustive, unbounded memory).
    /// Default: 10_000.
    pub n_paths: Option<usize>,
    /// Use reversed path weighting instead of forward. Default: false.
    pub reversed: Option<bool>,
    /// Hard limit on paths stored per source. Default: unlimited.
    pub max_paths: Option<usize>,
}

impl InferenceConfig {
    /// Returns the effective path cap, defaulting to 10_000.
    pub fn effective_n_paths(&self) -> usize {
        self.n_paths.unwrap_or(DEFAULT_N_PATHS)
    }

    /// Returns the effective weighting mode, defaulting to forward.
    pub fn effective_reversed(&self) -> bool {
        self.reversed.unwrap_or(false)
    }

    /// Uncapped runs enumerate every simple path.
    pub fn is_uncapped(&self) -> bool {
        self.effective_n_paths() == 0
    }
}
