//! Runtime (worker pool) configuration.

use serde::{Deserialize, Serialize};

/// Configuration for how inference work is scheduled.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Worker threads for the per-source fan-out. Default: rayon global pool.
    pub threads: Option<usize>,
    /// Node count above which uncapped runs log a warning. Default: 1_000.
    pub uncapped_warn_nodes: Option<usize>,
}

impl RuntimeConfig {
    /// Returns the effective warning threshold, defaulting to 1_000.
    pub fn effective_uncapped_warn_nodes(&self) -> usize {
        self.uncapped_warn_nodes.unwrap_or(1_000)
    }
}
