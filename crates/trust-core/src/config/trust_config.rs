//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{InferenceConfig, RuntimeConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "trust.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TRUST_*`)
/// 3. Project config (`trust.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TrustConfig {
    pub inference: InferenceConfig,
    pub runtime: RuntimeConfig,
}

/// Explicit override values, typically supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub n_paths: Option<usize>,
    pub reversed: Option<bool>,
    pub max_paths: Option<usize>,
    pub threads: Option<usize>,
}

impl TrustConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        if let Err(e) = Self::validate(&config) {
            warn!(error = %e, "config validation failed");
            return Err(e);
        }

        debug!(
            n_paths = config.inference.effective_n_paths(),
            reversed = config.inference.effective_reversed(),
            threads = ?config.runtime.threads,
            "config resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TrustConfig) -> Result<(), ConfigError> {
        if config.runtime.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "runtime.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.inference.max_paths == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "inference.max_paths".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TrustConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TrustConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base` wherever `other` has a `Some` value.
    fn merge(base: &mut TrustConfig, other: &TrustConfig) {
        if other.inference.n_paths.is_some() {
            base.inference.n_paths = other.inference.n_paths;
        }
        if other.inference.reversed.is_some() {
            base.inference.reversed = other.inference.reversed;
        }
        if other.inference.max_paths.is_some() {
            base.inference.max_paths = other.inference.max_paths;
        }
        if other.runtime.threads.is_some() {
            base.runtime.threads = other.runtime.threads;
        }
        if other.runtime.uncapped_warn_nodes.is_some() {
            base.runtime.uncapped_warn_nodes = other.runtime.uncapped_warn_nodes;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TRUST_N_PATHS`, `TRUST_REVERSED`, `TRUST_MAX_PATHS`, `TRUST_THREADS`.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut TrustConfig) {
        if let Ok(val) = std::env::var("TRUST_N_PATHS") {
            if let Ok(v) = val.parse::<usize>() {
                config.inference.n_paths = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRUST_REVERSED") {
            if let Ok(v) = val.parse::<bool>() {
                config.inference.reversed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRUST_MAX_PATHS") {
            if let Ok(v) = val.parse::<usize>() {
                config.inference.max_paths = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRUST_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.runtime.threads = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut TrustConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.n_paths {
            config.inference.n_paths = Some(v);
        }
        if let Some(v) = overrides.reversed {
            config.inference.reversed = Some(v);
        }
        if let Some(v) = overrides.max_paths {
            config.inference.max_paths = Some(v);
        }
        if let Some(v) = overrides.threads {
            config.runtime.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
