//! Configuration system for the trust engine.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod inference_config;
pub mod runtime_config;
pub mod trust_config;

pub use inference_config::InferenceConfig;
pub use runtime_config::RuntimeConfig;
pub use trust_config::{ConfigOverrides, TrustConfig};
