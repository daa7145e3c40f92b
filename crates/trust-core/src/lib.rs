//! # trust-core
//!
//! Shared foundation for the trust inference engine:
//! - Errors: one `thiserror` enum per subsystem plus stable error codes
//! - Config: TOML-based, layered resolution (overrides > env > project > defaults)
//! - Tracing: `tracing-subscriber` setup driven by `TRUST_LOG`
//! - Traits: cooperative cancellation
//! - Types: collection aliases used on hot paths

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::{InferenceConfig, RuntimeConfig, TrustConfig};
pub use errors::{ConfigError, GraphError, InferenceError, TrustErrorCode};
pub use traits::{Cancellable, CancellationToken};
