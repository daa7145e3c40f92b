//! Error handling for the trust engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod inference_error;

pub use config_error::ConfigError;
pub use error_code::TrustErrorCode;
pub use graph_error::GraphError;
pub use inference_error::InferenceError;
