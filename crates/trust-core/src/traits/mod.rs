//! Traits shared by long-running operations.

pub mod cancellation;

pub use cancellation::{Cancellable, CancellationToken};
