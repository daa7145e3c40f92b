//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "TRUST_LOG";

/// Filter used when `TRUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "trust_inference=info,trust_core=info";

/// Initialize the tracing/logging system.
///
/// Reads `TRUST_LOG` for per-module log levels, e.g.
/// `TRUST_LOG=trust_inference::expansion=debug,trust_inference=info`.
///
/// Idempotent. If another global subscriber is already installed, this is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
