//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Periscope tracing/logging system.
///
/// Reads the `PERISCOPE_LOG` environment variable for per-subsystem log
/// levels, e.g. `PERISCOPE_LOG=periscope_engine=debug,periscope_store=warn`.
/// Falls back to `periscope=info` if unset or invalid.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PERISCOPE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("periscope=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
