//! Tracing initialization.
//! `tracing` crate with `EnvFilter`, configured through `ENVSWEEP_LOG`.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `ENVSWEEP_LOG` environment variable for log levels, e.g.
/// `ENVSWEEP_LOG=envsweep_core=debug`. Falls back to `envsweep=info`
/// when unset or invalid.
///
/// Idempotent - calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ENVSWEEP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("envsweep=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
