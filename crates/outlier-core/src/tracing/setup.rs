//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Filter used when `OUTLIER_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "outlier_core=info,outlier_analysis=info";

/// Initialize the Outlier tracing/logging system.
///
/// Reads the `OUTLIER_LOG` environment variable for per-crate log levels.
/// Format: `OUTLIER_LOG=outlier_analysis=debug,outlier_core=warn`
///
/// Safe to call more than once; only the first call installs a subscriber.
/// If another global subscriber is already set, this is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = env_filter();

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

/// Filter built from `OUTLIER_LOG`. An unset or unparsable value falls back
/// to `info` for both Outlier crates.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
