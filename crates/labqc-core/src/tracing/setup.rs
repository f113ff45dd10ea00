//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::LOG_ENV_VAR;
use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the LabQC tracing/logging system.
///
/// Reads the `LABQC_LOG` environment variable for per-crate log levels.
/// Format: `LABQC_LOG=labqc_westgard=debug,labqc_core=warn`
///
/// Falls back to the configured `observability.log_level` when `LABQC_LOG`
/// is not set or is invalid.
///
/// Idempotent; only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    let fallback = config.log_level.clone();
    let json = config.json;
    INIT.call_once(move || {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(fallback));
        if json {
            install_json(filter);
        } else {
            install(filter);
        }
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(move || install(filter));
}

fn install(filter: EnvFilter) {
    // try_init: another subscriber may already be installed by the host.
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
}

fn install_json(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().json().with_current_span(true))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing_with_filter("labqc_core=debug");
        init_tracing(&ObservabilityConfig::default());
        tracing::info!("tracing initialised twice without panicking");
    }
}
