//! Logging setup for the salon backend.
//!
//! Every crate logs through the `tracing` macros; the binary calls
//! [`init_with_level`] once at startup. `RUST_LOG` wins over the configured
//! level when it is set.

use salon_config::AppConfig;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Uses `try_init`, so calling it again (from tests, say) is a no-op.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Reads `log_level` from the configuration; unknown or missing values fall back to INFO.
pub fn level_from_config(config: &AppConfig) -> Level {
    config
        .log_level
        .as_deref()
        .and_then(|raw| raw.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}
