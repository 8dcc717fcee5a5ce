//! # Tenancy Telemetry
//!
//! Log setup shared by the workspace binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tenancy_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_logging(&TelemetryConfig::from_env()).expect("Failed to init logging");
//!     // ...
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TENANCY_SERVICE_NAME` | `tenant-addressing` | Service name on every line |
//! | `TENANCY_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `TENANCY_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `TENANCY_JSON_LOGS` | `false` | JSON lines instead of pretty output |

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter `{filter}`: {reason}")]
    Filter { filter: String, reason: String },

    #[error("Failed to install global subscriber: {0}")]
    Init(String),
}

/// Keeps the service span entered for the lifetime of the process.
pub struct LoggingGuard {
    _span: tracing::span::EnteredSpan,
}

/// Build the filter from `config.log_level`.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter {
        filter: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// Output goes to stderr so that tools can keep stdout for their results.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingGuard, TelemetryError> {
    let env_filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match (config.console_output, config.json_logs) {
        (false, _) => registry.try_init(),
        (true, true) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init(),
        (true, false) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_ansi(true),
            )
            .try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    let span = tracing::info_span!("service", name = %config.service_name).entered();
    tracing::debug!(json_logs = config.json_logs, level = %config.log_level, "Logging initialized");

    Ok(LoggingGuard { _span: span })
}
