//! Tracing setup for the `walletview` binary.
//!
//! Logging is off unless `WALLETVIEW_LOG` is set, so stdout stays
//! machine-readable. The variable names either a file path or `stderr`.
//! `RUST_LOG` controls the filter (default `info`).

use std::path::PathBuf;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log destination.
pub const LOG_ENV: &str = "WALLETVIEW_LOG";

const STDERR_TARGET: &str = "stderr";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// A fresh `{path}.{timestamp}.{pid}` file, so concurrent runs never
    /// share a log.
    File(PathBuf),
}

impl LogTarget {
    /// Parse the value of [`LOG_ENV`]. Empty means disabled.
    pub fn from_env_value(value: &str, timestamp: u64, pid: u32) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else if value.eq_ignore_ascii_case(STDERR_TARGET) {
            Some(LogTarget::Stderr)
        } else {
            Some(LogTarget::File(PathBuf::from(format!(
                "{}.{}.{}",
                value, timestamp, pid
            ))))
        }
    }
}

/// Install the global subscriber if [`LOG_ENV`] asks for logging.
pub fn init_tracing() {
    let Ok(value) = std::env::var(LOG_ENV) else {
        return;
    };
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let Some(target) = LogTarget::from_env_value(&value, timestamp, std::process::id()) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Stderr => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_timer(UtcTime::rfc_3339()),
            )
            .init(),
        LogTarget::File(path) => {
            let file = match std::fs::File::create(&path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!(
                        "Warning: Failed to create log file {}: {}",
                        path.display(),
                        err
                    );
                    return;
                }
            };
            registry
                .with(
                    fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(true)
                        .with_timer(UtcTime::rfc_3339()),
                )
                .init();
        }
    }
}
