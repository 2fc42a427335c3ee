//! Structured logging setup using the `tracing` ecosystem.
//!
//! Provides console output, optional daily-rotated file output, and
//! configurable log levels.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::HueResult;

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize the global tracing subscriber from a [`LoggingConfig`].
///
/// Sets up a compact console layer (stderr) and, when `directory` is
/// non-empty, a daily-rotated file layer in either human-readable or JSON
/// format. The level is parsed as an `EnvFilter` directive and falls back
/// to `info` when invalid.
pub fn init_logging(config: &LoggingConfig) -> HueResult<LogGuard> {
    let env_filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .compact();

    if config.directory.is_empty() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
        return Ok(LogGuard { _guard: None });
    }

    let log_dir = Path::new(&config.directory);
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, "hue.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    if config.json_output {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    }

    tracing::info!(
        "logging initialized at level={}, dir={}",
        config.level,
        config.directory
    );

    Ok(LogGuard { _guard: Some(guard) })
}

/// Initialize a minimal console-only logger for testing or simple embedders.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logging_does_not_panic() {
        // Subsequent calls are no-ops.
        init_console_logging("debug");
        init_console_logging("not-a-level");
    }
}
