//! Structured logging and tracing for costcheck
//!
//! Log output never goes to stdout, which carries the report. The console
//! layer writes to stderr; an optional daily-rotated file layer writes through
//! a non-blocking appender whose guard lives for the whole process.

use crate::config::LoggingConfig;
use crate::error::{CostcheckError, Result};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Once;
use tracing::{Level, Subscriber, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod level;
mod structured;

pub use level::parse_log_level;
pub use structured::{LogContext, StructuredLogger, get_logger, get_logger_with_context};

// Keep the non-blocking worker guard alive for the entire process lifetime
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();
static INIT_ONCE: Once = Once::new();
static INIT_ERROR: OnceCell<String> = OnceCell::new();

/// Initialize logging system based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    INIT_ONCE.call_once(|| {
        if let Err(e) = install_subscriber(config) {
            let _ = INIT_ERROR.set(e.to_string());
        }
    });

    if let Some(err) = INIT_ERROR.get() {
        return Err(CostcheckError::config(err.clone()));
    }
    Ok(())
}

fn install_subscriber(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = build_env_filter(level);

    let console_layer = config.console_output.then(|| {
        let base = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false);
        if config.json_format {
            base.json().boxed()
        } else {
            base.boxed()
        }
    });

    let file_layer = match config.file.as_deref() {
        Some(path) => Some(build_file_layer(path, config)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CostcheckError::config(format!("Failed to install log subscriber: {}", e)))?;

    info!(
        "Logging initialized - level: {:?}, console: {}, file: {}",
        level,
        config.console_output,
        config.file.as_deref().unwrap_or("none")
    );
    Ok(())
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("costcheck={}", level).into())
}

fn build_file_layer<S>(
    path: &str,
    config: &LoggingConfig,
) -> Result<Box<dyn Layer<S> + Send + Sync + 'static>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // A path with an extension names a file; log into its parent directory
    let p = Path::new(path);
    let dir = if p.extension().is_some() {
        p.parent().unwrap_or(p)
    } else {
        p
    };

    let appender = rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix("costcheck")
        .filename_suffix("log")
        .max_log_files(config.backup_count.max(1) as usize)
        .build(dir)
        .map_err(|e| CostcheckError::io(format!("Failed to create log file appender: {}", e)))?;

    let (writer, guard) = non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    let base = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);
    Ok(if config.json_format {
        base.json().boxed()
    } else {
        base.boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        init_logging(&config).ok();
        // A second call must not try to install another subscriber
        init_logging(&config).ok();
        get_logger("test_component").info("Test info message");
    }

    #[test]
    fn test_file_layer_creates_directory_appender() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("costcheck.log").to_string_lossy().to_string()),
            ..LoggingConfig::default()
        };
        let layer =
            build_file_layer::<tracing_subscriber::Registry>(config.file.as_deref().unwrap(), &config);
        assert!(layer.is_ok());
    }
}
