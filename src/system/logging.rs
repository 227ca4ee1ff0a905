//! Logging system initialization
//!
//! Builds the tracing subscriber from the `[logging]` section. In TUI mode the
//! terminal belongs to the editor, so console output is dropped unless a log
//! file is configured.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{FlowError, Result};

const DEFAULT_LOG_FILE_NAME: &str = "chatflow.log";

fn file_writer(log_file: &str, config: &LoggingConfig) -> Result<Box<dyn io::Write + Send + Sync>> {
    let path = Path::new(log_file);
    if config.enable_rotation {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_FILE_NAME);
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| {
                FlowError::file_operation(format!("Failed to create rolling log appender: {}", e))
            })?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                FlowError::file_operation(format!("Failed to open log file {}: {}", log_file, e))
            })?;
        Ok(Box::new(file))
    }
}

/// Initialize logging based on configuration
///
/// The returned guard must stay alive for the whole program so buffered
/// lines are flushed. A subscriber that is already installed is left alone.
pub fn init_logging(config: &LoggingConfig, tui_mode: bool) -> Result<WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn io::Write + Send + Sync> = match log_file {
        Some(file) => file_writer(file, config)?,
        None if tui_mode => Box::new(io::sink()),
        // stdout carries command output
        None => Box::new(io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| FlowError::config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none() && !tui_mode);

    // try_init fails only when a global subscriber exists already
    let _ = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };

    Ok(guard)
}
