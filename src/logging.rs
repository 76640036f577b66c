//! Tracing subscriber construction.
//!
//! The subscriber is built from an explicit [`LogConfig`] and installed once
//! at process start; nothing mutates logging state afterwards.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Where log output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Console,
    File(PathBuf),
    /// Console and file together, the default for interactive runs.
    Both(PathBuf),
}

/// Line format for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Explicit logging configuration, resolved before the subscriber exists.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub destination: LogDestination,
    /// Default level directive; `RUST_LOG` still takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

/// Install the global subscriber.
///
/// The returned guard must live as long as the process so buffered file
/// output is flushed on exit.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level: Level = config.level.parse().map_err(|_| {
                AppError::Config(format!("Invalid log level '{}'", config.level))
            })?;
            EnvFilter::default().add_directive(level.into())
        }
    };

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    let mut guard = None;

    match &config.destination {
        LogDestination::Console => {
            layers.push(console_layer(config.format));
        }
        LogDestination::File(path) => {
            let (layer, file_guard) = file_layer(path, config.format)?;
            layers.push(layer);
            guard = Some(file_guard);
        }
        LogDestination::Both(path) => {
            layers.push(console_layer(config.format));
            let (layer, file_guard) = file_layer(path, config.format)?;
            layers.push(layer);
            guard = Some(file_guard);
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|err| AppError::Config(format!("Failed to initialize logging: {err}")))?;

    Ok(guard)
}

fn console_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Full => fmt::layer().boxed(),
        LogFormat::Compact => fmt::layer().compact().boxed(),
    }
}

fn file_layer(
    path: &Path,
    format: LogFormat,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync>, WorkerGuard), AppError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Config(format!("Invalid log file path: {}", path.display())))?;

    std::fs::create_dir_all(directory).map_err(|err| {
        AppError::Config(format!(
            "Failed to create log directory {}: {}",
            directory.display(),
            err
        ))
    })?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = match format {
        LogFormat::Full => fmt::layer().with_ansi(false).with_writer(writer).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_ansi(false).with_writer(writer).boxed(),
    };
    Ok((layer, guard))
}
