use std::{io, path::Path};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LOG_ENV_VAR, LOG_FILE_NAME};

/// Opens the log file under `dir`, creating the directory if needed.
fn log_writer(dir: &Path) -> io::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .map_err(io::Error::other)
}

/// Installs the global subscriber. Logs go to a file since stdout carries the maze itself.
pub fn init_logging(config: &AppConfig) -> io::Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(log_writer(&config.log_dir)?);
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
