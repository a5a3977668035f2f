//! tracing-subscriber setup.
//!
//! The TUI owns the terminal, so `browse` logs to a file. The one-shot
//! commands log to stderr, and only when `POV_LOG` is set.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const LOG_ENV: &str = "POV_LOG";
const DEFAULT_LEVEL: &str = "warn";

fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_LEVEL)))
}

pub fn init_file(path: &Path, level: Option<&str>) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

pub fn init_stderr() -> Result<(), AppError> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(None))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
