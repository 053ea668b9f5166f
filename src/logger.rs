//! Logging setup on top of the `log` facade.
//!
//! Call sites use `log::info!` and friends; [`init`] routes them through a
//! `fern` dispatch into a log file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Build the dispatch described by `config` without installing it.
///
/// Disabled logging yields a dispatch filtering everything out.
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    if !config.enabled {
        return Ok(fern::Dispatch::new().level(LevelFilter::Off));
    }

    let level = config.level_filter()?;
    let path = match &config.file {
        Some(path) => path.clone(),
        None => get_log_file_path()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(file))
}

/// Install the global logger. Can only succeed once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    dispatch(config)?
        .apply()
        .context("A global logger is already installed")
}

/// Default log file location
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for logs"))
}
