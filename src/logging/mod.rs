//! Diagnostic logging to disk.
//!
//! The terminal is in raw mode while the portal runs, so `tracing` output
//! goes to a daily file `portal_<date>.log` in the configured log directory
//! (default: `~/.local/share/family-portal/logs/`). Disabled by default.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Install the global subscriber. Returns the log file path when logging is
/// enabled, `None` otherwise.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level: Level = config
        .level
        .parse()
        .map_err(|_| anyhow!("Unknown log level `{}`", config.level))?;

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_dir.join(log_file_name(&date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing subscriber: {}", e))?;

    Ok(Some(path))
}

fn log_file_name(date: &str) -> String {
    format!("portal_{}.log", date)
}

/// Expand a leading `~/` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(dir)),
        None => Path::new(dir).to_path_buf(),
    }
}
