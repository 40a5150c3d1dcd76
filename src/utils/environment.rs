use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "pacer-watch";

/// Default configuration file: `<config dir>/pacer-watch/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Failed to locate platform config directory")?;
    Ok(base.join(APP_DIR).join("config.toml"))
}

/// Default local history file: `<data dir>/pacer-watch/history.csv`
pub fn default_history_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to locate platform data directory")?;
    Ok(base.join(APP_DIR).join("history.csv"))
}
