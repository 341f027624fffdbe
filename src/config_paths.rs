//! Where panelstack keeps its files
//!
//! Everything lives in one per-user directory:
//! - `$XDG_CONFIG_HOME/panelstack/` when set, else `~/.config/panelstack/`
//! - `%APPDATA%\panelstack\` on Windows
//!
//! ```text
//! panelstack/
//! ├── config.yaml   stacking config (StackConfig)
//! ├── keymap.yaml   user key overrides
//! └── logs/         daily-rotated panelstack.log
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "panelstack";

/// The panelstack config directory, if a home or config root is known
pub fn config_dir() -> Option<PathBuf> {
    config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn config_root() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn config_root() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|root| !root.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

fn app_path(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

pub fn config_file() -> Option<PathBuf> {
    app_path("config.yaml")
}

pub fn keymap_file() -> Option<PathBuf> {
    app_path("keymap.yaml")
}

pub fn logs_dir() -> Option<PathBuf> {
    app_path("logs")
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    std::fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory {}", logs.display()))?;
    Ok(logs)
}
