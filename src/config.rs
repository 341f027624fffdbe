//! Stacking configuration persistence
//!
//! Stores manager settings in `~/.config/panelstack/config.yaml`

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::DrawIndex;

/// When the manager requests the backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackdropPolicy {
    /// Only for modal panels and panels that ask for one
    #[default]
    PerPanel,
    /// For every shown panel
    Always,
}

/// Manager configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Lowest draw index handed out to a panel
    #[serde(default = "default_base_index")]
    pub base_index: DrawIndex,
    #[serde(default)]
    pub backdrop: BackdropPolicy,
}

fn default_base_index() -> DrawIndex {
    1024
}

/// Highest accepted `base_index`; leaves half the index space for panels
pub const MAX_BASE_INDEX: DrawIndex = DrawIndex::MAX / 2;

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            base_index: default_base_index(),
            backdrop: BackdropPolicy::default(),
        }
    }
}

impl StackConfig {
    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.base_index <= MAX_BASE_INDEX,
            "base_index {} exceeds the maximum of {}",
            self.base_index,
            MAX_BASE_INDEX
        );
        Ok(())
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Whether showing a panel of this kind should raise the backdrop
    pub fn wants_backdrop(&self, panel_wants: bool) -> bool {
        match self.backdrop {
            BackdropPolicy::PerPanel => panel_wants,
            BackdropPolicy::Always => true,
        }
    }
}
