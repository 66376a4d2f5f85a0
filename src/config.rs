//! Dock manager configuration
//!
//! Stored in `~/.config/dock-manager/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::reducer::MIN_SPLIT_SIZE;
use crate::validate::ValidationMode;

/// Dock configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// How layout consistency problems are reported after each command
    #[serde(default)]
    pub validation: ValidationMode,

    /// Minimum split child size in percent
    #[serde(default = "default_min_split_size")]
    pub min_split_size: f64,
}

fn default_min_split_size() -> f64 {
    MIN_SPLIT_SIZE
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::default(),
            min_split_size: default_min_split_size(),
        }
    }
}

impl DockConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<DockConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path =
            crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
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

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        if !(self.min_split_size > 0.0 && self.min_split_size < 100.0) {
            tracing::warn!(
                "min_split_size {} out of range, using {}",
                self.min_split_size,
                MIN_SPLIT_SIZE
            );
            self.min_split_size = MIN_SPLIT_SIZE;
        }
        self
    }
}
