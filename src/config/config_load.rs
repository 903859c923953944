// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{AnimationConfig, ChainConfig, StyleConfig, WindowConfig};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config.toml found next to the executable or in the working directory")]
    NotFound,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color {0:?}, expected \"#RRGGBB\"")]
    InvalidColor(String),
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub chain: ChainConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, falling back to
    /// the working directory. Returns the config and the file it came from.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let candidates = [Self::exe_dir_path(), Some(PathBuf::from(CONFIG_FILE_NAME))];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                let config = Self::load_from_path(&path)?;
                return Ok((config, path));
            }
        }

        Err(ConfigError::NotFound)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        };

        if self.chain.nodes == 0 {
            return invalid("chain.nodes", "must be at least 1");
        }
        if self.chain.lines == 0 {
            return invalid("chain.lines", "must be at least 1");
        }

        let animation = &self.animation;
        if !(animation.scale_gap > 0.0 && animation.scale_gap < 1.0) {
            return invalid("animation.scale_gap", "must be in (0, 1)");
        }
        if !(animation.scale_div > 0.0 && animation.scale_div < 1.0) {
            return invalid("animation.scale_div", "must be in (0, 1)");
        }
        if animation.first_phase_divisor == 0 || animation.second_phase_divisor == 0 {
            return invalid("animation.*_phase_divisor", "must be non-zero");
        }
        if animation.frame_delay_ms == 0 {
            return invalid("animation.frame_delay_ms", "must be non-zero");
        }

        let style = &self.style;
        if !(style.stroke_factor > 0.0 && style.size_factor > 0.0 && style.radius_factor > 0.0) {
            return invalid("style.*_factor", "must be positive");
        }

        Ok(())
    }
}
