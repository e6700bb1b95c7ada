use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{DEFAULT_DIM, MAX_DIM, MIN_DIM};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board dimension (4..=26).
    pub dimension: usize,
    /// Directory where saved games are kept.
    pub save_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            dimension: DEFAULT_DIM,
            save_dir: PathBuf::from("saves"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < MIN_DIM || self.dimension > MAX_DIM {
            return Err(ConfigError::Validation(format!(
                "dimension must be in {MIN_DIM}..={MAX_DIM}, got {}",
                self.dimension
            )));
        }
        Ok(())
    }
}
