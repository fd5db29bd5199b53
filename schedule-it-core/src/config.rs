//! Global schedule-it configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/schedule-it";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Configuration at ~/.config/schedule-it/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalConfig {
    /// Where the event store keeps its files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Config("Could not determine config directory".into()))?
            .join("schedule-it");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| ConfigError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ConfigResult<()> {
        let contents = format!(
            "\
# schedule-it configuration

# Where events are stored:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_commented_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        GlobalConfig::create_default_config(&path).unwrap();

        let config = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = GlobalConfig {
            data_dir: dir.path().join("events"),
        };
        config.save(&path).unwrap();

        assert_eq!(GlobalConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = GlobalConfig::default();
        assert!(!config.data_path().to_string_lossy().starts_with('~'));

        let absolute = GlobalConfig {
            data_dir: PathBuf::from("/srv/schedule-it"),
        };
        assert_eq!(absolute.data_path(), PathBuf::from("/srv/schedule-it"));
    }
}
