//! Configuration loading functions.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use super::types::Config;

/// File names searched in the working directory, in priority order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    ".threat-verdict.yaml",
    ".threat-verdict.yml",
    ".threat-verdict.json",
    ".threat-verdict.toml",
];

impl Config {
    /// Load and validate configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let config: Config = match ext.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                    path: path.display().to_string(),
                    source: e,
                })?
            }
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            })?,
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            })?,
            _ => {
                return Err(ConfigError::UnsupportedFormat(
                    path.display().to_string(),
                    ext,
                ));
            }
        };

        config.validate().map_err(|e| ConfigError::Invalid {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(config)
    }

    /// Locate the configuration file that [`Config::load`] would use.
    ///
    /// Search order:
    /// 1. `.threat-verdict.{yaml,yml,json,toml}` in the project root
    /// 2. `~/.config/threat-verdict/config.yaml`
    pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
        if let Some(root) = project_root {
            for filename in PROJECT_CONFIG_FILES {
                let path = root.join(filename);
                if path.exists() {
                    return Some(path);
                }
            }
        }

        let global = dirs::config_dir()?.join("threat-verdict").join("config.yaml");
        global.exists().then_some(global)
    }

    /// Load the discovered configuration. Defaults apply only when no
    /// configuration file exists; a file that fails to parse or validate is
    /// an error.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::discover(project_root) {
            Some(path) => {
                let config = Self::from_file(&path)?;
                debug!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
