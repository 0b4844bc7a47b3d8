//! TOML config file under the XDG config directory

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "minute-taker";
const CONFIG_FILE: &str = "config.toml";

fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

/// Config store backed by `$XDG_CONFIG_HOME/minute-taker/config.toml`.
///
/// A missing file loads as an empty config so a fresh install works
/// without running `config init` first.
pub struct XdgConfigStore {
    file: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        Self {
            file: default_config_file(),
        }
    }

    /// Point the store at an explicit file instead of the XDG location.
    pub fn with_path(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    fn decode(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn encode(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    async fn ensure_parent_dir(&self) -> Result<(), ConfigError> {
        match self.file.parent() {
            Some(dir) => fs::create_dir_all(dir)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.file)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;
        Self::decode(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.ensure_parent_dir().await?;
        fs::write(&self.file, Self::encode(config)?)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.file.clone()
    }

    fn exists(&self) -> bool {
        self.file.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.file.to_string_lossy().to_string(),
            ));
        }
        self.save(&AppConfig::defaults()).await
    }
}
