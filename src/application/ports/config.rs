//! Configuration persistence port

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Loads and persists the on-disk configuration.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored config. A missing file yields an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the config, creating parent directories when needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Write a file pre-populated with defaults; errors if one exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Location of the backing file.
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;
}
