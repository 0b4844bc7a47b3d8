//! `config` subcommand handling

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const UNSET: &str = "(not set)";

/// Dispatch a `config` subcommand action against the store.
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => {
            store.init().await?;
            presenter.success(&format!(
                "Config file created at: {}",
                store.path().display()
            ));
        }
        ConfigAction::Set { key, value } => {
            ensure_known_key(&key)?;
            let mut config = store.load().await?;
            write_field(&mut config, &key, &value)?;
            store.save(&config).await?;
            presenter.success(&format!("{} = {}", key, value));
        }
        ConfigAction::Get { key } => {
            ensure_known_key(&key)?;
            let config = store.load().await?;
            let shown = read_field(&config, &key).unwrap_or_else(|| UNSET.to_string());
            presenter.output(&shown);
        }
        ConfigAction::List => {
            let config = store.load().await?;
            for key in VALID_CONFIG_KEYS {
                let shown = read_field(&config, key).unwrap_or_else(|| UNSET.to_string());
                presenter.key_value(key, &shown);
            }
        }
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
        }
    }

    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

fn write_field(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "chat_model" => config.chat_model = Some(value.to_string()),
        "transcription_model" => config.transcription_model = Some(value.to_string()),
        "api_base" => config.api_base = Some(value.to_string()),
        "export_path" => config.export_path = Some(value.to_string()),
        "file_summaries" => config.file_summaries = Some(parse_bool(key, value)?),
        _ => unreachable!("key validated"),
    }
    Ok(())
}

fn read_field(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "chat_model" => config.chat_model.clone(),
        "transcription_model" => config.transcription_model.clone(),
        "api_base" => config.api_base.clone(),
        "export_path" => config.export_path.clone(),
        "file_summaries" => config.file_summaries.map(|b| b.to_string()),
        _ => None,
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Value must be 'true' or 'false', got '{}'", value),
        }),
    }
}

/// Show only the first and last four characters of a stored key.
fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        "*".repeat(key.len())
    } else {
        format!("{}...{}", &key[..4], &key[key.len() - 4..])
    }
}
