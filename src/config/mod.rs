mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration file (if any), applies environment overrides and
/// validates that both credentials are present.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = if explicit_path.is_some() || Path::new(&config_path).exists() {
        debug!("Loading configuration from: {}", config_path);
        let config_str = tokio::fs::read_to_string(&config_path)
            .await
            .map_err(|e| Error::config(format!("Failed to read {}: {}", config_path, e)))?;
        parse(&config_str)?
    } else {
        debug!("No configuration file found, using defaults");
        Config::default()
    };

    let config = apply_overrides(config, |key| env::var(key).ok());
    validate(&config)?;

    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty file deserializes to unit, not to a mapping
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Applies `BOT_TOKEN`, `GEMINI_API_KEY`, `GEMINI_MODEL` and `DOWNLOADS_DIR`
/// on top of the file values.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(token) = non_empty("BOT_TOKEN") {
        config.telegram.bot_token = token;
    }
    if let Some(api_key) = non_empty("GEMINI_API_KEY") {
        config.gemini.api_key = api_key;
    }
    if let Some(model) = non_empty("GEMINI_MODEL") {
        config.gemini.model = model;
    }
    if let Some(dir) = non_empty("DOWNLOADS_DIR") {
        config.storage.downloads_dir = dir;
    }

    config
}

pub fn validate(config: &Config) -> Result<()> {
    if config.telegram.bot_token.is_empty() {
        return Err(Error::config("BOT_TOKEN environment variable not set"));
    }
    if config.gemini.api_key.is_empty() {
        return Err(Error::config("GEMINI_API_KEY environment variable not set"));
    }
    Ok(())
}
