#![allow(dead_code)]

use gemini_relay::{
    Result,
    config::{
        Config, GeminiConfig, LogsConfig, ServerConfig, StorageConfig, StorageMode,
        TelegramConfig,
    },
};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        telegram: TelegramConfig {
            bot_token: "123456:test-token".to_string(),
            force_ipv4: false,
            api_url: None,
            webhook: None,
        },
        gemini: GeminiConfig {
            api_key: "test-api-key".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 5,
        },
        storage: StorageConfig {
            mode: StorageMode::Memory,
            downloads_dir: "downloads".to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        logs: LogsConfig {
            level: "debug".to_string(),
            json: false,
        },
    }
}

/// Create a Gemini configuration pointing at a mock server
pub fn create_gemini_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        base_url: base_url.to_string(),
        ..create_test_config().gemini
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
telegram:
  bot_token: "123456:test-token"
  force_ipv4: false

gemini:
  api_key: "test-api-key"
  model: "gemini-2.0-flash-exp"
  timeout_secs: 30

storage:
  mode: "file"
  downloads_dir: "generated"

logs:
  level: "debug"
  json: false
"#;

/// Sample configuration with webhook transport
pub const SAMPLE_CONFIG_WITH_WEBHOOK: &str = r#"
telegram:
  bot_token: "123456:test-token"
  api_url: "http://127.0.0.1:8081"
  webhook:
    url: "https://bot.example.com/telegram"
    secret_token: "s3cret"

gemini:
  api_key: "test-api-key"

storage:
  mode: "memory"

server:
  host: "127.0.0.1"
  port: 8443
"#;
