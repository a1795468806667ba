use anyhow::Result;
use gemini_relay::{config, llm::GeminiClient, relay::Relay, storage, telegram};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = validate_log_level(&config.logs.level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // RUST_LOG overrides the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logs.level));
    if config.logs.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!(
        model = %config.gemini.model,
        storage = ?config.storage.mode,
        webhook = config.telegram.webhook.is_some(),
        "Starting Gemini relay bot"
    );

    let generation = Arc::new(GeminiClient::new(config.gemini.clone())?);
    let images = storage::create_image_store(&config.storage);
    let relay = Arc::new(Relay::new(generation, images));

    telegram::run(config, relay).await?;

    Ok(())
}
