mod commands;
mod handlers;
mod replier;

pub use commands::{Command, HELP_TEXT, WELCOME_TEXT};
pub use handlers::{largest_photo, relay_photo, relayable_text, schema};
pub use replier::ChatReplier;

use crate::{
    Error, Result,
    config::{Config, TelegramConfig},
    relay::Relay,
    server,
};
use std::{
    convert::Infallible,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};
use teloxide::{
    prelude::*, update_listeners::webhooks, utils::command::BotCommands,
};
use tracing::{debug, info, warn};
use url::Url;

pub fn build_bot(config: &TelegramConfig) -> Result<Bot> {
    let mut builder = teloxide::net::default_reqwest_settings();
    if config.force_ipv4 {
        builder = builder.local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }
    let client = builder
        .build()
        .map_err(|e| Error::config(format!("Failed to build Telegram HTTP client: {}", e)))?;

    let mut bot = Bot::with_client(&config.bot_token, client);
    if let Some(ref api_url) = config.api_url {
        bot = bot.set_api_url(Url::parse(api_url)?);
    }
    Ok(bot)
}

/// Runs the bot until Ctrl-C, via long polling or, when configured, a webhook.
pub async fn run(config: Config, relay: Arc<Relay>) -> Result<()> {
    let bot = build_bot(&config.telegram)?;

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register bot commands: {}", e);
    }

    let mut dispatcher = Dispatcher::builder(bot.clone(), schema())
        .dependencies(dptree::deps![relay])
        // No per-chat ordering: every update is handled concurrently
        .distribution_function(|_| None::<Infallible>)
        .default_handler(|update| async move {
            debug!("Ignoring update {:?}", update.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build();

    match config.telegram.webhook {
        Some(ref webhook) => {
            let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
            let mut options = webhooks::Options::new(addr, Url::parse(&webhook.url)?);
            if let Some(ref secret) = webhook.secret_token {
                options = options.secret_token(secret.clone());
            }

            let (listener, stop_flag, webhook_router) =
                webhooks::axum_to_router(bot, options).await?;
            info!("Telegram webhook registered at {}", webhook.url);

            let server = tokio::spawn(server::serve(addr, webhook_router, stop_flag));

            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;

            server
                .await
                .map_err(|e| Error::internal(format!("Webhook server task failed: {}", e)))??;
        }
        None => {
            info!("Starting Telegram long polling");
            dispatcher.dispatch().await;
        }
    }

    info!("Bot stopped");
    Ok(())
}
