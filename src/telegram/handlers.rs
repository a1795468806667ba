use super::{commands::Command, replier::ChatReplier};
use crate::{
    Error, Result,
    relay::{InboundMessage, Relay},
};
use std::sync::Arc;
use teloxide::{
    dispatching::UpdateHandler,
    net::Download,
    prelude::*,
    types::{ChatId, PhotoSize},
};
use tracing::{Instrument, debug, info_span};

/// Update routing: known commands, then photos, then plain text.
/// Unknown `/commands` and every other update kind fall through unhandled.
pub fn schema() -> UpdateHandler<Error> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::filter_map(|msg: Message| largest_photo(&msg)).endpoint(handle_photo))
        .branch(dptree::filter_map(|msg: Message| relayable_text(&msg)).endpoint(handle_text))
}

/// Telegram lists photo sizes smallest first.
pub fn largest_photo(msg: &Message) -> Option<PhotoSize> {
    msg.photo().and_then(|sizes| sizes.last()).cloned()
}

/// Text the relay should answer; command-prefixed text is never relayed.
pub fn relayable_text(msg: &Message) -> Option<String> {
    msg.text()
        .filter(|text| !text.starts_with('/'))
        .map(str::to_string)
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> Result<()> {
    debug!(chat_id = msg.chat.id.0, "Answering {:?} command", cmd);
    bot.send_message(msg.chat.id, cmd.reply_text()).await?;
    Ok(())
}

async fn handle_text(bot: Bot, msg: Message, text: String, relay: Arc<Relay>) -> Result<()> {
    let replier = ChatReplier::new(bot, msg.chat.id);
    relay
        .handle(InboundMessage::text(text), &replier)
        .instrument(info_span!("telegram", chat_id = msg.chat.id.0))
        .await;
    Ok(())
}

async fn handle_photo(bot: Bot, msg: Message, photo: PhotoSize, relay: Arc<Relay>) -> Result<()> {
    let caption = msg.caption().map(str::to_string);
    relay_photo(&bot, msg.chat.id, &photo, caption, &relay)
        .instrument(info_span!("telegram", chat_id = msg.chat.id.0))
        .await;
    Ok(())
}

/// Downloads `photo` and hands it to the relay. A failed download is answered
/// like any other fault.
pub async fn relay_photo(
    bot: &Bot,
    chat_id: ChatId,
    photo: &PhotoSize,
    caption: Option<String>,
    relay: &Relay,
) {
    let replier = ChatReplier::new(bot.clone(), chat_id);
    match download_photo(bot, photo).await {
        Ok(image) => {
            relay
                .handle(InboundMessage::photo(image, caption), &replier)
                .await
        }
        Err(e) => relay.settle(Err(e), &replier).await,
    }
}

async fn download_photo(bot: &Bot, photo: &PhotoSize) -> Result<Vec<u8>> {
    let file = bot.get_file(&photo.file.id).await?;
    debug!("Downloading photo {} ({} bytes)", file.path, file.size);

    let mut image = Vec::with_capacity(file.size as usize);
    bot.download_file(&file.path, &mut image).await?;
    Ok(image)
}
