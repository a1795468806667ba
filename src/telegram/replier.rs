use crate::{
    Result,
    relay::Replier,
    storage::{ImageRef, extension_for},
};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile},
};

/// Sends replies into the chat a message came from.
pub struct ChatReplier {
    bot: Bot,
    chat_id: ChatId,
}

impl ChatReplier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Replier for ChatReplier {
    async fn reply_text(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }

    async fn reply_photo(&self, image: &ImageRef) -> Result<()> {
        let input = match image {
            ImageRef::File(path) => InputFile::file(path.clone()),
            ImageRef::Memory { data, mime_type } => InputFile::memory(data.clone())
                .file_name(format!("image.{}", extension_for(mime_type))),
        };
        self.bot.send_photo(self.chat_id, input).await?;
        Ok(())
    }
}
