use crate::{Result, storage::ImageRef};
use async_trait::async_trait;
use std::fmt;

/// A user message the relay acts on. Command-prefixed text never gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundMessage {
    Text {
        content: String,
    },
    Photo {
        image: Vec<u8>,
        caption: Option<String>,
    },
}

impl InboundMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn photo(image: Vec<u8>, caption: Option<String>) -> Self {
        Self::Photo { image, caption }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Text { .. } => MessageKind::Text,
            Self::Photo { .. } => MessageKind::Photo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Photo,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Photo => write!(f, "photo"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    ReplyText(String),
    ReplyPhoto(ImageRef),
    ReplyError(String),
}

/// Reply capability of the chat the message came from.
#[async_trait]
pub trait Replier: Send + Sync {
    async fn reply_text(&self, text: &str) -> Result<()>;

    async fn reply_photo(&self, image: &ImageRef) -> Result<()>;
}
