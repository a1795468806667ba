use super::types::{MessageKind, OutboundAction};
use crate::{
    Result,
    llm::{ContentPart, GenerationResponse},
    storage::ImageStore,
};
use tracing::{debug, warn};

pub const EMPTY_PHOTO_RESULT_MESSAGE: &str = "Sorry, I couldn't process the image properly.";
pub const EMPTY_TEXT_RESULT_MESSAGE: &str = "Sorry, I couldn't process your request properly.";

pub fn empty_result_message(origin: MessageKind) -> &'static str {
    match origin {
        MessageKind::Photo => EMPTY_PHOTO_RESULT_MESSAGE,
        MessageKind::Text => EMPTY_TEXT_RESULT_MESSAGE,
    }
}

/// Maps generated parts to reply actions, preserving their order.
///
/// Images are persisted through `store` before they become actions. Inline data
/// that is not an image, and part kinds the relay does not model, are dropped.
pub async fn interpret(
    response: GenerationResponse,
    origin: MessageKind,
    store: &dyn ImageStore,
) -> Result<Vec<OutboundAction>> {
    let Some(parts) = response.parts else {
        warn!("Generation returned no content for {} message", origin);
        return Ok(vec![OutboundAction::ReplyError(
            empty_result_message(origin).to_string(),
        )]);
    };

    let mut actions = Vec::with_capacity(parts.len());
    for part in parts {
        match part {
            ContentPart::Text(text) => actions.push(OutboundAction::ReplyText(text)),
            ContentPart::InlineData { mime_type, data } => {
                if !mime_type.starts_with("image/") {
                    debug!("Dropping inline data with mime type {}", mime_type);
                    continue;
                }
                if data.is_empty() {
                    debug!("Dropping empty {} payload", mime_type);
                    continue;
                }
                let image = store.persist(&data, &mime_type).await?;
                actions.push(OutboundAction::ReplyPhoto(image));
            }
            ContentPart::Unsupported(kind) => {
                debug!("Dropping unsupported part: {}", kind);
            }
        }
    }

    Ok(actions)
}
