use super::types::InboundMessage;
use crate::llm::{GenerationRequest, ImagePayload, Modality};
use std::collections::BTreeSet;

pub const GENERATE_MARKER: &str = "generate:";
pub const DEFAULT_PHOTO_PROMPT: &str = "What do you see in this image?";
pub const PHOTO_MIME_TYPE: &str = "image/jpeg";

/// Builds the generation request for one inbound message. Pure.
pub fn classify(message: &InboundMessage) -> GenerationRequest {
    match message {
        InboundMessage::Text { content } => match strip_generate_marker(content) {
            Some(prompt) => GenerationRequest {
                prompt: prompt.to_string(),
                attached_image: None,
                response_modalities: BTreeSet::from([Modality::Text, Modality::Image]),
            },
            None => GenerationRequest {
                prompt: content.clone(),
                attached_image: None,
                response_modalities: BTreeSet::from([Modality::Text]),
            },
        },
        InboundMessage::Photo { image, caption } => GenerationRequest {
            prompt: caption
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_PHOTO_PROMPT)
                .to_string(),
            attached_image: Some(ImagePayload {
                data: image.clone(),
                mime_type: PHOTO_MIME_TYPE.to_string(),
            }),
            response_modalities: BTreeSet::from([Modality::Text, Modality::Image]),
        },
    }
}

/// Returns the trimmed prompt when `text` starts with the marker, ignoring ASCII case.
fn strip_generate_marker(text: &str) -> Option<&str> {
    let head = text.get(..GENERATE_MARKER.len())?;
    if !head.eq_ignore_ascii_case(GENERATE_MARKER) {
        return None;
    }
    Some(text[GENERATE_MARKER.len()..].trim())
}
