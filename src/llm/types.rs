use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Requested output kind for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub attached_image: Option<ImagePayload>,
    pub response_modalities: BTreeSet<Modality>,
}

/// One unit of generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    InlineData { mime_type: String, data: Vec<u8> },
    /// Any part kind the relay does not act on; carries the wire field name.
    Unsupported(String),
}

/// Parts of the first candidate, `None` when the backend produced nothing usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    pub parts: Option<Vec<ContentPart>>,
}

impl GenerationResponse {
    pub fn empty() -> Self {
        Self { parts: None }
    }

    pub fn with_parts(parts: Vec<ContentPart>) -> Self {
        Self { parts: Some(parts) }
    }
}

// Gemini REST wire format

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<WireContent>,
    pub generation_config: WireGenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    pub response_modalities: Vec<Modality>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<WirePart>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<WireBlob>,
    /// Fields of part kinds the relay does not model (function calls, code results, ...).
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBlob {
    #[serde(default)]
    pub mime_type: String,
    /// Base64 encoded payload
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<WireCandidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCandidate {
    #[serde(default)]
    pub content: Option<WireContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireErrorResponse {
    pub error: WireError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireError {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerationRequest {
    pub fn to_wire(&self) -> GenerateContentRequest {
        let mut parts = vec![WirePart {
            text: Some(self.prompt.clone()),
            ..Default::default()
        }];

        if let Some(ref image) = self.attached_image {
            parts.push(WirePart {
                inline_data: Some(WireBlob {
                    mime_type: image.mime_type.clone(),
                    data: STANDARD.encode(&image.data),
                }),
                ..Default::default()
            });
        }

        GenerateContentRequest {
            contents: vec![WireContent {
                role: Some("user".to_string()),
                parts: Some(parts),
            }],
            generation_config: WireGenerationConfig {
                response_modalities: self.response_modalities.iter().copied().collect(),
            },
        }
    }
}

impl WirePart {
    pub fn into_content_part(self) -> Result<ContentPart, crate::Error> {
        if let Some(text) = self.text {
            return Ok(ContentPart::Text(text));
        }

        if let Some(blob) = self.inline_data {
            // Only image payloads are ever relayed, so only those are decoded
            if !blob.mime_type.starts_with("image/") {
                return Ok(ContentPart::Unsupported(format!(
                    "inlineData ({})",
                    blob.mime_type
                )));
            }
            let data = STANDARD.decode(blob.data.as_bytes())?;
            return Ok(ContentPart::InlineData {
                mime_type: blob.mime_type,
                data,
            });
        }

        let kind = self
            .other
            .keys()
            .next()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());
        Ok(ContentPart::Unsupported(kind))
    }
}

impl GenerateContentResponse {
    /// Keeps the first candidate only. A missing candidate, content or part
    /// list, or an empty part list, yields an empty response.
    pub fn into_generation_response(self) -> Result<GenerationResponse, crate::Error> {
        let wire_parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .filter(|parts| !parts.is_empty());

        let Some(wire_parts) = wire_parts else {
            return Ok(GenerationResponse::empty());
        };

        let parts = wire_parts
            .into_iter()
            .map(WirePart::into_content_part)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GenerationResponse::with_parts(parts))
    }
}
