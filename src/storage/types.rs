use std::path::PathBuf;

/// Handle the reply capability uses to send a generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    File(PathBuf),
    Memory { data: Vec<u8>, mime_type: String },
}

impl ImageRef {
    pub fn memory(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self::Memory {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// File extension for a generated image, falling back to `jpg`.
pub fn extension_for(mime_type: &str) -> &'static str {
    let subtype = mime_type
        .strip_prefix("image/")
        .unwrap_or_default()
        .to_ascii_lowercase();

    match subtype.as_str() {
        "png" => "png",
        "webp" => "webp",
        "gif" => "gif",
        _ => "jpg",
    }
}
