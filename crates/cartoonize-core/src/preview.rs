//! Local preview of the uploaded file as a data URL.

use base64::Engine;

/// Encode bytes as `data:<mime>;base64,<payload>`.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime_type, payload)
}

/// Data URL rendered from the uploaded bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePreview {
    url: String,
}

impl SourcePreview {
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            url: data_url(mime_type, bytes),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }
}
