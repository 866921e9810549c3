//! HTTP client for the remote cartoonize server.
//!
//! One request per upload: `POST {server_url}/image/cartoon` with a
//! multipart form holding a single `image` field. A success response body is
//! the transformed image; its content type is not checked.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{CartoonError, CartoonResult};
use crate::upload::UploadedFile;

/// Path appended to the configured server URL
pub const CARTOON_ENDPOINT: &str = "/image/cartoon";

/// Multipart field name carrying the image
pub const IMAGE_FIELD: &str = "image";

/// Full endpoint URL for a configured server base URL.
pub fn endpoint_url(server_url: &str) -> String {
    format!("{}{}", server_url.trim_end_matches('/'), CARTOON_ENDPOINT)
}

#[derive(Clone, Default)]
pub struct CartoonClient {
    http: Client,
}

impl CartoonClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Upload `file` and return the server's response body.
    pub async fn cartoonize(&self, server_url: &str, file: &UploadedFile) -> CartoonResult<Bytes> {
        let url = endpoint_url(server_url);
        debug!(%url, name = %file.name, size = file.size(), "Sending image");

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Cartoonize request rejected");
            return Err(CartoonError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!(%url, size = body.len(), "Received result");
        Ok(body)
    }
}
