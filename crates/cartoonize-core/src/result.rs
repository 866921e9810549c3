//! The transformed image returned by the server.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use image::{ImageFormat, ImageReader};
use tracing::info;

use crate::error::{CartoonError, CartoonResult};
use crate::object_url::{ObjectUrl, ObjectUrlRegistry};
use crate::upload::OCTET_STREAM;

/// Name the download is saved under, whatever the actual format
pub const DOWNLOAD_FILE_NAME: &str = "imgutil.jpeg";

/// What could be learned about a result blob from its header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: Option<ImageFormat>,
    pub dimensions: Option<(u32, u32)>,
    pub size: u64,
}

impl ImageInfo {
    /// Sniff format and pixel size. Unknown data yields `None` fields.
    pub fn probe(bytes: &[u8]) -> Self {
        let format = image::guess_format(bytes).ok();
        let dimensions = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .ok()
            .and_then(|reader| reader.into_dimensions().ok());
        Self {
            format,
            dimensions,
            size: bytes.len() as u64,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.map(|f| f.to_mime_type()).unwrap_or(OCTET_STREAM)
    }

    /// One-line caption, e.g. `PNG 640×480, 12.3 KiB`
    pub fn caption(&self) -> String {
        let size = format_size(self.size);
        match (self.format, self.dimensions) {
            (Some(format), Some((w, h))) => format!("{} {}×{}, {}", format_name(format), w, h, size),
            (Some(format), None) => format!("{}, {}", format_name(format), size),
            _ => size,
        }
    }
}

fn format_name(format: ImageFormat) -> String {
    format!("{:?}", format).to_uppercase()
}

fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.1} KiB", size as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", size as f64 / (1024.0 * 1024.0))
    }
}

/// Server output plus the display handle it is shown through
#[derive(Debug)]
pub struct ResultImage {
    bytes: Bytes,
    info: ImageInfo,
    url: ObjectUrl,
}

impl ResultImage {
    pub fn new(bytes: Bytes, registry: &ObjectUrlRegistry) -> Self {
        let info = ImageInfo::probe(&bytes);
        let url = registry.acquire(bytes.clone(), info.mime_type());
        Self { bytes, info, url }
    }

    /// [`ResultImage::new`] on the blocking pool; probing and encoding a
    /// large body would otherwise stall the async workers.
    pub async fn render(bytes: Bytes, registry: &ObjectUrlRegistry) -> CartoonResult<Self> {
        let registry = registry.clone();
        tokio::task::spawn_blocking(move || Self::new(bytes, &registry))
            .await
            .map_err(|e| CartoonError::Task(e.to_string()))
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn info(&self) -> ImageInfo {
        self.info
    }

    pub fn url(&self) -> &ObjectUrl {
        &self.url
    }
}

/// Where a download to `target` lands: directories get [`DOWNLOAD_FILE_NAME`].
pub fn download_path(target: impl AsRef<Path>) -> PathBuf {
    let target = target.as_ref();
    if target.is_dir() {
        target.join(DOWNLOAD_FILE_NAME)
    } else {
        target.to_path_buf()
    }
}

/// Write result bytes to disk unchanged.
pub async fn save_result(bytes: &[u8], target: impl AsRef<Path>) -> CartoonResult<PathBuf> {
    let path = download_path(target);
    tokio::fs::write(&path, bytes).await?;
    info!(?path, size = bytes.len(), "Result image saved");
    Ok(path)
}
