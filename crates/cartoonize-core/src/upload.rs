//! The file a user picked for upload, and the checks it must pass before
//! anything is sent to the server.

use std::path::Path;

use bytes::Bytes;

use crate::error::{CartoonError, CartoonResult};

/// MIME types the server is expected to cartoonize
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Uploads must be strictly smaller than 10 MiB
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Fallback type for extensions we don't recognise
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Declared MIME type for a file name, judged by its extension only.
pub fn mime_for_path(path: impl AsRef<Path>) -> &'static str {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg" | "jpeg" | "jfif") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => OCTET_STREAM,
    }
}

/// Check the declared type first, then the size.
pub fn check_constraints(mime_type: &str, size: u64) -> CartoonResult<()> {
    if !ACCEPTED_MIME_TYPES.contains(&mime_type) {
        return Err(CartoonError::UnsupportedType(mime_type.to_string()));
    }
    if size >= MAX_UPLOAD_BYTES {
        return Err(CartoonError::TooLarge(size));
    }
    Ok(())
}

/// A picked file held in memory for a single submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, declaring its type from the extension.
    ///
    /// Type and size are checked against the file metadata first, so a
    /// rejected file is never loaded.
    pub async fn from_path(path: impl AsRef<Path>) -> CartoonResult<Self> {
        let path = path.as_ref();
        let size = tokio::fs::metadata(path).await?.len();
        check_constraints(mime_for_path(path), size)?;

        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        Ok(Self::new(name, mime_for_path(path), bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn validate(&self) -> CartoonResult<()> {
        check_constraints(&self.mime_type, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path("cat.jpg"), "image/jpeg");
        assert_eq!(mime_for_path("cat.JPEG"), "image/jpeg");
        assert_eq!(mime_for_path("/tmp/dog.png"), "image/png");
        assert_eq!(mime_for_path("anim.gif"), "image/gif");
        assert_eq!(mime_for_path("notes.txt"), OCTET_STREAM);
        assert_eq!(mime_for_path("no_extension"), OCTET_STREAM);
    }

    #[test]
    fn test_accepts_jpeg_and_png_under_limit() {
        assert!(check_constraints("image/jpeg", 0).is_ok());
        assert!(check_constraints("image/png", MAX_UPLOAD_BYTES - 1).is_ok());
    }

    #[test]
    fn test_limit_is_exclusive() {
        let err = check_constraints("image/png", MAX_UPLOAD_BYTES).unwrap_err();
        assert!(matches!(err, CartoonError::TooLarge(n) if n == MAX_UPLOAD_BYTES));
    }

    #[test]
    fn test_type_is_checked_before_size() {
        let err = check_constraints("image/gif", MAX_UPLOAD_BYTES * 2).unwrap_err();
        assert!(matches!(err, CartoonError::UnsupportedType(t) if t == "image/gif"));
    }

    #[test]
    fn test_type_match_is_exact() {
        assert!(check_constraints("image/JPEG", 10).is_err());
        assert!(check_constraints("image/jpg", 10).is_err());
        assert!(check_constraints("", 10).is_err());
    }

    #[tokio::test]
    async fn test_from_path_reads_bytes_and_type() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"\x89PNG fake").unwrap();

        let file = UploadedFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "photo.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size(), 9);
        assert!(file.validate().is_ok());
    }

    #[tokio::test]
    async fn test_from_path_rejects_oversized_without_reading() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("huge.png");
        // Sparse: reported length is large, nothing is allocated on disk
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(64 * 1024 * 1024).unwrap();
        drop(file);

        let err = UploadedFile::from_path(&path).await.unwrap_err();
        assert!(matches!(err, CartoonError::TooLarge(n) if n == 64 * 1024 * 1024));
    }

    #[tokio::test]
    async fn test_from_path_size_limit_is_exclusive() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("edge.jpg");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_UPLOAD_BYTES).unwrap();
        drop(file);

        let err = UploadedFile::from_path(&path).await.unwrap_err();
        assert!(matches!(err, CartoonError::TooLarge(n) if n == MAX_UPLOAD_BYTES));
    }

    #[tokio::test]
    async fn test_from_path_rejects_type_before_reading() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("anim.gif");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_UPLOAD_BYTES * 2).unwrap();
        drop(file);

        let err = UploadedFile::from_path(&path).await.unwrap_err();
        assert!(matches!(err, CartoonError::UnsupportedType(t) if t == "image/gif"));
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = UploadedFile::from_path("/definitely/not/here.png")
            .await
            .unwrap_err();
        assert!(matches!(err, CartoonError::Io(_)));
    }
}
