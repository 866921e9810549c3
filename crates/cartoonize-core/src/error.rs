//! Error types for the Cartoonize Workbench

use thiserror::Error;

/// Main error type for workbench operations
#[derive(Error, Debug)]
pub enum CartoonError {
    /// Declared MIME type is not JPEG or PNG
    #[error("You can only upload JPG/PNG file! (got {0})")]
    UnsupportedType(String),

    /// File is at or above the upload size limit
    #[error("Image must be smaller than 10MB! ({0} bytes)")]
    TooLarge(u64),

    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server responded with status {0}")]
    Status(u16),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization of local storage
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Background task panicked or was aborted
    #[error("Task error: {0}")]
    Task(String),

    /// Download requested before any result is displayed
    #[error("No result image to save")]
    NoResult,
}

impl CartoonError {
    /// Whether this error came from client-side validation of the upload.
    ///
    /// Validation errors never touch session state.
    pub fn is_validation(&self) -> bool {
        matches!(self, CartoonError::UnsupportedType(_) | CartoonError::TooLarge(_))
    }

    /// Short message shown to the user in a notice.
    pub fn notice_message(&self) -> String {
        match self {
            CartoonError::UnsupportedType(_) => "You can only upload JPG/PNG file!".to_string(),
            CartoonError::TooLarge(_) => "Image must be smaller than 10MB!".to_string(),
            other => format!("Transformation failed: {}", other),
        }
    }
}

/// Result type alias using CartoonError
pub type CartoonResult<T> = Result<T, CartoonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CartoonError::Status(502);
        assert_eq!(format!("{}", err), "Server responded with status 502");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CartoonError = io_err.into();
        assert!(matches!(err, CartoonError::Io(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_notices() {
        let err = CartoonError::UnsupportedType("image/gif".to_string());
        assert!(err.is_validation());
        assert_eq!(err.notice_message(), "You can only upload JPG/PNG file!");

        let err = CartoonError::TooLarge(11 * 1024 * 1024);
        assert!(err.is_validation());
        assert_eq!(err.notice_message(), "Image must be smaller than 10MB!");
    }

    #[test]
    fn test_failure_notice_prefix() {
        let err = CartoonError::Status(500);
        assert_eq!(
            err.notice_message(),
            "Transformation failed: Server responded with status 500"
        );
    }
}
