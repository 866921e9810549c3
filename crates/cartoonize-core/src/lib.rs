//! Cartoonize Workbench Core Library
//!
//! Upload an image to a remote cartoonize server and keep track of what to
//! show while it works.
//!
//! ## Overview
//!
//! - **Configuration**: one persisted value, the server base URL
//!   ([`ConfigStore`]), read at startup and passed explicitly.
//! - **Upload**: JPEG/PNG only, strictly under 10 MiB ([`UploadedFile`]).
//! - **Session**: a generation-guarded state machine holding the local
//!   preview and the server result ([`Session`]).
//! - **Workbench**: runs preview and request concurrently and publishes
//!   progress events ([`Workbench`]).
//!
//! ## Quick Start
//!
//! ```ignore
//! use cartoonize_core::{ConfigStore, UploadedFile, Workbench};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigStore::open("~/.cartoonize")?.read();
//!     let bench = Workbench::new();
//!
//!     let file = UploadedFile::from_path("cat.png").await?;
//!     bench.submit(file, &config)?.wait().await?;
//!
//!     bench.save_result(".").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod object_url;
pub mod preview;
pub mod result;
pub mod session;
pub mod upload;
pub mod workbench;

// Re-exports
pub use client::{endpoint_url, CartoonClient, CARTOON_ENDPOINT, IMAGE_FIELD};
pub use config::{default_data_dir, Config, ConfigPatch, ConfigStore, LocalStorage, DEFAULT_SERVER_URL};
pub use error::{CartoonError, CartoonResult};
pub use object_url::{ObjectUrl, ObjectUrlRegistry};
pub use preview::{data_url, SourcePreview};
pub use result::{download_path, save_result, ImageInfo, ResultImage, DOWNLOAD_FILE_NAME};
pub use session::{
    Generation, Notice, NoticeLevel, Phase, ResultView, Session, SessionSnapshot,
};
pub use upload::{check_constraints, mime_for_path, UploadedFile, ACCEPTED_MIME_TYPES, MAX_UPLOAD_BYTES};
pub use workbench::{UploadTicket, Workbench, WorkbenchEvent};
