//! The upload → preview → cartoonize → display pipeline.
//!
//! [`Workbench::submit`] validates a file synchronously, then runs two
//! independent tasks on the tokio runtime: one renders the local preview,
//! the other sends the file to the server. Either may finish first. Both
//! apply their outcome only if their generation is still the current one.
//!
//! Listeners follow progress through [`Workbench::subscribe_events`] and read
//! the state to render with [`Workbench::snapshot`].

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::client::CartoonClient;
use crate::config::Config;
use crate::error::{CartoonError, CartoonResult};
use crate::object_url::ObjectUrlRegistry;
use crate::preview::SourcePreview;
use crate::result::{save_result, ResultImage};
use crate::session::{Generation, Notice, NoticeLevel, Session, SessionSnapshot};
use crate::upload::UploadedFile;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Progress notifications for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchEvent {
    /// A file passed validation and the session was cleared
    Started { generation: Generation },
    /// Local preview is ready
    PreviewReady { generation: Generation },
    /// Server result is ready
    ResultReady { generation: Generation },
    /// The request failed and the session went back to idle
    Failed { generation: Generation, reason: String },
    /// Something to show the user
    Notice(Notice),
}

impl WorkbenchEvent {
    pub fn generation(&self) -> Option<Generation> {
        match self {
            WorkbenchEvent::Started { generation }
            | WorkbenchEvent::PreviewReady { generation }
            | WorkbenchEvent::ResultReady { generation }
            | WorkbenchEvent::Failed { generation, .. } => Some(*generation),
            WorkbenchEvent::Notice(_) => None,
        }
    }
}

struct WorkbenchInner {
    session: Mutex<Session>,
    client: CartoonClient,
    urls: ObjectUrlRegistry,
    event_tx: broadcast::Sender<WorkbenchEvent>,
    next_notice_id: AtomicU64,
}

/// Cheaply cloneable handle to one upload session
#[derive(Clone)]
pub struct Workbench {
    inner: Arc<WorkbenchInner>,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench {
    pub fn new() -> Self {
        Self::with_client(CartoonClient::new())
    }

    pub fn with_client(client: CartoonClient) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(WorkbenchInner {
                session: Mutex::new(Session::new()),
                client,
                urls: ObjectUrlRegistry::new(),
                event_tx,
                next_notice_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<WorkbenchEvent> {
        self.inner.event_tx.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.session.lock().snapshot()
    }

    /// Registry of display URLs handed out for results
    pub fn object_urls(&self) -> &ObjectUrlRegistry {
        &self.inner.urls
    }

    /// Broadcast a notice and return it.
    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) -> Notice {
        let notice = Notice {
            id: self.inner.next_notice_id.fetch_add(1, Ordering::Relaxed),
            level,
            message: message.into(),
        };
        self.emit(WorkbenchEvent::Notice(notice.clone()));
        notice
    }

    /// Validate `file` and, if accepted, start preview and upload.
    ///
    /// Must be called from within a tokio runtime. A rejected file only
    /// produces an error notice; the session is left untouched.
    pub fn submit(&self, file: UploadedFile, config: &Config) -> CartoonResult<UploadTicket> {
        if let Err(e) = file.validate() {
            warn!(name = %file.name, mime = %file.mime_type, size = file.size(), "Upload rejected: {}", e);
            self.notify(NoticeLevel::Error, e.notice_message());
            return Err(e);
        }

        let generation = self.inner.session.lock().begin(file.name.clone());
        info!(generation, name = %file.name, server = %config.server_url, "Upload started");
        self.emit(WorkbenchEvent::Started { generation });

        let file = Arc::new(file);

        let preview = {
            let this = self.clone();
            let file = file.clone();
            tokio::spawn(async move { this.render_preview(generation, &file).await })
        };

        let request = {
            let this = self.clone();
            let server_url = config.server_url.clone();
            tokio::spawn(async move { this.request_result(generation, &server_url, &file).await })
        };

        Ok(UploadTicket {
            generation,
            preview,
            request,
        })
    }

    /// Save the displayed result to `target` (a file, or a directory to
    /// receive `imgutil.jpeg`).
    pub async fn save_result(&self, target: impl AsRef<Path>) -> CartoonResult<PathBuf> {
        let bytes = self
            .inner
            .session
            .lock()
            .result()
            .map(|r| r.bytes().clone())
            .ok_or(CartoonError::NoResult)?;
        save_result(&bytes, target).await
    }

    /// Clear the session, releasing the current display URL.
    pub fn reset(&self) {
        self.inner.session.lock().reset();
    }

    async fn render_preview(&self, generation: Generation, file: &Arc<UploadedFile>) {
        let file = file.clone();
        let preview = tokio::task::spawn_blocking(move || {
            SourcePreview::from_bytes(&file.mime_type, &file.bytes)
        })
        .await;

        match preview {
            Ok(preview) => {
                if self.inner.session.lock().set_preview(generation, preview) {
                    self.emit(WorkbenchEvent::PreviewReady { generation });
                }
            }
            Err(e) => error!(generation, "Preview rendering failed: {}", e),
        }
    }

    async fn request_result(&self, generation: Generation, server_url: &str, file: &UploadedFile) {
        let outcome = match self.inner.client.cartoonize(server_url, file).await {
            Ok(body) => ResultImage::render(body, &self.inner.urls).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => {
                let caption = result.info().caption();
                if self.inner.session.lock().set_result(generation, result) {
                    info!(generation, %caption, "Result displayed");
                    self.emit(WorkbenchEvent::ResultReady { generation });
                }
            }
            Err(e) => {
                error!(generation, "Cartoonize failed: {}", e);
                if self.inner.session.lock().fail(generation) {
                    self.emit(WorkbenchEvent::Failed {
                        generation,
                        reason: e.to_string(),
                    });
                    self.notify(NoticeLevel::Error, e.notice_message());
                }
            }
        }
    }

    fn emit(&self, event: WorkbenchEvent) {
        // No subscribers is fine
        let _ = self.inner.event_tx.send(event);
    }
}

/// Handles for the two tasks started by one accepted submit
pub struct UploadTicket {
    generation: Generation,
    preview: JoinHandle<()>,
    request: JoinHandle<()>,
}

impl UploadTicket {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Wait for both the preview and the request to settle.
    pub async fn wait(self) -> CartoonResult<()> {
        let (preview, request) = tokio::join!(self.preview, self.request);
        preview.map_err(|e| CartoonError::Task(e.to_string()))?;
        request.map_err(|e| CartoonError::Task(e.to_string()))?;
        Ok(())
    }
}
