//! Upload session state.
//!
//! ```text
//! Idle ──submit──▶ Uploading ──result──▶ Displayed
//!   ▲                  │
//!   └─────failure──────┘
//! ```
//!
//! Every accepted submit starts a new generation. Continuations carry the
//! generation they were issued under and are ignored once a newer one has
//! started, so only the latest upload can change what is shown.

use bytes::Bytes;
use tracing::debug;

use crate::preview::SourcePreview;
use crate::result::{ImageInfo, ResultImage};

/// Monotonic upload counter; 0 means "never uploaded"
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing in flight, nothing shown
    #[default]
    Idle,
    /// Request sent, waiting for the server
    Uploading,
    /// Result received and shown
    Displayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Renderable view of a result
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub url: String,
    pub bytes: Bytes,
    pub info: ImageInfo,
}

/// Point-in-time copy of the session for rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub generation: Generation,
    pub phase: Phase,
    pub file_name: Option<String>,
    pub preview_url: Option<String>,
    pub result: Option<ResultView>,
}

impl SessionSnapshot {
    /// The "an upload is in progress" flag
    pub fn is_uploading(&self) -> bool {
        self.phase == Phase::Uploading
    }

    /// Whether any upload has been accepted and not failed since
    pub fn has_session(&self) -> bool {
        self.phase != Phase::Idle
    }
}

#[derive(Debug, Default)]
pub struct Session {
    generation: Generation,
    phase: Phase,
    file_name: Option<String>,
    preview: Option<SourcePreview>,
    result: Option<ResultImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&ResultImage> {
        self.result.as_ref()
    }

    /// Start a new upload: clear preview and result, mark in progress.
    pub fn begin(&mut self, file_name: impl Into<String>) -> Generation {
        self.generation += 1;
        self.phase = Phase::Uploading;
        self.file_name = Some(file_name.into());
        self.preview = None;
        self.result = None;
        debug!(generation = self.generation, "Upload session started");
        self.generation
    }

    /// Whether continuations of `generation` may still change state.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation && self.phase != Phase::Idle
    }

    /// Returns `false` (and changes nothing) for stale generations.
    pub fn set_preview(&mut self, generation: Generation, preview: SourcePreview) -> bool {
        if !self.is_current(generation) {
            debug!(generation, current = self.generation, "Dropping stale preview");
            return false;
        }
        self.preview = Some(preview);
        true
    }

    /// Returns `false` for stale generations; the rejected result is dropped
    /// and its display URL released.
    pub fn set_result(&mut self, generation: Generation, result: ResultImage) -> bool {
        if !self.is_current(generation) {
            debug!(generation, current = self.generation, "Dropping stale result");
            return false;
        }
        self.result = Some(result);
        self.phase = Phase::Displayed;
        true
    }

    /// Abandon the upload of `generation` and go back to idle.
    pub fn fail(&mut self, generation: Generation) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.reset();
        true
    }

    /// Drop everything shown, keeping the generation counter.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.file_name = None;
        self.preview = None;
        self.result = None;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            generation: self.generation,
            phase: self.phase,
            file_name: self.file_name.clone(),
            preview_url: self.preview.as_ref().map(|p| p.url().to_string()),
            result: self.result.as_ref().map(|r| ResultView {
                url: r.url().as_str().to_string(),
                bytes: r.bytes().clone(),
                info: r.info(),
            }),
        }
    }
}
