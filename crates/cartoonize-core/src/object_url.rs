//! Display handles for in-memory result blobs.
//!
//! An [`ObjectUrl`] is acquired from an [`ObjectUrlRegistry`] for a blob and
//! revoked when the guard is dropped, so replacing a result or tearing down a
//! session always releases the previous handle. The URL itself is a data URL
//! the webview can render directly.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::trace;

use crate::preview::data_url;

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    blobs: Mutex<HashMap<u64, Bytes>>,
}

/// Tracks every display URL that has not been revoked yet
#[derive(Clone, Default)]
pub struct ObjectUrlRegistry {
    inner: Arc<RegistryInner>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `blob` and hand out a guard that revokes it on drop.
    pub fn acquire(&self, blob: Bytes, mime_type: &str) -> ObjectUrl {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let url = data_url(mime_type, &blob);
        self.inner.blobs.lock().insert(id, blob);
        trace!(id, "Object URL acquired");
        ObjectUrl {
            id,
            url,
            registry: self.clone(),
        }
    }

    /// Number of handles still live
    pub fn live(&self) -> usize {
        self.inner.blobs.lock().len()
    }

    /// Blob behind a live handle id
    pub fn resolve(&self, id: u64) -> Option<Bytes> {
        self.inner.blobs.lock().get(&id).cloned()
    }

    fn revoke(&self, id: u64) {
        if self.inner.blobs.lock().remove(&id).is_some() {
            trace!(id, "Object URL revoked");
        }
    }
}

/// Scoped display URL; revoked when dropped
pub struct ObjectUrl {
    id: u64,
    url: String,
    registry: ObjectUrlRegistry,
}

impl ObjectUrl {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectUrl")
            .field("id", &self.id)
            .field("len", &self.url.len())
            .finish()
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.registry.revoke(self.id);
    }
}
