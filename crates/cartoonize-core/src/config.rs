//! Persistent configuration backed by a small local key/value store.
//!
//! The store is a single JSON object on disk (`local_storage.json`) whose
//! values are strings, mirroring the semantics of browser local storage.
//! The workbench configuration lives under the fixed key [`CONFIG_KEY`].
//!
//! Configuration is never a global: callers [`ConfigStore::read`] it once at
//! startup, pass the [`Config`] value to the operations that need it, and
//! [`ConfigStore::write`] a [`ConfigPatch`] on explicit commit.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::CartoonResult;

/// File name of the key/value store inside the data directory
pub const STORAGE_FILE: &str = "local_storage.json";

/// Key under which the configuration record is stored
pub const CONFIG_KEY: &str = "config";

/// Server used until the user commits another one
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Default data directory shared by the desktop app and the CLI
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cartoonize")
}

/// Workbench configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the cartoonize server, e.g. `http://localhost:5000`
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Config {
    /// Return a copy with every field present in `patch` replaced.
    pub fn merged(&self, patch: &ConfigPatch) -> Self {
        let mut next = self.clone();
        if let Some(url) = &patch.server_url {
            next.server_url = url.clone();
        }
        next
    }
}

/// Partial configuration; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub server_url: Option<String>,
}

impl ConfigPatch {
    pub fn server_url(url: impl Into<String>) -> Self {
        Self {
            server_url: Some(url.into()),
        }
    }
}

impl From<Config> for ConfigPatch {
    fn from(config: Config) -> Self {
        Self {
            server_url: Some(config.server_url),
        }
    }
}

/// String key/value store persisted as one JSON object.
///
/// Every mutation is flushed to disk before returning.
#[derive(Clone)]
pub struct LocalStorage {
    path: PathBuf,
    items: Arc<RwLock<BTreeMap<String, String>>>,
}

impl LocalStorage {
    /// Open (or create) the store inside `data_dir`.
    ///
    /// A missing file is an empty store. A corrupt file is logged and
    /// treated as empty; it is overwritten on the next write.
    pub fn open(data_dir: impl AsRef<Path>) -> CartoonResult<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(STORAGE_FILE);

        let items = match std::fs::read(&path) {
            Ok(raw) => match serde_json::from_slice(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!(?path, "Ignoring unreadable local storage: {}", e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(?path, entries = items.len(), "Opened local storage");
        Ok(Self {
            path,
            items: Arc::new(RwLock::new(items)),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    /// Store `value` under `key`. Memory is only updated once the file is.
    pub fn set_item(&self, key: &str, value: impl Into<String>) -> CartoonResult<()> {
        let mut items = self.items.write();
        let mut next = items.clone();
        next.insert(key.to_string(), value.into());
        self.flush(&next)?;
        *items = next;
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> CartoonResult<()> {
        let mut items = self.items.write();
        if !items.contains_key(key) {
            return Ok(());
        }
        let mut next = items.clone();
        next.remove(key);
        self.flush(&next)?;
        *items = next;
        Ok(())
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> CartoonResult<()> {
        let raw = serde_json::to_vec_pretty(items)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Reads and writes the [`Config`] record in [`LocalStorage`]
#[derive(Clone)]
pub struct ConfigStore {
    storage: LocalStorage,
}

impl ConfigStore {
    pub fn open(data_dir: impl AsRef<Path>) -> CartoonResult<Self> {
        Ok(Self {
            storage: LocalStorage::open(data_dir)?,
        })
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Stored configuration, or the default when nothing usable is stored.
    pub fn read(&self) -> Config {
        let Some(raw) = self.storage.get_item(CONFIG_KEY) else {
            return Config::default();
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Stored config is unreadable, using defaults: {}", e);
                Config::default()
            }
        }
    }

    /// Merge `patch` into the stored configuration and persist it.
    ///
    /// The server URL is stored as given; a malformed URL only shows up
    /// later as a failed request.
    pub fn write(&self, patch: ConfigPatch) -> CartoonResult<Config> {
        let next = self.read().merged(&patch);
        self.storage
            .set_item(CONFIG_KEY, serde_json::to_string(&next)?)?;
        info!(server_url = %next.server_url, "Configuration saved");
        Ok(next)
    }
}
