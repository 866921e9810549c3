//! Shared state for the desktop app.
//!
//! The root [`App`](crate::app::App) provides these contexts; components read
//! them through the `use_*` hooks below.
//!
//! ```ignore
//! let bench = use_workbench();
//! let config = use_config();
//!
//! bench.submit(file, &config())?;
//! ```

use std::path::PathBuf;

use cartoonize_core::{Config, ConfigStore, Notice, SessionSnapshot, Workbench};
use dioxus::prelude::*;

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Persistent config store, absent when the data directory is unusable.
///
/// Without a store the app still works; committed settings then only last
/// until the window closes.
#[derive(Clone)]
pub struct StoreHandle(pub Option<ConfigStore>);

impl StoreHandle {
    pub fn open() -> Self {
        let data_dir = get_data_dir();
        match ConfigStore::open(&data_dir) {
            Ok(store) => Self(Some(store)),
            Err(e) => {
                tracing::error!(?data_dir, "Failed to open local storage: {}", e);
                Self(None)
            }
        }
    }

    /// Stored configuration, or defaults without a store.
    pub fn read(&self) -> Config {
        self.0.as_ref().map(ConfigStore::read).unwrap_or_default()
    }
}

/// The upload workbench driving previews and server requests.
pub fn use_workbench() -> Workbench {
    use_context::<Workbench>()
}

pub fn use_config_store() -> StoreHandle {
    use_context::<StoreHandle>()
}

/// Active configuration. Changes only when settings are committed.
pub fn use_config() -> Signal<Config> {
    use_context::<Signal<Config>>()
}

/// Latest session snapshot, refreshed on every workbench event.
pub fn use_session() -> Signal<SessionSnapshot> {
    use_context::<Signal<SessionSnapshot>>()
}

/// Notices currently on screen, oldest first.
pub fn use_notices() -> Signal<Vec<Notice>> {
    use_context::<Signal<Vec<Notice>>>()
}
