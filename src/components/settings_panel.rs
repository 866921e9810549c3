//! Settings Panel Component
//!
//! Modal editor over a staging copy of the configuration. Edits touch only
//! the copy; OK commits it to local storage and makes it active, Cancel
//! throws it away.

use cartoonize_core::NoticeLevel;
use cartoonize_ui::{Button, ButtonVariant, CloseButton, TextInput};
use dioxus::prelude::*;

use crate::context::{use_config, use_config_store, use_workbench};

/// Settings modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if show_settings() {
///         SettingsPanel { on_close: move |_| show_settings.set(false) }
///     }
/// }
/// ```
#[component]
pub fn SettingsPanel(
    /// Called after commit or cancel
    on_close: EventHandler<()>,
) -> Element {
    let mut config = use_config();
    let store = use_config_store();
    let bench = use_workbench();

    // Staging copy, taken when the panel opens
    let mut staging = use_signal(|| config.peek().clone());

    let commit = move |_| {
        let next = staging();
        match &store.0 {
            Some(store) => match store.write(next.into()) {
                Ok(saved) => config.set(saved),
                Err(e) => {
                    tracing::error!("Failed to save settings: {}", e);
                    bench.notify(NoticeLevel::Error, format!("Failed to save settings: {}", e));
                }
            },
            None => {
                tracing::warn!("No local storage, settings kept for this session only");
                config.set(next);
            }
        }
        on_close.call(());
    };

    let cancel = move |_| on_close.call(());

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "settings-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "Settings" }
                    CloseButton { onclick: cancel }
                }

                TextInput {
                    id: "server-url".to_string(),
                    label: "Server URL".to_string(),
                    placeholder: "http://localhost:5000".to_string(),
                    value: staging().server_url,
                    oninput: move |url: String| staging.write().server_url = url,
                    autofocus: true,
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: cancel,
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: commit,
                        "OK"
                    }
                }
            }
        }
    }
}
