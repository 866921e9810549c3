//! Title bar with the settings toggle.

use cartoonize_ui::IconButton;
use dioxus::prelude::*;

use super::SettingsPanel;

#[component]
pub fn AppHeader() -> Element {
    let mut show_settings = use_signal(|| false);

    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "Cartoonize Image" }
            span { class: "spacer" }
            IconButton {
                onclick: move |_| show_settings.set(!show_settings()),
                aria_label: "Settings".to_string(),
                class: "settings-btn".to_string(),
                "⚙"
            }
        }

        // Mounted only while open so each opening stages a fresh copy
        if show_settings() {
            SettingsPanel { on_close: move |_| show_settings.set(false) }
        }
    }
}
