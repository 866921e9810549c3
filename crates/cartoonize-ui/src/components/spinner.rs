//! Loading placeholder

use dioxus::prelude::*;

/// Spinner with a caption, shown while something is on its way
///
/// ```rust,ignore
/// rsx! { Spinner { label: "Working hard on it....".to_string() } }
/// ```
#[component]
pub fn Spinner(label: String) -> Element {
    rsx! {
        div { class: "spinner-box", role: "status",
            span { "{label}" }
            div { class: "loading-spinner", "aria-hidden": "true" }
        }
    }
}
