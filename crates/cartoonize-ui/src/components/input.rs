//! Labelled text input

use dioxus::prelude::*;

use super::button::class_list;

/// Properties for the TextInput component
#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    pub value: String,
    /// Called with the full new value on every keystroke
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Used to associate the label; required when `label` is set
    #[props(default)]
    pub id: Option<String>,
    #[props(default = false)]
    pub autofocus: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text field
///
/// # Example
///
/// ```rust,ignore
/// let mut url = use_signal(String::new);
///
/// rsx! {
///     TextInput {
///         value: url(),
///         oninput: move |s| url.set(s),
///         label: "Server URL".to_string(),
///         id: "server-url".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let id = props.id.clone().unwrap_or_default();
    let input_class = class_list("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(text) = &props.label {
                label { class: "input-label", r#for: "{id}", "{text}" }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autofocus: props.autofocus,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
