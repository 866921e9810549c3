//! Toast notices
//!
//! Transient messages stacked in a corner of the window. The owner decides
//! when a toast goes away; this component only renders it and reports the
//! dismiss click.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✓",
            ToastKind::Error => "⚠",
        }
    }
}

#[component]
pub fn Toast(kind: ToastKind, message: String, on_dismiss: EventHandler<()>) -> Element {
    let icon = kind.icon();

    rsx! {
        div {
            class: kind.class(),
            role: if kind == ToastKind::Error { "alert" } else { "status" },
            onclick: move |_| on_dismiss.call(()),
            span { class: "toast__icon", "{icon}" }
            span { class: "toast__message", "{message}" }
        }
    }
}
