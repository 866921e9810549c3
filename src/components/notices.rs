//! Toast stack for workbench notices.

use cartoonize_core::NoticeLevel;
use cartoonize_ui::{Toast, ToastKind};
use dioxus::prelude::*;

use crate::context::use_notices;

fn toast_kind(level: NoticeLevel) -> ToastKind {
    match level {
        NoticeLevel::Info => ToastKind::Info,
        NoticeLevel::Success => ToastKind::Success,
        NoticeLevel::Error => ToastKind::Error,
    }
}

#[component]
pub fn NoticeStack() -> Element {
    let mut notices = use_notices();

    rsx! {
        div { class: "notice-stack", "aria-live": "polite",
            for notice in notices() {
                Toast {
                    key: "{notice.id}",
                    kind: toast_kind(notice.level),
                    message: notice.message.clone(),
                    on_dismiss: move |_| notices.write().retain(|n| n.id != notice.id),
                }
            }
        }
    }
}
