//! Image Upload Button
//!
//! Opens the native file picker and hands the chosen file to the workbench.
//! Files rejected by type or size are reported without being read.

use cartoonize_core::{NoticeLevel, UploadedFile};
use cartoonize_ui::{Button, ButtonVariant};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::{use_config, use_workbench};

#[component]
pub fn UploadButton(
    /// Whether any upload was accepted before (changes the label)
    has_uploaded: bool,
    /// An upload is in flight
    #[props(default = false)]
    busy: bool,
) -> Element {
    let bench = use_workbench();
    let config = use_config();
    let mut picking = use_signal(|| false);

    let handle_pick = move |_| {
        let bench = bench.clone();
        picking.set(true);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg"])
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;
            picking.set(false);

            match file_path {
                Ok(Some(path)) => match UploadedFile::from_path(&path).await {
                    Ok(file) => {
                        // Rejections are reported through a workbench notice
                        let _ = bench.submit(file, &config.peek());
                    }
                    Err(e) if e.is_validation() => {
                        tracing::warn!(?path, "Upload rejected: {}", e);
                        bench.notify(NoticeLevel::Error, e.notice_message());
                    }
                    Err(e) => {
                        tracing::error!(?path, "Failed to read image: {}", e);
                        bench.notify(NoticeLevel::Error, format!("Failed to read image: {}", e));
                    }
                },
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    bench.notify(NoticeLevel::Error, format!("File picker error: {}", e));
                }
            }
        });
    };

    let label = if has_uploaded {
        "Upload another image?"
    } else {
        "Upload an image"
    };

    rsx! {
        div { class: "upload-row",
            Button {
                variant: ButtonVariant::Primary,
                class: "upload-btn".to_string(),
                onclick: handle_pick,
                disabled: picking(),
                "⬆ {label}"
            }
            if busy {
                span { class: "upload-status", "Uploading…" }
            }
        }
    }
}
