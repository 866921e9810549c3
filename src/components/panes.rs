//! Source and result panes.
//!
//! Each pane shows a spinner until its image is ready: the local preview and
//! the server result arrive independently, in either order.

use cartoonize_core::{NoticeLevel, ResultView, DOWNLOAD_FILE_NAME};
use cartoonize_ui::{Button, ButtonVariant, Spinner};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::use_workbench;

#[component]
pub fn SourcePane(preview_url: Option<String>, file_name: Option<String>) -> Element {
    let caption = file_name.unwrap_or_default();

    rsx! {
        figure { class: "pane",
            figcaption { class: "pane__title", "Original" }
            if let Some(url) = preview_url {
                img { class: "img-container", src: "{url}", alt: "{caption}" }
                p { class: "pane__caption", "{caption}" }
            } else {
                Spinner { label: "Loading image....".to_string() }
            }
        }
    }
}

#[component]
pub fn ResultPane(result: Option<ResultView>) -> Element {
    let bench = use_workbench();
    let mut saving = use_signal(|| false);

    let handle_download = move |_| {
        let bench = bench.clone();
        saving.set(true);

        spawn(async move {
            let target = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .set_file_name(DOWNLOAD_FILE_NAME)
                    .set_title("Save Image")
                    .save_file()
            })
            .await;

            match target {
                Ok(Some(path)) => match bench.save_result(&path).await {
                    Ok(saved) => {
                        bench.notify(NoticeLevel::Success, format!("Saved {}", saved.display()));
                    }
                    Err(e) => {
                        tracing::error!(?path, "Download failed: {}", e);
                        bench.notify(NoticeLevel::Error, format!("Download failed: {}", e));
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    bench.notify(NoticeLevel::Error, format!("File dialog error: {}", e));
                }
            }
            saving.set(false);
        });
    };

    let caption = result
        .as_ref()
        .map(|r| r.info.caption())
        .unwrap_or_default();

    rsx! {
        figure { class: "pane",
            figcaption { class: "pane__title", "Cartoon" }
            if let Some(result) = result {
                img { class: "img-container", src: "{result.url}", alt: "Cartoonized image" }
                div { class: "pane__footer",
                    p { class: "pane__caption", "{caption}" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_download,
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Download" }
                    }
                }
            } else {
                Spinner { label: "Working hard on it....".to_string() }
            }
        }
    }
}
