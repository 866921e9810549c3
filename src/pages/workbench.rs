//! The single workbench page: upload button, source and result panes.

use dioxus::prelude::*;

use crate::components::{AppHeader, NoticeStack, ResultPane, SourcePane, UploadButton};
use crate::context::use_session;

#[component]
pub fn WorkbenchPage() -> Element {
    let session = use_session();
    let snapshot = session();

    rsx! {
        main { class: "workbench",
            AppHeader {}

            UploadButton { has_uploaded: snapshot.generation > 0, busy: snapshot.is_uploading() }

            if snapshot.has_session() {
                section { class: "panes",
                    SourcePane { preview_url: snapshot.preview_url.clone(), file_name: snapshot.file_name.clone() }
                    ResultPane { result: snapshot.result.clone() }
                }
            }

            NoticeStack {}
        }
    }
}
