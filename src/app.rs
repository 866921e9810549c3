use std::time::Duration;

use cartoonize_core::{Config, Notice, SessionSnapshot, Workbench, WorkbenchEvent};
use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use crate::context::StoreHandle;
use crate::pages::WorkbenchPage;
use crate::theme::GLOBAL_STYLES;

/// How long a notice stays on screen
const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Root application component.
///
/// Provides global styles, the workbench, the configuration loaded from
/// local storage, and keeps the session snapshot in sync with workbench
/// events.
#[component]
pub fn App() -> Element {
    let bench = use_context_provider(Workbench::new);
    let store = use_context_provider(StoreHandle::open);

    let config: Signal<Config> = use_signal(|| store.read());
    let mut session: Signal<SessionSnapshot> = use_signal(SessionSnapshot::default);
    let notices: Signal<Vec<Notice>> = use_signal(Vec::new);

    use_context_provider(|| config);
    use_context_provider(|| session);
    use_context_provider(|| notices);

    // Mirror workbench events into signals
    use_future(move || {
        let bench = bench.clone();
        async move {
            let mut events = bench.subscribe_events();
            loop {
                match events.recv().await {
                    Ok(WorkbenchEvent::Notice(notice)) => show_notice(notices, notice),
                    Ok(event) => {
                        tracing::debug!(?event, "Workbench event");
                        session.set(bench.snapshot());
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Workbench events lagged");
                        session.set(bench.snapshot());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        WorkbenchPage {}
    }
}

/// Push a notice and schedule its removal.
fn show_notice(mut notices: Signal<Vec<Notice>>, notice: Notice) {
    let id = notice.id;
    notices.write().push(notice);

    spawn(async move {
        tokio::time::sleep(NOTICE_DURATION).await;
        notices.write().retain(|n| n.id != id);
    });
}
