//! UI Components for the Cartoonize Workbench.

mod header;
mod notices;
mod panes;
mod settings_panel;
mod upload_button;

pub use header::AppHeader;
pub use notices::NoticeStack;
pub use panes::{ResultPane, SourcePane};
pub use settings_panel::SettingsPanel;
pub use upload_button::UploadButton;
