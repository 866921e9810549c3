//! Cartoonize Workbench UI Components
//!
//! Small Dioxus widgets shared by the desktop app: buttons, a labelled text
//! input, a loading spinner and toast notices. Class names match the global
//! stylesheet shipped by the app.

pub mod components;

pub use components::*;
