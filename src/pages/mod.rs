//! Page components for the Cartoonize Workbench.

mod workbench;

pub use workbench::WorkbenchPage;
