//! Visual theme for the Cartoonize Workbench.

mod styles;

pub use styles::GLOBAL_STYLES;
