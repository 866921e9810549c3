//! Reusable UI components

mod button;
mod input;
mod spinner;
mod toast;

pub use button::*;
pub use input::*;
pub use spinner::*;
pub use toast::*;
