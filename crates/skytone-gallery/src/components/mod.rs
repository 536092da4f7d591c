//! UI components for the gallery.

mod gallery;
mod status_panel;

pub use gallery::*;
pub use status_panel::*;
