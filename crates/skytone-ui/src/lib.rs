//! Dioxus components for skytone.
//!
//! Wrap the app in a [`ThemeProvider`], then place any of the controls
//! below it. [`use_theme`] gives components access to the shared state.

pub mod cloud_animation;
pub mod cloud_toggle;
pub mod provider;
pub mod styles;
pub mod theme_toggle;

pub use cloud_animation::CloudAnimation;
pub use cloud_toggle::{cloud_toggle_title, ButtonSize, ButtonVariant, CloudToggleButton};
pub use provider::{try_use_theme, use_theme, ClockRef, StoreRef, ThemeContext, ThemeProvider};
pub use styles::{animations_css, stylesheet, FADE_VAR};
pub use theme_toggle::{theme_icon, theme_toggle_title, ThemeToggle};

pub use skytone_core::{BackgroundEffect, ColorTable, Theme, ThemeConfig, ThemeState};
