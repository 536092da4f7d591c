//! Time-of-day theme coordination for skytone
//!
//! This crate holds everything the UI components need that does not
//! depend on a rendering framework:
//!
//! - **Themes**: [`Theme`] (light, dusk, dark) and [`BackgroundEffect`]
//! - **Automatic selection**: [`DayBands`] maps the wall-clock hour to a theme
//! - **Overrides**: a [`PreferenceStore`] persists the user's explicit choice
//! - **Fade-out**: [`EffectTransition`] delays removal of the cloud layer
//! - **Coordination**: [`ThemeCoordinator`] owns the state, [`ThemeHandle`]
//!   shares it, publishes changes and drives the timers
//! - **Rendering plan**: [`plan_background`] resolves sky colors and cloud layers
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use skytone_core::{MemoryPreferences, SystemClock, ThemeConfig, ThemeHandle};
//!
//! let handle = ThemeHandle::new(
//!     ThemeConfig::default(),
//!     Arc::new(MemoryPreferences::new()),
//!     Arc::new(SystemClock),
//! );
//! handle.start_clock();
//!
//! let mut changes = handle.subscribe();
//! handle.cycle_theme();
//! changes.changed().await?;
//! ```

pub mod clock;
pub mod clouds;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod handle;
pub mod palette;
pub mod preferences;
pub mod schedule;
pub mod theme;
pub mod transition;

pub use clock::{format_clock, Clock, ManualClock, SystemClock, DEFAULT_TIME_FORMAT};
pub use clouds::{
    default_images, plan_background, BackgroundPlan, CloudConfig, CloudLayer, ScrollDirection,
    DEFAULT_SPEEDS,
};
pub use config::{ThemeConfig, DEFAULT_TICK_INTERVAL};
pub use coordinator::{ThemeCoordinator, ThemeState};
pub use error::{ConfigError, PreferenceError, Result, ThemeError};
pub use handle::ThemeHandle;
pub use palette::{resolve_color, ColorTable, EffectColors};
pub use preferences::{
    default_data_dir, load_override, FilePreferences, MemoryPreferences, PreferenceStore,
    DEFAULT_STORAGE_KEY,
};
pub use schedule::DayBands;
pub use theme::{BackgroundEffect, Theme};
pub use transition::{EffectPhase, EffectTransition, FadeTicket, ToggleOutcome, FADE_OUT_DURATION};
