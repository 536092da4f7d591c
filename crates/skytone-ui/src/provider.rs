//! Theme provider and the `use_theme` accessor.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use skytone_core::{
    BackgroundEffect, Clock, FilePreferences, PreferenceStore, SystemClock, Theme, ThemeConfig,
    ThemeError, ThemeHandle, ThemeState, ToggleOutcome,
};

use crate::styles::FADE_VAR;

/// Preference store prop; compares by pointer identity.
#[derive(Clone)]
pub struct StoreRef(pub Arc<dyn PreferenceStore>);

impl StoreRef {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self(Arc::new(store))
    }
}

impl PartialEq for StoreRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Clock prop; compares by pointer identity.
#[derive(Clone)]
pub struct ClockRef(pub Arc<dyn Clock>);

impl ClockRef {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Arc::new(clock))
    }
}

impl PartialEq for ClockRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Theme state and operations shared with a provider's subtree.
///
/// The accessors read a signal that the provider refreshes from the
/// handle's change feed on its next poll, so a read in the same handler
/// as a mutation still returns the previous value. Use
/// `handle().state()` when the post-mutation snapshot is needed at once.
#[derive(Clone)]
pub struct ThemeContext {
    state: Signal<ThemeState>,
    handle: ThemeHandle,
    config: ThemeConfig,
}

impl ThemeContext {
    /// Full snapshot as of the last render; subscribes the calling component.
    pub fn state(&self) -> ThemeState {
        self.state.read().clone()
    }

    pub fn theme(&self) -> Theme {
        self.state.read().theme
    }

    pub fn background_effect(&self) -> BackgroundEffect {
        self.state.read().background_effect
    }

    pub fn is_animating(&self) -> bool {
        self.state.read().is_animating
    }

    pub fn current_time(&self) -> String {
        self.state.read().current_time.clone()
    }

    pub fn is_user_controlled(&self) -> bool {
        self.state.read().is_user_controlled
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn fade_out(&self) -> Duration {
        self.config.fade_out()
    }

    pub fn handle(&self) -> &ThemeHandle {
        &self.handle
    }

    pub fn set_theme(&self, theme: Theme) {
        self.handle.set_theme(theme);
    }

    pub fn cycle_theme(&self) -> Theme {
        self.handle.cycle_theme()
    }

    pub fn reset_to_auto(&self) {
        self.handle.reset_to_auto();
    }

    pub fn toggle_background_effect(&self) -> ToggleOutcome {
        self.handle.toggle_background_effect()
    }
}

/// Theme state for the enclosing [`ThemeProvider`].
///
/// # Panics
///
/// Panics when called outside a provider's subtree.
pub fn use_theme() -> ThemeContext {
    match try_use_theme() {
        Ok(ctx) => ctx,
        Err(e) => panic!("{e}"),
    }
}

/// Like [`use_theme`], but reports a missing provider as an error.
pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    try_use_context::<ThemeContext>().ok_or(ThemeError::OutsideProvider)
}

/// Owns the theme coordinator for its children.
///
/// The coordinator is created at mount from `config`, `store` (default:
/// `preferences.json` in the user data directory) and `clock` (default:
/// system time). Its timers stop when the provider unmounts.
#[component]
pub fn ThemeProvider(
    config: Option<ThemeConfig>,
    store: Option<StoreRef>,
    clock: Option<ClockRef>,
    children: Element,
) -> Element {
    let handle = use_hook(|| {
        let config = config.unwrap_or_default();
        let store: Arc<dyn PreferenceStore> = match store {
            Some(StoreRef(store)) => store,
            None => Arc::new(FilePreferences::in_data_dir()),
        };
        let clock: Arc<dyn Clock> = match clock {
            Some(ClockRef(clock)) => clock,
            None => Arc::new(SystemClock),
        };

        let handle = ThemeHandle::new(config, store, clock);
        handle.start_clock();
        handle
    });

    let state = use_signal(|| handle.state());

    // Mirror coordinator changes into the signal
    let watched = handle.clone();
    use_future(move || {
        let handle = watched.clone();
        let mut state = state;
        async move {
            let mut rx = handle.subscribe();
            loop {
                let snapshot = rx.borrow_and_update().clone();
                if *state.peek() != snapshot {
                    state.set(snapshot);
                }
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let teardown = handle.clone();
    use_drop(move || teardown.shutdown());

    let ctx = use_context_provider(|| ThemeContext {
        state,
        config: handle.config(),
        handle: handle.clone(),
    });

    let theme = ctx.theme();
    let fade_ms = ctx.fade_out().as_millis();

    rsx! {
        div {
            class: "skytone-root {theme}",
            "data-theme": "{theme}",
            style: "{FADE_VAR}: {fade_ms}ms",
            {children}
        }
    }
}
