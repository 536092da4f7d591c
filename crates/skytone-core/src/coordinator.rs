//! Single source of truth for theme and background-effect state.
//!
//! [`ThemeCoordinator`] is synchronous and owns no timers: the delayed
//! fade completion and the periodic clock refresh are driven from outside
//! (see [`ThemeHandle`](crate::ThemeHandle)).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::{format_clock, Clock};
use crate::config::ThemeConfig;
use crate::preferences::{load_override, PreferenceStore};
use crate::theme::{BackgroundEffect, Theme};
use crate::transition::{EffectTransition, FadeTicket, ToggleOutcome};

/// Snapshot of the shared theme state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme: Theme,
    pub background_effect: BackgroundEffect,
    /// True while the cloud layer plays its fade-out.
    pub is_animating: bool,
    pub current_time: String,
    /// True iff a persisted user override exists.
    pub is_user_controlled: bool,
}

pub struct ThemeCoordinator {
    config: ThemeConfig,
    store: Arc<dyn PreferenceStore>,
    clock: Arc<dyn Clock>,
    theme: Theme,
    is_user_controlled: bool,
    transition: EffectTransition,
    current_time: String,
}

impl std::fmt::Debug for ThemeCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeCoordinator")
            .field("theme", &self.theme)
            .field("is_user_controlled", &self.is_user_controlled)
            .field("phase", &self.transition.phase())
            .field("current_time", &self.current_time)
            .finish_non_exhaustive()
    }
}

impl ThemeCoordinator {
    /// Initialize from the persisted override, else from the current hour.
    pub fn new(
        config: ThemeConfig,
        store: Arc<dyn PreferenceStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let saved = load_override(store.as_ref(), &config.storage_key);
        let (theme, is_user_controlled) = match saved {
            Some(theme) => (theme, true),
            None => (config.bands.theme_for_hour(clock.hour()), false),
        };
        let current_time = format_clock(clock.now(), &config.time_format);

        info!(%theme, user_controlled = is_user_controlled, "Theme initialized");

        Self {
            config,
            store,
            clock,
            theme,
            is_user_controlled,
            transition: EffectTransition::new(),
            current_time,
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn background_effect(&self) -> BackgroundEffect {
        self.transition.effect()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    pub fn is_user_controlled(&self) -> bool {
        self.is_user_controlled
    }

    pub fn current_time(&self) -> &str {
        &self.current_time
    }

    pub fn state(&self) -> ThemeState {
        ThemeState {
            theme: self.theme,
            background_effect: self.transition.effect(),
            is_animating: self.transition.is_animating(),
            current_time: self.current_time.clone(),
            is_user_controlled: self.is_user_controlled,
        }
    }

    /// Theme the clock alone would choose right now.
    pub fn automatic_theme(&self) -> Theme {
        self.config.bands.theme_for_hour(self.clock.hour())
    }

    /// Apply and persist a user override.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        let changed = self.theme != theme || !self.is_user_controlled;
        self.theme = theme;
        self.is_user_controlled = true;

        if let Err(e) = self.store.set(&self.config.storage_key, theme.as_str()) {
            warn!(%theme, error = %e, "Failed to persist theme preference");
        }
        debug!(%theme, "Theme set by user");
        changed
    }

    /// Drop the override and re-derive the theme from the clock now.
    pub fn reset_to_auto(&mut self) -> bool {
        if let Err(e) = self.store.remove(&self.config.storage_key) {
            warn!(error = %e, "Failed to clear theme preference");
        }

        let theme = self.automatic_theme();
        let changed = self.theme != theme || self.is_user_controlled;
        self.theme = theme;
        self.is_user_controlled = false;
        debug!(%theme, "Theme reset to automatic");
        changed
    }

    /// Advance dark → light → dusk → dark; always sets an override.
    pub fn cycle_theme(&mut self) -> Theme {
        let next = self.theme.next();
        self.set_theme(next);
        next
    }

    pub fn toggle_background_effect(&mut self) -> ToggleOutcome {
        let outcome = self.transition.begin_toggle();
        match outcome {
            ToggleOutcome::Shown => debug!("Cloud effect shown"),
            ToggleOutcome::FadeStarted(ticket) => {
                debug!(generation = ticket.generation(), "Cloud fade-out started")
            }
            ToggleOutcome::Ignored => debug!("Toggle ignored during fade-out"),
        }
        outcome
    }

    /// Finish a fade-out. Stale tickets leave the state alone.
    pub fn complete_fade(&mut self, ticket: FadeTicket) -> bool {
        let done = self.transition.complete_fade(ticket);
        if done {
            debug!(generation = ticket.generation(), "Cloud fade-out complete");
        }
        done
    }

    /// Complete the running fade-out, if any, without waiting for its timer.
    pub fn settle_fade(&mut self) -> bool {
        match self.transition.pending_fade() {
            Some(ticket) => self.complete_fade(ticket),
            None => false,
        }
    }

    /// Refresh the displayed time. Never touches the theme.
    pub fn tick(&mut self) -> bool {
        let now = format_clock(self.clock.now(), &self.config.time_format);
        if now == self.current_time {
            return false;
        }
        self.current_time = now;
        true
    }
}
