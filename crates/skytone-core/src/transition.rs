//! Fade-out state machine for the cloud background.
//!
//! Showing clouds is immediate. Hiding them goes through a timed
//! `FadingOut` phase so the exit animation can play before the layer is
//! removed. The timer and the CSS animation both use [`FADE_OUT_DURATION`].

use std::time::Duration;

use crate::theme::BackgroundEffect;

/// Length of the cloud fade-out, shared by the timer and the stylesheet.
pub const FADE_OUT_DURATION: Duration = Duration::from_millis(1000);

/// Identifies one fade-out; stale tickets are ignored on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadeTicket(u64);

impl FadeTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Phase of the background effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EffectPhase {
    #[default]
    SteadyDefault,
    SteadyClouds,
    /// Clouds still rendered, marked as exiting.
    FadingOut { ticket: FadeTicket },
}

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Clouds shown immediately.
    Shown,
    /// Fade-out started; complete it with this ticket after the delay.
    FadeStarted(FadeTicket),
    /// A fade-out is already running.
    Ignored,
}

/// Two-phase effect machine with a generation counter.
#[derive(Debug, Clone, Default)]
pub struct EffectTransition {
    phase: EffectPhase,
    generation: u64,
}

impl EffectTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EffectPhase {
        self.phase
    }

    /// Effect currently rendered. Clouds remain visible while fading.
    pub fn effect(&self) -> BackgroundEffect {
        match self.phase {
            EffectPhase::SteadyDefault => BackgroundEffect::Default,
            EffectPhase::SteadyClouds | EffectPhase::FadingOut { .. } => BackgroundEffect::Clouds,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, EffectPhase::FadingOut { .. })
    }

    /// Ticket of the fade-out in progress.
    pub fn pending_fade(&self) -> Option<FadeTicket> {
        match self.phase {
            EffectPhase::FadingOut { ticket } => Some(ticket),
            _ => None,
        }
    }

    pub fn begin_toggle(&mut self) -> ToggleOutcome {
        match self.phase {
            EffectPhase::SteadyDefault => {
                self.phase = EffectPhase::SteadyClouds;
                ToggleOutcome::Shown
            }
            EffectPhase::SteadyClouds => {
                self.generation += 1;
                let ticket = FadeTicket(self.generation);
                self.phase = EffectPhase::FadingOut { ticket };
                ToggleOutcome::FadeStarted(ticket)
            }
            EffectPhase::FadingOut { .. } => ToggleOutcome::Ignored,
        }
    }

    /// Finish the fade identified by `ticket`. Returns false for stale tickets.
    pub fn complete_fade(&mut self, ticket: FadeTicket) -> bool {
        match self.phase {
            EffectPhase::FadingOut { ticket: current } if current == ticket => {
                self.phase = EffectPhase::SteadyDefault;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_is_immediate() {
        let mut t = EffectTransition::new();
        assert_eq!(t.begin_toggle(), ToggleOutcome::Shown);
        assert_eq!(t.effect(), BackgroundEffect::Clouds);
        assert!(!t.is_animating());
    }

    #[test]
    fn test_fade_keeps_clouds_until_completed() {
        let mut t = EffectTransition::new();
        t.begin_toggle();

        let ToggleOutcome::FadeStarted(ticket) = t.begin_toggle() else {
            panic!("expected fade to start");
        };
        assert!(t.is_animating());
        assert_eq!(t.effect(), BackgroundEffect::Clouds);

        assert!(t.complete_fade(ticket));
        assert_eq!(t.phase(), EffectPhase::SteadyDefault);
        assert!(!t.is_animating());
    }

    #[test]
    fn test_toggle_during_fade_is_ignored() {
        let mut t = EffectTransition::new();
        t.begin_toggle();
        let first = t.begin_toggle();
        assert_eq!(t.begin_toggle(), ToggleOutcome::Ignored);
        assert_eq!(t.phase(), match first {
            ToggleOutcome::FadeStarted(ticket) => EffectPhase::FadingOut { ticket },
            other => panic!("unexpected {other:?}"),
        });
    }

    #[test]
    fn test_stale_ticket_is_noop() {
        let mut t = EffectTransition::new();
        t.begin_toggle();
        let ToggleOutcome::FadeStarted(old) = t.begin_toggle() else {
            panic!("expected fade to start");
        };
        assert!(t.complete_fade(old));

        // Show again and start a second fade
        t.begin_toggle();
        let ToggleOutcome::FadeStarted(new) = t.begin_toggle() else {
            panic!("expected fade to start");
        };
        assert_ne!(old, new);

        assert!(!t.complete_fade(old));
        assert!(t.is_animating());
        assert!(t.complete_fade(new));
        assert!(!t.complete_fade(new));
    }
}
