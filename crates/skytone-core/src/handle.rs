//! Shared, observable coordinator with timer ownership.
//!
//! A [`ThemeHandle`] wraps a [`ThemeCoordinator`], publishes every change
//! on a `watch` channel and runs the two timers: the repeating clock tick
//! and the one-shot fade completion. Timer tasks only hold a weak
//! reference, and all of them are aborted on [`ThemeHandle::shutdown`] or
//! when the last handle is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::ThemeConfig;
use crate::coordinator::{ThemeCoordinator, ThemeState};
use crate::preferences::PreferenceStore;
use crate::theme::Theme;
use crate::transition::{FadeTicket, ToggleOutcome};

/// Cloneable handle to one theme coordinator.
#[derive(Clone)]
pub struct ThemeHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    coordinator: Mutex<ThemeCoordinator>,
    tx: watch::Sender<ThemeState>,
    timers: Mutex<TimerSet>,
    shut_down: AtomicBool,
}

/// Outstanding timer tasks, aborted on drop.
#[derive(Default)]
struct TimerSet {
    clock: Option<JoinHandle<()>>,
    fades: Vec<JoinHandle<()>>,
}

impl TimerSet {
    fn abort_all(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.abort();
        }
        for fade in self.fades.drain(..) {
            fade.abort();
        }
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.abort_all();
    }
}

impl HandleInner {
    /// Mutate and publish under the coordinator lock, so snapshots reach
    /// the channel in the same order as the mutations that produced them.
    fn update<R>(&self, f: impl FnOnce(&mut ThemeCoordinator) -> R) -> R {
        let mut coordinator = self.coordinator.lock();
        let result = f(&mut coordinator);
        let state = coordinator.state();

        self.tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
        drop(coordinator);
        result
    }
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("state", &*self.inner.tx.borrow())
            .field("shut_down", &self.is_shut_down())
            .finish()
    }
}

/// Handles compare by identity.
impl PartialEq for ThemeHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ThemeHandle {
    pub fn new(
        config: ThemeConfig,
        store: Arc<dyn PreferenceStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::from_coordinator(ThemeCoordinator::new(config, store, clock))
    }

    pub fn from_coordinator(coordinator: ThemeCoordinator) -> Self {
        if let Err(e) = coordinator.config().validate() {
            warn!(error = %e, "Theme config is invalid, timer durations are clamped");
        }
        let (tx, _rx) = watch::channel(coordinator.state());
        Self {
            inner: Arc::new(HandleInner {
                coordinator: Mutex::new(coordinator),
                tx,
                timers: Mutex::new(TimerSet::default()),
                shut_down: AtomicBool::new(false),
            }),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> ThemeState {
        self.inner.tx.borrow().clone()
    }

    /// Receive a notification for every state change.
    pub fn subscribe(&self) -> watch::Receiver<ThemeState> {
        self.inner.tx.subscribe()
    }

    pub fn config(&self) -> ThemeConfig {
        self.inner.coordinator.lock().config().clone()
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.shut_down.load(Ordering::SeqCst)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.inner.update(|c| c.set_theme(theme));
    }

    pub fn reset_to_auto(&self) {
        self.inner.update(|c| c.reset_to_auto());
    }

    pub fn cycle_theme(&self) -> Theme {
        self.inner.update(|c| c.cycle_theme())
    }

    /// Refresh the displayed time once.
    pub fn tick(&self) {
        self.inner.update(|c| c.tick());
    }

    /// Show clouds immediately, or start the fade-out and schedule its end.
    pub fn toggle_background_effect(&self) -> ToggleOutcome {
        let outcome = self.inner.update(|c| c.toggle_background_effect());
        if let ToggleOutcome::FadeStarted(ticket) = outcome {
            self.schedule_fade(ticket);
        }
        outcome
    }

    fn schedule_fade(&self, ticket: FadeTicket) {
        let delay = self.inner.coordinator.lock().config().fade_out();

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) if !self.is_shut_down() => runtime,
            Ok(_) => {
                debug!("Handle shut down, completing fade immediately");
                self.inner.update(|c| c.complete_fade(ticket));
                return;
            }
            Err(_) => {
                warn!("No async runtime, completing fade immediately");
                self.inner.update(|c| c.complete_fade(ticket));
                return;
            }
        };

        let weak: Weak<HandleInner> = Arc::downgrade(&self.inner);
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.update(|c| c.complete_fade(ticket));
            }
        });

        let mut timers = self.inner.timers.lock();
        timers.fades.retain(|t| !t.is_finished());
        timers.fades.push(task);
    }

    /// Start the repeating clock refresh. Returns false if it could not start.
    pub fn start_clock(&self) -> bool {
        if self.is_shut_down() {
            return false;
        }

        let mut timers = self.inner.timers.lock();
        if timers.clock.is_some() {
            return true;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("No async runtime, clock refresh disabled");
                return false;
            }
        };

        let period = self.inner.coordinator.lock().config().tick_interval();
        let weak = Arc::downgrade(&self.inner);
        timers.clock = Some(runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                inner.update(|c| c.tick());
            }
        }));

        info!(period_ms = period.as_millis() as u64, "Clock refresh started");
        true
    }

    /// Cancel every timer and settle any fade-out still in flight.
    ///
    /// Later fades complete synchronously.
    pub fn shutdown(&self) {
        if self.inner.shut_down.swap(true, Ordering::SeqCst) {
            return;
        }
        self.inner.timers.lock().abort_all();
        if self.inner.update(|c| c.settle_fade()) {
            debug!("Pending fade-out settled on shutdown");
        }
        info!("Theme timers stopped");
    }
}
