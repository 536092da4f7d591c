//! Provider scoping tests for skytone-ui
//!
//! These tests mount small component trees in a `VirtualDom` and record
//! what `try_use_theme` returns inside and outside a provider.

use std::cell::RefCell;

use dioxus::prelude::*;
use skytone_core::{BackgroundEffect, ManualClock, MemoryPreferences, PreferenceStore, Theme, DEFAULT_STORAGE_KEY};
use skytone_ui::{try_use_theme, use_theme, ClockRef, StoreRef, ThemeProvider};

type Seen = Result<(Theme, bool), String>;

thread_local! {
    static SEEN: RefCell<Vec<Seen>> = const { RefCell::new(Vec::new()) };
}

thread_local! {
    static AFTER_TOGGLE: RefCell<Option<(BackgroundEffect, BackgroundEffect)>> =
        const { RefCell::new(None) };
}

fn take_seen() -> Vec<Seen> {
    SEEN.with(|seen| seen.borrow_mut().drain(..).collect())
}

#[component]
fn ThemeReader() -> Element {
    let result = try_use_theme()
        .map(|ctx| (ctx.theme(), ctx.is_user_controlled()))
        .map_err(|e| e.to_string());
    SEEN.with(|seen| seen.borrow_mut().push(result));
    rsx! {}
}

#[component]
fn StrictThemeReader() -> Element {
    let ctx = use_theme();
    SEEN.with(|seen| seen.borrow_mut().push(Ok((ctx.theme(), ctx.is_user_controlled()))));
    rsx! {}
}

fn bare_strict_app() -> Element {
    rsx! { StrictThemeReader {} }
}

/// Toggles once and records (context view, handle view) right after.
#[component]
fn ToggleReader() -> Element {
    let ctx = use_theme();
    use_hook(|| {
        ctx.toggle_background_effect();
        let seen = (ctx.background_effect(), ctx.handle().state().background_effect);
        AFTER_TOGGLE.with(|slot| *slot.borrow_mut() = Some(seen));
    });
    rsx! {}
}

fn toggle_app() -> Element {
    rsx! {
        ThemeProvider {
            store: StoreRef::new(MemoryPreferences::new()),
            clock: ClockRef::new(ManualClock::at_hour(9)),
            ToggleReader {}
        }
    }
}

fn bare_app() -> Element {
    rsx! { ThemeReader {} }
}

fn automatic_app() -> Element {
    rsx! {
        ThemeProvider {
            store: StoreRef::new(MemoryPreferences::new()),
            clock: ClockRef::new(ManualClock::at_hour(15)),
            ThemeReader {}
        }
    }
}

fn saved_app() -> Element {
    let store = MemoryPreferences::new();
    store.set(DEFAULT_STORAGE_KEY, "light").ok();

    rsx! {
        ThemeProvider {
            store: StoreRef::new(store),
            clock: ClockRef::new(ManualClock::at_hour(23)),
            ThemeReader {}
        }
    }
}

#[test]
fn test_outside_provider_is_an_error() {
    let mut dom = VirtualDom::new(bare_app);
    dom.rebuild_in_place();

    let seen = take_seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        Err("use_theme must be used within a ThemeProvider".to_string())
    );
}

#[test]
fn test_provider_supplies_automatic_theme() {
    let mut dom = VirtualDom::new(automatic_app);
    dom.rebuild_in_place();

    assert_eq!(take_seen(), vec![Ok((Theme::Dusk, false))]);
}

#[test]
fn test_provider_supplies_saved_theme() {
    let mut dom = VirtualDom::new(saved_app);
    dom.rebuild_in_place();

    assert_eq!(take_seen(), vec![Ok((Theme::Light, true))]);
}

#[test]
#[should_panic(expected = "use_theme must be used within a ThemeProvider")]
fn test_use_theme_outside_provider_panics() {
    let mut dom = VirtualDom::new(bare_strict_app);
    dom.rebuild_in_place();
}

#[test]
fn test_context_lags_handle_within_a_handler() {
    let mut dom = VirtualDom::new(toggle_app);
    dom.rebuild_in_place();

    let seen = AFTER_TOGGLE.with(|slot| slot.borrow_mut().take());
    assert_eq!(
        seen,
        Some((BackgroundEffect::Default, BackgroundEffect::Clouds))
    );
}
