//! Button that shows or hides the cloud background.

use dioxus::prelude::*;
use skytone_core::{BackgroundEffect, Theme};

use crate::provider::use_theme;

/// Button footprint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn padding_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "p-1",
            ButtonSize::Md => "p-2",
            ButtonSize::Lg => "p-3",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "w-4 h-4",
            ButtonSize::Md => "w-5 h-5",
            ButtonSize::Lg => "w-6 h-6",
        }
    }
}

/// Visual treatment of the button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled, colored by effect
    #[default]
    Default,
    /// Transparent, icon only
    Minimal,
}

/// Native tooltip text for the current effect.
pub fn cloud_toggle_title(effect: BackgroundEffect) -> &'static str {
    match effect {
        BackgroundEffect::Clouds => "Hide clouds",
        BackgroundEffect::Default => "Show clouds",
    }
}

/// Class list for the button.
pub fn cloud_button_class(
    effect: BackgroundEffect,
    size: ButtonSize,
    variant: ButtonVariant,
    extra: &str,
) -> String {
    let palette = match (variant, effect) {
        (ButtonVariant::Minimal, _) => "bg-transparent",
        (ButtonVariant::Default, BackgroundEffect::Clouds) => {
            "bg-blue-100 dark:bg-blue-900 text-blue-600 dark:text-blue-300"
        }
        (ButtonVariant::Default, BackgroundEffect::Default) => {
            "bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-400"
        }
    };

    let mut class = format!(
        "cloud-toggle-btn {} rounded-lg transition-colors {} hover:bg-blue-200 dark:hover:bg-blue-800",
        size.padding_class(),
        palette
    );
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

fn tooltip_class(theme: Theme) -> String {
    format!("cloud-toggle-tooltip tooltip-{theme}")
}

/// Cloud effect toggle with an optional themed hover tooltip.
#[component]
pub fn CloudToggleButton(
    #[props(default)] class: String,
    #[props(default)] show_tooltip: bool,
    tooltip_text: Option<String>,
    #[props(default)] size: ButtonSize,
    #[props(default)] variant: ButtonVariant,
) -> Element {
    let ctx = use_theme();
    let mut hovered = use_signal(|| false);

    let effect = ctx.background_effect();
    let theme = ctx.theme();
    let title = cloud_toggle_title(effect);
    let button_class = cloud_button_class(effect, size, variant, &class);
    let icon_class = if effect == BackgroundEffect::Clouds {
        format!("cloud-icon {}", size.icon_class())
    } else {
        format!("cloud-icon cloud-icon-off {}", size.icon_class())
    };
    let tooltip = tooltip_text.unwrap_or_else(|| title.to_string());
    let tip_class = tooltip_class(theme);

    let toggle = ctx.clone();

    rsx! {
        div {
            class: "cloud-toggle-wrap",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            button {
                class: "{button_class}",
                title: "{title}",
                onclick: move |_| {
                    toggle.toggle_background_effect();
                },
                span { class: "{icon_class}", "\u{2601}" }
            }
            if show_tooltip && hovered() {
                span { class: "{tip_class}", "{tooltip}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_by_effect() {
        assert_eq!(cloud_toggle_title(BackgroundEffect::Clouds), "Hide clouds");
        assert_eq!(cloud_toggle_title(BackgroundEffect::Default), "Show clouds");
    }

    #[test]
    fn test_button_class() {
        let on = cloud_button_class(
            BackgroundEffect::Clouds,
            ButtonSize::Md,
            ButtonVariant::Default,
            "ml-2",
        );
        assert!(on.contains("bg-blue-100"));
        assert!(on.contains("p-2"));
        assert!(on.ends_with(" ml-2"));

        let off = cloud_button_class(
            BackgroundEffect::Default,
            ButtonSize::Lg,
            ButtonVariant::Default,
            "",
        );
        assert!(off.contains("bg-gray-100"));
        assert!(off.contains("p-3"));
        assert!(!off.ends_with(' '));

        let minimal = cloud_button_class(
            BackgroundEffect::Clouds,
            ButtonSize::Sm,
            ButtonVariant::Minimal,
            "",
        );
        assert!(minimal.contains("bg-transparent"));
        assert!(!minimal.contains("bg-blue-100"));
    }

    #[test]
    fn test_tooltip_is_themed() {
        assert_eq!(tooltip_class(Theme::Dark), "cloud-toggle-tooltip tooltip-dark");
    }
}
