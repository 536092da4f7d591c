//! Button that cycles the theme; right-click returns to automatic.

use dioxus::prelude::*;
use skytone_core::Theme;

use crate::provider::use_theme;

/// Glyph shown for a theme.
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\u{2600}",
        Theme::Dusk => "\u{25D0}",
        Theme::Dark => "\u{263E}",
    }
}

pub fn theme_toggle_title(theme: Theme) -> String {
    format!("Current theme: {theme}. Right-click to reset to auto")
}

/// Theme cycle button.
///
/// `size` follows the utility-class scale used for the icon (`w-5 h-5`).
#[component]
pub fn ThemeToggle(
    #[props(default)] class: String,
    #[props(default = 5)] size: u32,
) -> Element {
    let ctx = use_theme();
    let theme = ctx.theme();
    let title = theme_toggle_title(theme);
    let icon = theme_icon(theme);

    let cycle = ctx.clone();
    let reset = ctx.clone();

    rsx! {
        button {
            class: "theme-toggle-btn {class}",
            "aria-label": "Toggle theme",
            title: "{title}",
            onclick: move |_| {
                let next = cycle.cycle_theme();
                tracing::debug!(theme = %next, "Theme toggled");
            },
            oncontextmenu: move |evt: MouseEvent| {
                evt.prevent_default();
                reset.reset_to_auto();
            },
            div { class: "theme-toggle-icon-container",
                span { class: "theme-icon theme-icon-{theme} w-{size} h-{size}", "{icon}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_names_theme() {
        assert_eq!(
            theme_toggle_title(Theme::Dusk),
            "Current theme: dusk. Right-click to reset to auto"
        );
    }

    #[test]
    fn test_icons_are_distinct() {
        assert_ne!(theme_icon(Theme::Light), theme_icon(Theme::Dusk));
        assert_ne!(theme_icon(Theme::Dusk), theme_icon(Theme::Dark));
        assert_ne!(theme_icon(Theme::Dark), theme_icon(Theme::Light));
    }
}
