//! Gallery page: header controls over a status panel.

use dioxus::prelude::*;
use skytone_ui::{ButtonSize, ButtonVariant, CloudToggleButton, ThemeToggle};

use super::StatusPanel;

/// Main gallery page.
#[component]
pub fn Gallery(store_label: String) -> Element {
    rsx! {
        div {
            class: "gallery",

            header {
                class: "gallery-header",
                h1 { class: "gallery-title", "Skytone" }
                div {
                    class: "gallery-controls",
                    ThemeToggle { size: 6 }
                    CloudToggleButton { show_tooltip: true }
                }
            }

            main {
                class: "gallery-main",
                StatusPanel { store_label }

                section {
                    class: "gallery-variants",
                    h2 { "Toggle variants" }
                    div {
                        class: "variant-row",
                        CloudToggleButton { size: ButtonSize::Sm }
                        CloudToggleButton { size: ButtonSize::Lg }
                        CloudToggleButton {
                            variant: ButtonVariant::Minimal,
                            show_tooltip: true,
                            tooltip_text: "Minimal variant".to_string(),
                        }
                        ThemeToggle { class: "theme-toggle-compact".to_string(), size: 4 }
                    }
                }
            }
        }
    }
}
