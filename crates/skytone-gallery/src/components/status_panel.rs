//! Live view of the shared theme state.

use dioxus::prelude::*;
use skytone_ui::use_theme;

#[component]
pub fn StatusPanel(store_label: String) -> Element {
    let ctx = use_theme();
    let state = ctx.state();
    let mode = if state.is_user_controlled { "Manual" } else { "Automatic" };
    let effect = if state.is_animating {
        format!("{} (fading out)", state.background_effect)
    } else {
        state.background_effect.to_string()
    };

    let reset = ctx.clone();

    rsx! {
        section {
            class: "status-panel",
            div { class: "status-time", "{state.current_time}" }
            dl {
                class: "status-grid",
                dt { "Theme" }
                dd { "{state.theme.display_name()}" }
                dt { "Mode" }
                dd { "{mode}" }
                dt { "Background" }
                dd { "{effect}" }
                dt { "Preference store" }
                dd { class: "status-store", "{store_label}" }
            }
            if state.is_user_controlled {
                button {
                    class: "status-reset",
                    onclick: move |_| reset.reset_to_auto(),
                    "Follow the clock again"
                }
            }
        }
    }
}
