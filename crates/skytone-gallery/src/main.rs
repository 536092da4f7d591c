//! Entry point for the skytone gallery.
//!
//! This Dioxus desktop application shows the time-of-day theme, the theme
//! and cloud toggles, and the animated cloud background together.

mod components;
mod settings;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use components::Gallery;
use settings::{Args, LaunchSettings};
use skytone_ui::{animations_css, CloudAnimation, ThemeProvider};

/// Gallery page styles embedded at compile time.
const GALLERY_CSS: &str = include_str!("../assets/gallery.css");

/// Provider inputs resolved from the command line.
static SETTINGS: OnceLock<LaunchSettings> = OnceLock::new();

fn main() {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!("Starting skytone gallery");

    let settings = match LaunchSettings::from_args(&args) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(2);
        }
    };
    tracing::info!(store = %settings.store_label, "Theme preference store");
    let css = animations_css(settings.config.fade_out());
    SETTINGS.set(settings).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Skytone Gallery")
                        .with_inner_size(LogicalSize::new(1100, 760)),
                )
                .with_custom_head(format!(
                    r#"
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    css, GALLERY_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component that owns the theme provider.
#[component]
fn RootApp() -> Element {
    use_drop(|| tracing::info!("Shutting down skytone gallery"));

    let Some(settings) = SETTINGS.get().cloned() else {
        return rsx! {
            div { class: "gallery-error", "Gallery settings were not initialized" }
        };
    };

    rsx! {
        ThemeProvider {
            config: settings.config,
            store: settings.store,
            clock: settings.clock,
            CloudAnimation {}
            Gallery { store_label: settings.store_label }
        }
    }
}
