//! Animated cloud background.

use dioxus::prelude::*;
use skytone_core::{default_images, plan_background, CloudConfig, ColorTable, DEFAULT_SPEEDS};

use crate::provider::use_theme;

/// Sky layer plus, while clouds are on, the scrolling cloud layers.
///
/// `custom_colors` takes precedence over the provider config's colors,
/// which take precedence over the built-in table.
#[component]
pub fn CloudAnimation(
    cloud_images: Option<Vec<String>>,
    animation_speeds: Option<Vec<f64>>,
    custom_colors: Option<ColorTable>,
) -> Element {
    let ctx = use_theme();

    use_hook(|| {
        tracing::info!("Cloud animation started with marquee-like continuous movement");
    });

    let clouds = CloudConfig::new(
        cloud_images.unwrap_or_else(default_images),
        animation_speeds.unwrap_or_else(|| DEFAULT_SPEEDS.to_vec()),
    );
    let colors = custom_colors.or_else(|| ctx.config().colors.clone());
    let plan = plan_background(&ctx.state(), &clouds, colors.as_ref());
    let fade_class = if plan.fading { "animate-fadeout" } else { "" };

    rsx! {
        // Sky, always rendered
        div {
            id: "background-wrap",
            class: "{fade_class}",
            style: "background-color: {plan.color}; position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 10;",
        }

        // Clouds, above page content
        if plan.shows_clouds() {
            div {
                class: "cloud-layer {fade_class}",
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 30; pointer-events: none; overflow: hidden;",
                for layer in plan.layers.iter() {
                    div {
                        key: "{layer.index}",
                        class: "cloud-container {layer.class_name}",
                        style: "animation: {layer.animation()}",
                        img {
                            class: "cloud-img",
                            src: "{layer.image}",
                            alt: "{layer.alt_text()}",
                        }
                    }
                }
            }
        }
    }
}
