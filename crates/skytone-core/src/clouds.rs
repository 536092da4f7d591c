//! Parallax cloud layers and the background render plan.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinator::ThemeState;
use crate::palette::{resolve_color, ColorTable};
use crate::theme::BackgroundEffect;

/// Seconds per loop for the stock layers.
pub const DEFAULT_SPEEDS: [f64; 5] = [40.0, 45.0, 50.0, 55.0, 60.0];

/// Horizontal scroll direction of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    RightToLeft,
    LeftToRight,
}

impl ScrollDirection {
    /// Even layers scroll right-to-left, odd ones left-to-right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            ScrollDirection::RightToLeft
        } else {
            ScrollDirection::LeftToRight
        }
    }

    /// CSS keyframes name.
    pub fn keyframes(&self) -> &'static str {
        match self {
            ScrollDirection::RightToLeft => "marqueeRightToLeft",
            ScrollDirection::LeftToRight => "marqueeLeftToRight",
        }
    }
}

/// One image layer of the cloud effect.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayer {
    pub index: usize,
    pub image: String,
    /// Positional class, `x1` for the first layer.
    pub class_name: String,
    pub direction: ScrollDirection,
    pub speed_secs: f64,
}

impl CloudLayer {
    /// CSS `animation` shorthand for this layer.
    pub fn animation(&self) -> String {
        format!("{} {}s linear infinite", self.direction.keyframes(), self.speed_secs)
    }

    pub fn alt_text(&self) -> String {
        format!("Cloud {}", self.index + 1)
    }
}

/// Images and per-layer loop speeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub images: Vec<String>,
    /// Seconds per loop, parallel to `images`.
    pub speeds: Vec<f64>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            speeds: DEFAULT_SPEEDS.to_vec(),
        }
    }
}

impl CloudConfig {
    pub fn new(images: Vec<String>, speeds: Vec<f64>) -> Self {
        Self { images, speeds }
    }

    /// Layers in image order.
    ///
    /// Missing or unusable speeds take the stock speed for that position.
    pub fn layers(&self) -> Vec<CloudLayer> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, image)| CloudLayer {
                index,
                image: image.clone(),
                class_name: format!("x{}", index + 1),
                direction: ScrollDirection::for_index(index),
                speed_secs: self.speed_for(index),
            })
            .collect()
    }

    fn speed_for(&self, index: usize) -> f64 {
        match self.speeds.get(index) {
            Some(&speed) if speed.is_finite() && speed > 0.0 => speed,
            _ => DEFAULT_SPEEDS[index.min(DEFAULT_SPEEDS.len() - 1)],
        }
    }
}

/// Stock image references, `assets/cloud1.png` .. `assets/cloud5.png`.
pub fn default_images() -> Vec<String> {
    (1..=DEFAULT_SPEEDS.len())
        .map(|i| format!("assets/cloud{i}.png"))
        .collect()
}

/// What the background renderer should draw for a state.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundPlan {
    pub color: String,
    /// Play the fade-out animation on both layers.
    pub fading: bool,
    /// Empty unless the cloud effect is active.
    pub layers: Vec<CloudLayer>,
}

impl BackgroundPlan {
    pub fn shows_clouds(&self) -> bool {
        !self.layers.is_empty()
    }
}

impl fmt::Display for BackgroundPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} layers", self.color, self.layers.len())?;
        if self.fading {
            write!(f, ", fading")?;
        }
        write!(f, ")")
    }
}

pub fn plan_background(
    state: &ThemeState,
    clouds: &CloudConfig,
    custom_colors: Option<&ColorTable>,
) -> BackgroundPlan {
    let layers = if state.background_effect == BackgroundEffect::Clouds {
        clouds.layers()
    } else {
        Vec::new()
    };

    BackgroundPlan {
        color: resolve_color(state.theme, state.background_effect, custom_colors),
        fading: state.is_animating,
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn state(theme: Theme, effect: BackgroundEffect, animating: bool) -> ThemeState {
        ThemeState {
            theme,
            background_effect: effect,
            is_animating: animating,
            current_time: String::new(),
            is_user_controlled: false,
        }
    }

    #[test]
    fn test_default_layers_alternate() {
        let layers = CloudConfig::default().layers();
        assert_eq!(layers.len(), 5);
        assert_eq!(layers[0].class_name, "x1");
        assert_eq!(layers[0].image, "assets/cloud1.png");
        assert_eq!(layers[0].direction, ScrollDirection::RightToLeft);
        assert_eq!(layers[1].direction, ScrollDirection::LeftToRight);
        assert_eq!(layers[4].animation(), "marqueeRightToLeft 60s linear infinite");
        assert_eq!(layers[2].alt_text(), "Cloud 3");
    }

    #[test]
    fn test_missing_speeds_fall_back() {
        let config = CloudConfig::new(
            (0..7).map(|i| format!("c{i}.png")).collect(),
            vec![12.5, -1.0, f64::NAN],
        );
        let speeds: Vec<f64> = config.layers().iter().map(|l| l.speed_secs).collect();
        assert_eq!(speeds, vec![12.5, 45.0, 50.0, 55.0, 60.0, 60.0, 60.0]);
    }

    #[test]
    fn test_plan_without_clouds() {
        let plan = plan_background(
            &state(Theme::Light, BackgroundEffect::Default, false),
            &CloudConfig::default(),
            None,
        );
        assert_eq!(plan.color, "#fdf5e0");
        assert!(!plan.shows_clouds());
        assert!(!plan.fading);
    }

    #[test]
    fn test_plan_fading_clouds() {
        let plan = plan_background(
            &state(Theme::Dusk, BackgroundEffect::Clouds, true),
            &CloudConfig::default(),
            None,
        );
        assert_eq!(plan.color, "#d2c4f4");
        assert!(plan.fading);
        assert_eq!(plan.layers.len(), 5);
        assert_eq!(plan.to_string(), "#d2c4f4 (5 layers, fading)");
    }
}
