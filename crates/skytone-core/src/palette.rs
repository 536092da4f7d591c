//! Sky colors per (theme, effect) pair.

use serde::{Deserialize, Serialize};

use crate::theme::{BackgroundEffect, Theme};

/// Colors for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectColors {
    pub default: String,
    pub clouds: String,
}

impl EffectColors {
    pub fn new(default: impl Into<String>, clouds: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            clouds: clouds.into(),
        }
    }

    pub fn for_effect(&self, effect: BackgroundEffect) -> &str {
        match effect {
            BackgroundEffect::Default => &self.default,
            BackgroundEffect::Clouds => &self.clouds,
        }
    }
}

/// Full 3x2 color table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    pub light: EffectColors,
    pub dusk: EffectColors,
    pub dark: EffectColors,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColorTable {
    /// The stock palette.
    pub fn builtin() -> Self {
        Self {
            light: EffectColors::new("#fdf5e0", "#87CEEB"),
            dusk: EffectColors::new("#4E5481", "#d2c4f4"),
            dark: EffectColors::new("#000000", "#141852"),
        }
    }

    pub fn for_theme(&self, theme: Theme) -> &EffectColors {
        match theme {
            Theme::Light => &self.light,
            Theme::Dusk => &self.dusk,
            Theme::Dark => &self.dark,
        }
    }

    pub fn color(&self, theme: Theme, effect: BackgroundEffect) -> &str {
        self.for_theme(theme).for_effect(effect)
    }
}

/// Sky color for a pair, preferring the caller's table when given.
pub fn resolve_color(theme: Theme, effect: BackgroundEffect, custom: Option<&ColorTable>) -> String {
    match custom {
        Some(table) => table.color(theme, effect).to_string(),
        None => ColorTable::builtin().color(theme, effect).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pairs() {
        let cases = [
            (Theme::Light, BackgroundEffect::Default, "#fdf5e0"),
            (Theme::Light, BackgroundEffect::Clouds, "#87CEEB"),
            (Theme::Dusk, BackgroundEffect::Default, "#4E5481"),
            (Theme::Dusk, BackgroundEffect::Clouds, "#d2c4f4"),
            (Theme::Dark, BackgroundEffect::Default, "#000000"),
            (Theme::Dark, BackgroundEffect::Clouds, "#141852"),
        ];
        for (theme, effect, expected) in cases {
            assert_eq!(resolve_color(theme, effect, None), expected);
        }
    }

    #[test]
    fn test_custom_table_wins() {
        let mut custom = ColorTable::builtin();
        custom.dusk.clouds = "#ff00aa".to_string();

        assert_eq!(
            resolve_color(Theme::Dusk, BackgroundEffect::Clouds, Some(&custom)),
            "#ff00aa"
        );
        assert_eq!(
            resolve_color(Theme::Dusk, BackgroundEffect::Clouds, None),
            "#d2c4f4"
        );
    }
}
