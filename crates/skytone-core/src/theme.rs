//! Theme and background effect enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Color scheme shown by the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dusk,
    #[default]
    Dark,
}

impl Theme {
    /// Returns the persisted label, which doubles as the CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dusk => "dusk",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dusk => "Dusk",
            Theme::Dark => "Dark",
        }
    }

    /// Next theme in the toggle rotation: dark, light, dusk, dark, ...
    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dusk,
            Theme::Dusk => Theme::Dark,
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dusk, Theme::Dark]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dusk" => Ok(Theme::Dusk),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Decorative layer drawn behind (and over) the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundEffect {
    #[default]
    Default,
    Clouds,
}

impl BackgroundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundEffect::Default => "default",
            BackgroundEffect::Clouds => "clouds",
        }
    }

    pub fn toggled(&self) -> BackgroundEffect {
        match self {
            BackgroundEffect::Default => BackgroundEffect::Clouds,
            BackgroundEffect::Clouds => BackgroundEffect::Default,
        }
    }
}

impl fmt::Display for BackgroundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundEffect {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(BackgroundEffect::Default),
            "clouds" => Ok(BackgroundEffect::Clouds),
            _ => Err(ThemeError::UnknownEffect(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_rotation() {
        assert_eq!(Theme::Dark.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dusk);
        assert_eq!(Theme::Dusk.next(), Theme::Dark);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(" Dusk ".parse::<Theme>().unwrap(), Theme::Dusk);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!(matches!(
            "midnight".parse::<Theme>(),
            Err(ThemeError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_labels_match_serde() {
        for theme in Theme::all() {
            let json = serde_json::to_string(theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.as_str()));
        }
    }

    #[test]
    fn test_effect_toggle() {
        assert_eq!(BackgroundEffect::Default.toggled(), BackgroundEffect::Clouds);
        assert_eq!(BackgroundEffect::Clouds.toggled(), BackgroundEffect::Default);
        assert_eq!("clouds".parse::<BackgroundEffect>().unwrap(), BackgroundEffect::Clouds);
    }
}
