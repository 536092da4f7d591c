//! Wall-clock bands that pick the automatic theme.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::Theme;

/// Hour at which each theme band starts.
///
/// The bands wrap around midnight: `[light_from, dusk_from)` is light,
/// `[dusk_from, dark_from)` is dusk and the remaining hours are dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayBands {
    pub light_from: u32,
    pub dusk_from: u32,
    pub dark_from: u32,
}

impl Default for DayBands {
    fn default() -> Self {
        Self {
            light_from: 6,
            dusk_from: 14,
            dark_from: 20,
        }
    }
}

impl DayBands {
    /// Create bands from explicit start hours.
    pub fn new(light_from: u32, dusk_from: u32, dark_from: u32) -> Self {
        Self {
            light_from,
            dusk_from,
            dark_from,
        }
    }

    /// Check the bands are ordered within a single day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.light_from < self.dusk_from
            && self.dusk_from < self.dark_from
            && self.dark_from < 24
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidBands {
                light: self.light_from,
                dusk: self.dusk_from,
                dark: self.dark_from,
            })
        }
    }

    /// Theme for an hour of the day. Out-of-range hours wrap modulo 24.
    pub fn theme_for_hour(&self, hour: u32) -> Theme {
        let hour = hour % 24;
        if hour >= self.light_from && hour < self.dusk_from {
            Theme::Light
        } else if hour >= self.dusk_from && hour < self.dark_from {
            Theme::Dusk
        } else {
            Theme::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let bands = DayBands::default();
        for hour in 6..14 {
            assert_eq!(bands.theme_for_hour(hour), Theme::Light, "hour {hour}");
        }
        for hour in 14..20 {
            assert_eq!(bands.theme_for_hour(hour), Theme::Dusk, "hour {hour}");
        }
        for hour in (20..24).chain(0..6) {
            assert_eq!(bands.theme_for_hour(hour), Theme::Dark, "hour {hour}");
        }
    }

    #[test]
    fn test_hours_wrap() {
        let bands = DayBands::default();
        assert_eq!(bands.theme_for_hour(24 + 7), Theme::Light);
        assert_eq!(bands.theme_for_hour(u32::MAX), bands.theme_for_hour(u32::MAX % 24));
    }

    #[test]
    fn test_validate() {
        assert!(DayBands::default().validate().is_ok());
        assert!(DayBands::new(5, 12, 21).validate().is_ok());
        assert!(matches!(
            DayBands::new(14, 6, 20).validate(),
            Err(ConfigError::InvalidBands { .. })
        ));
        assert!(DayBands::new(6, 14, 24).validate().is_err());
        assert!(DayBands::new(6, 6, 20).validate().is_err());
    }
}
