//! Configuration for the theme coordinator.
//!
//! Every field has a default, so an empty TOML document is a valid config.
//!
//! ```toml
//! storage_key = "userTheme"
//! fade_out_ms = 1000
//!
//! [bands]
//! light_from = 6
//! dusk_from = 14
//! dark_from = 20
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_TIME_FORMAT;
use crate::error::ConfigError;
use crate::palette::ColorTable;
use crate::preferences::DEFAULT_STORAGE_KEY;
use crate::schedule::DayBands;
use crate::transition::FADE_OUT_DURATION;

/// Clock refresh period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Theme coordinator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference key holding the user override
    pub storage_key: String,
    /// Hour bands for the automatic theme
    pub bands: DayBands,
    /// Period of the displayed-time refresh
    pub tick_interval_ms: u64,
    /// Fade-out length for the cloud layer
    pub fade_out_ms: u64,
    /// strftime pattern for the displayed time
    pub time_format: String,
    /// Optional sky colors replacing the built-in table
    pub colors: Option<ColorTable>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            bands: DayBands::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            fade_out_ms: FADE_OUT_DURATION.as_millis() as u64,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            colors: None,
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ThemeConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bands.validate()?;
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick_interval_ms"));
        }
        if self.fade_out_ms == 0 {
            return Err(ConfigError::ZeroDuration("fade_out_ms"));
        }
        Ok(())
    }

    /// Tick period, never shorter than 1 ms.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Fade-out length, never shorter than 1 ms.
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms.max(1))
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_bands(mut self, bands: DayBands) -> Self {
        self.bands = bands;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = whole_millis(interval);
        self
    }

    pub fn with_fade_out(mut self, fade: Duration) -> Self {
        self.fade_out_ms = whole_millis(fade);
        self
    }

    pub fn with_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = pattern.into();
        self
    }

    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = Some(colors);
        self
    }
}

/// Milliseconds rounded up, at least 1.
fn whole_millis(d: Duration) -> u64 {
    let millis = d.as_nanos().div_ceil(1_000_000).max(1);
    u64::try_from(millis).unwrap_or(u64::MAX)
}
