//! Command line arguments and the provider inputs derived from them.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use skytone_core::{
    default_data_dir, FilePreferences, ManualClock, MemoryPreferences, SystemClock, ThemeConfig,
};
use skytone_ui::{ClockRef, StoreRef};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "skytone-gallery")]
#[command(about = "Time-of-day theme and cloud background showcase")]
pub struct Args {
    /// TOML file with theme settings (bands, fade duration, colors)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding preferences.json (default: user data directory)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Keep the theme preference in memory only
    #[arg(long, conflicts_with = "data_dir")]
    pub ephemeral: bool,

    /// Pretend the local time is this hour (0-23); the clock stays frozen
    #[arg(long, value_name = "HOUR")]
    pub at: Option<u32>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Everything the root component needs to build its provider.
#[derive(Clone)]
pub struct LaunchSettings {
    pub config: ThemeConfig,
    pub store: StoreRef,
    pub clock: ClockRef,
    pub store_label: String,
}

impl LaunchSettings {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let config = match &args.config {
            Some(path) => ThemeConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ThemeConfig::default(),
        };

        let (store, store_label) = if args.ephemeral {
            (StoreRef::new(MemoryPreferences::new()), "memory".to_string())
        } else {
            let dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
            let store = FilePreferences::new(&dir);
            let label = store.path().display().to_string();
            (StoreRef::new(store), label)
        };

        let clock = match args.at {
            Some(hour) if hour < 24 => ClockRef::new(ManualClock::at_hour(hour)),
            Some(hour) => bail!("--at expects an hour between 0 and 23, got {hour}"),
            None => ClockRef::new(SystemClock),
        };

        Ok(Self {
            config,
            store,
            clock,
            store_label,
        })
    }
}
