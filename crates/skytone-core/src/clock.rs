//! Wall-clock access and the displayed time string.

use std::fmt::Write;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use parking_lot::Mutex;

/// Default display pattern: `10/17/2026, 03:04:05 PM`.
pub const DEFAULT_TIME_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Hour of the day, 0-23.
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Clock backed by the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// A clock fixed at `hour:00:00` on an arbitrary day.
    pub fn at_hour(hour: u32) -> Self {
        Self::new(day_at_hour(hour))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    /// Move to `hour:00:00` on the current day.
    pub fn set_hour(&self, hour: u32) {
        let mut now = self.now.lock();
        let date = now.date();
        *now = date
            .and_hms_opt(hour % 24, 0, 0)
            .unwrap_or_else(|| date.and_time(Default::default()));
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

fn day_at_hour(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(hour % 24, 0, 0))
        .unwrap_or_default()
}

/// Render `now` with a strftime pattern.
///
/// A malformed pattern falls back to [`DEFAULT_TIME_FORMAT`] instead of
/// panicking inside `Display`.
pub fn format_clock(now: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        tracing::warn!(pattern, "Invalid time format, using default");
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_TIME_FORMAT));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_matches_us_locale() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        assert_eq!(format_clock(now, DEFAULT_TIME_FORMAT), "10/17/2026, 03:04:05 PM");
    }

    #[test]
    fn test_invalid_pattern_falls_back() {
        let now = day_at_hour(9);
        let out = format_clock(now, "%Q");
        assert_eq!(out, format_clock(now, DEFAULT_TIME_FORMAT));
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::at_hour(7);
        assert_eq!(clock.hour(), 7);

        clock.set_hour(21);
        assert_eq!(clock.hour(), 21);

        clock.advance(Duration::hours(4));
        assert_eq!(clock.hour(), 1);
    }
}
