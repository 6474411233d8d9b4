//! Wall-clock abstraction for prompt timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, NaiveDateTime};
use twin_types::error::ClockError;

/// Format used for the timestamp embedded in the prompt.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<NaiveDateTime, ClockError>;
}

/// Reads the operating system clock and converts it to local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ClockError(format!("system time is before the unix epoch: {e}")))?;
        let secs = i64::try_from(elapsed.as_secs())
            .map_err(|_| ClockError("system time is out of range".to_string()))?;
        let utc = DateTime::from_timestamp(secs, elapsed.subsec_nanos())
            .ok_or_else(|| ClockError("system time is out of range".to_string()))?;
        Ok(utc.with_timezone(&Local).naive_local())
    }
}

/// Always returns the same instant.
///
/// Used for reproducible output (`twin prompt --at ...`) and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse a `YYYY-MM-DD HH:MM:SS` string into a fixed clock.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        (**self).now()
    }
}

/// Render a timestamp the way it appears in the prompt.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    #[test]
    fn test_format_timestamp_zero_pads() {
        assert_eq!(format_timestamp(sample_instant()), "2024-03-07 09:05:03");
    }

    #[test]
    fn test_fixed_clock_returns_pinned_value() {
        let clock = FixedClock(sample_instant());
        assert_eq!(clock.now().unwrap(), sample_instant());
        assert_eq!(clock.now().unwrap(), clock.now().unwrap());
    }

    #[test]
    fn test_fixed_clock_parse() {
        let clock = FixedClock::parse("2024-03-07 09:05:03").unwrap();
        assert_eq!(clock.0, sample_instant());
        assert!(FixedClock::parse("March 7th").is_err());
    }

    #[test]
    fn test_system_clock_matches_local_now() {
        let before = Local::now().naive_local();
        let reading = SystemClock.now().unwrap();
        let after = Local::now().naive_local();
        assert!(reading >= before - chrono::Duration::seconds(1));
        assert!(reading <= after + chrono::Duration::seconds(1));
    }
}
