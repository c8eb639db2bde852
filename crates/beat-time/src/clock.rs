//! Wall clock for Internet Time
//!
//! The conversions take timestamps from the caller. `InternetClock` is the
//! optional source for hosts that simply want "now" from the system clock.

use std::fmt;

use beat_core::{BeatResult, Timestamp, DETAIL_BEATS, DETAIL_CENTIBEATS};

use crate::{convert, display};

/// Clock configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    /// Decimal digits below the whole beat
    pub detail: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        // @DDD.DD
        ClockConfig {
            detail: DETAIL_CENTIBEATS,
        }
    }
}

impl ClockConfig {
    /// Whole beats only (@DDD)
    pub fn beats() -> Self {
        ClockConfig {
            detail: DETAIL_BEATS,
        }
    }

    /// Arbitrary sub-beat precision
    pub fn precise(detail: u32) -> Self {
        ClockConfig { detail }
    }
}

/// System clock reader producing Internet Time readings
#[derive(Clone, Debug, Default)]
pub struct InternetClock {
    config: ClockConfig,
}

impl InternetClock {
    pub fn new(config: ClockConfig) -> Self {
        tracing::debug!(detail = config.detail, "internet clock created");
        InternetClock { config }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Current system time as a timestamp
    pub fn now_timestamp(&self) -> BeatResult<Timestamp> {
        Timestamp::now().map_err(|err| {
            tracing::warn!("system clock unusable: {}", err);
            err
        })
    }

    /// Reading of the current system time
    pub fn now(&self) -> BeatResult<BeatReading> {
        let timestamp = self.now_timestamp()?;
        Ok(self.reading_at(timestamp))
    }

    /// Current time as text, e.g. `"333.25"`
    pub fn display_now(&self) -> BeatResult<String> {
        Ok(self.now()?.text())
    }

    /// Reading of a caller-supplied timestamp at the configured detail
    pub fn reading_at(&self, timestamp: Timestamp) -> BeatReading {
        tracing::trace!(?timestamp, detail = self.config.detail, "clock reading");
        BeatReading {
            detail: self.config.detail,
            timestamp,
        }
    }
}

/// A timestamp paired with the detail it is read at
///
/// Formats as `@` followed by the display text, e.g. `@333.25`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeatReading {
    pub detail: u32,
    pub timestamp: Timestamp,
}

impl BeatReading {
    /// Integer time of day, see [`crate::convert`]
    pub fn value(&self) -> BeatResult<u128> {
        convert(self.detail, self.timestamp)
    }

    /// Display text without the `@` prefix
    pub fn text(&self) -> String {
        display(self.detail, self.timestamp)
    }
}

impl fmt::Display for BeatReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beat_core::{daily_bound, BeatError};

    #[test]
    fn test_config_presets() {
        assert_eq!(ClockConfig::default().detail, 2);
        assert_eq!(ClockConfig::beats().detail, 0);
        assert_eq!(ClockConfig::precise(6).detail, 6);
        assert_eq!(InternetClock::default().config(), &ClockConfig::default());
    }

    #[test]
    fn test_reading_at() {
        let clock = InternetClock::new(ClockConfig::default());
        let reading = clock.reading_at(Timestamp::from_millis(1525244393059));
        assert_eq!(reading.value().unwrap(), 33325);
        assert_eq!(reading.text(), "333.25");
        assert_eq!(reading.to_string(), "@333.25");

        let clock = InternetClock::new(ClockConfig::beats());
        let reading = clock.reading_at(Timestamp::from_millis(1525251972000));
        assert_eq!(reading.to_string(), "@420");
    }

    #[test]
    fn test_reading_beyond_numeric_detail() {
        let clock = InternetClock::new(ClockConfig::precise(40));
        let reading = clock.reading_at(Timestamp::EPOCH);
        assert!(matches!(
            reading.value(),
            Err(BeatError::DetailOutOfRange { detail: 40, .. })
        ));
        assert_eq!(reading.text().len(), 44);
    }

    #[test]
    fn test_now_in_range() {
        let clock = InternetClock::new(ClockConfig::precise(4));
        let reading = clock.now().unwrap();
        assert!(reading.value().unwrap() < daily_bound(4).unwrap());

        let text = clock.display_now().unwrap();
        assert_eq!(text.len(), 8);
        assert_eq!(text.as_bytes()[3], b'.');
    }
}
