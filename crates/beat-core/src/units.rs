//! Unit constants for Internet Time
//!
//! All durations are expressed in milliseconds, the unit of the timestamps
//! accepted by the conversions.

/// Milliseconds in one day
pub const DAY: u32 = 86_400_000;

/// Beats in one day
pub const BEATS_PER_DAY: u32 = 1000;

/// Milliseconds in one beat (86.4 s)
pub const BEAT: u32 = DAY / BEATS_PER_DAY;

/// Milliseconds in one centibeat (0.864 s)
pub const CENTIBEAT: u32 = BEAT / 100;

/// Offset of the Internet Time reference meridian (UTC+01:00) in milliseconds
pub const UTC_OFFSET: i64 = 3_600_000;

/// Detail level for whole beats
pub const DETAIL_BEATS: u32 = 0;

/// Detail level for centibeats
pub const DETAIL_CENTIBEATS: u32 = 2;

/// Highest detail whose integer value fits in a `u128`
/// (1000 * 10^35 < 2^128 < 1000 * 10^36)
pub const MAX_NUMERIC_DETAIL: u32 = 35;

/// Exclusive upper bound of a daily value at `detail`, if it fits in a `u128`
#[inline]
pub fn daily_bound(detail: u32) -> Option<u128> {
    10u128.checked_pow(detail)?.checked_mul(BEATS_PER_DAY as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_values() {
        assert_eq!(BEAT, 86_400);
        assert_eq!(CENTIBEAT, 864);
        assert_eq!(BEAT * BEATS_PER_DAY, DAY);
        assert_eq!(UTC_OFFSET, 60 * 60 * 1000);
    }

    #[test]
    fn test_daily_bound() {
        assert_eq!(daily_bound(DETAIL_BEATS), Some(1000));
        assert_eq!(daily_bound(DETAIL_CENTIBEATS), Some(100_000));
        assert!(daily_bound(MAX_NUMERIC_DETAIL).is_some());
        assert_eq!(daily_bound(MAX_NUMERIC_DETAIL + 1), None);
    }
}
