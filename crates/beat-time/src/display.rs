//! Display formatting - beat values as fixed-width text
//!
//! A value at detail `d` is written as exactly `3 + d` zero-padded digits. For
//! `d > 0` the rightmost `d` digits are split off behind a `.`:
//! detail 0 gives `"065"`, detail 2 gives `"065.75"`.

use beat_core::{Timestamp, DETAIL_BEATS, DETAIL_CENTIBEATS};

use crate::BeatDigits;

/// Internet Time of day at `timestamp` as text, at any detail
pub fn display(detail: u32, timestamp: Timestamp) -> String {
    let mut digits = BeatDigits::at(timestamp);
    let mut text = String::with_capacity(4 + detail as usize);
    push_padded(&mut text, &digits.beats().to_string(), 3);
    if detail > 0 {
        text.push('.');
        text.extend(
            digits
                .by_ref()
                .take(detail as usize)
                .map(|digit| char::from(b'0' + digit)),
        );
    }
    text
}

/// Beats of the day as three digits, e.g. `"420"`
#[inline]
pub fn display_beats(timestamp: Timestamp) -> String {
    display(DETAIL_BEATS, timestamp)
}

/// Centibeats of the day as `"DDD.DD"`
#[inline]
pub fn display_centibeats(timestamp: Timestamp) -> String {
    display(DETAIL_CENTIBEATS, timestamp)
}

/// Render a daily value produced by [`crate::convert`] at the same `detail`
///
/// The digits are padded to `3 + detail` and split before the last `detail`.
/// Values of `1000 * 10^detail` or more are out of the daily range and keep
/// their extra leading digits.
pub fn format_value(detail: u32, value: u128) -> String {
    let width = 3 + detail as usize;
    let mut padded = String::with_capacity(width + 1);
    push_padded(&mut padded, &value.to_string(), width);
    if detail == 0 {
        return padded;
    }
    let fraction = padded.split_off(padded.len() - detail as usize);
    padded.push('.');
    padded.push_str(&fraction);
    padded
}

fn push_padded(out: &mut String, digits: &str, width: usize) {
    out.extend(std::iter::repeat('0').take(width.saturating_sub(digits.len())));
    out.push_str(digits);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;

    fn ts(millis: i64) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    #[test]
    fn test_reference_vectors() {
        assert_eq!(display_beats(ts(1525251972000)), "420");
        assert_eq!(display_centibeats(ts(1525221281000)), "065.75");
        assert_eq!(display(2, ts(1525244393059)), "333.25");
        assert_eq!(display(2, ts(1525294572000)), "914.02");
    }

    #[test]
    fn test_zero_padding() {
        // reference midnight
        let midnight = ts(-3_600_000);
        assert_eq!(display_beats(midnight), "000");
        assert_eq!(display_centibeats(midnight), "000.00");
        assert_eq!(display(5, midnight), "000.00000");

        assert_eq!(display(1, ts(0)), "041.6");
        assert_eq!(display(3, ts(-3_600_000 + 86_400 * 7)), "007.000");
    }

    #[test]
    fn test_no_point_at_detail_zero() {
        for millis in [0, -1, 1525244393059, 23 * 3_600_000 - 1] {
            let text = display_beats(ts(millis));
            assert_eq!(text.len(), 3);
            assert!(!text.contains('.'));
        }
    }

    #[test]
    fn test_width() {
        let t = ts(1525244393059);
        for detail in 0..50u32 {
            let text = display(detail, t);
            let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
            assert_eq!(digits, 3 + detail as usize);
            assert_eq!(text.contains('.'), detail > 0);
        }
    }

    #[test]
    fn test_beyond_numeric_range() {
        let text = display(60, ts(-3_600_000 + 1));
        assert_eq!(text.len(), 64);
        assert!(text.starts_with("000.0000115740740740"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0, 65), "065");
        assert_eq!(format_value(2, 33325), "333.25");
        assert_eq!(format_value(2, 6575), "065.75");
        assert_eq!(format_value(4, 0), "000.0000");
        assert_eq!(format_value(1, 99_999), "9999.9");
    }

    #[test]
    fn test_display_matches_formatted_convert() {
        for millis in [0, -1, 1525221281000, 1525294572000, -42_424_242_424, i64::MIN] {
            let t = ts(millis);
            for detail in 0..=beat_core::MAX_NUMERIC_DETAIL {
                let value = convert(detail, t).unwrap();
                assert_eq!(display(detail, t), format_value(detail, value));
            }
        }
    }
}
