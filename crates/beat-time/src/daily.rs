//! Daily conversion - instant to time of day in beats
//!
//! The timestamp is shifted to the UTC+01:00 reference, divided into beats,
//! scaled by 10^detail, floored and wrapped to one day. Since only the position
//! within the shifted day matters, the timestamp is reduced modulo one day
//! first and the beat value is then produced digit by digit with exact integer
//! long division. No floating-point rounding is involved at any detail.

use beat_core::{
    daily_bound, BeatError, BeatResult, DayOffset, Timestamp, BEAT, DETAIL_CENTIBEATS,
    MAX_NUMERIC_DETAIL, UTC_OFFSET,
};

/// One beat in units of 2^-64 ms
const BEAT_SCALED: u128 = (BEAT as u128) << 64;

/// Exact decimal expansion of a time of day in beats
///
/// [`BeatDigits::beats`] holds the whole beats in `[0, 1000)`; iterating yields
/// the sub-beat digits, most significant first, without end.
#[derive(Clone, Debug)]
pub struct BeatDigits {
    beats: u16,
    /// Sub-beat remainder in units of 2^-64 ms, always < `BEAT_SCALED`
    remainder: u128,
}

impl BeatDigits {
    /// Expansion of the Internet Time of day at `timestamp`
    pub fn at(timestamp: Timestamp) -> Self {
        Self::from_offset(timestamp.day_offset(UTC_OFFSET))
    }

    /// Expansion of a position within an already shifted day
    pub fn from_offset(offset: DayOffset) -> Self {
        let position = (u128::from(offset.millis()) << 64) | u128::from(offset.fraction());
        BeatDigits {
            beats: (position / BEAT_SCALED) as u16,
            remainder: position % BEAT_SCALED,
        }
    }

    /// Whole beats of the day
    #[inline]
    pub fn beats(&self) -> u16 {
        self.beats
    }
}

impl Iterator for BeatDigits {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        // remainder * 10 < 864_000 * 2^64, far below u128::MAX
        self.remainder *= 10;
        let digit = (self.remainder / BEAT_SCALED) as u8;
        self.remainder %= BEAT_SCALED;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Time of day at `timestamp` in units of 10^-detail beats
///
/// Always in `[0, 1000 * 10^detail)`. Fails only when the value cannot be
/// held in a `u128`, i.e. for `detail > MAX_NUMERIC_DETAIL`; use
/// [`crate::display`] for unbounded detail.
pub fn convert(detail: u32, timestamp: Timestamp) -> BeatResult<u128> {
    if detail > MAX_NUMERIC_DETAIL {
        return Err(BeatError::DetailOutOfRange {
            detail,
            max: MAX_NUMERIC_DETAIL,
        });
    }

    let digits = BeatDigits::at(timestamp);
    let whole = u128::from(digits.beats());
    let value = digits
        .take(detail as usize)
        .fold(whole, |acc, digit| acc * 10 + u128::from(digit));

    debug_assert!(daily_bound(detail).is_some_and(|bound| value < bound));
    Ok(value)
}

/// Beats of the day, `[0, 1000)`
#[inline]
pub fn convert_beats(timestamp: Timestamp) -> u16 {
    BeatDigits::at(timestamp).beats()
}

/// Centibeats of the day, `[0, 100_000)`
pub fn convert_centibeats(timestamp: Timestamp) -> u32 {
    let digits = BeatDigits::at(timestamp);
    let whole = u32::from(digits.beats());
    digits
        .take(DETAIL_CENTIBEATS as usize)
        .fold(whole, |acc, digit| acc * 10 + u32::from(digit))
}
