//! Unix-epoch timestamps
//!
//! A timestamp is a count of milliseconds since 1970-01-01T00:00:00Z, either
//! whole (`i64`) or fractional (`f64`). The value is stored exactly as given so
//! that the position within a day can be derived without rounding.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{BeatError, BeatResult, DAY};

/// 2^64, the denominator of [`DayOffset::fraction`]
const FRACTION_SCALE: f64 = 18_446_744_073_709_551_616.0;

#[derive(Clone, Copy, PartialEq)]
enum Repr {
    /// Whole milliseconds plus a fraction in units of 2^-64 ms
    Fixed { millis: i64, fraction: u64 },
    /// Finite float milliseconds
    Float(f64),
}

/// Milliseconds since the Unix epoch
///
/// No range validation is applied: negative and arbitrarily large values are
/// accepted. Only non-finite floats are rejected.
#[derive(Clone, Copy, PartialEq)]
pub struct Timestamp(Repr);

/// Position within a day: `millis + fraction / 2^64` milliseconds after midnight
///
/// INVARIANT: `millis < DAY`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOffset {
    millis: u32,
    fraction: u64,
}

impl DayOffset {
    pub const MIDNIGHT: DayOffset = DayOffset {
        millis: 0,
        fraction: 0,
    };

    /// Offset of `millis + fraction / 2^64` ms, wrapped into one day
    #[inline]
    pub const fn new(millis: u32, fraction: u64) -> Self {
        DayOffset {
            millis: millis % DAY,
            fraction,
        }
    }

    /// Whole milliseconds since midnight, `[0, DAY)`
    #[inline]
    pub const fn millis(self) -> u32 {
        self.millis
    }

    /// Sub-millisecond part in units of 2^-64 ms
    #[inline]
    pub const fn fraction(self) -> u64 {
        self.fraction
    }
}

impl Timestamp {
    pub const EPOCH: Timestamp = Timestamp(Repr::Fixed {
        millis: 0,
        fraction: 0,
    });

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Timestamp(Repr::Fixed {
            millis,
            fraction: 0,
        })
    }

    /// Fractional milliseconds. Fails for NaN and infinities.
    pub fn from_millis_f64(millis: f64) -> BeatResult<Self> {
        if !millis.is_finite() {
            return Err(BeatError::NonFiniteTimestamp(millis));
        }
        Ok(Timestamp(Repr::Float(millis)))
    }

    /// Convert a system time, keeping sub-millisecond precision
    pub fn from_system_time(time: SystemTime) -> BeatResult<Self> {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => Self::from_epoch_distance(since, false),
            Err(err) => Self::from_epoch_distance(err.duration(), true),
        }
    }

    /// Current system time
    pub fn now() -> BeatResult<Self> {
        Self::from_system_time(SystemTime::now())
    }

    fn from_epoch_distance(distance: Duration, before_epoch: bool) -> BeatResult<Self> {
        let whole = i64::try_from(distance.as_millis()).map_err(|_| {
            BeatError::TimestampOutOfRange(format!("{:?} from the Unix epoch", distance))
        })?;
        let sub_nanos = u128::from(distance.subsec_nanos() % 1_000_000);
        let fraction = ((sub_nanos << 64) / 1_000_000) as u64;

        let (millis, fraction) = if !before_epoch {
            (whole, fraction)
        } else if fraction == 0 {
            (-whole, 0)
        } else {
            (-whole - 1, fraction.wrapping_neg())
        };
        Ok(Timestamp(Repr::Fixed { millis, fraction }))
    }

    /// Value as float milliseconds (lossy above 2^53)
    #[inline]
    pub fn as_millis_f64(self) -> f64 {
        match self.0 {
            Repr::Fixed { millis, fraction } => millis as f64 + fraction as f64 / FRACTION_SCALE,
            Repr::Float(value) => value,
        }
    }

    /// Position within the day after shifting the timestamp by `shift` milliseconds
    ///
    /// Exact for every representable timestamp; float fractions finer than
    /// 2^-64 ms are floored.
    pub fn day_offset(self, shift: i64) -> DayOffset {
        let day = i64::from(DAY);
        let (millis, fraction) = match self.0 {
            Repr::Fixed { millis, fraction } => (millis.rem_euclid(day), fraction),
            Repr::Float(value) => float_day_offset(value),
        };
        let millis = (millis + shift.rem_euclid(day)).rem_euclid(day);
        DayOffset::new(millis as u32, fraction)
    }
}

impl From<i64> for Timestamp {
    #[inline]
    fn from(millis: i64) -> Self {
        Timestamp::from_millis(millis)
    }
}

impl TryFrom<f64> for Timestamp {
    type Error = BeatError;

    fn try_from(millis: f64) -> BeatResult<Self> {
        Timestamp::from_millis_f64(millis)
    }
}

impl TryFrom<SystemTime> for Timestamp {
    type Error = BeatError;

    fn try_from(time: SystemTime) -> BeatResult<Self> {
        Timestamp::from_system_time(time)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Fixed { millis, fraction: 0 } => write!(f, "Timestamp({}ms)", millis),
            _ => write!(f, "Timestamp({}ms)", self.as_millis_f64()),
        }
    }
}

/// Euclidean position of a finite float within the day, as (millis, fraction)
fn float_day_offset(value: f64) -> (i64, u64) {
    let day = u64::from(DAY);
    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let significand = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (significand, -1074)
    } else {
        (significand | (1u64 << 52), biased - 1075)
    };

    // |value| = whole + fraction / 2^64, `inexact` when bits below 2^-64 were dropped
    let (whole, fraction, inexact) = if exponent >= 0 {
        let whole = mantissa % day * pow2_rem(exponent as u32, day) % day;
        (whole, 0, false)
    } else {
        let shift = exponent.unsigned_abs();
        if shift < 64 {
            let low = mantissa & ((1u64 << shift) - 1);
            ((mantissa >> shift) % day, low << (64 - shift), false)
        } else {
            // mantissa < 2^53, nothing left above the binary point
            let dropped = shift - 64;
            if dropped >= 64 {
                (0, 0, mantissa != 0)
            } else {
                let lost = mantissa & ((1u64 << dropped) - 1);
                (0, mantissa >> dropped, lost != 0)
            }
        }
    };

    if !negative {
        return (whole as i64, fraction);
    }
    if fraction == 0 && !inexact {
        return (((day - whole) % day) as i64, 0);
    }
    // -(w + f) = -(w + 1) + (1 - f)
    let whole = (day - (whole + 1) % day) % day;
    let fraction = if inexact {
        !fraction
    } else {
        fraction.wrapping_neg()
    };
    (whole as i64, fraction)
}

/// 2^exp mod modulus, for modulus < 2^32
fn pow2_rem(mut exp: u32, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    let mut base = 2 % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}
