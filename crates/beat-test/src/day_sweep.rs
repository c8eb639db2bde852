//! Day Sweep - seeded walks across Internet Time days
//!
//! Walks timestamps forward from a start instant in jittered steps and checks
//! every reading against the daily invariants:
//! - values stay below 1000 * 10^detail
//! - display text has 3 + detail digits, with a point iff detail > 0
//! - display text parses back to the converted value
//! - values never decrease within one reference day
//! - the value one day later is identical

use beat_core::{daily_bound, BeatError, Timestamp, BEAT, DAY, UTC_OFFSET};
use beat_time::{convert, display};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Sweep configuration
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// First timestamp (ms)
    pub start_ms: i64,
    /// Nominal step between readings (ms)
    pub step_ms: i64,
    /// Random jitter added to each step, +/- (ms)
    pub jitter_ms: i64,
    /// Number of readings
    pub steps: usize,
    /// Detail level checked
    pub detail: u32,
    /// RNG seed
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        // roughly one reading per beat over two and a half days
        SweepConfig {
            start_ms: 1525244393059,
            step_ms: i64::from(BEAT),
            jitter_ms: 1000,
            steps: 2500,
            detail: 2,
            seed: 42,
        }
    }
}

impl SweepConfig {
    /// Millisecond steps across the first reference midnight after the epoch
    pub fn midnight() -> Self {
        SweepConfig {
            start_ms: -UTC_OFFSET - 50_000,
            step_ms: 1,
            jitter_ms: 0,
            steps: 100_000,
            detail: 3,
            seed: 0,
        }
    }

    /// Uneven steps through the ten days before the epoch
    pub fn pre_epoch() -> Self {
        SweepConfig {
            start_ms: -10 * i64::from(DAY),
            step_ms: 7_777,
            jitter_ms: 500,
            steps: 110_000,
            detail: 4,
            seed: 7,
        }
    }

    /// Highest numeric detail
    pub fn high_detail() -> Self {
        SweepConfig {
            start_ms: 1_700_000_000_000,
            step_ms: 86_399,
            jitter_ms: 3,
            steps: 2_000,
            detail: beat_core::MAX_NUMERIC_DETAIL,
            seed: 35,
        }
    }
}

/// A broken invariant found by a sweep
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    #[error("value {value} out of range at {timestamp_ms}ms (detail {detail})")]
    OutOfRange {
        timestamp_ms: i64,
        detail: u32,
        value: u128,
    },

    #[error("display {text:?} malformed at {timestamp_ms}ms (detail {detail})")]
    MalformedDisplay {
        timestamp_ms: i64,
        detail: u32,
        text: String,
    },

    #[error("display {text:?} does not match value {value} at {timestamp_ms}ms")]
    DisplayMismatch {
        timestamp_ms: i64,
        text: String,
        value: u128,
    },

    #[error("value fell from {previous} to {value} at {timestamp_ms}ms within one day")]
    NotMonotonic {
        timestamp_ms: i64,
        previous: u128,
        value: u128,
    },

    #[error("value {value} at {timestamp_ms}ms is {later} one day later")]
    NotPeriodic {
        timestamp_ms: i64,
        value: u128,
        later: u128,
    },

    #[error(transparent)]
    Conversion(#[from] BeatError),
}

/// Sweep results
#[derive(Clone, Debug, Default)]
pub struct SweepReport {
    /// Readings taken
    pub readings: usize,
    /// Reference day boundaries crossed
    pub day_rollovers: usize,
    /// Smallest value seen
    pub min_value: Option<u128>,
    /// Largest value seen
    pub max_value: Option<u128>,
    /// Broken invariants
    pub violations: Vec<InvariantViolation>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Seeded walk through timestamps
pub struct DaySweep {
    config: SweepConfig,
    rng: StdRng,
}

impl DaySweep {
    pub fn new(config: SweepConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        DaySweep { config, rng }
    }

    /// Run the sweep
    pub fn run(&mut self) -> SweepReport {
        let mut report = SweepReport::default();
        let mut timestamp_ms = self.config.start_ms;
        let mut previous: Option<(i64, u128)> = None;

        for _ in 0..self.config.steps {
            report.readings += 1;
            let day = reference_day(timestamp_ms);

            match self.check_reading(timestamp_ms) {
                Ok(value) => {
                    match previous {
                        Some((prev_day, prev_value)) if prev_day == day && value < prev_value => {
                            report.violations.push(InvariantViolation::NotMonotonic {
                                timestamp_ms,
                                previous: prev_value,
                                value,
                            });
                        }
                        Some((prev_day, _)) if prev_day != day => report.day_rollovers += 1,
                        _ => {}
                    }
                    report.min_value = Some(report.min_value.map_or(value, |m| m.min(value)));
                    report.max_value = Some(report.max_value.map_or(value, |m| m.max(value)));
                    previous = Some((day, value));
                }
                Err(violation) => report.violations.push(violation),
            }

            timestamp_ms = timestamp_ms.saturating_add(self.next_step());
        }

        report
    }

    fn next_step(&mut self) -> i64 {
        let jitter = if self.config.jitter_ms > 0 {
            self.rng
                .gen_range(-self.config.jitter_ms..=self.config.jitter_ms)
        } else {
            0
        };
        (self.config.step_ms + jitter).max(1)
    }

    fn check_reading(&self, timestamp_ms: i64) -> Result<u128, InvariantViolation> {
        let detail = self.config.detail;
        let timestamp = Timestamp::from_millis(timestamp_ms);
        let value = convert(detail, timestamp)?;

        if daily_bound(detail).map_or(true, |bound| value >= bound) {
            return Err(InvariantViolation::OutOfRange {
                timestamp_ms,
                detail,
                value,
            });
        }

        let text = display(detail, timestamp);
        if !well_formed(&text, detail) {
            return Err(InvariantViolation::MalformedDisplay {
                timestamp_ms,
                detail,
                text,
            });
        }
        let digits: String = text.chars().filter(|c| *c != '.').collect();
        if digits.parse::<u128>().ok() != Some(value) {
            return Err(InvariantViolation::DisplayMismatch {
                timestamp_ms,
                text,
                value,
            });
        }

        if let Some(next_day_ms) = timestamp_ms.checked_add(i64::from(DAY)) {
            let later = convert(detail, Timestamp::from_millis(next_day_ms))?;
            if later != value {
                return Err(InvariantViolation::NotPeriodic {
                    timestamp_ms,
                    value,
                    later,
                });
            }
        }

        Ok(value)
    }
}

/// Index of the UTC+01:00 day containing `timestamp_ms`
fn reference_day(timestamp_ms: i64) -> i64 {
    timestamp_ms
        .saturating_add(UTC_OFFSET)
        .div_euclid(i64::from(DAY))
}

/// `3 + detail` ASCII digits, with a single `.` after the third iff detail > 0
fn well_formed(text: &str, detail: u32) -> bool {
    let bytes = text.as_bytes();
    let digits = bytes.iter().filter(|b| b.is_ascii_digit()).count();
    let points = bytes.iter().filter(|b| **b == b'.').count();
    let expected_points = usize::from(detail > 0);
    digits == 3 + detail as usize
        && points == expected_points
        && bytes.len() == digits + points
        && (detail == 0 || bytes[3] == b'.')
}
