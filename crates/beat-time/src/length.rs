//! Length conversion - durations in beat units
//!
//! The timestamp is read as an elapsed span, not a wall-clock instant: no
//! reference offset is applied and nothing wraps at the day boundary. Use
//! [`crate::convert`] for time of day.

use beat_core::{Timestamp, BEAT, CENTIBEAT};

/// Duration in beats
#[inline]
pub fn in_beats(timestamp: Timestamp) -> f64 {
    timestamp.as_millis_f64() / f64::from(BEAT)
}

/// Duration in centibeats
#[inline]
pub fn in_centibeats(timestamp: Timestamp) -> f64 {
    timestamp.as_millis_f64() / f64::from(CENTIBEAT)
}
