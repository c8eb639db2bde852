//! Beat Time - Internet Time conversion and formatting
//!
//! This crate implements the conversion pipeline:
//! - Length conversion: elapsed milliseconds to fractional beats
//! - Daily conversion: instant to beat-of-day at a decimal precision
//! - Display: zero-padded, decimal-pointed text
//! - Wall clock readings for hosts without their own time source

pub mod length;
pub mod daily;
pub mod display;
pub mod clock;

pub use length::*;
pub use daily::*;
pub use display::*;
pub use clock::*;

pub use beat_core::{BeatError, BeatResult, Timestamp, BEAT, CENTIBEAT};
