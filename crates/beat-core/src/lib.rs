//! Beat Core - Fundamental units and primitives for Internet Time
//!
//! This crate defines the core types shared by the beat crates:
//! - Unit constants (beat, centibeat, day, reference offset)
//! - Timestamps (Unix-epoch milliseconds, integer or fractional)
//! - Error types

pub mod units;
pub mod timestamp;
pub mod error;

pub use units::*;
pub use timestamp::*;
pub use error::*;
