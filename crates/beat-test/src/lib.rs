//! Beat Test Harness - Conversion validation
//!
//! This crate provides:
//! - Published reference vectors and a checker
//! - Day sweeps: seeded walks through timestamps verifying the daily invariants
//! - Property tests over arbitrary timestamps and detail levels

pub mod vectors;
pub mod day_sweep;

#[cfg(test)]
mod properties;

pub use vectors::*;
pub use day_sweep::*;
