//! Reference vectors - published conversions every build must reproduce

use beat_core::{BeatResult, Timestamp};
use beat_time::{
    convert, convert_beats, convert_centibeats, display, display_beats, display_centibeats,
    in_beats, in_centibeats,
};

/// Absolute tolerance for length conversions
pub const LENGTH_TOLERANCE: f64 = 1e-6;

/// Operation under test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    InBeats,
    InCentibeats,
    ConvertBeats,
    ConvertCentibeats,
    Convert(u32),
    DisplayBeats,
    DisplayCentibeats,
    Display(u32),
}

/// Expected result of an operation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Expected {
    Length(f64),
    Value(u128),
    Text(&'static str),
}

/// Result actually produced
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Length(f64),
    Value(u128),
    Text(String),
}

impl Operation {
    /// Run the operation on `timestamp`
    pub fn apply(self, timestamp: Timestamp) -> BeatResult<Outcome> {
        let outcome = match self {
            Operation::InBeats => Outcome::Length(in_beats(timestamp)),
            Operation::InCentibeats => Outcome::Length(in_centibeats(timestamp)),
            Operation::ConvertBeats => Outcome::Value(u128::from(convert_beats(timestamp))),
            Operation::ConvertCentibeats => {
                Outcome::Value(u128::from(convert_centibeats(timestamp)))
            }
            Operation::Convert(detail) => Outcome::Value(convert(detail, timestamp)?),
            Operation::DisplayBeats => Outcome::Text(display_beats(timestamp)),
            Operation::DisplayCentibeats => Outcome::Text(display_centibeats(timestamp)),
            Operation::Display(detail) => Outcome::Text(display(detail, timestamp)),
        };
        Ok(outcome)
    }
}

impl Expected {
    pub fn matches(&self, outcome: &Outcome) -> bool {
        match (self, outcome) {
            (Expected::Length(want), Outcome::Length(got)) => (want - got).abs() < LENGTH_TOLERANCE,
            (Expected::Value(want), Outcome::Value(got)) => want == got,
            (Expected::Text(want), Outcome::Text(got)) => *want == got.as_str(),
            _ => false,
        }
    }
}

/// One published conversion
#[derive(Clone, Copy, Debug)]
pub struct ReferenceVector {
    pub operation: Operation,
    pub timestamp_ms: i64,
    pub expected: Expected,
}

impl ReferenceVector {
    const fn new(operation: Operation, timestamp_ms: i64, expected: Expected) -> Self {
        ReferenceVector {
            operation,
            timestamp_ms,
            expected,
        }
    }
}

pub const REFERENCE_VECTORS: &[ReferenceVector] = &[
    ReferenceVector::new(Operation::InBeats, 1525244393059, Expected::Length(17_653_291.586331)),
    ReferenceVector::new(Operation::InCentibeats, 1525244393059, Expected::Length(1_765_329_158.633102)),
    ReferenceVector::new(Operation::ConvertBeats, 1525244393059, Expected::Value(333)),
    ReferenceVector::new(Operation::DisplayBeats, 1525251972000, Expected::Text("420")),
    ReferenceVector::new(Operation::Convert(0), 1525221281000, Expected::Value(65)),
    // 78_972_000 ms into the shifted day, 914.0277 beats
    ReferenceVector::new(Operation::Display(2), 1525294572000, Expected::Text("914.02")),
    ReferenceVector::new(Operation::ConvertCentibeats, 1525244393059, Expected::Value(33325)),
    ReferenceVector::new(Operation::DisplayCentibeats, 1525221281000, Expected::Text("065.75")),
    ReferenceVector::new(Operation::DisplayCentibeats, -3_600_000, Expected::Text("000.00")),
    ReferenceVector::new(Operation::ConvertBeats, -1, Expected::Value(41)),
];

/// A vector whose result differs from the published one
#[derive(Clone, Debug)]
pub struct VectorMismatch {
    pub vector: ReferenceVector,
    pub actual: BeatResult<Outcome>,
}

/// Check a single vector
pub fn check(vector: &ReferenceVector) -> Result<(), VectorMismatch> {
    let actual = vector
        .operation
        .apply(Timestamp::from_millis(vector.timestamp_ms));
    let passed = matches!(&actual, Ok(outcome) if vector.expected.matches(outcome));
    if passed {
        Ok(())
    } else {
        Err(VectorMismatch {
            vector: *vector,
            actual,
        })
    }
}

/// Check every reference vector, returning the mismatches
pub fn check_all() -> Vec<VectorMismatch> {
    REFERENCE_VECTORS
        .iter()
        .filter_map(|vector| check(vector).err())
        .collect()
}
