use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive range a value is expected to fall in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpectedRange {
    pub min: f64,
    pub max: f64,
}

impl ExpectedRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<(f64, f64)> for ExpectedRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// A value that is present but outside its plausible range. Reported next
/// to the computed result; never blocks computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainWarning {
    pub field: String,
    pub value: f64,
    pub expected: ExpectedRange,
    pub message: String,
}

impl DomainWarning {
    /// Build a warning if `value` falls outside `expected`.
    pub fn check(field: &str, value: f64, expected: ExpectedRange) -> Option<Self> {
        if expected.contains(value) {
            return None;
        }
        tracing::warn!(
            field,
            value,
            min = expected.min,
            max = expected.max,
            "value outside expected range"
        );
        Some(Self {
            field: field.to_string(),
            value,
            expected,
            message: format!(
                "{field}: {value} is outside the expected range [{}, {}]",
                expected.min, expected.max
            ),
        })
    }
}
