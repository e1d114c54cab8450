use thiserror::Error;

/// Hard rejects raised at the normalization boundary.
///
/// Missing measurements are never an error; the engines report them as
/// missing-data lists. These variants cover input that is numerically
/// invalid or logically impossible.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{field}: value {value} is negative")]
    NegativeMeasurement { field: String, value: f64 },

    #[error("{field}: value is not a finite number")]
    NonFinite { field: String },

    #[error("{field}: cannot parse '{text}' as a number")]
    Unparsable { field: String, text: String },

    #[error("{field}: {count} replicate readings supplied, at most 3 are accepted")]
    TooManyReplicates { field: String, count: usize },

    #[error("sitting height {sitting_cm} cm is not below stature {stature_cm} cm")]
    SittingHeightNotBelowStature { sitting_cm: f64, stature_cm: f64 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
