use kinanthro_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompositionError {
    #[error("unknown formula: {0}")]
    UnknownFormula(String),

    #[error("unknown formula profile: {0}")]
    UnknownProfile(String),

    #[error("unknown activity level: {0}")]
    UnknownActivityLevel(String),

    /// A required measurement is absent. `missing` holds human labels in a
    /// stable order so callers can show them directly.
    #[error("{engine} cannot be computed, missing: {}", .missing.join(", "))]
    MissingInput {
        engine: &'static str,
        missing: Vec<String>,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
