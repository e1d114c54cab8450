use kinanthro_core::error::CoreError;
use thiserror::Error;

use crate::indicator::Indicator;

#[derive(Debug, Error)]
pub enum GrowthError {
    /// The age or length falls outside the reference table. The engine never
    /// extrapolates.
    #[error("{indicator} is defined for {axis} {min}-{max} {unit}, got {value}")]
    IndicatorDomain {
        indicator: Indicator,
        axis: &'static str,
        unit: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("unknown growth indicator: {0}")]
    UnknownIndicator(String),

    #[error("{indicator}: no measurement supplied")]
    MissingValue { indicator: Indicator },

    #[error("measurement date {on} is before birth date {birth}")]
    MeasuredBeforeBirth { birth: jiff::civil::Date, on: jiff::civil::Date },

    #[error("gestational age {weeks} weeks is not plausible")]
    GestationalAge { weeks: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}
