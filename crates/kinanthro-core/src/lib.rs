//! kinanthro-core
//!
//! Shared vocabulary of the anthropometry engine: sexes, measurement sites,
//! units, the canonical `AnthropometricRecord`, replicate reconciliation
//! (TEM) and the normalization boundary that turns raw form input into
//! canonical numbers. Pure computation with
//! no I/O and no state between calls.

pub mod constants;
pub mod error;
pub mod models;
pub mod normalize;
pub mod reconcile;

use error::CoreError;

/// Round a value for display. Engine code keeps full precision and only
/// callers that render numbers should use this.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Siri (1961) two-compartment conversion from body density (g/cm³) to
/// fat percent. Every engine that reports both density and fat percent
/// goes through this function.
pub fn siri_fat_percent(body_density: f64) -> f64 {
    constants::siri::NUMERATOR / body_density - constants::siri::OFFSET
}

/// `value` unchanged when it is finite and not negative. Zero passes; it
/// is up to the caller whether zero means "not measured".
pub fn check_measurement(field: &str, value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::NonFinite {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(CoreError::NegativeMeasurement {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}
