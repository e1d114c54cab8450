//! LMS z-scores.
//!
//! Reference: WHO Multicentre Growth Reference Study Group. *WHO Child
//! Growth Standards: Methods and development*. Geneva: WHO, 2006.

use kinanthro_core::constants::growth;
use kinanthro_core::error::CoreError;
use kinanthro_core::models::Sex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::GrowthError;
use crate::indicator::{Indicator, Posture};
use crate::tables::{self, Lms};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Normal,
    ModerateNegative,
    ModeratePositive,
    SevereNegative,
    SeverePositive,
}

impl Severity {
    /// |z| <= 2 is normal, <= 3 moderate, beyond 3 severe.
    pub fn from_z(z: f64) -> Self {
        let magnitude = z.abs();
        if magnitude <= growth::MODERATE_Z {
            Severity::Normal
        } else if magnitude <= growth::SEVERE_Z {
            if z < 0.0 {
                Severity::ModerateNegative
            } else {
                Severity::ModeratePositive
            }
        } else if z < 0.0 {
            Severity::SevereNegative
        } else {
            Severity::SeverePositive
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GrowthAssessment {
    pub indicator: Indicator,
    /// Table posture, for the indicators that have one.
    pub posture: Option<Posture>,
    /// Age in months, or length/height in cm for `wflh`.
    pub axis_value: f64,
    pub value: f64,
    pub z_score: f64,
    pub severity: Severity,
    pub diagnosis: String,
    /// Interpolated reference parameters used for the score.
    pub lms: Lms,
    /// True when the WHO restricted extension beyond +/-3 SD was applied.
    pub restricted: bool,
}

/// Raw LMS z-score of `value`.
pub fn lms_z(value: f64, lms: Lms) -> f64 {
    if lms.l == 0.0 {
        (value / lms.m).ln() / lms.s
    } else {
        ((value / lms.m).powf(lms.l) - 1.0) / (lms.l * lms.s)
    }
}

/// Measurement on the `z` centile curve.
pub fn lms_value(z: f64, lms: Lms) -> f64 {
    if lms.l == 0.0 {
        lms.m * (lms.s * z).exp()
    } else {
        lms.m * (1.0 + lms.l * lms.s * z).powf(1.0 / lms.l)
    }
}

/// WHO restricted application: beyond +/-3 SD the score grows linearly in
/// units of the distance between the 2 and 3 SD curves.
fn restricted_z(value: f64, lms: Lms, z: f64) -> f64 {
    let (sd2, sd3) = if z > 0.0 {
        (lms_value(2.0, lms), lms_value(3.0, lms))
    } else {
        (lms_value(-2.0, lms), lms_value(-3.0, lms))
    };
    let step = (sd3 - sd2).abs();
    if z > 0.0 {
        growth::SEVERE_Z + (value - sd3) / step
    } else {
        -growth::SEVERE_Z + (value - sd3) / step
    }
}

/// z-score of `value` against the WHO standard for `indicator`.
///
/// `axis` is age in months, or length in cm for `wflh`. Values outside the
/// indicator's table are refused with `GrowthError::IndicatorDomain`.
/// The posture comes from [`Indicator::default_posture`]; use
/// [`calculate_z_score_with_posture`] to score a standing height against
/// weight-for-height.
pub fn calculate_z_score(
    value: f64,
    axis: f64,
    sex: Sex,
    indicator: Indicator,
) -> Result<GrowthAssessment, GrowthError> {
    let posture = indicator.default_posture(axis);
    calculate_z_score_with_posture(value, axis, sex, indicator, posture)
}

/// As [`calculate_z_score`], with the table posture given explicitly. It
/// is ignored by indicators without a posture.
pub fn calculate_z_score_with_posture(
    value: f64,
    axis: f64,
    sex: Sex,
    indicator: Indicator,
    posture: Posture,
) -> Result<GrowthAssessment, GrowthError> {
    let field = indicator.label();
    if !value.is_finite() {
        return Err(CoreError::NonFinite {
            field: field.to_string(),
        }
        .into());
    }
    if value < 0.0 {
        return Err(CoreError::NegativeMeasurement {
            field: field.to_string(),
            value,
        }
        .into());
    }
    if value == 0.0 {
        return Err(GrowthError::MissingValue { indicator });
    }
    indicator.check_domain(axis, posture)?;

    let lms = tables::interpolate(tables::table(indicator, sex, posture), axis)
        .ok_or_else(|| indicator.domain_error(axis, posture))?;

    let raw = lms_z(value, lms);
    let restricted = indicator.is_weight_based() && raw.abs() > growth::SEVERE_Z;
    let z_score = if restricted {
        restricted_z(value, lms, raw)
    } else {
        raw
    };
    let severity = Severity::from_z(z_score);

    tracing::debug!(
        %indicator,
        ?posture,
        axis,
        value,
        z_score,
        ?severity,
        "computed growth z-score"
    );

    Ok(GrowthAssessment {
        indicator,
        posture: indicator.depends_on_posture().then_some(posture),
        axis_value: axis,
        value,
        z_score,
        severity,
        diagnosis: diagnosis(indicator, severity).to_string(),
        lms,
        restricted,
    })
}

/// WHO interpretation of a severity band for one indicator.
pub fn diagnosis(indicator: Indicator, severity: Severity) -> &'static str {
    use Severity::*;
    match (indicator, severity) {
        (Indicator::Wfa, SevereNegative) => "Severely underweight",
        (Indicator::Wfa, ModerateNegative) => "Underweight",
        (Indicator::Wfa, Normal) => "Normal weight for age",
        (Indicator::Wfa, ModeratePositive) => {
            "Weight above the expected range; check weight-for-length"
        }
        (Indicator::Wfa, SeverePositive) => {
            "Weight well above the expected range; check weight-for-length"
        }

        (Indicator::Lhfa, SevereNegative) => "Severely stunted",
        (Indicator::Lhfa, ModerateNegative) => "Stunted",
        (Indicator::Lhfa, Normal) => "Normal length/height for age",
        (Indicator::Lhfa, ModeratePositive) => "Tall",
        (Indicator::Lhfa, SeverePositive) => "Very tall; consider an endocrine assessment",

        (Indicator::Wflh | Indicator::Bfa, SevereNegative) => "Severely wasted",
        (Indicator::Wflh | Indicator::Bfa, ModerateNegative) => "Wasted",
        (Indicator::Wflh | Indicator::Bfa, Normal) => "Normal",
        (Indicator::Wflh | Indicator::Bfa, ModeratePositive) => "Overweight",
        (Indicator::Wflh | Indicator::Bfa, SeverePositive) => "Obese",

        (Indicator::Hcfa, SevereNegative) => "Severe microcephaly",
        (Indicator::Hcfa, ModerateNegative) => "Microcephaly",
        (Indicator::Hcfa, Normal) => "Normal head circumference",
        (Indicator::Hcfa, ModeratePositive) => "Macrocephaly",
        (Indicator::Hcfa, SeverePositive) => "Severe macrocephaly",
    }
}
