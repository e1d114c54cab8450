//! Surrogate stature and mass for patients who cannot stand, and
//! functional risk screening for older adults.
//!
//! References:
//! - Chumlea WC, Roche AF, Steinbaugh ML. Estimating stature from knee
//!   height for persons 60 to 90 years of age. J Am Geriatr Soc 1985;33:116-120.
//! - Chumlea WC, Guo S, Roche AF, Steinbaugh ML. Prediction of body weight
//!   for the nonambulatory elderly from anthropometry. J Am Diet Assoc
//!   1988;88:564-568.
//! - Bassey EJ. Demi-span as a measure of skeletal size. Ann Hum Biol
//!   1986;13:499-502.
//! - Cruz-Jentoft AJ et al. Sarcopenia: revised European consensus on
//!   definition and diagnosis (EWGSOP2). Age Ageing 2019;48:16-31.

use kinanthro_core::check_measurement;
use kinanthro_core::constants::functional;
use kinanthro_core::error::CoreError;
use kinanthro_core::models::{AnthropometricRecord, Girth, Length, Sex, SkinfoldSite};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CompositionError;

/// A positive, finite measurement, or the reason it cannot be used.
/// Zero and `None` mean "not measured".
fn measured(label: &str, value: Option<f64>, missing: &mut Vec<String>) -> Result<f64, CoreError> {
    let checked = value.map(|v| check_measurement(label, v)).transpose()?;
    if let Some(v) = checked.filter(|v| *v > 0.0) {
        return Ok(v);
    }
    missing.push(label.to_string());
    Ok(0.0)
}

fn require(engine: &'static str, missing: Vec<String>) -> Result<(), CompositionError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CompositionError::MissingInput { engine, missing })
    }
}

/// Chumlea (1985) stature (cm) from knee height, for ages 60-90.
pub fn estimate_height_from_knee(
    knee_height_cm: f64,
    age_years: f64,
    sex: Sex,
) -> Result<f64, CompositionError> {
    let mut missing = Vec::new();
    let knee = measured("Knee height", Some(knee_height_cm), &mut missing)?;
    let age = measured("Age", Some(age_years), &mut missing)?;
    require("Knee-height stature", missing)?;

    let height = match sex {
        Sex::Male => 64.19 - 0.04 * age + 2.02 * knee,
        Sex::Female => 84.88 - 0.24 * age + 1.83 * knee,
    };
    tracing::debug!(knee, age, height, "estimated stature from knee height");
    Ok(height)
}

/// Bassey (1986) stature (cm) from demi-span.
pub fn estimate_height_from_demispan(demi_span_cm: f64, sex: Sex) -> Result<f64, CompositionError> {
    let mut missing = Vec::new();
    let span = measured("Demi-span", Some(demi_span_cm), &mut missing)?;
    require("Demi-span stature", missing)?;

    Ok(match sex {
        Sex::Male => 1.40 * span + 57.8,
        Sex::Female => 1.35 * span + 60.1,
    })
}

/// Inputs to the Chumlea (1988) weight equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChumleaSurrogates {
    pub sex: Sex,
    pub calf_circumference_cm: Option<f64>,
    pub knee_height_cm: Option<f64>,
    pub mid_upper_arm_circumference_cm: Option<f64>,
    pub subscapular_skinfold_mm: Option<f64>,
}

impl ChumleaSurrogates {
    pub fn from_record(record: &AnthropometricRecord) -> Self {
        Self {
            sex: record.sex,
            calf_circumference_cm: record.girth(Girth::Calf),
            knee_height_cm: record.length(Length::KneeHeight),
            mid_upper_arm_circumference_cm: record.girth(Girth::ArmRelaxed),
            subscapular_skinfold_mm: record.skinfold(SkinfoldSite::Subscapular),
        }
    }
}

/// Chumlea (1988) body mass (kg) for nonambulatory older adults.
pub fn estimate_weight_chumlea(s: &ChumleaSurrogates) -> Result<f64, CompositionError> {
    let mut missing = Vec::new();
    let calf = measured("Calf girth", s.calf_circumference_cm, &mut missing)?;
    let knee = measured("Knee height", s.knee_height_cm, &mut missing)?;
    let mac = measured("Arm girth (relaxed)", s.mid_upper_arm_circumference_cm, &mut missing)?;
    let ssf = measured("Subscapular skinfold", s.subscapular_skinfold_mm, &mut missing)?;
    require("Chumlea weight", missing)?;

    let weight = match s.sex {
        Sex::Male => 0.98 * calf + 1.16 * knee + 1.73 * mac + 0.37 * ssf - 81.69,
        Sex::Female => 1.27 * calf + 0.87 * knee + 0.98 * mac + 0.4 * ssf - 62.35,
    };
    tracing::debug!(weight, "estimated body mass from surrogates");
    Ok(weight)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionalTests {
    pub handgrip_kg: Option<f64>,
    pub timed_up_and_go_s: Option<f64>,
    pub gait_speed_m_per_s: Option<f64>,
    pub calf_circumference_cm: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SarcopeniaStage {
    NotIndicated,
    /// Low muscle strength.
    Probable,
    /// Low strength plus a low muscle-quantity screen.
    Confirmed,
    /// Confirmed plus low physical performance.
    Severe,
}

/// Each flag is `None` when its test was not performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionalRisk {
    pub low_strength: Option<bool>,
    pub fall_risk: Option<bool>,
    pub low_physical_performance: Option<bool>,
    pub low_muscle_mass_screen: Option<bool>,
    pub sarcopenia: SarcopeniaStage,
    pub findings: Vec<String>,
}

/// EWGSOP2 cut-offs for grip strength and gait speed, the 12 s
/// Timed-Up-and-Go fall threshold, and the 31 cm calf screen.
///
/// Muscle quantity is only screened by calf circumference here, so a
/// `Confirmed` stage should be verified with DXA or BIA.
pub fn assess_functional_risk(sex: Sex, tests: &FunctionalTests) -> FunctionalRisk {
    let grip_cutoff = match sex {
        Sex::Male => functional::HANDGRIP_LOW_MALE_KG,
        Sex::Female => functional::HANDGRIP_LOW_FEMALE_KG,
    };
    let present = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);

    let low_strength = present(tests.handgrip_kg).map(|g| g < grip_cutoff);
    let fall_risk =
        present(tests.timed_up_and_go_s).map(|t| t >= functional::TUG_FALL_RISK_SECONDS);
    let low_physical_performance =
        present(tests.gait_speed_m_per_s).map(|s| s <= functional::GAIT_SPEED_LOW_M_PER_S);
    let low_muscle_mass_screen =
        present(tests.calf_circumference_cm).map(|c| c < functional::CALF_CIRCUMFERENCE_LOW_CM);

    let mut findings = Vec::new();
    if low_strength == Some(true) {
        findings.push(format!("Handgrip strength below {grip_cutoff} kg"));
    }
    if fall_risk == Some(true) {
        findings.push(format!(
            "Timed Up and Go of {} s or more indicates fall risk",
            functional::TUG_FALL_RISK_SECONDS
        ));
    }
    if low_physical_performance == Some(true) {
        findings.push(format!(
            "Gait speed at or below {} m/s",
            functional::GAIT_SPEED_LOW_M_PER_S
        ));
    }
    if low_muscle_mass_screen == Some(true) {
        findings.push(format!(
            "Calf circumference below {} cm",
            functional::CALF_CIRCUMFERENCE_LOW_CM
        ));
    }

    let sarcopenia = match (low_strength, low_muscle_mass_screen, low_physical_performance) {
        (Some(true), Some(true), Some(true)) => SarcopeniaStage::Severe,
        (Some(true), Some(true), _) => SarcopeniaStage::Confirmed,
        (Some(true), _, _) => SarcopeniaStage::Probable,
        _ => SarcopeniaStage::NotIndicated,
    };

    FunctionalRisk {
        low_strength,
        fall_risk,
        low_physical_performance,
        low_muscle_mass_screen,
        sarcopenia,
        findings,
    }
}
