//! Every growth indicator for one child visit.

use jiff::civil::Date;
use kinanthro_core::models::Sex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::age::AgeInMonths;
use crate::error::GrowthError;
use crate::indicator::{Indicator, Posture};
use crate::zscore::{calculate_z_score_with_posture, GrowthAssessment};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Child {
    pub sex: Sex,
    pub age: AgeInMonths,
}

impl Child {
    pub fn from_dates(
        sex: Sex,
        birth: Date,
        measured_on: Date,
        gestational_age_weeks: Option<f64>,
        correct_prematurity: bool,
    ) -> Result<Self, GrowthError> {
        let age = AgeInMonths::from_dates(
            birth,
            measured_on,
            gestational_age_weeks,
            correct_prematurity,
        )?;
        Ok(Self { sex, age })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChildMeasurements {
    pub weight_kg: Option<f64>,
    /// Recumbent length before 24 months, standing height after.
    pub length_cm: Option<f64>,
    pub head_circumference_cm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndicatorRefusal {
    pub indicator: Indicator,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GrowthReport {
    pub assessments: Vec<GrowthAssessment>,
    /// Indicators that had data but could not be scored.
    pub refused: Vec<IndicatorRefusal>,
}

impl GrowthReport {
    pub fn get(&self, indicator: Indicator) -> Option<&GrowthAssessment> {
        self.assessments.iter().find(|a| a.indicator == indicator)
    }
}

/// Score every indicator that has its measurements. Indicators without
/// data are skipped; indicators outside their domain are listed in
/// `refused`. Length is read as recumbent below 24 months of effective
/// age and as standing height from 24 months.
pub fn assess_child(child: &Child, m: &ChildMeasurements) -> GrowthReport {
    let age = child.age.effective();
    let posture = Posture::for_age(age);
    let present = |v: Option<f64>| v.filter(|v| *v != 0.0);
    let weight = present(m.weight_kg);
    let length = present(m.length_cm);
    let bmi = weight
        .zip(length)
        .map(|(w, l)| w / (l / 100.0).powi(2));

    let requests = [
        (Indicator::Wfa, weight, Some(age)),
        (Indicator::Lhfa, length, Some(age)),
        (Indicator::Wflh, weight, length),
        (Indicator::Bfa, bmi, Some(age)),
        (Indicator::Hcfa, present(m.head_circumference_cm), Some(age)),
    ];

    let mut report = GrowthReport::default();
    for (indicator, value, axis) in requests {
        let Some((value, axis)) = value.zip(axis) else {
            continue;
        };
        match calculate_z_score_with_posture(value, axis, child.sex, indicator, posture) {
            Ok(assessment) => report.assessments.push(assessment),
            Err(e) => report.refused.push(IndicatorRefusal {
                indicator,
                reason: e.to_string(),
            }),
        }
    }
    tracing::debug!(
        scored = report.assessments.len(),
        refused = report.refused.len(),
        "assessed child growth"
    );
    report
}
