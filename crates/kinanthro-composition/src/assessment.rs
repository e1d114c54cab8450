//! One call that runs every adult engine over a normalized record.

use kinanthro_core::models::{AnthropometricRecord, Length};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::advisor::{validate_formula_match, FormulaValidation, PatientProfile};
use crate::body_composition::{compute_for_record, BodyCompositionResult};
use crate::elderly::{
    assess_functional_risk, estimate_height_from_demispan, estimate_height_from_knee,
    estimate_weight_chumlea, ChumleaSurrogates, FunctionalRisk, FunctionalTests,
};
use crate::error::CompositionError;
use crate::formulas::FormulaId;
use crate::fractionation::{fractionate, FiveComponentResult};
use crate::profile::{ActivityLevel, FormulaProfile};
use crate::somatotype::{compute_somatotype, SomatotypeResult};

/// Caller-owned choices for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRequest {
    pub profile: FormulaProfile,
    #[serde(default)]
    pub activity: ActivityLevel,
    /// Overrides the profile's default formula.
    #[serde(default)]
    pub formula: Option<FormulaId>,
    #[serde(default)]
    pub functional: Option<FunctionalTests>,
}

impl AssessmentRequest {
    pub fn new(profile: FormulaProfile) -> Self {
        Self {
            profile,
            activity: ActivityLevel::default(),
            formula: None,
            functional: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurrogateEstimates {
    pub height_from_knee_cm: Option<f64>,
    pub height_from_demispan_cm: Option<f64>,
    pub weight_chumlea_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub advice: FormulaValidation,
    /// Result of the selected formula.
    pub body_composition: BodyCompositionResult,
    /// Every catalogued formula, for comparison.
    pub all_formulas: Vec<BodyCompositionResult>,
    pub somatotype: Option<SomatotypeResult>,
    /// Labels keeping the somatotype from being computed.
    pub somatotype_missing: Vec<String>,
    pub five_component: FiveComponentResult,
    pub surrogates: SurrogateEstimates,
    pub functional: Option<FunctionalRisk>,
}

pub fn assess(record: &AnthropometricRecord, request: &AssessmentRequest) -> Assessment {
    let patient = PatientProfile::from_record(record, request.activity);
    let advice = validate_formula_match(request.profile, &patient, record);

    let selected = request
        .formula
        .unwrap_or_else(|| request.profile.default_formula());
    let body_composition = compute_for_record(selected, record);
    let all_formulas = FormulaId::ALL
        .into_iter()
        .map(|id| compute_for_record(id, record))
        .collect();

    let (somatotype, somatotype_missing) = match compute_somatotype(record) {
        Ok(result) => (Some(result), Vec::new()),
        Err(CompositionError::MissingInput { missing, .. }) => (None, missing),
        Err(other) => (None, vec![other.to_string()]),
    };

    let five_component = fractionate(record);
    let surrogates = surrogate_estimates(record);
    let functional = request
        .functional
        .map(|tests| assess_functional_risk(record.sex, &tests));

    tracing::info!(
        formula = %selected,
        body_composition_valid = body_composition.is_valid,
        somatotype = somatotype.is_some(),
        five_component_valid = five_component.is_valid,
        "assessment complete"
    );

    Assessment {
        advice,
        body_composition,
        all_formulas,
        somatotype,
        somatotype_missing,
        five_component,
        surrogates,
        functional,
    }
}

fn surrogate_estimates(record: &AnthropometricRecord) -> SurrogateEstimates {
    let knee = record.length(Length::KneeHeight);
    let demi_span = record.length(Length::DemiSpan);

    SurrogateEstimates {
        height_from_knee_cm: knee
            .zip(record.age_years)
            .and_then(|(k, age)| estimate_height_from_knee(k, age, record.sex).ok()),
        height_from_demispan_cm: demi_span
            .and_then(|d| estimate_height_from_demispan(d, record.sex).ok()),
        weight_chumlea_kg: knee
            .and_then(|_| estimate_weight_chumlea(&ChumleaSurrogates::from_record(record)).ok()),
    }
}
