use std::collections::BTreeMap;

use kinanthro_core::models::{AnthropometricRecord, DomainWarning, Sex, SkinfoldSite};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::formulas::FormulaId;
use crate::{formula, FormulaInput};

/// Density and fat estimate from one skinfold formula.
///
/// When `is_valid` is false every numeric field is `None`. The gaps are
/// listed in `missing_skinfolds` and `missing_fields`, and values that are
/// present but unusable in `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BodyCompositionResult {
    pub formula: FormulaId,
    pub method: String,
    pub is_valid: bool,
    /// g/cm³
    pub body_density: Option<f64>,
    pub fat_percent: Option<f64>,
    pub fat_mass_kg: Option<f64>,
    pub lean_mass_kg: Option<f64>,
    pub sum_of_skinfolds_mm: Option<f64>,
    pub missing_skinfolds: Vec<SkinfoldSite>,
    /// Non-skinfold inputs the formula needs, by label.
    pub missing_fields: Vec<String>,
    /// Non-finite or negative inputs.
    pub errors: Vec<String>,
    pub warnings: Vec<DomainWarning>,
}

impl BodyCompositionResult {
    pub(crate) fn invalid(
        formula: FormulaId,
        method: &str,
        missing_skinfolds: Vec<SkinfoldSite>,
        missing_fields: Vec<String>,
        errors: Vec<String>,
    ) -> Self {
        Self {
            formula,
            method: method.to_string(),
            is_valid: false,
            body_density: None,
            fat_percent: None,
            fat_mass_kg: None,
            lean_mass_kg: None,
            sum_of_skinfolds_mm: None,
            missing_skinfolds,
            missing_fields,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Labels of every missing input, skinfolds first.
    pub fn missing_labels(&self) -> Vec<String> {
        self.missing_skinfolds
            .iter()
            .map(|s| s.label().to_string())
            .chain(self.missing_fields.iter().cloned())
            .collect()
    }
}

/// Run `formula_id` over loose inputs.
pub fn compute(
    formula_id: FormulaId,
    sex: Sex,
    skinfolds: &BTreeMap<SkinfoldSite, f64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age_years: Option<f64>,
) -> BodyCompositionResult {
    let input = FormulaInput {
        sex,
        skinfolds,
        weight_kg,
        height_cm,
        age_years,
    };
    formula(formula_id).compute(&input)
}

pub fn compute_for_record(
    formula_id: FormulaId,
    record: &AnthropometricRecord,
) -> BodyCompositionResult {
    compute(
        formula_id,
        record.sex,
        &record.skinfolds,
        record.weight_kg,
        record.height_cm,
        record.age_years,
    )
}
