//! kinanthro-composition
//!
//! Body-composition engines built on the canonical `AnthropometricRecord`:
//! the skinfold density formula catalog, the formula advisor, Heath-Carter
//! somatotype, Kerr five-component fractionation and the elderly surrogate
//! estimators.

pub mod advisor;
pub mod assessment;
pub mod body_composition;
pub mod elderly;
pub mod error;
pub mod formulas;
pub mod fractionation;
pub mod profile;
mod required;
pub mod somatotype;

use std::collections::BTreeMap;

use body_composition::BodyCompositionResult;
use formulas::FormulaId;
use kinanthro_core::check_measurement;
use kinanthro_core::constants::siri;
use kinanthro_core::models::{DomainWarning, ExpectedRange, Sex, SkinfoldSite};
use profile::FormulaProfile;

/// Everything a skinfold density equation may read.
#[derive(Debug, Clone, Copy)]
pub struct FormulaInput<'a> {
    pub sex: Sex,
    pub skinfolds: &'a BTreeMap<SkinfoldSite, f64>,
    pub weight_kg: Option<f64>,
    /// Carried for completeness; none of the catalogued equations use stature.
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
}

impl FormulaInput<'_> {
    pub fn skinfold(&self, site: SkinfoldSite) -> Option<f64> {
        self.skinfolds.get(&site).copied()
    }

    /// Sum of `sites`, or `None` if any of them is absent.
    pub fn sum(&self, sites: &[SkinfoldSite]) -> Option<f64> {
        sites.iter().map(|s| self.skinfold(*s)).sum()
    }
}

/// Trait implemented by each body-density regression.
pub trait DensityFormula: Send + Sync {
    fn id(&self) -> FormulaId;

    /// Human-readable method label (e.g., "Durnin-Womersley (1974)").
    fn name(&self) -> &str;

    /// Bibliographic reference for the published equation.
    fn citation(&self) -> &str;

    /// The patient profile this equation was derived for.
    fn profile(&self) -> FormulaProfile;

    /// Skinfold sites the equation sums, for the given sex.
    fn required_sites(&self, sex: Sex) -> &'static [SkinfoldSite];

    /// Whether the equation has an age term.
    fn requires_age(&self) -> bool {
        false
    }

    /// Age range of the validation sample, when published.
    fn valid_age(&self, _sex: Sex) -> Option<ExpectedRange> {
        None
    }

    /// Body density in g/cm³. Only called once every required site (and
    /// age, when required) is present and valid.
    fn density(&self, input: &FormulaInput<'_>) -> Option<f64>;

    /// Run the equation, detecting missing and invalid inputs first.
    fn compute(&self, input: &FormulaInput<'_>) -> BodyCompositionResult {
        let required = self.required_sites(input.sex);
        let mut errors = Vec::new();
        let missing_skinfolds: Vec<SkinfoldSite> = required
            .iter()
            .copied()
            .filter(|site| is_absent(site.label(), input.skinfold(*site), &mut errors))
            .collect();

        let mut missing_fields = Vec::new();
        if is_absent("Body mass", input.weight_kg, &mut errors) {
            missing_fields.push("Body mass".to_string());
        }
        if is_absent("Age", input.age_years, &mut errors) && self.requires_age() {
            missing_fields.push("Age".to_string());
        }

        if !errors.is_empty() {
            tracing::warn!(formula = %self.id(), errors = ?errors, "formula inputs rejected");
        }
        if !missing_skinfolds.is_empty() || !missing_fields.is_empty() || !errors.is_empty() {
            tracing::debug!(
                formula = %self.id(),
                missing_skinfolds = missing_skinfolds.len(),
                missing_fields = missing_fields.len(),
                "formula not computable"
            );
            return BodyCompositionResult::invalid(
                self.id(),
                self.name(),
                missing_skinfolds,
                missing_fields,
                errors,
            );
        }

        let (Some(density), Some(sum), Some(weight)) =
            (self.density(input), input.sum(required), input.weight_kg)
        else {
            return BodyCompositionResult::invalid(
                self.id(),
                self.name(),
                missing_skinfolds,
                missing_fields,
                errors,
            );
        };

        let mut warnings = Vec::new();
        if let (Some(age), Some(range)) = (input.age_years, self.valid_age(input.sex))
            && let Some(warning) = DomainWarning::check("Age", age, range)
        {
            warnings.push(warning);
        }
        if let Some(warning) = DomainWarning::check(
            "Body density",
            density,
            ExpectedRange::new(siri::MIN_VALID_DENSITY, siri::MAX_VALID_DENSITY),
        ) {
            warnings.push(warning);
        }

        let fat_percent = kinanthro_core::siri_fat_percent(density);
        let fat_mass = weight * fat_percent / 100.0;
        tracing::debug!(
            formula = %self.id(),
            sum_of_skinfolds = sum,
            density,
            fat_percent,
            "computed body composition"
        );

        BodyCompositionResult {
            formula: self.id(),
            method: self.name().to_string(),
            is_valid: true,
            body_density: Some(density),
            fat_percent: Some(fat_percent),
            fat_mass_kg: Some(fat_mass),
            lean_mass_kg: Some(weight - fat_mass),
            sum_of_skinfolds_mm: Some(sum),
            missing_skinfolds,
            missing_fields,
            errors,
            warnings,
        }
    }
}

/// Whether `value` is absent; zero counts as absent. A non-finite or
/// negative value is not absent, it is pushed to `errors`.
fn is_absent(label: &str, value: Option<f64>, errors: &mut Vec<String>) -> bool {
    match value.map(|v| check_measurement(label, v)) {
        Some(Ok(v)) => v == 0.0,
        Some(Err(e)) => {
            errors.push(e.to_string());
            false
        }
        None => true,
    }
}

/// Return all registered formulas, in profile-preference order.
pub fn all_formulas() -> Vec<Box<dyn DensityFormula>> {
    vec![
        Box::new(formulas::jackson_pollock_3::JacksonPollock3),
        Box::new(formulas::durnin_womersley::DurninWomersley),
        Box::new(formulas::jackson_pollock_7::JacksonPollock7),
        Box::new(formulas::withers::Withers),
        Box::new(formulas::sloan::Sloan),
    ]
}

/// Look up a formula by ID.
pub fn get_formula(id: &str) -> Option<Box<dyn DensityFormula>> {
    all_formulas().into_iter().find(|f| f.id().as_str() == id)
}

/// The registered implementation of `id`.
pub fn formula(id: FormulaId) -> Box<dyn DensityFormula> {
    match id {
        FormulaId::DurninWomersley => Box::new(formulas::durnin_womersley::DurninWomersley),
        FormulaId::JacksonPollock7 => Box::new(formulas::jackson_pollock_7::JacksonPollock7),
        FormulaId::JacksonPollock3 => Box::new(formulas::jackson_pollock_3::JacksonPollock3),
        FormulaId::Withers => Box::new(formulas::withers::Withers),
        FormulaId::Sloan => Box::new(formulas::sloan::Sloan),
    }
}
