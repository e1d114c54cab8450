//! Input file format and the JSON report printed by `kinanthro assess`.

use jiff::civil::Date;
use kinanthro_composition::assessment::{assess, Assessment, AssessmentRequest};
use kinanthro_composition::elderly::FunctionalTests;
use kinanthro_composition::formulas::FormulaId;
use kinanthro_composition::profile::{ActivityLevel, FormulaProfile};
use kinanthro_core::models::{DomainWarning, Site};
use kinanthro_core::normalize::{normalize, RawRecord};
use kinanthro_core::reconcile::Reconciliation;
use kinanthro_growth::{assess_child, Child, ChildMeasurements, GrowthReport};
use serde::{Deserialize, Serialize};

use crate::config::KinanthroConfig;

/// Contents of an input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub record: RawRecord,
    #[serde(default)]
    pub profile: Option<FormulaProfile>,
    #[serde(default)]
    pub activity: Option<ActivityLevel>,
    #[serde(default)]
    pub formula: Option<FormulaId>,
    #[serde(default)]
    pub functional: Option<FunctionalTests>,
    #[serde(default)]
    pub growth: Option<GrowthInput>,
}

impl AssessmentInput {
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthInput {
    pub birth_date: Date,
    /// Defaults to the day the report is produced.
    #[serde(default)]
    pub measured_on: Option<Date>,
    #[serde(default)]
    pub gestational_age_weeks: Option<f64>,
    #[serde(default)]
    pub measurements: ChildMeasurements,
}

/// Command-line choices that take precedence over the input file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub profile: Option<FormulaProfile>,
    pub activity: Option<ActivityLevel>,
    pub formula: Option<FormulaId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub reconciliations: Vec<Reconciliation>,
    pub third_measurement_needed: Vec<Site>,
    pub warnings: Vec<DomainWarning>,
    pub assessment: Assessment,
    pub growth: Option<GrowthReport>,
}

/// Normalize the input, run the adult engines and, when a growth block is
/// present, the pediatric indicators.
///
/// Precedence for profile and activity is overrides, then the input file,
/// then the config.
pub fn build_report(
    input: &AssessmentInput,
    config: &KinanthroConfig,
    overrides: &Overrides,
    today: Date,
) -> eyre::Result<Report> {
    let normalized = normalize(&input.record)?;

    let request = AssessmentRequest {
        profile: overrides
            .profile
            .or(input.profile)
            .unwrap_or(config.default_profile),
        activity: overrides
            .activity
            .or(input.activity)
            .unwrap_or(config.default_activity),
        formula: overrides.formula.or(input.formula),
        functional: input.functional,
    };
    let assessment = assess(&normalized.record, &request);

    let growth = match &input.growth {
        Some(g) => {
            let child = Child::from_dates(
                normalized.record.sex,
                g.birth_date,
                g.measured_on.unwrap_or(today),
                g.gestational_age_weeks,
                config.prematurity_correction,
            )?;
            Some(assess_child(&child, &g.measurements))
        }
        None => None,
    };

    Ok(Report {
        third_measurement_needed: normalized.sites_needing_third_measurement(),
        reconciliations: normalized.reconciliations,
        warnings: normalized.warnings,
        assessment,
        growth,
    })
}
