//! Formula advisor.
//!
//! A static, ordered rule table checks the selected formula profile against
//! the patient and the measurements at hand. The advisor never switches
//! formulas itself; it only describes the mismatch.

use kinanthro_core::constants::advisor;
use kinanthro_core::models::AnthropometricRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::body_composition::compute_for_record;
use crate::formulas::FormulaId;
use crate::profile::{ActivityLevel, FormulaProfile};

/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientProfile {
    pub age_years: Option<f64>,
    #[serde(default)]
    pub activity: ActivityLevel,
}

impl PatientProfile {
    pub fn from_record(record: &AnthropometricRecord, activity: ActivityLevel) -> Self {
        Self {
            age_years: record.age_years,
            activity,
        }
    }
}

/// One rule that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleMatch {
    pub rule: String,
    pub severity: Severity,
    pub recommended: FormulaProfile,
    pub message: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormulaValidation {
    /// True when nothing above `info` fired.
    pub is_optimal: bool,
    pub severity: Severity,
    pub recommended: FormulaProfile,
    pub recommended_formula: FormulaId,
    pub message: String,
    pub suggestion: String,
    /// Id of the winning rule; `None` when no rule fired.
    pub rule: Option<String>,
}

struct Context<'a> {
    selected: FormulaProfile,
    patient: &'a PatientProfile,
    record: &'a AnthropometricRecord,
}

impl Context<'_> {
    fn is_athlete(&self) -> bool {
        self.patient.activity == ActivityLevel::Athlete
    }

    fn is_complete(&self, profile: FormulaProfile) -> bool {
        compute_for_record(profile.default_formula(), self.record).is_valid
    }
}

/// A named condition. `evaluate` returns a match when the condition holds.
struct Rule {
    id: &'static str,
    evaluate: fn(&Context<'_>) -> Option<RuleMatch>,
}

static RULES: [Rule; 7] = [
    Rule {
        id: "athlete_rapid",
        evaluate: athlete_rapid,
    },
    Rule {
        id: "missing_measurements",
        evaluate: missing_measurements,
    },
    Rule {
        id: "elderly_general",
        evaluate: elderly_general,
    },
    Rule {
        id: "athlete_generalized",
        evaluate: athlete_generalized,
    },
    Rule {
        id: "sedentary_athlete_formula",
        evaluate: sedentary_athlete_formula,
    },
    Rule {
        id: "minor_adult_formula",
        evaluate: minor_adult_formula,
    },
    Rule {
        id: "rapid_screening",
        evaluate: rapid_screening,
    },
];

/// Ids of every rule, in evaluation order.
pub fn rule_ids() -> Vec<&'static str> {
    RULES.iter().map(|r| r.id).collect()
}

/// Every rule that fires for this combination, in table order.
pub fn matching_rules(
    selected: FormulaProfile,
    patient: &PatientProfile,
    record: &AnthropometricRecord,
) -> Vec<RuleMatch> {
    let ctx = Context {
        selected,
        patient,
        record,
    };
    RULES.iter().filter_map(|rule| (rule.evaluate)(&ctx)).collect()
}

/// Check `selected` against the patient. The most severe match wins; ties
/// go to the rule listed first.
pub fn validate_formula_match(
    selected: FormulaProfile,
    patient: &PatientProfile,
    record: &AnthropometricRecord,
) -> FormulaValidation {
    let mut winner: Option<RuleMatch> = None;
    for m in matching_rules(selected, patient, record) {
        if winner.as_ref().is_none_or(|w| m.severity > w.severity) {
            winner = Some(m);
        }
    }

    match winner {
        Some(m) => {
            tracing::debug!(rule = %m.rule, severity = ?m.severity, "formula advisory");
            FormulaValidation {
                is_optimal: m.severity == Severity::Info,
                severity: m.severity,
                recommended: m.recommended,
                recommended_formula: m.recommended.default_formula(),
                message: m.message,
                suggestion: m.suggestion,
                rule: Some(m.rule),
            }
        }
        None => FormulaValidation {
            is_optimal: true,
            severity: Severity::Info,
            recommended: selected,
            recommended_formula: selected.default_formula(),
            message: "The selected formula suits this patient".to_string(),
            suggestion: String::new(),
            rule: None,
        },
    }
}

fn advice(
    rule: &str,
    severity: Severity,
    recommended: FormulaProfile,
    message: impl Into<String>,
    suggestion: impl Into<String>,
) -> Option<RuleMatch> {
    Some(RuleMatch {
        rule: rule.to_string(),
        severity,
        recommended,
        message: message.into(),
        suggestion: suggestion.into(),
    })
}

fn athlete_rapid(ctx: &Context<'_>) -> Option<RuleMatch> {
    if !(ctx.is_athlete() && ctx.selected == FormulaProfile::Rapid) {
        return None;
    }
    advice(
        "athlete_rapid",
        Severity::Critical,
        FormulaProfile::Athlete,
        "Two-skinfold screening loses too much precision for a trained athlete",
        "Measure the full skinfold battery and use the Withers athlete equation",
    )
}

fn missing_measurements(ctx: &Context<'_>) -> Option<RuleMatch> {
    let result = compute_for_record(ctx.selected.default_formula(), ctx.record);
    let missing = result.missing_labels();
    if result.is_valid || missing.is_empty() {
        return None;
    }
    let missing = missing.join(", ");
    let alternative = FormulaProfile::ALL
        .into_iter()
        .filter(|p| *p != ctx.selected)
        .find(|p| ctx.is_complete(*p));

    match alternative {
        Some(profile) => advice(
            "missing_measurements",
            Severity::Warning,
            profile,
            format!("{} is missing: {missing}", result.method),
            format!(
                "Use {} with the available measurements, or complete the missing sites",
                profile.default_formula()
            ),
        ),
        None => advice(
            "missing_measurements",
            Severity::Critical,
            ctx.selected,
            format!("No formula can be computed; {} is missing: {missing}", result.method),
            "Complete the missing measurements",
        ),
    }
}

fn elderly_general(ctx: &Context<'_>) -> Option<RuleMatch> {
    let age = ctx.patient.age_years?;
    if !(age >= advisor::ELDERLY_AGE_YEARS && ctx.selected == FormulaProfile::General) {
        return None;
    }
    advice(
        "elderly_general",
        Severity::Warning,
        FormulaProfile::Control,
        "Generalized adult equations overestimate density in older adults",
        "Use Durnin-Womersley, which has a dedicated 50+ age band",
    )
}

fn athlete_generalized(ctx: &Context<'_>) -> Option<RuleMatch> {
    let generalized = matches!(
        ctx.selected,
        FormulaProfile::General | FormulaProfile::Control
    );
    if !(ctx.is_athlete() && generalized) {
        return None;
    }
    advice(
        "athlete_generalized",
        Severity::Warning,
        FormulaProfile::Athlete,
        "Population equations tend to overestimate fat in athletes",
        "Use the Withers athlete equation",
    )
}

fn sedentary_athlete_formula(ctx: &Context<'_>) -> Option<RuleMatch> {
    if !(ctx.patient.activity == ActivityLevel::Sedentary
        && ctx.selected == FormulaProfile::Athlete)
    {
        return None;
    }
    advice(
        "sedentary_athlete_formula",
        Severity::Warning,
        FormulaProfile::General,
        "Athlete equations underestimate fat in sedentary patients",
        "Use a generalized population equation",
    )
}

fn minor_adult_formula(ctx: &Context<'_>) -> Option<RuleMatch> {
    let age = ctx.patient.age_years?;
    if age >= advisor::ADULT_AGE_YEARS {
        return None;
    }
    advice(
        "minor_adult_formula",
        Severity::Info,
        ctx.selected,
        "Skinfold density equations are validated on adults only",
        "Interpret with caution or use the pediatric growth z-scores",
    )
}

fn rapid_screening(ctx: &Context<'_>) -> Option<RuleMatch> {
    if ctx.selected != FormulaProfile::Rapid || ctx.is_athlete() {
        return None;
    }
    advice(
        "rapid_screening",
        Severity::Info,
        ctx.selected,
        "Two-skinfold screening estimate",
        "Confirm with a complete skinfold profile when precision matters",
    )
}
