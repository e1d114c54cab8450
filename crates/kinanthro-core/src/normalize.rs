//! Input normalization boundary.
//!
//! Form layers hand over measurements as a bare number, a `{ "value": n }`
//! object, a replicate set or a string from a text input. Everything is
//! resolved here, once, into the canonical `AnthropometricRecord`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::check_measurement;
use crate::constants::isak_ranges;
use crate::error::CoreError;
use crate::models::{
    AnthropometricRecord, Breadth, DomainWarning, ExpectedRange, Girth, Length, LengthUnit,
    MassUnit, Sex, Site, SkinfoldSite,
};
use crate::reconcile::{reconcile, Reconciliation};

/// One measurement as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RawMeasurement {
    Value(f64),
    Single { value: f64 },
    Replicates { values: Vec<f64> },
    Text(String),
}

/// Units the raw record was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawUnits {
    #[serde(default = "default_skinfold_unit")]
    pub skinfold: LengthUnit,
    /// Stature, girths, breadths, lengths and head circumference.
    #[serde(default = "default_length_unit")]
    pub length: LengthUnit,
    #[serde(default = "default_mass_unit")]
    pub mass: MassUnit,
}

fn default_skinfold_unit() -> LengthUnit {
    LengthUnit::Mm
}

fn default_length_unit() -> LengthUnit {
    LengthUnit::Cm
}

fn default_mass_unit() -> MassUnit {
    MassUnit::Kg
}

impl Default for RawUnits {
    fn default() -> Self {
        Self {
            skinfold: default_skinfold_unit(),
            length: default_length_unit(),
            mass: default_mass_unit(),
        }
    }
}

/// A measurement snapshot as received from data entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawRecord {
    pub sex: Sex,
    #[serde(default)]
    pub weight: Option<RawMeasurement>,
    #[serde(default)]
    pub height: Option<RawMeasurement>,
    #[serde(default)]
    pub age_years: Option<f64>,
    #[serde(default)]
    pub skinfolds: BTreeMap<SkinfoldSite, Option<RawMeasurement>>,
    #[serde(default)]
    pub girths: BTreeMap<Girth, Option<RawMeasurement>>,
    #[serde(default)]
    pub breadths: BTreeMap<Breadth, Option<RawMeasurement>>,
    #[serde(default)]
    pub lengths: BTreeMap<Length, Option<RawMeasurement>>,
    #[serde(default)]
    pub head_circumference: Option<RawMeasurement>,
    #[serde(default)]
    pub units: RawUnits,
}

impl RawRecord {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The canonical record plus everything learned while building it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedRecord {
    pub record: AnthropometricRecord,
    /// One entry per replicate set, in entry units.
    pub reconciliations: Vec<Reconciliation>,
    pub warnings: Vec<DomainWarning>,
}

impl NormalizedRecord {
    /// Sites whose two readings differ enough to need a third.
    pub fn sites_needing_third_measurement(&self) -> Vec<Site> {
        self.reconciliations
            .iter()
            .filter(|r| r.needs_third_measurement())
            .map(|r| r.site)
            .collect()
    }
}

/// Resolve a raw record into canonical engine units.
///
/// Zero readings and empty strings become "missing". Negative or non-finite
/// numbers, unparsable strings and a sitting height at or above stature are
/// hard rejects. Implausible values are kept and reported as warnings.
pub fn normalize(raw: &RawRecord) -> Result<NormalizedRecord, CoreError> {
    let mut resolver = Resolver::default();
    let units = raw.units;
    let mut record = AnthropometricRecord::new(raw.sex);

    record.weight_kg = resolver
        .resolve(Site::BodyMass, raw.weight.as_ref())?
        .map(|v| units.mass.to_kg(v));
    record.height_cm = resolver
        .resolve(Site::Stature, raw.height.as_ref())?
        .map(|v| units.length.to_cm(v));
    record.head_circumference_cm = resolver
        .resolve(Site::HeadCircumference, raw.head_circumference.as_ref())?
        .map(|v| units.length.to_cm(v));

    if let Some(age) = raw.age_years {
        record.age_years = Some(check_measurement("Age", age)?);
    }

    for (site, value) in &raw.skinfolds {
        if let Some(v) = resolver.resolve(Site::Skinfold(*site), value.as_ref())? {
            record.skinfolds.insert(*site, units.skinfold.to_mm(v));
        }
    }
    for (girth, value) in &raw.girths {
        if let Some(v) = resolver.resolve(Site::Girth(*girth), value.as_ref())? {
            record.girths.insert(*girth, units.length.to_cm(v));
        }
    }
    for (breadth, value) in &raw.breadths {
        if let Some(v) = resolver.resolve(Site::Breadth(*breadth), value.as_ref())? {
            record.breadths.insert(*breadth, units.length.to_cm(v));
        }
    }
    for (length, value) in &raw.lengths {
        if let Some(v) = resolver.resolve(Site::Length(*length), value.as_ref())? {
            record.lengths.insert(*length, units.length.to_cm(v));
        }
    }

    let mut warnings = range_warnings(&record);
    if let Some(warning) = check_sitting_height(&record)? {
        warnings.push(warning);
    }

    Ok(NormalizedRecord {
        record,
        reconciliations: resolver.reconciliations,
        warnings,
    })
}

#[derive(Default)]
struct Resolver {
    reconciliations: Vec<Reconciliation>,
}

impl Resolver {
    fn resolve(
        &mut self,
        site: Site,
        raw: Option<&RawMeasurement>,
    ) -> Result<Option<f64>, CoreError> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let field = site.label();
        match raw {
            RawMeasurement::Value(v) | RawMeasurement::Single { value: v } => {
                Ok(positive_or_missing(check_measurement(field, *v)?))
            }
            RawMeasurement::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                let parsed: f64 = trimmed
                    .replace(',', ".")
                    .parse()
                    .map_err(|_| CoreError::Unparsable {
                        field: field.to_string(),
                        text: text.clone(),
                    })?;
                Ok(positive_or_missing(check_measurement(field, parsed)?))
            }
            RawMeasurement::Replicates { values } => {
                for v in values {
                    check_measurement(field, *v)?;
                }
                let reconciliation = reconcile(values, site)?;
                let value = match reconciliation.value() {
                    Some(v) => Some(v),
                    // A lone valid reading is used as entered, without TEM.
                    None => match reconciliation.readings.as_slice() {
                        [only] => Some(*only),
                        _ => None,
                    },
                };
                self.reconciliations.push(reconciliation);
                Ok(value)
            }
        }
    }
}

fn positive_or_missing(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

fn range_warnings(record: &AnthropometricRecord) -> Vec<DomainWarning> {
    let mut checks: Vec<(&str, f64, ExpectedRange)> = Vec::new();
    if let Some(w) = record.weight_kg {
        checks.push((Site::BodyMass.label(), w, isak_ranges::WEIGHT_KG.into()));
    }
    if let Some(h) = record.height_cm {
        checks.push((Site::Stature.label(), h, isak_ranges::STATURE_CM.into()));
    }
    if let Some(age) = record.age_years {
        checks.push(("Age", age, isak_ranges::AGE_YEARS.into()));
    }
    if let Some(head) = record.head_circumference_cm {
        checks.push((
            Site::HeadCircumference.label(),
            head,
            isak_ranges::HEAD_CIRCUMFERENCE_CM.into(),
        ));
    }
    for (site, v) in &record.skinfolds {
        checks.push((site.label(), *v, isak_ranges::SKINFOLD_MM.into()));
    }
    for (girth, v) in &record.girths {
        checks.push((girth.label(), *v, isak_ranges::GIRTH_CM.into()));
    }
    for (breadth, v) in &record.breadths {
        checks.push((breadth.label(), *v, isak_ranges::BREADTH_CM.into()));
    }
    for (length, v) in &record.lengths {
        checks.push((length.label(), *v, isak_ranges::LENGTH_CM.into()));
    }

    checks
        .into_iter()
        .filter_map(|(field, value, range)| DomainWarning::check(field, value, range))
        .collect()
}

/// Rejects a sitting height at or above stature and warns when the
/// sitting height / stature ratio is implausible.
pub fn check_sitting_height(
    record: &AnthropometricRecord,
) -> Result<Option<DomainWarning>, CoreError> {
    let (Some(sitting), Some(stature)) = (record.length(Length::SittingHeight), record.height_cm)
    else {
        return Ok(None);
    };
    if sitting >= stature {
        return Err(CoreError::SittingHeightNotBelowStature {
            sitting_cm: sitting,
            stature_cm: stature,
        });
    }
    Ok(DomainWarning::check(
        "Sitting height / stature ratio",
        sitting / stature,
        isak_ranges::SITTING_HEIGHT_RATIO.into(),
    ))
}
