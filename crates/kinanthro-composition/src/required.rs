use kinanthro_core::check_measurement;
use kinanthro_core::error::CoreError;
use kinanthro_core::models::{AnthropometricRecord, Breadth, Girth, Length, SkinfoldSite};

use crate::error::CompositionError;

/// Collects required inputs from a record, remembering which are absent.
/// Zero counts as absent.
///
/// Accessors return `0.0` for an absent field after recording its label,
/// and for a non-finite or negative field after recording the error;
/// `finish` then fails, so a placeholder never reaches a result.
pub(crate) struct Required<'a> {
    record: &'a AnthropometricRecord,
    missing: Vec<String>,
    invalid: Vec<CoreError>,
}

impl<'a> Required<'a> {
    pub(crate) fn new(record: &'a AnthropometricRecord) -> Self {
        Self {
            record,
            missing: Vec::new(),
            invalid: Vec::new(),
        }
    }

    fn take(&mut self, value: Option<f64>, label: &str) -> f64 {
        match value.map(|v| check_measurement(label, v)) {
            Some(Ok(v)) if v > 0.0 => v,
            Some(Err(e)) => {
                self.invalid.push(e);
                0.0
            }
            _ => {
                self.missing.push(label.to_string());
                0.0
            }
        }
    }

    pub(crate) fn skinfold(&mut self, site: SkinfoldSite) -> f64 {
        self.take(self.record.skinfold(site), site.label())
    }

    pub(crate) fn girth(&mut self, girth: Girth) -> f64 {
        self.take(self.record.girth(girth), girth.label())
    }

    pub(crate) fn breadth(&mut self, breadth: Breadth) -> f64 {
        self.take(self.record.breadth(breadth), breadth.label())
    }

    pub(crate) fn height(&mut self) -> f64 {
        self.take(self.record.height_cm, "Stature")
    }

    pub(crate) fn weight(&mut self) -> f64 {
        self.take(self.record.weight_kg, "Body mass")
    }

    pub(crate) fn head_circumference(&mut self) -> f64 {
        self.take(self.record.head_circumference_cm, "Head circumference")
    }

    /// A length the engine can do without. A present value is still checked.
    pub(crate) fn optional_length(&mut self, length: Length) -> Option<f64> {
        let value = self.record.length(length)?;
        match check_measurement(length.label(), value) {
            Ok(v) => Some(v).filter(|v| *v > 0.0),
            Err(e) => {
                self.invalid.push(e);
                None
            }
        }
    }

    /// Invalid values as messages, then absent labels.
    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<String>) {
        let invalid = self.invalid.iter().map(ToString::to_string).collect();
        (invalid, self.missing)
    }

    pub(crate) fn finish(mut self, engine: &'static str) -> Result<(), CompositionError> {
        if !self.invalid.is_empty() {
            let first = self.invalid.remove(0);
            tracing::warn!(engine, error = %first, "invalid measurement");
            return Err(first.into());
        }
        if self.missing.is_empty() {
            return Ok(());
        }
        tracing::warn!(engine, missing = ?self.missing, "required measurements absent");
        Err(CompositionError::MissingInput {
            engine,
            missing: self.missing,
        })
    }
}
