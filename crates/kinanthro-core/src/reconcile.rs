//! Replicate reconciliation and Technical Error of Measurement.
//!
//! ISAK protocol: each site is measured twice; when the two readings differ
//! by more than 5 % a third is taken and the median reported. The TEM
//! quantifies how far the replicates scatter around their mean.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::tem;
use crate::error::CoreError;
use crate::models::Site;

/// ISAK reliability band for a `%TEM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Reliability {
    /// `%TEM` below 5 %.
    Excellent,
    /// `%TEM` from 5 % up to and including 7.5 %.
    Acceptable,
    /// `%TEM` above 7.5 %.
    Poor,
}

impl Reliability {
    pub fn from_tem_percent(tem_percent: f64) -> Self {
        if tem_percent < tem::EXCELLENT_MAX_PERCENT {
            Reliability::Excellent
        } else if tem_percent <= tem::ACCEPTABLE_MAX_PERCENT {
            Reliability::Acceptable
        } else {
            Reliability::Poor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemResult {
    /// Absolute technical error, in the unit of the readings.
    pub tem: f64,
    /// TEM relative to the mean of the retained readings, in percent.
    pub tem_percent: f64,
    pub reliability: Reliability,
    pub is_reliable: bool,
    pub message: String,
}

impl TemResult {
    /// TEM over `readings`, computed as the population standard deviation.
    fn from_readings(readings: &[f64]) -> Self {
        let n = readings.len() as f64;
        let mean = readings.iter().sum::<f64>() / n;
        let sum_sq: f64 = readings.iter().map(|x| (x - mean).powi(2)).sum();
        let tem_abs = (sum_sq / n).sqrt();
        let tem_percent = tem_abs / mean * 100.0;
        let reliability = Reliability::from_tem_percent(tem_percent);
        let message = match reliability {
            Reliability::Excellent => format!("Excellent reliability (%TEM {tem_percent:.1}%)"),
            Reliability::Acceptable => format!("Acceptable reliability (%TEM {tem_percent:.1}%)"),
            Reliability::Poor => format!(
                "Poor reliability (%TEM {tem_percent:.1}%): repeat the measurement"
            ),
        };
        Self {
            tem: tem_abs,
            tem_percent,
            reliability,
            is_reliable: tem_percent <= tem::ACCEPTABLE_MAX_PERCENT,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReconcileStatus {
    Reconciled,
    /// Two readings differ by more than 5 %; the caller should take a third.
    NeedsThirdMeasurement,
    /// Fewer than two valid readings remain.
    InsufficientData,
}

/// Outcome of reconciling the replicates taken at one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reconciliation {
    pub site: Site,
    /// Valid (positive) readings, ascending.
    pub readings: Vec<f64>,
    /// Reportable value. `0.0` when the status is `InsufficientData`.
    pub final_value: f64,
    pub status: ReconcileStatus,
    pub tem: Option<TemResult>,
    /// Relative difference between two readings (fraction of their mean).
    pub relative_difference: Option<f64>,
    /// Reading excluded from the TEM as a clear outlier (three readings only).
    pub discarded_outlier: Option<f64>,
}

impl Reconciliation {
    pub fn needs_third_measurement(&self) -> bool {
        self.status == ReconcileStatus::NeedsThirdMeasurement
    }

    pub fn is_insufficient(&self) -> bool {
        self.status == ReconcileStatus::InsufficientData
    }

    /// The final value, or `None` when there was not enough data.
    pub fn value(&self) -> Option<f64> {
        (!self.is_insufficient()).then_some(self.final_value)
    }
}

/// Reconcile 2–3 replicate readings taken at `site`.
///
/// Readings `<= 0` count as "not measured" and are dropped. Fewer than two
/// valid readings is reported through `ReconcileStatus::InsufficientData`,
/// not as an error; only non-finite input or more than three valid readings
/// is rejected. The result does not depend on the order of `values`.
pub fn reconcile(values: &[f64], site: Site) -> Result<Reconciliation, CoreError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(CoreError::NonFinite {
            field: site.label().to_string(),
        });
    }

    let mut readings: Vec<f64> = values.iter().copied().filter(|v| *v > 0.0).collect();
    if readings.len() > tem::MAX_REPLICATES {
        return Err(CoreError::TooManyReplicates {
            field: site.label().to_string(),
            count: readings.len(),
        });
    }
    readings.sort_by(f64::total_cmp);

    let reconciliation = match readings.as_slice() {
        [a, b] => reconcile_pair(site, *a, *b),
        [a, b, c] => reconcile_triple(site, *a, *b, *c),
        _ => Reconciliation {
            site,
            readings,
            final_value: 0.0,
            status: ReconcileStatus::InsufficientData,
            tem: None,
            relative_difference: None,
            discarded_outlier: None,
        },
    };

    tracing::debug!(
        site = %site,
        final_value = reconciliation.final_value,
        status = ?reconciliation.status,
        "reconciled replicates"
    );
    Ok(reconciliation)
}

fn reconcile_pair(site: Site, a: f64, b: f64) -> Reconciliation {
    let mean = (a + b) / 2.0;
    let relative = (b - a) / mean;
    let status = if relative > tem::THIRD_MEASUREMENT_RELATIVE_DIFFERENCE {
        ReconcileStatus::NeedsThirdMeasurement
    } else {
        ReconcileStatus::Reconciled
    };
    Reconciliation {
        site,
        readings: vec![a, b],
        final_value: mean,
        status,
        tem: Some(TemResult::from_readings(&[a, b])),
        relative_difference: Some(relative),
        discarded_outlier: None,
    }
}

// Inputs are sorted ascending.
fn reconcile_triple(site: Site, a: f64, b: f64, c: f64) -> Reconciliation {
    let median = b;
    let low_gap = b - a;
    let high_gap = c - b;
    let is_outlier_gap = |gap: f64, other: f64| {
        gap > tem::OUTLIER_GAP_RATIO * other
            && gap / median > tem::THIRD_MEASUREMENT_RELATIVE_DIFFERENCE
    };

    let (retained, discarded) = if is_outlier_gap(high_gap, low_gap) {
        (vec![a, b], Some(c))
    } else if is_outlier_gap(low_gap, high_gap) {
        (vec![b, c], Some(a))
    } else {
        (vec![a, b, c], None)
    };

    Reconciliation {
        site,
        readings: vec![a, b, c],
        final_value: median,
        status: ReconcileStatus::Reconciled,
        tem: Some(TemResult::from_readings(&retained)),
        relative_difference: None,
        discarded_outlier: discarded,
    }
}
