use jiff::civil::Date;
use kinanthro_core::constants::growth;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::GrowthError;

/// Age in months between two calendar dates, using the WHO average month
/// of 30.4375 days.
pub fn age_in_months(birth: Date, on: Date) -> Result<f64, GrowthError> {
    if on < birth {
        return Err(GrowthError::MeasuredBeforeBirth { birth, on });
    }
    let days = birth.until(on)?.get_days();
    Ok(f64::from(days) / growth::DAYS_PER_MONTH)
}

/// Chronological age corrected for prematurity.
///
/// Children born before 37 weeks have `40 - gestational_age` weeks
/// subtracted until they reach 24 months chronological age. The result is
/// never below zero.
pub fn corrected_age_months(
    chronological_months: f64,
    gestational_age_weeks: f64,
) -> Result<f64, GrowthError> {
    if !gestational_age_weeks.is_finite()
        || gestational_age_weeks <= 0.0
        || gestational_age_weeks > growth::MAX_GESTATION_WEEKS
    {
        return Err(GrowthError::GestationalAge {
            weeks: gestational_age_weeks,
        });
    }
    if gestational_age_weeks >= growth::PRETERM_GESTATION_WEEKS
        || chronological_months >= growth::PREMATURITY_CORRECTION_UNTIL_MONTHS
    {
        return Ok(chronological_months);
    }

    let deficit_months =
        (growth::TERM_GESTATION_WEEKS - gestational_age_weeks) / growth::WEEKS_PER_MONTH;
    Ok((chronological_months - deficit_months).max(0.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeInMonths {
    pub chronological: f64,
    /// Set only when a prematurity correction was applied.
    pub corrected: Option<f64>,
}

impl AgeInMonths {
    /// From dates, optionally correcting for prematurity.
    pub fn from_dates(
        birth: Date,
        on: Date,
        gestational_age_weeks: Option<f64>,
        correct_prematurity: bool,
    ) -> Result<Self, GrowthError> {
        let chronological = age_in_months(birth, on)?;
        let corrected = match gestational_age_weeks {
            Some(weeks) if correct_prematurity => {
                let corrected = corrected_age_months(chronological, weeks)?;
                (corrected != chronological).then_some(corrected)
            }
            _ => None,
        };
        Ok(Self {
            chronological,
            corrected,
        })
    }

    /// Age the growth tables should be read at.
    pub fn effective(&self) -> f64 {
        self.corrected.unwrap_or(self.chronological)
    }
}
