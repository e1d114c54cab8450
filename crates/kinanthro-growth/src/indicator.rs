use std::fmt;
use std::str::FromStr;

use kinanthro_core::constants::growth;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::GrowthError;

/// How length was taken. WHO tabulates recumbent length below 24 months
/// and standing height from 24 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Posture {
    #[default]
    Recumbent,
    Standing,
}

impl Posture {
    pub fn for_age(age_months: f64) -> Self {
        if age_months < growth::STANDING_HEIGHT_FROM_MONTHS {
            Posture::Recumbent
        } else {
            Posture::Standing
        }
    }
}

/// WHO growth indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Indicator {
    /// Weight-for-age.
    Wfa,
    /// Length/height-for-age.
    Lhfa,
    /// Weight-for-length/height. Indexed by length or height, not age.
    Wflh,
    /// BMI-for-age.
    Bfa,
    /// Head-circumference-for-age.
    Hcfa,
}

impl Indicator {
    pub const ALL: [Indicator; 5] = [
        Indicator::Wfa,
        Indicator::Lhfa,
        Indicator::Wflh,
        Indicator::Bfa,
        Indicator::Hcfa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Wfa => "wfa",
            Indicator::Lhfa => "lhfa",
            Indicator::Wflh => "wflh",
            Indicator::Bfa => "bfa",
            Indicator::Hcfa => "hcfa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Wfa => "Weight-for-age",
            Indicator::Lhfa => "Length/height-for-age",
            Indicator::Wflh => "Weight-for-length/height",
            Indicator::Bfa => "BMI-for-age",
            Indicator::Hcfa => "Head circumference-for-age",
        }
    }

    /// Name of the table axis.
    pub fn axis(&self, posture: Posture) -> &'static str {
        match (self, posture) {
            (Indicator::Wflh, Posture::Recumbent) => "length",
            (Indicator::Wflh, Posture::Standing) => "height",
            _ => "age",
        }
    }

    pub fn axis_unit(&self) -> &'static str {
        match self {
            Indicator::Wflh => "cm",
            _ => "months",
        }
    }

    /// Whether the reference table depends on how length was taken.
    pub fn depends_on_posture(&self) -> bool {
        matches!(self, Indicator::Lhfa | Indicator::Wflh)
    }

    /// Posture used when the caller does not give one: by age for
    /// length/height-for-age, recumbent for weight-for-length.
    pub fn default_posture(&self, axis_value: f64) -> Posture {
        match self {
            Indicator::Lhfa => Posture::for_age(axis_value),
            _ => Posture::Recumbent,
        }
    }

    /// Inclusive axis range over every posture.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Indicator::Wfa | Indicator::Lhfa => (0.0, 60.0),
            Indicator::Wflh => (45.0, 120.0),
            Indicator::Bfa => (24.0, 60.0),
            Indicator::Hcfa => (0.0, 24.0),
        }
    }

    /// Inclusive axis range of the table used for `posture`.
    pub fn table_domain(&self, posture: Posture) -> (f64, f64) {
        match (self, posture) {
            (Indicator::Lhfa, Posture::Recumbent) => (0.0, 24.0),
            (Indicator::Lhfa, Posture::Standing) => (24.0, 60.0),
            (Indicator::Wflh, Posture::Recumbent) => (45.0, 110.0),
            (Indicator::Wflh, Posture::Standing) => (65.0, 120.0),
            _ => self.domain(),
        }
    }

    /// Weight-based indicators use the WHO restricted application of the
    /// LMS method beyond +/-3 SD.
    pub fn is_weight_based(&self) -> bool {
        matches!(self, Indicator::Wfa | Indicator::Wflh | Indicator::Bfa)
    }

    pub(crate) fn check_domain(
        &self,
        axis_value: f64,
        posture: Posture,
    ) -> Result<(), GrowthError> {
        let (min, max) = self.table_domain(posture);
        if axis_value.is_finite() && (min..=max).contains(&axis_value) {
            return Ok(());
        }
        tracing::warn!(
            indicator = %self,
            ?posture,
            axis_value,
            min,
            max,
            "growth indicator outside its domain"
        );
        Err(self.domain_error(axis_value, posture))
    }

    pub(crate) fn domain_error(&self, axis_value: f64, posture: Posture) -> GrowthError {
        let (min, max) = self.table_domain(posture);
        GrowthError::IndicatorDomain {
            indicator: *self,
            axis: self.axis(posture),
            unit: self.axis_unit(),
            min,
            max,
            value: axis_value,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Indicator::ALL
            .into_iter()
            .find(|i| i.as_str() == needle)
            .ok_or_else(|| GrowthError::UnknownIndicator(s.to_string()))
    }
}
