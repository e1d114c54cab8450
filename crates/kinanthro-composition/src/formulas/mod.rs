pub mod durnin_womersley;
pub mod jackson_pollock_3;
pub mod jackson_pollock_7;
pub mod sloan;
pub mod withers;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CompositionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FormulaId {
    #[serde(rename = "durnin_womersley")]
    DurninWomersley,
    #[serde(rename = "jackson_pollock_7")]
    JacksonPollock7,
    #[serde(rename = "jackson_pollock_3")]
    JacksonPollock3,
    #[serde(rename = "withers")]
    Withers,
    #[serde(rename = "sloan")]
    Sloan,
}

impl FormulaId {
    pub const ALL: [FormulaId; 5] = [
        FormulaId::DurninWomersley,
        FormulaId::JacksonPollock7,
        FormulaId::JacksonPollock3,
        FormulaId::Withers,
        FormulaId::Sloan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormulaId::DurninWomersley => "durnin_womersley",
            FormulaId::JacksonPollock7 => "jackson_pollock_7",
            FormulaId::JacksonPollock3 => "jackson_pollock_3",
            FormulaId::Withers => "withers",
            FormulaId::Sloan => "sloan",
        }
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormulaId {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        FormulaId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| CompositionError::UnknownFormula(s.to_string()))
    }
}
