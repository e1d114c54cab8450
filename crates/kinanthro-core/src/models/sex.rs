use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Biological sex, as used by sex-specific regression equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    #[serde(alias = "m", alias = "masculino")]
    Male,
    #[serde(alias = "f", alias = "femenino")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
