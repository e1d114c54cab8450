use serde::{Deserialize, Serialize};
use ts_rs::TS;

const MM_PER_INCH: f64 = 25.4;
const KG_PER_POUND: f64 = 0.453_592_37;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LengthUnit {
    #[serde(alias = "millimeter")]
    Mm,
    #[serde(alias = "centimeter")]
    Cm,
    #[serde(alias = "meter")]
    M,
    #[serde(alias = "inch")]
    In,
}

impl LengthUnit {
    pub fn to_mm(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Mm => value,
            LengthUnit::Cm => value * 10.0,
            LengthUnit::M => value * 1000.0,
            LengthUnit::In => value * MM_PER_INCH,
        }
    }

    pub fn to_cm(&self, value: f64) -> f64 {
        self.to_mm(value) / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MassUnit {
    #[serde(alias = "kilogram")]
    Kg,
    #[serde(alias = "pound")]
    Lb,
}

impl MassUnit {
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            MassUnit::Kg => value,
            MassUnit::Lb => value * KG_PER_POUND,
        }
    }
}
