//! Heath-Carter anthropometric somatotype.
//!
//! Reference: Carter JEL, Heath BH. *Somatotyping: Development and
//! Applications*. Cambridge University Press, 1990.

use std::fmt;

use kinanthro_core::constants::{phantom, somatotype as limits};
use kinanthro_core::models::{AnthropometricRecord, Breadth, Girth, SkinfoldSite};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CompositionError;
use crate::required::Required;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SomatotypeCategory {
    Central,
    BalancedEndomorph,
    MesomorphicEndomorph,
    EctomorphicEndomorph,
    BalancedMesomorph,
    EndomorphicMesomorph,
    EctomorphicMesomorph,
    BalancedEctomorph,
    EndomorphicEctomorph,
    MesomorphicEctomorph,
    MesomorphEndomorph,
    MesomorphEctomorph,
    EndomorphEctomorph,
}

impl SomatotypeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SomatotypeCategory::Central => "Central",
            SomatotypeCategory::BalancedEndomorph => "Balanced endomorph",
            SomatotypeCategory::MesomorphicEndomorph => "Mesomorphic endomorph",
            SomatotypeCategory::EctomorphicEndomorph => "Ectomorphic endomorph",
            SomatotypeCategory::BalancedMesomorph => "Balanced mesomorph",
            SomatotypeCategory::EndomorphicMesomorph => "Endomorphic mesomorph",
            SomatotypeCategory::EctomorphicMesomorph => "Ectomorphic mesomorph",
            SomatotypeCategory::BalancedEctomorph => "Balanced ectomorph",
            SomatotypeCategory::EndomorphicEctomorph => "Endomorphic ectomorph",
            SomatotypeCategory::MesomorphicEctomorph => "Mesomorphic ectomorph",
            SomatotypeCategory::MesomorphEndomorph => "Mesomorph-endomorph",
            SomatotypeCategory::MesomorphEctomorph => "Mesomorph-ectomorph",
            SomatotypeCategory::EndomorphEctomorph => "Endomorph-ectomorph",
        }
    }

    /// Carter & Heath 13-category classification. Two components count as
    /// equal when they differ by no more than half a unit.
    pub fn classify(endo: f64, meso: f64, ecto: f64) -> Self {
        let tol = limits::CATEGORY_TOLERANCE;
        let max = endo.max(meso).max(ecto);
        let min = endo.min(meso).min(ecto);
        if max - min <= 2.0 * tol {
            return SomatotypeCategory::Central;
        }

        let equal = |a: f64, b: f64| (a - b).abs() <= tol;
        if equal(endo, meso) && endo.min(meso) > ecto {
            return SomatotypeCategory::MesomorphEndomorph;
        }
        if equal(meso, ecto) && meso.min(ecto) > endo {
            return SomatotypeCategory::MesomorphEctomorph;
        }
        if equal(endo, ecto) && endo.min(ecto) > meso {
            return SomatotypeCategory::EndomorphEctomorph;
        }

        if endo == max {
            if equal(meso, ecto) {
                SomatotypeCategory::BalancedEndomorph
            } else if meso > ecto {
                SomatotypeCategory::MesomorphicEndomorph
            } else {
                SomatotypeCategory::EctomorphicEndomorph
            }
        } else if meso == max {
            if equal(endo, ecto) {
                SomatotypeCategory::BalancedMesomorph
            } else if endo > ecto {
                SomatotypeCategory::EndomorphicMesomorph
            } else {
                SomatotypeCategory::EctomorphicMesomorph
            }
        } else if equal(endo, meso) {
            SomatotypeCategory::BalancedEctomorph
        } else if endo > meso {
            SomatotypeCategory::EndomorphicEctomorph
        } else {
            SomatotypeCategory::MesomorphicEctomorph
        }
    }
}

impl fmt::Display for SomatotypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SomatotypeResult {
    pub endomorphy: f64,
    pub mesomorphy: f64,
    pub ectomorphy: f64,
    /// Somatochart abscissa, `ecto - endo`.
    pub x: f64,
    /// Somatochart ordinate, `2 * meso - (endo + ecto)`.
    pub y: f64,
    pub category: SomatotypeCategory,
    /// Height-weight ratio, `height / weight^(1/3)`.
    pub hwr: f64,
}

impl SomatotypeResult {
    /// Somatotype attitudinal distance to `other`, in component units.
    pub fn sad(&self, other: &SomatotypeResult) -> f64 {
        ((self.endomorphy - other.endomorphy).powi(2)
            + (self.mesomorphy - other.mesomorphy).powi(2)
            + (self.ectomorphy - other.ectomorphy).powi(2))
        .sqrt()
    }
}

/// Heath-Carter somatotype of `record`.
///
/// Needs triceps, subscapular, supraspinale and medial calf skinfolds,
/// humerus and femur breadths, flexed arm and calf girths, stature and mass.
/// Any gap is reported through `CompositionError::MissingInput`; no partial
/// rating is produced.
pub fn compute_somatotype(
    record: &AnthropometricRecord,
) -> Result<SomatotypeResult, CompositionError> {
    let mut req = Required::new(record);
    let triceps = req.skinfold(SkinfoldSite::Triceps);
    let subscapular = req.skinfold(SkinfoldSite::Subscapular);
    let supraspinale = req.skinfold(SkinfoldSite::Supraspinale);
    let calf_skinfold = req.skinfold(SkinfoldSite::MedialCalf);
    let humerus = req.breadth(Breadth::Humerus);
    let femur = req.breadth(Breadth::Femur);
    let arm_flexed = req.girth(Girth::ArmFlexed);
    let calf = req.girth(Girth::Calf);
    let height = req.height();
    let weight = req.weight();
    req.finish("Somatotype")?;

    let endo = endomorphy(triceps + subscapular + supraspinale, height);
    let meso = mesomorphy(Mesomorphy {
        humerus,
        femur,
        arm_flexed,
        triceps,
        calf,
        calf_skinfold,
        height,
    });
    let hwr = height / weight.cbrt();
    let ecto = ectomorphy(hwr);

    tracing::debug!(endo, meso, ecto, hwr, "computed somatotype");

    Ok(SomatotypeResult {
        endomorphy: endo,
        mesomorphy: meso,
        ectomorphy: ecto,
        x: ecto - endo,
        y: 2.0 * meso - (endo + ecto),
        category: SomatotypeCategory::classify(endo, meso, ecto),
        hwr,
    })
}

/// Cubic on the height-corrected sum of three skinfolds (mm).
pub fn endomorphy(sum_of_three_mm: f64, height_cm: f64) -> f64 {
    let x = sum_of_three_mm * (phantom::STATURE_CM / height_cm);
    let endo = -0.7182 + 0.1451 * x - 0.000_68 * x.powi(2) + 0.000_001_4 * x.powi(3);
    endo.max(limits::COMPONENT_FLOOR)
}

/// Inputs to the mesomorphy equation. Breadths and girths in cm,
/// skinfolds in mm.
#[derive(Debug, Clone, Copy)]
pub struct Mesomorphy {
    pub humerus: f64,
    pub femur: f64,
    pub arm_flexed: f64,
    pub triceps: f64,
    pub calf: f64,
    pub calf_skinfold: f64,
    pub height: f64,
}

pub fn mesomorphy(m: Mesomorphy) -> f64 {
    let corrected_arm = m.arm_flexed - m.triceps / 10.0;
    let corrected_calf = m.calf - m.calf_skinfold / 10.0;
    let meso = 0.858 * m.humerus + 0.601 * m.femur + 0.188 * corrected_arm
        + 0.161 * corrected_calf
        - 0.131 * m.height
        + 4.5;
    meso.max(limits::COMPONENT_FLOOR)
}

/// Three-branch function of the height-weight ratio, pinned at 0.1 below
/// the lower breakpoint.
pub fn ectomorphy(hwr: f64) -> f64 {
    let ecto = if hwr >= limits::HWR_UPPER_BREAKPOINT {
        0.732 * hwr - 28.58
    } else if hwr > limits::HWR_LOWER_BREAKPOINT {
        0.463 * hwr - 17.63
    } else {
        limits::ECTOMORPHY_FLOOR
    };
    ecto.max(limits::ECTOMORPHY_FLOOR)
}
