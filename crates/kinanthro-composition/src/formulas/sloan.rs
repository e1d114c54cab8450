use kinanthro_core::models::{ExpectedRange, Sex, SkinfoldSite};

use crate::formulas::FormulaId;
use crate::profile::FormulaProfile;
use crate::{DensityFormula, FormulaInput};

const MALE_SITES: [SkinfoldSite; 2] = [SkinfoldSite::FrontThigh, SkinfoldSite::Subscapular];
const FEMALE_SITES: [SkinfoldSite; 2] = [SkinfoldSite::IliacCrest, SkinfoldSite::Triceps];

/// Sloan two-site equations, for quick screening.
pub struct Sloan;

impl DensityFormula for Sloan {
    fn id(&self) -> FormulaId {
        FormulaId::Sloan
    }

    fn name(&self) -> &str {
        "Sloan 2 sites"
    }

    fn citation(&self) -> &str {
        "Sloan AW. Estimation of body fat in young men. J Appl Physiol 1967;23:311-315. \
         Sloan AW, Burt JJ, Blyth CS. Estimation of body fat in young women. \
         J Appl Physiol 1962;17:967-970"
    }

    fn profile(&self) -> FormulaProfile {
        FormulaProfile::Rapid
    }

    fn required_sites(&self, sex: Sex) -> &'static [SkinfoldSite] {
        match sex {
            Sex::Male => &MALE_SITES,
            Sex::Female => &FEMALE_SITES,
        }
    }

    fn valid_age(&self, _sex: Sex) -> Option<ExpectedRange> {
        Some(ExpectedRange::new(18.0, 26.0))
    }

    fn density(&self, input: &FormulaInput<'_>) -> Option<f64> {
        Some(match input.sex {
            Sex::Male => {
                let thigh = input.skinfold(SkinfoldSite::FrontThigh)?;
                let subscapular = input.skinfold(SkinfoldSite::Subscapular)?;
                1.1043 - 0.001_327 * thigh - 0.001_310 * subscapular
            }
            Sex::Female => {
                let iliac = input.skinfold(SkinfoldSite::IliacCrest)?;
                let triceps = input.skinfold(SkinfoldSite::Triceps)?;
                1.0764 - 0.000_81 * iliac - 0.000_88 * triceps
            }
        })
    }
}
