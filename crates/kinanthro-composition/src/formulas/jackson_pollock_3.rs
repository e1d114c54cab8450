use kinanthro_core::models::{ExpectedRange, Sex, SkinfoldSite};

use crate::formulas::FormulaId;
use crate::profile::FormulaProfile;
use crate::{DensityFormula, FormulaInput};

const MALE_SITES: [SkinfoldSite; 3] = [
    SkinfoldSite::Chest,
    SkinfoldSite::Abdominal,
    SkinfoldSite::FrontThigh,
];

const FEMALE_SITES: [SkinfoldSite; 3] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::IliacCrest,
    SkinfoldSite::FrontThigh,
];

/// Jackson & Pollock three-site generalized equations. Men use chest,
/// abdominal and thigh; women triceps, suprailiac and thigh.
pub struct JacksonPollock3;

impl DensityFormula for JacksonPollock3 {
    fn id(&self) -> FormulaId {
        FormulaId::JacksonPollock3
    }

    fn name(&self) -> &str {
        "Jackson-Pollock 3 sites"
    }

    fn citation(&self) -> &str {
        "Jackson AS, Pollock ML. Generalized equations for predicting body density of men. \
         Br J Nutr 1978;40:497-504. Jackson AS, Pollock ML, Ward A. Generalized equations \
         for predicting body density of women. Med Sci Sports Exerc 1980;12:175-181"
    }

    fn profile(&self) -> FormulaProfile {
        FormulaProfile::General
    }

    fn required_sites(&self, sex: Sex) -> &'static [SkinfoldSite] {
        match sex {
            Sex::Male => &MALE_SITES,
            Sex::Female => &FEMALE_SITES,
        }
    }

    fn requires_age(&self) -> bool {
        true
    }

    fn valid_age(&self, sex: Sex) -> Option<ExpectedRange> {
        Some(match sex {
            Sex::Male => ExpectedRange::new(18.0, 61.0),
            Sex::Female => ExpectedRange::new(18.0, 55.0),
        })
    }

    fn density(&self, input: &FormulaInput<'_>) -> Option<f64> {
        let s = input.sum(self.required_sites(input.sex))?;
        let age = input.age_years?;
        Some(match input.sex {
            Sex::Male => 1.109_38 - 0.000_826_7 * s + 0.000_001_6 * s * s - 0.000_257_4 * age,
            Sex::Female => {
                1.099_492_1 - 0.000_992_9 * s + 0.000_002_3 * s * s - 0.000_139_2 * age
            }
        })
    }
}
