use kinanthro_core::models::{ExpectedRange, Sex, SkinfoldSite};

use crate::formulas::FormulaId;
use crate::profile::FormulaProfile;
use crate::{DensityFormula, FormulaInput};

const SITES: [SkinfoldSite; 7] = [
    SkinfoldSite::Chest,
    SkinfoldSite::Midaxillary,
    SkinfoldSite::Triceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::Abdominal,
    SkinfoldSite::IliacCrest,
    SkinfoldSite::FrontThigh,
];

/// Jackson & Pollock seven-site generalized equations (men 1978, women
/// 1980). Quadratic in Σ7 with a linear age correction.
pub struct JacksonPollock7;

impl DensityFormula for JacksonPollock7 {
    fn id(&self) -> FormulaId {
        FormulaId::JacksonPollock7
    }

    fn name(&self) -> &str {
        "Jackson-Pollock 7 sites"
    }

    fn citation(&self) -> &str {
        "Jackson AS, Pollock ML. Generalized equations for predicting body density of men. \
         Br J Nutr 1978;40:497-504. Jackson AS, Pollock ML, Ward A. Generalized equations \
         for predicting body density of women. Med Sci Sports Exerc 1980;12:175-181"
    }

    fn profile(&self) -> FormulaProfile {
        FormulaProfile::Fitness
    }

    fn required_sites(&self, _sex: Sex) -> &'static [SkinfoldSite] {
        &SITES
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
        let s = input.sum(&SITES)?;
        let age = input.age_years?;
        Some(match input.sex {
            Sex::Male => 1.112 - 0.000_434_99 * s + 0.000_000_55 * s * s - 0.000_288_26 * age,
            Sex::Female => 1.097 - 0.000_469_71 * s + 0.000_000_56 * s * s - 0.000_128_28 * age,
        })
    }
}
