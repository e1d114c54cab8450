use kinanthro_core::models::{Sex, SkinfoldSite};

use crate::formulas::FormulaId;
use crate::profile::FormulaProfile;
use crate::{DensityFormula, FormulaInput};

const MALE_SITES: [SkinfoldSite; 7] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::Biceps,
    SkinfoldSite::Supraspinale,
    SkinfoldSite::Abdominal,
    SkinfoldSite::FrontThigh,
    SkinfoldSite::MedialCalf,
];

const FEMALE_SITES: [SkinfoldSite; 4] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::Supraspinale,
    SkinfoldSite::MedialCalf,
];

/// Withers et al. (1987) equations for trained athletes, built on ISAK
/// sites. Linear in Σ7 for men, logarithmic in Σ4 for women.
pub struct Withers;

impl DensityFormula for Withers {
    fn id(&self) -> FormulaId {
        FormulaId::Withers
    }

    fn name(&self) -> &str {
        "Withers (1987)"
    }

    fn citation(&self) -> &str {
        "Withers RT, Craig NP, Bourdon PC, Norton KI. Relative body fat and anthropometric \
         prediction of body density of male athletes. Eur J Appl Physiol 1987;56:191-200"
    }

    fn profile(&self) -> FormulaProfile {
        FormulaProfile::Athlete
    }

    fn required_sites(&self, sex: Sex) -> &'static [SkinfoldSite] {
        match sex {
            Sex::Male => &MALE_SITES,
            Sex::Female => &FEMALE_SITES,
        }
    }

    fn density(&self, input: &FormulaInput<'_>) -> Option<f64> {
        let s = input.sum(self.required_sites(input.sex))?;
        Some(match input.sex {
            Sex::Male => 1.0988 - 0.0004 * s,
            Sex::Female => 1.209_53 - 0.082_94 * s.log10(),
        })
    }
}
