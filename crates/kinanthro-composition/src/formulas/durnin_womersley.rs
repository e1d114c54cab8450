use kinanthro_core::models::{ExpectedRange, Sex, SkinfoldSite};

use crate::formulas::FormulaId;
use crate::profile::FormulaProfile;
use crate::{DensityFormula, FormulaInput};

const SITES: [SkinfoldSite; 4] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Biceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::IliacCrest,
];

/// `(upper age bound exclusive, c, m)` per band. The last band is open.
const MALE_BANDS: [(f64, f64, f64); 5] = [
    (20.0, 1.1620, 0.0630),
    (30.0, 1.1631, 0.0632),
    (40.0, 1.1422, 0.0544),
    (50.0, 1.1620, 0.0700),
    (f64::INFINITY, 1.1715, 0.0779),
];

const FEMALE_BANDS: [(f64, f64, f64); 5] = [
    (20.0, 1.1549, 0.0678),
    (30.0, 1.1599, 0.0717),
    (40.0, 1.1423, 0.0632),
    (50.0, 1.1333, 0.0612),
    (f64::INFINITY, 1.1339, 0.0645),
];

/// Equations fitted over the whole 17-72 year sample, used when age is unknown.
const MALE_ALL_AGES: (f64, f64) = (1.1765, 0.0744);
const FEMALE_ALL_AGES: (f64, f64) = (1.1567, 0.0717);

/// Durnin & Womersley (1974): `D = c - m * log10(Σ4)`, with `c` and `m`
/// chosen by sex and age band.
///
/// Ages below 17 use the 17-19 band and are flagged by the age-range check.
pub struct DurninWomersley;

impl DurninWomersley {
    pub fn coefficients(sex: Sex, age_years: Option<f64>) -> (f64, f64) {
        let (bands, all_ages) = match sex {
            Sex::Male => (&MALE_BANDS, MALE_ALL_AGES),
            Sex::Female => (&FEMALE_BANDS, FEMALE_ALL_AGES),
        };
        let Some(age) = age_years else {
            return all_ages;
        };
        bands
            .iter()
            .find(|(upper, _, _)| age < *upper)
            .map(|(_, c, m)| (*c, *m))
            .unwrap_or(all_ages)
    }
}

impl DensityFormula for DurninWomersley {
    fn id(&self) -> FormulaId {
        FormulaId::DurninWomersley
    }

    fn name(&self) -> &str {
        "Durnin-Womersley (1974)"
    }

    fn citation(&self) -> &str {
        "Durnin JVGA, Womersley J. Body fat assessed from total body density and its \
         estimation from skinfold thickness. Br J Nutr 1974;32:77-97"
    }

    fn profile(&self) -> FormulaProfile {
        FormulaProfile::Control
    }

    fn required_sites(&self, _sex: Sex) -> &'static [SkinfoldSite] {
        &SITES
    }

    fn valid_age(&self, _sex: Sex) -> Option<ExpectedRange> {
        Some(ExpectedRange::new(17.0, 72.0))
    }

    fn density(&self, input: &FormulaInput<'_>) -> Option<f64> {
        let sum = input.sum(&SITES)?;
        let (c, m) = Self::coefficients(input.sex, input.age_years);
        Some(c - m * sum.log10())
    }
}
