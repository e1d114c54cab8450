//! WHO Child Growth Standards (2006) LMS reference rows.
//!
//! Age tables are monthly. Length/height-for-age is split at 24 months
//! into recumbent length and standing height, as WHO publishes it.
//! Weight-for-length (45-110 cm) and weight-for-height (65-120 cm) rows
//! are every 0.5 cm.

mod bmi_for_age;
mod head_for_age;
mod height_for_age;
mod length_for_age;
mod weight_for_age;
mod weight_for_height;
mod weight_for_length;

use kinanthro_core::models::Sex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::indicator::{Indicator, Posture};

/// Box-Cox power `l`, median `m` and coefficient of variation `s`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lms {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

/// One tabulated row; `x` is age in months or length in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsRow {
    pub x: f64,
    pub lms: Lms,
}

pub(crate) fn rows(data: &[(f64, f64, f64, f64)]) -> Vec<LmsRow> {
    data.iter()
        .map(|&(x, l, m, s)| LmsRow {
            x,
            lms: Lms { l, m, s },
        })
        .collect()
}

/// Reference rows for `indicator` and `sex`, sorted by `x`. `posture`
/// only matters for length/height-for-age and weight-for-length/height.
pub fn table(indicator: Indicator, sex: Sex, posture: Posture) -> &'static [LmsRow] {
    use Posture::{Recumbent, Standing};
    match (indicator, posture, sex) {
        (Indicator::Wfa, _, Sex::Male) => weight_for_age::BOYS.as_slice(),
        (Indicator::Wfa, _, Sex::Female) => weight_for_age::GIRLS.as_slice(),
        (Indicator::Lhfa, Recumbent, Sex::Male) => length_for_age::BOYS.as_slice(),
        (Indicator::Lhfa, Recumbent, Sex::Female) => length_for_age::GIRLS.as_slice(),
        (Indicator::Lhfa, Standing, Sex::Male) => height_for_age::BOYS.as_slice(),
        (Indicator::Lhfa, Standing, Sex::Female) => height_for_age::GIRLS.as_slice(),
        (Indicator::Wflh, Recumbent, Sex::Male) => weight_for_length::BOYS.as_slice(),
        (Indicator::Wflh, Recumbent, Sex::Female) => weight_for_length::GIRLS.as_slice(),
        (Indicator::Wflh, Standing, Sex::Male) => weight_for_height::BOYS.as_slice(),
        (Indicator::Wflh, Standing, Sex::Female) => weight_for_height::GIRLS.as_slice(),
        (Indicator::Bfa, _, Sex::Male) => bmi_for_age::BOYS.as_slice(),
        (Indicator::Bfa, _, Sex::Female) => bmi_for_age::GIRLS.as_slice(),
        (Indicator::Hcfa, _, Sex::Male) => head_for_age::BOYS.as_slice(),
        (Indicator::Hcfa, _, Sex::Female) => head_for_age::GIRLS.as_slice(),
    }
}

/// L, M and S at `x`, each interpolated linearly between the bracketing
/// rows. `None` outside the table.
pub fn interpolate(rows: &[LmsRow], x: f64) -> Option<Lms> {
    let first = rows.first()?;
    let last = rows.last()?;
    if !(first.x..=last.x).contains(&x) {
        return None;
    }

    let upper = rows.iter().position(|r| r.x >= x)?;
    let hi = rows[upper];
    if hi.x == x || upper == 0 {
        return Some(hi.lms);
    }
    let lo = rows[upper - 1];
    let t = (x - lo.x) / (hi.x - lo.x);
    let lerp = |a: f64, b: f64| a + t * (b - a);
    Some(Lms {
        l: lerp(lo.lms.l, hi.lms.l),
        m: lerp(lo.lms.m, hi.lms.m),
        s: lerp(lo.lms.s, hi.lms.s),
    })
}
