//! Kerr (1988) five-component anthropometric fractionation.
//!
//! Each tissue mass is predicted with the Phantom stratagem of Ross & Wilson
//! (1974): a sum of measurements is scaled to the Phantom stature of
//! 170.18 cm, expressed as a z-score against the Phantom mean and SD, then
//! converted back to a mass and rescaled to the subject's stature.
//!
//! References:
//! - Kerr DA. *An anthropometric method for the fractionation of skin,
//!   adipose, muscle, bone and residual tissue masses in males and females
//!   age 6 to 77 years*. MSc thesis, Simon Fraser University, 1988.
//! - Ross WD, Wilson NC. A stratagem for proportional growth assessment.
//!   Acta Paediatr Belg 1974;28:169-182.

use std::f64::consts::PI;

use kinanthro_core::constants::kerr::{self, phantom_sums as ph};
use kinanthro_core::constants::phantom;
use kinanthro_core::models::{AnthropometricRecord, Breadth, Girth, Length, Sex, SkinfoldSite};
use kinanthro_core::normalize::check_sitting_height;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::formulas::FormulaId;
use crate::required::Required;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentMass {
    pub kg: f64,
    /// Share of body mass.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ObesityWarning {
    pub message: String,
    pub suggested_formulas: Vec<FormulaId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FiveComponentResult {
    pub is_valid: bool,
    pub adipose: Option<ComponentMass>,
    pub muscle: Option<ComponentMass>,
    pub bone: Option<ComponentMass>,
    pub skin: Option<ComponentMass>,
    pub residual: Option<ComponentMass>,
    /// g/cm³, from the tissue densities of the five components.
    pub body_density: Option<f64>,
    /// Siri fat percent of `body_density`.
    pub lipid_fat_percent: Option<f64>,
    /// Sitting height as a percent of stature. Only when sitting height was measured.
    pub cormic_index: Option<f64>,
    pub obesity_warning: Option<ObesityWarning>,
    /// Sum of the five unscaled predictions.
    pub predicted_mass_kg: Option<f64>,
    /// `(predicted - measured) / measured * 100`.
    pub mass_difference_percent: Option<f64>,
    /// Present inputs that make the model inapplicable.
    pub errors: Vec<String>,
    /// Labels of absent required inputs, in a fixed order.
    pub missing_data: Vec<String>,
    pub warnings: Vec<String>,
}

impl FiveComponentResult {
    fn invalid(missing_data: Vec<String>, errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: false,
            adipose: None,
            muscle: None,
            bone: None,
            skin: None,
            residual: None,
            body_density: None,
            lipid_fat_percent: None,
            cormic_index: None,
            obesity_warning: None,
            predicted_mass_kg: None,
            mass_difference_percent: None,
            errors,
            missing_data,
            warnings,
        }
    }

    /// The five masses in kg, when computed.
    pub fn total_kg(&self) -> Option<f64> {
        [
            self.adipose,
            self.muscle,
            self.bone,
            self.skin,
            self.residual,
        ]
        .into_iter()
        .map(|c| c.map(|c| c.kg))
        .sum()
    }
}

/// Phantom proportionality for one tissue: Phantom mean and SD of the
/// measurement sum, and of the tissue mass it predicts.
struct PhantomModel {
    sum_p: f64,
    sum_s: f64,
    mass_p: f64,
    mass_s: f64,
}

impl PhantomModel {
    /// Mass (kg) predicted from `sum`, with `scale` the Phantom size factor
    /// (`phantom / subject`) on the relevant length.
    fn mass(&self, sum: f64, scale: f64) -> f64 {
        let z = (sum * scale - self.sum_p) / self.sum_s;
        (z * self.mass_s + self.mass_p) / scale.powi(3)
    }
}

const ADIPOSE: PhantomModel = PhantomModel {
    sum_p: ph::ADIPOSE_SUM_P,
    sum_s: ph::ADIPOSE_SUM_S,
    mass_p: ph::ADIPOSE_MASS_P,
    mass_s: ph::ADIPOSE_MASS_S,
};

const MUSCLE: PhantomModel = PhantomModel {
    sum_p: ph::MUSCLE_SUM_P,
    sum_s: ph::MUSCLE_SUM_S,
    mass_p: ph::MUSCLE_MASS_P,
    mass_s: ph::MUSCLE_MASS_S,
};

const BODY_BONE: PhantomModel = PhantomModel {
    sum_p: ph::BODY_BONE_SUM_P,
    sum_s: ph::BODY_BONE_SUM_S,
    mass_p: ph::BODY_BONE_MASS_P,
    mass_s: ph::BODY_BONE_MASS_S,
};

const RESIDUAL: PhantomModel = PhantomModel {
    sum_p: ph::RESIDUAL_SUM_P,
    sum_s: ph::RESIDUAL_SUM_S,
    mass_p: ph::RESIDUAL_MASS_P,
    mass_s: ph::RESIDUAL_MASS_S,
};

/// Girth (cm) corrected for the skinfold (mm) over it.
fn corrected_girth(girth_cm: f64, skinfold_mm: f64) -> f64 {
    girth_cm - PI * skinfold_mm / 10.0
}

/// Body surface area in m² (DuBois & DuBois form, Kerr constants).
pub fn body_surface_area(weight_kg: f64, height_cm: f64, age_years: Option<f64>) -> f64 {
    let constant = match age_years {
        Some(age) if age < kerr::BSA_CHILD_AGE_YEARS => kerr::BSA_CONSTANT_CHILD,
        _ => kerr::BSA_CONSTANT_ADULT,
    };
    constant * weight_kg.powf(0.425) * height_cm.powf(0.725) / 10_000.0
}

/// Head bone mass; the head is not scaled by stature.
fn head_bone_mass(head_circumference_cm: f64) -> f64 {
    let z = (head_circumference_cm - ph::HEAD_GIRTH_P) / ph::HEAD_GIRTH_S;
    z * ph::HEAD_BONE_MASS_S + ph::HEAD_BONE_MASS_P
}

/// Partition body mass into skin, adipose, muscle, bone and residual.
///
/// Missing inputs are listed in `missing_data`, and non-finite or negative
/// ones in `errors`; either way nothing is computed. The five masses are
/// scaled so they sum to the measured body mass.
pub fn fractionate(record: &AnthropometricRecord) -> FiveComponentResult {
    let mut req = Required::new(record);
    let weight = req.weight();
    let height = req.height();

    let triceps = req.skinfold(SkinfoldSite::Triceps);
    let subscapular = req.skinfold(SkinfoldSite::Subscapular);
    let supraspinale = req.skinfold(SkinfoldSite::Supraspinale);
    let abdominal = req.skinfold(SkinfoldSite::Abdominal);
    let thigh_sf = req.skinfold(SkinfoldSite::FrontThigh);
    let calf_sf = req.skinfold(SkinfoldSite::MedialCalf);

    let arm = req.girth(Girth::ArmRelaxed);
    let forearm = req.girth(Girth::Forearm);
    let chest = req.girth(Girth::Chest);
    let waist = req.girth(Girth::Waist);
    let thigh = req.girth(Girth::Thigh);
    let calf = req.girth(Girth::Calf);

    let biacromial = req.breadth(Breadth::Biacromial);
    let biiliocristal = req.breadth(Breadth::Biiliocristal);
    let humerus = req.breadth(Breadth::Humerus);
    let femur = req.breadth(Breadth::Femur);
    let transverse_chest = req.breadth(Breadth::TransverseChest);
    let ap_chest = req.breadth(Breadth::ApChestDepth);

    let head = req.head_circumference();
    let measured_sitting = req.optional_length(Length::SittingHeight);

    let (invalid, missing) = req.into_parts();
    if !invalid.is_empty() || !missing.is_empty() {
        tracing::warn!(
            invalid = ?invalid,
            missing = ?missing,
            "five-component fractionation not computable"
        );
        return FiveComponentResult::invalid(missing, invalid, Vec::new());
    }

    let mut warnings = Vec::new();
    let sitting_check = match measured_sitting {
        Some(_) => check_sitting_height(record),
        None => Ok(None),
    };
    match sitting_check {
        Ok(Some(warning)) => warnings.push(warning.message),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "five-component fractionation rejected inputs");
            return FiveComponentResult::invalid(
                Vec::new(),
                vec!["Sitting height is not below stature".to_string()],
                warnings,
            );
        }
    }
    let sitting_height = measured_sitting.unwrap_or_else(|| {
        warnings.push(
            "Sitting height not measured; estimated from stature with Phantom proportions"
                .to_string(),
        );
        height * phantom::SITTING_HEIGHT_CM / phantom::STATURE_CM
    });

    let corrected = [
        ("arm", corrected_girth(arm, triceps)),
        ("chest", corrected_girth(chest, subscapular)),
        ("thigh", corrected_girth(thigh, thigh_sf)),
        ("calf", corrected_girth(calf, calf_sf)),
        ("waist", corrected_girth(waist, abdominal)),
    ];
    let mut errors: Vec<String> = corrected
        .iter()
        .filter(|(_, g)| *g <= 0.0)
        .map(|(name, _)| format!("Corrected {name} girth is not positive; check the skinfold"))
        .collect();

    let stature_scale = phantom::STATURE_CM / height;
    let sitting_scale = phantom::SITTING_HEIGHT_CM / sitting_height;

    let thickness = match record.sex {
        Sex::Male => kerr::SKIN_THICKNESS_MALE_MM,
        Sex::Female => kerr::SKIN_THICKNESS_FEMALE_MM,
    };
    let skin = body_surface_area(weight, height, record.age_years) * thickness * kerr::SKIN_DENSITY;

    let adipose_sum = triceps + subscapular + supraspinale + abdominal + thigh_sf + calf_sf;
    let adipose = ADIPOSE.mass(adipose_sum, stature_scale);

    let muscle_sum = corrected[0].1 + forearm + corrected[1].1 + corrected[2].1 + corrected[3].1;
    let muscle = MUSCLE.mass(muscle_sum, stature_scale);

    let body_bone_sum = biacromial + biiliocristal + 2.0 * humerus + 2.0 * femur;
    let bone = head_bone_mass(head) + BODY_BONE.mass(body_bone_sum, stature_scale);

    let residual_sum = transverse_chest + ap_chest + corrected[4].1;
    let residual = RESIDUAL.mass(residual_sum, sitting_scale);

    let predicted = [
        ("Adipose", adipose),
        ("Muscle", muscle),
        ("Bone", bone),
        ("Skin", skin),
        ("Residual", residual),
    ];
    errors.extend(
        predicted
            .iter()
            .filter(|(_, kg)| *kg <= 0.0)
            .map(|(name, _)| format!("{name} mass prediction is not positive")),
    );
    if !errors.is_empty() {
        tracing::warn!(errors = ?errors, "five-component fractionation rejected inputs");
        return FiveComponentResult::invalid(Vec::new(), errors, warnings);
    }

    let predicted_total: f64 = predicted.iter().map(|(_, kg)| kg).sum();
    let mass_difference_percent = (predicted_total - weight) / weight * 100.0;
    if mass_difference_percent.abs() > kerr::MASS_DIFFERENCE_WARNING_PERCENT {
        warnings.push(format!(
            "Predicted mass differs from measured mass by {mass_difference_percent:.1}%"
        ));
    }

    let factor = weight / predicted_total;
    let component = |kg: f64| {
        let scaled = kg * factor;
        ComponentMass {
            kg: scaled,
            percent: scaled / weight * 100.0,
        }
    };
    let adipose = component(adipose);
    let muscle = component(muscle);
    let bone = component(bone);
    let skin = component(skin);
    let residual = component(residual);

    let specific_volume = (adipose.percent / kerr::ADIPOSE_DENSITY
        + muscle.percent / kerr::MUSCLE_DENSITY
        + bone.percent / kerr::BONE_DENSITY
        + skin.percent / kerr::SKIN_DENSITY
        + residual.percent / kerr::RESIDUAL_DENSITY)
        / 100.0;
    let body_density = 1.0 / specific_volume;

    let obesity_warning = (adipose.percent > kerr::OBESITY_ADIPOSE_PERCENT).then(|| {
        ObesityWarning {
            message: format!(
                "Adipose tissue is {:.1}% of body mass; the Kerr model is less reliable in obesity",
                adipose.percent
            ),
            suggested_formulas: vec![FormulaId::DurninWomersley],
        }
    });

    tracing::debug!(
        adipose_kg = adipose.kg,
        muscle_kg = muscle.kg,
        bone_kg = bone.kg,
        skin_kg = skin.kg,
        residual_kg = residual.kg,
        predicted_total,
        "computed five-component fractionation"
    );

    FiveComponentResult {
        is_valid: true,
        adipose: Some(adipose),
        muscle: Some(muscle),
        bone: Some(bone),
        skin: Some(skin),
        residual: Some(residual),
        body_density: Some(body_density),
        lipid_fat_percent: Some(kinanthro_core::siri_fat_percent(body_density)),
        cormic_index: measured_sitting.map(|sh| sh / height * 100.0),
        obesity_warning,
        predicted_mass_kg: Some(predicted_total),
        mass_difference_percent: Some(mass_difference_percent),
        errors: Vec::new(),
        missing_data: Vec::new(),
        warnings,
    }
}
