//! Clinical constants, floors and thresholds used across the engine.
//!
//! Every clamp or cut-off an engine applies lives here, grouped by the
//! protocol that defines it, so each one can be tested on its own.

/// Siri two-compartment density conversion.
///
/// Reference: Siri, W.E. (1961). Body composition from fluid spaces and
/// density. In *Techniques for Measuring Body Composition*, 223-244.
pub mod siri {
    /// `fat% = NUMERATOR / density - OFFSET`
    pub const NUMERATOR: f64 = 495.0;
    pub const OFFSET: f64 = 450.0;

    /// Density range (g/cm³) over which the conversion is physiologically
    /// meaningful.
    pub const MIN_VALID_DENSITY: f64 = 0.9;
    pub const MAX_VALID_DENSITY: f64 = 1.1;
}

/// Replicate reliability thresholds.
///
/// Reference: ISAK (2001). *International Standards for Anthropometric
/// Assessment*. Perini, T.A. et al. (2005). Technical error of measurement
/// in anthropometry. *Rev Bras Med Esporte*, 11(1), 81-85.
pub mod tem {
    /// Relative difference between two readings above which a third reading
    /// is requested (strictly greater).
    pub const THIRD_MEASUREMENT_RELATIVE_DIFFERENCE: f64 = 0.05;

    /// `%TEM` strictly below this is rated excellent.
    pub const EXCELLENT_MAX_PERCENT: f64 = 5.0;

    /// `%TEM` at or below this is acceptable and still reliable.
    pub const ACCEPTABLE_MAX_PERCENT: f64 = 7.5;

    /// A reading is a clear outlier when the gap separating it from the
    /// closest pair exceeds this multiple of the pair's own gap.
    pub const OUTLIER_GAP_RATIO: f64 = 2.0;

    /// Maximum replicates accepted at one site.
    pub const MAX_REPLICATES: usize = 3;
}

/// Plausible measurement ranges. Values outside these produce warnings,
/// never rejections.
pub mod isak_ranges {
    pub const SKINFOLD_MM: (f64, f64) = (2.0, 70.0);
    pub const GIRTH_CM: (f64, f64) = (10.0, 200.0);
    pub const BREADTH_CM: (f64, f64) = (1.0, 70.0);
    pub const LENGTH_CM: (f64, f64) = (10.0, 150.0);
    pub const STATURE_CM: (f64, f64) = (30.0, 250.0);
    pub const WEIGHT_KG: (f64, f64) = (0.5, 350.0);
    pub const AGE_YEARS: (f64, f64) = (0.0, 120.0);
    pub const HEAD_CIRCUMFERENCE_CM: (f64, f64) = (25.0, 65.0);

    /// Sitting height / stature ratio.
    pub const SITTING_HEIGHT_RATIO: (f64, f64) = (0.45, 0.70);
}

/// Phantom stratagem.
///
/// Reference: Ross, W.D. & Wilson, N.C. (1974). A stratagem for
/// proportional growth assessment. *Acta Paediatr Belg*, 28, 169-182.
pub mod phantom {
    /// Phantom stature (cm).
    pub const STATURE_CM: f64 = 170.18;

    /// Phantom sitting height (cm).
    pub const SITTING_HEIGHT_CM: f64 = 89.92;
}

/// Heath-Carter anthropometric somatotype.
///
/// Reference: Carter, J.E.L. & Heath, B.H. (1990). *Somatotyping:
/// Development and Applications*. Cambridge University Press.
pub mod somatotype {
    /// Clinical floor for endomorphy and mesomorphy ratings.
    pub const COMPONENT_FLOOR: f64 = 0.5;

    /// Ectomorphy assigned when HWR is at or below the lower breakpoint; also
    /// the floor of the ectomorphy rating.
    pub const ECTOMORPHY_FLOOR: f64 = 0.1;

    /// HWR at or above which the steep ectomorphy equation applies.
    pub const HWR_UPPER_BREAKPOINT: f64 = 40.75;

    /// HWR at or below which ectomorphy is pinned to the floor.
    pub const HWR_LOWER_BREAKPOINT: f64 = 38.25;

    /// Two components within this distance are considered equal when
    /// classifying a somatotype.
    pub const CATEGORY_TOLERANCE: f64 = 0.5;
}

/// Kerr five-way fractionation.
///
/// Reference: Kerr, D.A. (1988). *An anthropometric method for the
/// fractionation of skin, adipose, bone, muscle and residual tissue masses
/// in males and females age 6 to 77 years*. MSc thesis, Simon Fraser
/// University.
pub mod kerr {
    /// Skin thickness (mm).
    pub const SKIN_THICKNESS_MALE_MM: f64 = 2.07;
    pub const SKIN_THICKNESS_FEMALE_MM: f64 = 1.96;

    /// Skin density (g/cm³); also converts m²·mm of skin into kg.
    pub const SKIN_DENSITY: f64 = 1.05;

    /// Body-surface-area constant (DuBois) for adults and children under the
    /// age threshold.
    pub const BSA_CONSTANT_ADULT: f64 = 71.84;
    pub const BSA_CONSTANT_CHILD: f64 = 70.691;
    pub const BSA_CHILD_AGE_YEARS: f64 = 12.0;

    /// Tissue densities (g/cm³) used to derive whole-body density.
    pub const ADIPOSE_DENSITY: f64 = 0.94;
    pub const MUSCLE_DENSITY: f64 = 1.066;
    pub const BONE_DENSITY: f64 = 1.30;
    pub const RESIDUAL_DENSITY: f64 = 1.05;

    /// Adipose percent above which the model's accuracy is known to degrade.
    pub const OBESITY_ADIPOSE_PERCENT: f64 = 40.0;

    /// Predicted-vs-measured mass discrepancy (%) above which a warning is
    /// emitted.
    pub const MASS_DIFFERENCE_WARNING_PERCENT: f64 = 5.0;

    /// Phantom sum means/SDs and component mass means/SDs.
    pub mod phantom_sums {
        pub const ADIPOSE_SUM_P: f64 = 116.41;
        pub const ADIPOSE_SUM_S: f64 = 34.79;
        pub const ADIPOSE_MASS_P: f64 = 25.6;
        pub const ADIPOSE_MASS_S: f64 = 5.85;

        pub const MUSCLE_SUM_P: f64 = 207.21;
        pub const MUSCLE_SUM_S: f64 = 13.74;
        pub const MUSCLE_MASS_P: f64 = 24.5;
        pub const MUSCLE_MASS_S: f64 = 5.4;

        pub const RESIDUAL_SUM_P: f64 = 109.35;
        pub const RESIDUAL_SUM_S: f64 = 7.08;
        pub const RESIDUAL_MASS_P: f64 = 6.10;
        pub const RESIDUAL_MASS_S: f64 = 1.24;

        pub const HEAD_GIRTH_P: f64 = 56.0;
        pub const HEAD_GIRTH_S: f64 = 1.44;
        pub const HEAD_BONE_MASS_P: f64 = 1.20;
        pub const HEAD_BONE_MASS_S: f64 = 0.18;

        pub const BODY_BONE_SUM_P: f64 = 98.88;
        pub const BODY_BONE_SUM_S: f64 = 5.33;
        pub const BODY_BONE_MASS_P: f64 = 6.70;
        pub const BODY_BONE_MASS_S: f64 = 1.34;
    }
}

/// WHO growth standard banding.
///
/// Reference: WHO Multicentre Growth Reference Study Group (2006). *WHO
/// Child Growth Standards: Methods and development*. Geneva: WHO.
pub mod growth {
    /// |z| at or below this is normal.
    pub const MODERATE_Z: f64 = 2.0;

    /// |z| above this is severe.
    pub const SEVERE_Z: f64 = 3.0;

    /// Average month length in days (365.25 / 12).
    pub const DAYS_PER_MONTH: f64 = 30.4375;

    /// Term gestation in weeks.
    pub const TERM_GESTATION_WEEKS: f64 = 40.0;

    /// Upper plausibility bound for a recorded gestational age.
    pub const MAX_GESTATION_WEEKS: f64 = 45.0;

    /// Gestational age below which a birth is preterm.
    pub const PRETERM_GESTATION_WEEKS: f64 = 37.0;

    /// Chronological age (months) after which prematurity is no longer
    /// corrected for.
    pub const PREMATURITY_CORRECTION_UNTIL_MONTHS: f64 = 24.0;

    /// Average weeks per month (DAYS_PER_MONTH / 7).
    pub const WEEKS_PER_MONTH: f64 = 4.348_214_285_714_286;

    /// Age (months) from which WHO references use standing height instead
    /// of recumbent length.
    pub const STANDING_HEIGHT_FROM_MONTHS: f64 = 24.0;
}

/// Functional risk screening thresholds for older adults.
///
/// References:
/// - Cruz-Jentoft, A.J. et al. (2019). Sarcopenia: revised European
///   consensus (EWGSOP2). *Age and Ageing*, 48(1), 16-31.
/// - Shumway-Cook, A. et al. (2000). Predicting the probability for falls in
///   community-dwelling older adults using the Timed Up & Go Test.
///   *Physical Therapy*, 80(9), 896-903.
/// - Rolland, Y. et al. (2003). Sarcopenia, calf circumference, and physical
///   function of elderly women. *J Am Geriatr Soc*, 51(8), 1120-1124.
pub mod functional {
    /// Handgrip strictly below this (kg) is low strength.
    pub const HANDGRIP_LOW_MALE_KG: f64 = 27.0;
    pub const HANDGRIP_LOW_FEMALE_KG: f64 = 16.0;

    /// Timed-Up-and-Go at or above this (s) flags fall risk.
    pub const TUG_FALL_RISK_SECONDS: f64 = 12.0;

    /// Usual gait speed at or below this (m/s) is low physical performance.
    pub const GAIT_SPEED_LOW_M_PER_S: f64 = 0.8;

    /// Calf circumference strictly below this (cm) screens positive for low
    /// muscle mass.
    pub const CALF_CIRCUMFERENCE_LOW_CM: f64 = 31.0;
}

/// Formula advisor cut-offs.
pub mod advisor {
    /// Age at which generalized adult equations stop being preferred.
    pub const ELDERLY_AGE_YEARS: f64 = 60.0;

    /// Age below which adult density equations are not validated.
    pub const ADULT_AGE_YEARS: f64 = 18.0;
}
