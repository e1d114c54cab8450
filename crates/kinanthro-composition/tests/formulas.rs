use std::collections::BTreeMap;
use std::str::FromStr;

use kinanthro_composition::body_composition::{compute, compute_for_record};
use kinanthro_composition::formulas::FormulaId;
use kinanthro_composition::profile::FormulaProfile;
use kinanthro_composition::{all_formulas, get_formula};
use kinanthro_core::models::{AnthropometricRecord, Sex, SkinfoldSite};
use kinanthro_core::siri_fat_percent;

use SkinfoldSite::*;

fn skinfolds(values: &[(SkinfoldSite, f64)]) -> BTreeMap<SkinfoldSite, f64> {
    values.iter().copied().collect()
}

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn durnin_male() -> BTreeMap<SkinfoldSite, f64> {
    skinfolds(&[(Triceps, 12.0), (Biceps, 6.0), (Subscapular, 14.0), (IliacCrest, 10.0)])
}

#[test]
fn durnin_womersley_golden_value_without_age() {
    let r = compute(
        FormulaId::DurninWomersley,
        Sex::Male,
        &durnin_male(),
        Some(75.0),
        Some(175.0),
        None,
    );

    assert!(r.is_valid);
    assert_eq!(r.sum_of_skinfolds_mm, Some(42.0));
    assert!(approx(r.body_density.unwrap(), 1.055_730, 1e-6));
    let fat = r.fat_percent.unwrap();
    assert!(approx(fat, 18.8698, 1e-3));
    assert!((15.0..=20.0).contains(&fat));
    assert!(approx(r.fat_mass_kg.unwrap() + r.lean_mass_kg.unwrap(), 75.0, 1e-9));
}

#[test]
fn durnin_womersley_uses_the_age_band() {
    let r = compute(
        FormulaId::DurninWomersley,
        Sex::Male,
        &durnin_male(),
        Some(75.0),
        Some(175.0),
        Some(25.0),
    );
    assert!(approx(r.body_density.unwrap(), 1.060_511, 1e-6));
    assert!(approx(r.fat_percent.unwrap(), 16.7563, 1e-3));
}

#[test]
fn missing_site_is_reported_and_nothing_is_fabricated() {
    let mut sf = durnin_male();
    sf.remove(&IliacCrest);
    let r = compute(FormulaId::DurninWomersley, Sex::Male, &sf, Some(75.0), None, None);

    assert!(!r.is_valid);
    assert_eq!(r.missing_skinfolds, vec![IliacCrest]);
    assert_eq!(r.body_density, None);
    assert_eq!(r.fat_percent, None);
    assert_eq!(r.fat_mass_kg, None);
    assert_eq!(r.sum_of_skinfolds_mm, None);
    assert_eq!(r.missing_labels(), vec!["Iliac crest skinfold".to_string()]);
}

#[test]
fn missing_weight_is_reported() {
    let r = compute(FormulaId::DurninWomersley, Sex::Male, &durnin_male(), None, None, None);
    assert!(!r.is_valid);
    assert!(r.missing_skinfolds.is_empty());
    assert_eq!(r.missing_fields, vec!["Body mass".to_string()]);
}

#[test]
fn jackson_pollock_7_male() {
    let sf = skinfolds(&[
        (Chest, 10.0),
        (Midaxillary, 10.0),
        (Triceps, 15.0),
        (Subscapular, 15.0),
        (Abdominal, 20.0),
        (IliacCrest, 15.0),
        (FrontThigh, 15.0),
    ]);
    let r = compute(FormulaId::JacksonPollock7, Sex::Male, &sf, Some(80.0), None, Some(30.0));
    assert!(approx(r.body_density.unwrap(), 1.065_353_2, 1e-7));
    assert!(approx(r.fat_percent.unwrap(), 14.6346, 1e-3));
    assert!(r.warnings.is_empty());
}

#[test]
fn jackson_pollock_needs_age() {
    let sf = skinfolds(&[(Chest, 15.0), (Abdominal, 25.0), (FrontThigh, 20.0)]);
    let r = compute(FormulaId::JacksonPollock3, Sex::Male, &sf, Some(80.0), None, None);
    assert!(!r.is_valid);
    assert_eq!(r.missing_fields, vec!["Age".to_string()]);
}

#[test]
fn jackson_pollock_3_uses_sex_specific_sites() {
    let male = skinfolds(&[(Chest, 15.0), (Abdominal, 25.0), (FrontThigh, 20.0)]);
    let r = compute(FormulaId::JacksonPollock3, Sex::Male, &male, Some(80.0), None, Some(30.0));
    assert!(approx(r.body_density.unwrap(), 1.057_816, 1e-7));

    let female = skinfolds(&[(Triceps, 20.0), (IliacCrest, 20.0), (FrontThigh, 20.0)]);
    let r = compute(FormulaId::JacksonPollock3, Sex::Female, &female, Some(60.0), None, Some(30.0));
    assert!(approx(r.body_density.unwrap(), 1.044_022_1, 1e-7));
    assert!(approx(r.fat_percent.unwrap(), 24.1279, 1e-3));

    let r = compute(FormulaId::JacksonPollock3, Sex::Female, &male, Some(60.0), None, Some(30.0));
    assert_eq!(r.missing_skinfolds, vec![Triceps, IliacCrest]);
}

#[test]
fn withers_linear_for_men_logarithmic_for_women() {
    let male = skinfolds(&[
        (Triceps, 10.0),
        (Subscapular, 10.0),
        (Biceps, 10.0),
        (Supraspinale, 10.0),
        (Abdominal, 10.0),
        (FrontThigh, 10.0),
        (MedialCalf, 10.0),
    ]);
    let r = compute(FormulaId::Withers, Sex::Male, &male, Some(70.0), None, None);
    assert!(approx(r.body_density.unwrap(), 1.0708, 1e-9));
    assert!(approx(r.fat_percent.unwrap(), 12.2712, 1e-3));

    let female = skinfolds(&[
        (Triceps, 12.5),
        (Subscapular, 12.5),
        (Supraspinale, 12.5),
        (MedialCalf, 12.5),
    ]);
    let r = compute(FormulaId::Withers, Sex::Female, &female, Some(58.0), None, None);
    assert!(approx(r.body_density.unwrap(), 1.068_617, 1e-6));
}

#[test]
fn sloan_two_sites() {
    let male = skinfolds(&[(FrontThigh, 12.0), (Subscapular, 14.0)]);
    let r = compute(FormulaId::Sloan, Sex::Male, &male, Some(70.0), None, Some(22.0));
    assert!(approx(r.body_density.unwrap(), 1.070_036, 1e-9));

    let female = skinfolds(&[(IliacCrest, 10.0), (Triceps, 12.0)]);
    let r = compute(FormulaId::Sloan, Sex::Female, &female, Some(58.0), None, Some(22.0));
    assert!(approx(r.body_density.unwrap(), 1.057_74, 1e-9));
}

#[test]
fn every_formula_converts_density_with_siri() {
    let mut record = AnthropometricRecord::new(Sex::Male).with_weight(78.0).with_age(28.0);
    for (i, site) in SkinfoldSite::ALL.iter().enumerate() {
        record = record.with_skinfold(*site, 8.0 + i as f64);
    }

    for id in FormulaId::ALL {
        let r = compute_for_record(id, &record);
        assert!(r.is_valid, "{id} should be computable");
        let density = r.body_density.unwrap();
        assert_eq!(r.fat_percent, Some(495.0 / density - 450.0), "{id}");
        assert_eq!(r.fat_percent, Some(siri_fat_percent(density)), "{id}");
    }
}

#[test]
fn age_outside_validation_sample_warns() {
    let sf = skinfolds(&[(Chest, 15.0), (Abdominal, 25.0), (FrontThigh, 20.0)]);
    let r = compute(FormulaId::JacksonPollock3, Sex::Male, &sf, Some(80.0), None, Some(70.0));
    assert!(r.is_valid);
    assert!(r.warnings.iter().any(|w| w.field == "Age"));
}

#[test]
fn registry_lookup() {
    let formulas = all_formulas();
    assert_eq!(formulas.len(), 5);
    for f in &formulas {
        assert_eq!(f.profile().default_formula(), f.id());
        assert!(!f.citation().is_empty());
    }

    assert_eq!(
        get_formula("jackson_pollock_7").map(|f| f.id()),
        Some(FormulaId::JacksonPollock7)
    );
    assert!(get_formula("bioimpedance").is_none());

    assert_eq!(FormulaId::from_str("Jackson-Pollock-3").unwrap(), FormulaId::JacksonPollock3);
    assert!(FormulaId::from_str("nope").is_err());
    assert_eq!(FormulaProfile::from_str("Athlete").unwrap(), FormulaProfile::Athlete);
}

#[test]
fn formula_ids_serialize_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&FormulaId::JacksonPollock7).unwrap(),
        "\"jackson_pollock_7\""
    );
    let id: FormulaId = serde_json::from_str("\"durnin_womersley\"").unwrap();
    assert_eq!(id, FormulaId::DurninWomersley);
}

#[test]
fn non_finite_skinfold_is_an_error_not_a_density() {
    let mut sf = durnin_male();
    sf.insert(Triceps, f64::NAN);
    let r = compute(FormulaId::DurninWomersley, Sex::Male, &sf, Some(75.0), None, None);

    assert!(!r.is_valid);
    assert_eq!(r.body_density, None);
    assert_eq!(r.fat_percent, None);
    assert!(r.missing_skinfolds.is_empty());
    assert_eq!(r.errors, vec!["Triceps skinfold: value is not a finite number"]);
}

#[test]
fn negative_skinfold_is_rejected() {
    let mut sf = durnin_male();
    sf.insert(Triceps, -30.0);
    let r = compute(FormulaId::DurninWomersley, Sex::Male, &sf, Some(75.0), None, None);

    assert!(!r.is_valid);
    assert_eq!(r.fat_percent, None);
    assert_eq!(r.errors, vec!["Triceps skinfold: value -30 is negative"]);
}

#[test]
fn negative_skinfold_and_weight_are_both_reported() {
    let sf = skinfolds(&[(FrontThigh, -10.0), (Subscapular, 14.0)]);
    let r = compute(FormulaId::Sloan, Sex::Male, &sf, Some(-75.0), None, Some(22.0));

    assert!(!r.is_valid);
    assert_eq!(r.fat_mass_kg, None);
    assert_eq!(r.lean_mass_kg, None);
    assert_eq!(
        r.errors,
        vec![
            "Front thigh skinfold: value -10 is negative".to_string(),
            "Body mass: value -75 is negative".to_string(),
        ]
    );
    assert!(r.missing_fields.is_empty());
}

#[test]
fn invalid_age_is_rejected_even_when_optional() {
    let r = compute(
        FormulaId::DurninWomersley,
        Sex::Male,
        &durnin_male(),
        Some(75.0),
        None,
        Some(f64::NAN),
    );
    assert!(!r.is_valid);
    assert_eq!(r.errors, vec!["Age: value is not a finite number"]);
}

#[test]
fn zero_skinfold_counts_as_missing() {
    let mut sf = durnin_male();
    sf.insert(Biceps, 0.0);
    let r = compute(FormulaId::DurninWomersley, Sex::Male, &sf, Some(75.0), None, None);
    assert!(!r.is_valid);
    assert_eq!(r.missing_skinfolds, vec![Biceps]);
    assert!(r.errors.is_empty());
}
