use kinanthro_core::error::CoreError;
use kinanthro_core::models::{Length, Sex, Site, SkinfoldSite};
use kinanthro_core::normalize::{normalize, RawRecord};

fn raw(json: &str) -> RawRecord {
    RawRecord::from_json(json).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn mixed_input_shapes_resolve_to_one_canonical_record() {
    let input = raw(r#"{
        "sex": "male",
        "weight": 75,
        "height": { "value": 175 },
        "age_years": 30,
        "skinfolds": {
            "triceps": { "values": [12.0, 12.2] },
            "biceps": "6,0",
            "subscapular": 14,
            "suprailiac": 10,
            "abdominal": 0,
            "chest": null,
            "front_thigh": ""
        }
    }"#);

    let normalized = normalize(&input).unwrap();
    let record = &normalized.record;

    assert_eq!(record.sex, Sex::Male);
    assert_eq!(record.weight_kg, Some(75.0));
    assert_eq!(record.height_cm, Some(175.0));
    assert_eq!(record.age_years, Some(30.0));
    assert!(approx(record.skinfold(SkinfoldSite::Triceps).unwrap(), 12.1));
    assert_eq!(record.skinfold(SkinfoldSite::Biceps), Some(6.0));
    assert_eq!(record.skinfold(SkinfoldSite::IliacCrest), Some(10.0));
    assert_eq!(record.skinfold(SkinfoldSite::Abdominal), None);
    assert_eq!(record.skinfold(SkinfoldSite::Chest), None);
    assert_eq!(record.skinfold(SkinfoldSite::FrontThigh), None);

    assert_eq!(normalized.reconciliations.len(), 1);
    assert_eq!(
        normalized.reconciliations[0].site,
        Site::Skinfold(SkinfoldSite::Triceps)
    );
    assert!(normalized.warnings.is_empty());
}

#[test]
fn units_are_converted_once() {
    let input = raw(r#"{
        "sex": "female",
        "weight": 165,
        "height": 70,
        "skinfolds": { "triceps": 1.2 },
        "girths": { "waist": 30 },
        "units": { "skinfold": "cm", "length": "in", "mass": "lb" }
    }"#);

    let record = normalize(&input).unwrap().record;
    assert!(approx(record.weight_kg.unwrap(), 74.842_741_05));
    assert!(approx(record.height_cm.unwrap(), 177.8));
    assert!(approx(record.skinfold(SkinfoldSite::Triceps).unwrap(), 12.0));
    assert!(approx(
        record.girth(kinanthro_core::models::Girth::Waist).unwrap(),
        76.2
    ));
}

#[test]
fn negative_measurement_is_a_hard_reject() {
    let input = raw(r#"{ "sex": "male", "skinfolds": { "triceps": -3 } }"#);
    let err = normalize(&input).unwrap_err();
    assert!(matches!(
        err,
        CoreError::NegativeMeasurement { ref field, .. } if field == "Triceps skinfold"
    ));

    let input = raw(r#"{ "sex": "male", "skinfolds": { "triceps": { "values": [10, -1] } } }"#);
    assert!(normalize(&input).is_err());
}

#[test]
fn unparsable_text_is_rejected() {
    let input = raw(r#"{ "sex": "male", "weight": "seventy" }"#);
    let err = normalize(&input).unwrap_err();
    assert!(matches!(err, CoreError::Unparsable { ref text, .. } if text == "seventy"));
}

#[test]
fn single_valid_replicate_is_used_as_entered() {
    let input = raw(r#"{ "sex": "male", "skinfolds": { "triceps": { "values": [12.0, 0] } } }"#);
    let normalized = normalize(&input).unwrap();

    assert_eq!(normalized.record.skinfold(SkinfoldSite::Triceps), Some(12.0));
    assert!(normalized.reconciliations[0].is_insufficient());
}

#[test]
fn divergent_replicates_are_listed_for_a_third_reading() {
    let input = raw(r#"{
        "sex": "male",
        "skinfolds": {
            "triceps": { "values": [10.0, 10.6] },
            "subscapular": { "values": [14.0, 14.2] }
        }
    }"#);
    let normalized = normalize(&input).unwrap();

    assert_eq!(
        normalized.sites_needing_third_measurement(),
        vec![Site::Skinfold(SkinfoldSite::Triceps)]
    );
}

#[test]
fn implausible_values_warn_but_are_kept() {
    let input = raw(r#"{ "sex": "male", "weight": 80, "skinfolds": { "abdominal": 85 } }"#);
    let normalized = normalize(&input).unwrap();

    assert_eq!(normalized.record.skinfold(SkinfoldSite::Abdominal), Some(85.0));
    assert_eq!(normalized.warnings.len(), 1);
    let warning = &normalized.warnings[0];
    assert_eq!(warning.field, "Abdominal skinfold");
    assert_eq!(warning.expected.max, 70.0);
}

#[test]
fn sitting_height_ratio_outside_range_warns() {
    let input = raw(r#"{ "sex": "male", "height": 170, "lengths": { "sitting_height": 60 } }"#);
    let normalized = normalize(&input).unwrap();

    assert_eq!(normalized.record.length(Length::SittingHeight), Some(60.0));
    assert!(normalized
        .warnings
        .iter()
        .any(|w| w.field == "Sitting height / stature ratio"));
}

#[test]
fn sitting_height_at_or_above_stature_is_rejected() {
    let input = raw(r#"{ "sex": "male", "height": 170, "lengths": { "sitting_height": 170 } }"#);
    assert!(matches!(
        normalize(&input),
        Err(CoreError::SittingHeightNotBelowStature { .. })
    ));
}

#[test]
fn non_finite_age_is_rejected() {
    let mut input = raw(r#"{ "sex": "female" }"#);
    input.age_years = Some(f64::NAN);
    assert!(matches!(normalize(&input), Err(CoreError::NonFinite { .. })));
}
