use kinanthro_composition::advisor::{
    matching_rules, rule_ids, validate_formula_match, PatientProfile, Severity,
};
use kinanthro_composition::formulas::FormulaId;
use kinanthro_composition::profile::{ActivityLevel, FormulaProfile};
use kinanthro_core::models::{AnthropometricRecord, Sex, SkinfoldSite};

/// Every skinfold present, so each formula is computable.
fn complete(age: f64) -> AnthropometricRecord {
    let mut record = AnthropometricRecord::new(Sex::Male).with_weight(78.0).with_age(age);
    for site in SkinfoldSite::ALL {
        record = record.with_skinfold(site, 10.0);
    }
    record
}

fn patient(record: &AnthropometricRecord, activity: ActivityLevel) -> PatientProfile {
    PatientProfile::from_record(record, activity)
}

fn fired(selected: FormulaProfile, p: &PatientProfile, r: &AnthropometricRecord) -> Vec<String> {
    matching_rules(selected, p, r)
        .into_iter()
        .map(|m| m.rule)
        .collect()
}

#[test]
fn no_rule_means_optimal() {
    let record = complete(30.0);
    let v = validate_formula_match(
        FormulaProfile::General,
        &patient(&record, ActivityLevel::Active),
        &record,
    );
    assert!(v.is_optimal);
    assert_eq!(v.severity, Severity::Info);
    assert_eq!(v.rule, None);
    assert_eq!(v.recommended, FormulaProfile::General);
    assert_eq!(v.recommended_formula, FormulaId::JacksonPollock3);
}

#[test]
fn athlete_with_rapid_formula_is_critical() {
    let record = complete(25.0);
    let p = patient(&record, ActivityLevel::Athlete);
    assert_eq!(fired(FormulaProfile::Rapid, &p, &record), vec!["athlete_rapid"]);

    let v = validate_formula_match(FormulaProfile::Rapid, &p, &record);
    assert!(!v.is_optimal);
    assert_eq!(v.severity, Severity::Critical);
    assert_eq!(v.recommended, FormulaProfile::Athlete);
    assert_eq!(v.recommended_formula, FormulaId::Withers);
}

#[test]
fn missing_sites_recommend_the_first_complete_formula() {
    let mut record = complete(30.0);
    record.skinfolds.remove(&SkinfoldSite::Chest);
    let p = patient(&record, ActivityLevel::Active);

    let v = validate_formula_match(FormulaProfile::General, &p, &record);
    assert_eq!(v.rule.as_deref(), Some("missing_measurements"));
    assert_eq!(v.severity, Severity::Warning);
    assert_eq!(v.recommended, FormulaProfile::Control);
    assert!(v.message.contains("Chest skinfold"));
}

#[test]
fn nothing_computable_is_critical() {
    let mut record = complete(30.0);
    record.weight_kg = None;
    let p = patient(&record, ActivityLevel::Active);

    let v = validate_formula_match(FormulaProfile::Control, &p, &record);
    assert_eq!(v.rule.as_deref(), Some("missing_measurements"));
    assert_eq!(v.severity, Severity::Critical);
    assert_eq!(v.recommended, FormulaProfile::Control);
}

#[test]
fn older_adult_with_general_formula() {
    let record = complete(65.0);
    let p = patient(&record, ActivityLevel::Active);

    let v = validate_formula_match(FormulaProfile::General, &p, &record);
    assert_eq!(v.rule.as_deref(), Some("elderly_general"));
    assert_eq!(v.severity, Severity::Warning);
    assert_eq!(v.recommended, FormulaProfile::Control);

    let v = validate_formula_match(FormulaProfile::Control, &p, &record);
    assert!(v.is_optimal);
}

#[test]
fn athlete_with_population_formula() {
    let record = complete(24.0);
    let p = patient(&record, ActivityLevel::Athlete);

    for selected in [FormulaProfile::General, FormulaProfile::Control] {
        let v = validate_formula_match(selected, &p, &record);
        assert_eq!(v.rule.as_deref(), Some("athlete_generalized"));
        assert_eq!(v.recommended, FormulaProfile::Athlete);
    }
    assert!(validate_formula_match(FormulaProfile::Athlete, &p, &record).is_optimal);
}

#[test]
fn sedentary_patient_with_athlete_formula() {
    let record = complete(40.0);
    let p = patient(&record, ActivityLevel::Sedentary);

    let v = validate_formula_match(FormulaProfile::Athlete, &p, &record);
    assert_eq!(v.rule.as_deref(), Some("sedentary_athlete_formula"));
    assert_eq!(v.severity, Severity::Warning);
    assert_eq!(v.recommended, FormulaProfile::General);
}

#[test]
fn minors_get_an_informational_note() {
    let record = complete(16.0);
    let p = patient(&record, ActivityLevel::Active);

    let v = validate_formula_match(FormulaProfile::Fitness, &p, &record);
    assert_eq!(v.rule.as_deref(), Some("minor_adult_formula"));
    assert_eq!(v.severity, Severity::Info);
    assert!(v.is_optimal);
    assert_eq!(v.recommended, FormulaProfile::Fitness);
}

#[test]
fn rapid_screening_is_informational_for_non_athletes() {
    let record = complete(30.0);
    let p = patient(&record, ActivityLevel::Active);

    let v = validate_formula_match(FormulaProfile::Rapid, &p, &record);
    assert_eq!(v.rule.as_deref(), Some("rapid_screening"));
    assert_eq!(v.severity, Severity::Info);
}

#[test]
fn most_severe_match_wins() {
    let mut record = complete(25.0);
    record.skinfolds.remove(&SkinfoldSite::FrontThigh);
    let p = patient(&record, ActivityLevel::Athlete);

    assert_eq!(
        fired(FormulaProfile::Rapid, &p, &record),
        vec!["athlete_rapid", "missing_measurements"]
    );
    let v = validate_formula_match(FormulaProfile::Rapid, &p, &record);
    assert_eq!(v.rule.as_deref(), Some("athlete_rapid"));
}

#[test]
fn table_order_breaks_ties() {
    let record = complete(65.0);
    let p = patient(&record, ActivityLevel::Athlete);

    assert_eq!(
        fired(FormulaProfile::General, &p, &record),
        vec!["elderly_general", "athlete_generalized"]
    );
    let v = validate_formula_match(FormulaProfile::General, &p, &record);
    assert_eq!(v.rule.as_deref(), Some("elderly_general"));
}

#[test]
fn rule_table_is_enumerable() {
    assert_eq!(
        rule_ids(),
        vec![
            "athlete_rapid",
            "missing_measurements",
            "elderly_general",
            "athlete_generalized",
            "sedentary_athlete_formula",
            "minor_adult_formula",
            "rapid_screening",
        ]
    );
}
