use jiff::civil::date;
use kinanthro_cli::config::KinanthroConfig;
use kinanthro_cli::report::{build_report, AssessmentInput, Overrides};
use kinanthro_composition::formulas::FormulaId;
use kinanthro_composition::profile::FormulaProfile;
use kinanthro_growth::Indicator;

const ADULT: &str = r#"{
    "record": {
        "sex": "male",
        "weight": 75,
        "height": "175",
        "age_years": 30,
        "skinfolds": {
            "triceps": { "values": [10.0, 10.6] },
            "biceps": 6,
            "subscapular": "12,0",
            "iliac_crest": 14
        }
    },
    "profile": "control"
}"#;

#[test]
fn adult_report_runs_the_selected_formula() {
    let input = AssessmentInput::from_json(ADULT).unwrap();
    let report = build_report(
        &input,
        &KinanthroConfig::new(),
        &Overrides::default(),
        date(2026, 1, 1),
    )
    .unwrap();

    assert_eq!(report.assessment.body_composition.formula, FormulaId::DurninWomersley);
    assert!(report.assessment.body_composition.is_valid);
    assert_eq!(report.reconciliations.len(), 1);
    assert_eq!(report.third_measurement_needed.len(), 1);
    assert!(report.growth.is_none());
}

#[test]
fn command_line_overrides_the_input_file() {
    let input = AssessmentInput::from_json(ADULT).unwrap();
    let overrides = Overrides {
        profile: Some(FormulaProfile::Rapid),
        ..Overrides::default()
    };
    let report =
        build_report(&input, &KinanthroConfig::new(), &overrides, date(2026, 1, 1)).unwrap();
    assert_eq!(report.assessment.body_composition.formula, FormulaId::Sloan);
}

#[test]
fn config_profile_is_the_last_fallback() {
    let mut input = AssessmentInput::from_json(ADULT).unwrap();
    input.profile = None;
    let config = KinanthroConfig {
        default_profile: FormulaProfile::Control,
        ..KinanthroConfig::new()
    };
    let report = build_report(&input, &config, &Overrides::default(), date(2026, 1, 1)).unwrap();
    assert_eq!(report.assessment.body_composition.formula, FormulaId::DurninWomersley);
}

#[test]
fn growth_block_is_scored_against_the_measurement_date() {
    let input = AssessmentInput::from_json(
        r#"{
            "record": { "sex": "female", "weight": 8.9, "height": 74 },
            "growth": {
                "birth_date": "2025-01-10",
                "measured_on": "2026-01-10",
                "measurements": {
                    "weight_kg": 8.9,
                    "length_cm": 74.0,
                    "head_circumference_cm": 45.0
                }
            }
        }"#,
    )
    .unwrap();
    let report = build_report(
        &input,
        &KinanthroConfig::new(),
        &Overrides::default(),
        date(2030, 1, 1),
    )
    .unwrap();

    let growth = report.growth.unwrap();
    let wfa = growth.get(Indicator::Wfa).unwrap();
    assert!((wfa.axis_value - 365.0 / 30.4375).abs() < 1e-9);
    assert!(growth.refused.iter().any(|r| r.indicator == Indicator::Bfa));
}

#[test]
fn negative_input_fails_the_report() {
    let input = AssessmentInput::from_json(
        r#"{ "record": { "sex": "male", "weight": -75, "height": 175 } }"#,
    )
    .unwrap();
    assert!(
        build_report(
            &input,
            &KinanthroConfig::new(),
            &Overrides::default(),
            date(2026, 1, 1)
        )
        .is_err()
    );
}
