use jiff::civil::date;
use kinanthro_core::models::Sex;
use kinanthro_growth::age::AgeInMonths;
use kinanthro_growth::{assess_child, Child, ChildMeasurements, Indicator, Posture};

fn child(sex: Sex, months: f64) -> Child {
    Child {
        sex,
        age: AgeInMonths {
            chronological: months,
            corrected: None,
        },
    }
}

#[test]
fn infant_gets_every_indicator_but_bmi() {
    let report = assess_child(
        &child(Sex::Female, 12.0),
        &ChildMeasurements {
            weight_kg: Some(8.9481),
            length_cm: Some(74.0150),
            head_circumference_cm: Some(44.8965),
        },
    );

    let scored: Vec<_> = report.assessments.iter().map(|a| a.indicator).collect();
    assert_eq!(scored, vec![Indicator::Wfa, Indicator::Lhfa, Indicator::Wflh, Indicator::Hcfa]);
    assert_eq!(report.refused.len(), 1);
    assert_eq!(report.refused[0].indicator, Indicator::Bfa);

    for indicator in [Indicator::Wfa, Indicator::Lhfa, Indicator::Hcfa] {
        assert!(report.get(indicator).unwrap().z_score.abs() < 1e-9);
    }
    assert_eq!(report.get(Indicator::Wflh).unwrap().posture, Some(Posture::Recumbent));
    assert_eq!(report.get(Indicator::Wfa).unwrap().posture, None);
}

#[test]
fn preschooler_gets_bmi_but_not_head_circumference() {
    let report = assess_child(
        &child(Sex::Male, 36.0),
        &ChildMeasurements {
            weight_kg: Some(14.3),
            length_cm: Some(96.0),
            head_circumference_cm: Some(49.5),
        },
    );

    let bfa = report.get(Indicator::Bfa).unwrap();
    assert!((bfa.value - 14.3 / 0.96_f64.powi(2)).abs() < 1e-9);
    assert_eq!(report.get(Indicator::Hcfa), None);
    assert_eq!(report.refused[0].indicator, Indicator::Hcfa);
}

#[test]
fn indicators_without_data_are_skipped() {
    let report = assess_child(
        &child(Sex::Male, 6.0),
        &ChildMeasurements {
            weight_kg: Some(7.9),
            ..ChildMeasurements::default()
        },
    );
    assert_eq!(report.assessments.len(), 1);
    assert_eq!(report.assessments[0].indicator, Indicator::Wfa);
    assert!(report.refused.is_empty());
}

#[test]
fn scoring_uses_corrected_age() {
    let born_early =
        Child::from_dates(Sex::Male, date(2024, 1, 1), date(2024, 7, 1), Some(30.0), true).unwrap();
    let report = assess_child(
        &born_early,
        &ChildMeasurements {
            weight_kg: Some(6.5),
            ..ChildMeasurements::default()
        },
    );
    let wfa = report.get(Indicator::Wfa).unwrap();
    assert_eq!(wfa.axis_value, born_early.age.effective());
    assert!(wfa.axis_value < born_early.age.chronological);
}

#[test]
fn four_year_old_is_scored_against_standing_height() {
    let report = assess_child(
        &child(Sex::Male, 48.0),
        &ChildMeasurements {
            weight_kg: Some(20.3846),
            length_cm: Some(115.0),
            ..ChildMeasurements::default()
        },
    );

    assert!(report.refused.is_empty());
    let wflh = report.get(Indicator::Wflh).unwrap();
    assert_eq!(wflh.posture, Some(Posture::Standing));
    assert_eq!(wflh.axis_value, 115.0);
    assert!(wflh.z_score.abs() < 1e-9);
    assert_eq!(report.get(Indicator::Lhfa).unwrap().posture, Some(Posture::Standing));
}
