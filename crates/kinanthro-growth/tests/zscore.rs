use kinanthro_core::models::Sex;
use kinanthro_growth::error::GrowthError;
use kinanthro_growth::tables::{interpolate, table};
use kinanthro_growth::zscore::{diagnosis, lms_value, lms_z};
use kinanthro_growth::{
    calculate_z_score, calculate_z_score_with_posture, Indicator, Posture, Severity,
};

#[test]
fn median_scores_zero() {
    let a = calculate_z_score(3.3464, 0.0, Sex::Male, Indicator::Wfa).unwrap();
    assert!(a.z_score.abs() < 1e-12);
    assert_eq!(a.severity, Severity::Normal);

    let b = calculate_z_score(74.0150, 12.0, Sex::Female, Indicator::Lhfa).unwrap();
    assert!(b.z_score.abs() < 1e-12);
}

#[test]
fn lms_parameters_are_interpolated_independently() {
    let a = calculate_z_score(5.0, 1.5, Sex::Male, Indicator::Wfa).unwrap();
    assert!((a.lms.l - (0.2297 + 0.1970) / 2.0).abs() < 1e-12);
    assert!((a.lms.m - (4.4709 + 5.5675) / 2.0).abs() < 1e-12);
    assert!((a.lms.s - (0.13395 + 0.12385) / 2.0).abs() < 1e-12);

    // A child at the interpolated median is at z = 0.
    let median = calculate_z_score(a.lms.m, 1.5, Sex::Male, Indicator::Wfa).unwrap();
    assert!(median.z_score.abs() < 1e-12);
}

#[test]
fn box_cox_power_of_one_is_a_plain_coefficient_of_variation() {
    let lms = interpolate(table(Indicator::Lhfa, Sex::Male, Posture::Recumbent), 12.0).unwrap();
    let value = lms.m * (1.0 + 2.5 * lms.s);
    let a = calculate_z_score(value, 12.0, Sex::Male, Indicator::Lhfa).unwrap();
    assert!((a.z_score - 2.5).abs() < 1e-9);
    assert_eq!(a.severity, Severity::ModeratePositive);
    assert_eq!(a.diagnosis, "Tall");
    assert!(!a.restricted);
}

#[test]
fn zero_power_uses_the_log_form() {
    let lms = kinanthro_growth::tables::Lms {
        l: 0.0,
        m: 10.0,
        s: 0.1,
    };
    assert!((lms_z(10.0 * 1.1_f64.exp(), lms) - 11.0).abs() < 1e-9);
    assert!((lms_value(1.0, lms) - 10.0 * 0.1_f64.exp()).abs() < 1e-12);
}

#[test]
fn centile_curve_inverts_the_score() {
    let lms = interpolate(table(Indicator::Wfa, Sex::Female, Posture::Recumbent), 9.0).unwrap();
    for z in [-2.0, -1.0, 0.5, 1.5] {
        assert!((lms_z(lms_value(z, lms), lms) - z).abs() < 1e-9);
    }
}

#[test]
fn length_for_age_is_not_restricted_beyond_three() {
    let lms = interpolate(table(Indicator::Lhfa, Sex::Female, Posture::Recumbent), 6.0).unwrap();
    let value = lms.m * (1.0 - 3.5 * lms.s);
    let a = calculate_z_score(value, 6.0, Sex::Female, Indicator::Lhfa).unwrap();
    assert!((a.z_score + 3.5).abs() < 1e-9);
    assert_eq!(a.severity, Severity::SevereNegative);
    assert_eq!(a.diagnosis, "Severely stunted");
}

#[test]
fn weight_indicators_use_the_restricted_extension() {
    let a = calculate_z_score(20.0, 12.0, Sex::Male, Indicator::Wfa).unwrap();
    assert!(a.restricted);

    let sd2 = lms_value(2.0, a.lms);
    let sd3 = lms_value(3.0, a.lms);
    let expected = 3.0 + (20.0 - sd3) / (sd3 - sd2);
    assert!((a.z_score - expected).abs() < 1e-9);
    assert_eq!(a.severity, Severity::SeverePositive);

    let low = calculate_z_score(5.0, 12.0, Sex::Male, Indicator::Wfa).unwrap();
    let sd2 = lms_value(-2.0, low.lms);
    let sd3 = lms_value(-3.0, low.lms);
    assert!(low.restricted);
    assert!((low.z_score - (-3.0 + (5.0 - sd3) / (sd2 - sd3))).abs() < 1e-9);
    assert_eq!(low.diagnosis, "Severely underweight");
}

#[test]
fn bmi_for_age_starts_at_24_months() {
    let refused = calculate_z_score(16.0, 23.9, Sex::Male, Indicator::Bfa);
    assert!(matches!(
        refused,
        Err(GrowthError::IndicatorDomain {
            indicator: Indicator::Bfa,
            ..
        })
    ));

    let computed = calculate_z_score(16.0, 24.1, Sex::Male, Indicator::Bfa).unwrap();
    assert!(computed.z_score.is_finite());
    assert_eq!(computed.indicator, Indicator::Bfa);
}

#[test]
fn domain_edges_are_inclusive() {
    assert!(calculate_z_score(16.0, 60.0, Sex::Female, Indicator::Bfa).is_ok());
    assert!(calculate_z_score(16.0, 60.1, Sex::Female, Indicator::Bfa).is_err());
    assert!(calculate_z_score(47.0, 24.0, Sex::Male, Indicator::Hcfa).is_ok());
    assert!(calculate_z_score(47.0, 24.5, Sex::Male, Indicator::Hcfa).is_err());
    assert!(calculate_z_score(2.5, 45.0, Sex::Female, Indicator::Wflh).is_ok());
    assert!(calculate_z_score(2.5, 44.0, Sex::Female, Indicator::Wflh).is_err());
    assert!(calculate_z_score(50.0, -1.0, Sex::Male, Indicator::Lhfa).is_err());
}

#[test]
fn every_table_spans_its_posture_domain() {
    for indicator in Indicator::ALL {
        for posture in [Posture::Recumbent, Posture::Standing] {
            let (min, max) = indicator.table_domain(posture);
            for sex in [Sex::Male, Sex::Female] {
                let rows = table(indicator, sex, posture);
                assert_eq!(rows.first().unwrap().x, min, "{indicator} {posture:?} {sex}");
                assert_eq!(rows.last().unwrap().x, max, "{indicator} {posture:?} {sex}");
                assert!(rows.windows(2).all(|w| w[0].x < w[1].x), "{indicator} {sex}");
            }
        }
    }
}

#[test]
fn size_medians_increase_along_the_axis() {
    let growing = [Indicator::Wfa, Indicator::Lhfa, Indicator::Wflh, Indicator::Hcfa];
    for indicator in growing {
        for posture in [Posture::Recumbent, Posture::Standing] {
            for sex in [Sex::Male, Sex::Female] {
                let rows = table(indicator, sex, posture);
                assert!(
                    rows.windows(2).all(|w| w[0].lms.m < w[1].lms.m),
                    "{indicator} {posture:?} {sex}"
                );
            }
        }
    }
}

#[test]
fn age_tables_are_monthly() {
    for (indicator, posture) in [
        (Indicator::Wfa, Posture::Recumbent),
        (Indicator::Lhfa, Posture::Recumbent),
        (Indicator::Lhfa, Posture::Standing),
        (Indicator::Bfa, Posture::Standing),
        (Indicator::Hcfa, Posture::Recumbent),
    ] {
        let rows = table(indicator, Sex::Female, posture);
        assert!(rows.windows(2).all(|w| w[1].x - w[0].x == 1.0), "{indicator}");
    }
    let by_length = table(Indicator::Wflh, Sex::Male, Posture::Recumbent);
    assert_eq!(by_length.len(), 131);
    let by_height = table(Indicator::Wflh, Sex::Male, Posture::Standing);
    assert_eq!(by_height.len(), 111);
}

/// -2 SD and +2 SD curves as printed, to one decimal, in the WHO charts.
#[test]
fn published_two_sd_curves_are_reproduced() {
    let cases = [
        (Indicator::Wfa, Posture::Recumbent, Sex::Male, 12.0, 7.7, 12.0),
        (Indicator::Wfa, Posture::Recumbent, Sex::Female, 12.0, 7.0, 11.5),
        (Indicator::Wfa, Posture::Recumbent, Sex::Male, 24.0, 9.7, 15.3),
        (Indicator::Wfa, Posture::Recumbent, Sex::Female, 60.0, 13.7, 24.9),
        (Indicator::Lhfa, Posture::Recumbent, Sex::Male, 0.0, 46.1, 53.7),
        (Indicator::Lhfa, Posture::Standing, Sex::Male, 60.0, 100.7, 119.2),
        (Indicator::Lhfa, Posture::Standing, Sex::Female, 60.0, 99.9, 118.9),
        (Indicator::Hcfa, Posture::Recumbent, Sex::Female, 0.0, 31.5, 36.2),
    ];
    let one_decimal = |v: f64| (v * 10.0).round() / 10.0;
    for (indicator, posture, sex, x, low, high) in cases {
        let lms = interpolate(table(indicator, sex, posture), x).unwrap();
        assert_eq!(one_decimal(lms_value(-2.0, lms)), low, "{indicator} {sex} {x}");
        assert_eq!(one_decimal(lms_value(2.0, lms)), high, "{indicator} {sex} {x}");
    }
}

#[test]
fn scores_between_tabulated_rows() {
    let cases = [
        (42.0, 6.5, Sex::Male, Indicator::Hcfa, Posture::Recumbent, -1.349255),
        (10.0, 18.5, Sex::Male, Indicator::Wfa, Posture::Recumbent, -0.887851),
        (88.0, 30.5, Sex::Female, Indicator::Lhfa, Posture::Standing, -0.861351),
        (15.0, 102.25, Sex::Male, Indicator::Wflh, Posture::Standing, -0.787246),
        (18.0, 115.0, Sex::Male, Indicator::Wflh, Posture::Standing, -1.395052),
    ];
    for (value, axis, sex, indicator, posture, expected) in cases {
        let a = calculate_z_score_with_posture(value, axis, sex, indicator, posture).unwrap();
        assert!((a.z_score - expected).abs() < 1e-4, "{indicator} {axis}: {}", a.z_score);
    }
}

#[test]
fn height_for_age_switches_to_standing_at_two_years() {
    let standing = calculate_z_score(85.7153, 24.0, Sex::Female, Indicator::Lhfa).unwrap();
    assert!(standing.z_score.abs() < 1e-12);
    assert_eq!(standing.posture, Some(Posture::Standing));

    let recumbent = calculate_z_score_with_posture(
        86.4153,
        24.0,
        Sex::Female,
        Indicator::Lhfa,
        Posture::Recumbent,
    )
    .unwrap();
    assert!(recumbent.z_score.abs() < 1e-12);
    assert_eq!(recumbent.posture, Some(Posture::Recumbent));

    let below = calculate_z_score(74.0150, 12.0, Sex::Female, Indicator::Lhfa).unwrap();
    assert_eq!(below.posture, Some(Posture::Recumbent));
    let standing_infant =
        calculate_z_score_with_posture(74.0, 12.0, Sex::Female, Indicator::Lhfa, Posture::Standing);
    assert!(standing_infant.is_err());
}

#[test]
fn weight_for_height_covers_65_to_120_cm() {
    let score = |height: f64| {
        calculate_z_score_with_posture(
            15.0,
            height,
            Sex::Male,
            Indicator::Wflh,
            Posture::Standing,
        )
    };
    assert!(score(65.0).is_ok());
    assert!(score(120.0).is_ok());
    assert!(score(64.5).is_err());
    assert!(matches!(
        score(120.5),
        Err(GrowthError::IndicatorDomain { axis: "height", min, max, .. })
            if min == 65.0 && max == 120.0
    ));

    assert!(calculate_z_score(15.0, 110.0, Sex::Male, Indicator::Wflh).is_ok());
    assert!(calculate_z_score(15.0, 110.5, Sex::Male, Indicator::Wflh).is_err());

    let median = score(115.0).unwrap();
    assert!((median.lms.m - 20.3846).abs() < 1e-12);
    assert_eq!(median.posture, Some(Posture::Standing));
}

#[test]
fn indicators_without_posture_report_none() {
    let a = calculate_z_score(9.6479, 12.0, Sex::Male, Indicator::Wfa).unwrap();
    assert_eq!(a.posture, None);
    assert!(a.z_score.abs() < 1e-12);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(matches!(
        calculate_z_score(-3.0, 6.0, Sex::Male, Indicator::Wfa),
        Err(GrowthError::Core(_))
    ));
    assert!(matches!(
        calculate_z_score(f64::NAN, 6.0, Sex::Male, Indicator::Wfa),
        Err(GrowthError::Core(_))
    ));
    assert!(matches!(
        calculate_z_score(0.0, 6.0, Sex::Male, Indicator::Wfa),
        Err(GrowthError::MissingValue { .. })
    ));
}

#[test]
fn severity_bands() {
    assert_eq!(Severity::from_z(0.0), Severity::Normal);
    assert_eq!(Severity::from_z(-2.0), Severity::Normal);
    assert_eq!(Severity::from_z(2.0), Severity::Normal);
    assert_eq!(Severity::from_z(-2.01), Severity::ModerateNegative);
    assert_eq!(Severity::from_z(3.0), Severity::ModeratePositive);
    assert_eq!(Severity::from_z(-3.01), Severity::SevereNegative);
    assert_eq!(Severity::from_z(3.5), Severity::SeverePositive);
}

#[test]
fn diagnoses_are_indicator_specific() {
    assert_eq!(diagnosis(Indicator::Wflh, Severity::ModeratePositive), "Overweight");
    assert_eq!(diagnosis(Indicator::Bfa, Severity::SeverePositive), "Obese");
    assert_eq!(diagnosis(Indicator::Wflh, Severity::ModerateNegative), "Wasted");
    assert_eq!(diagnosis(Indicator::Hcfa, Severity::SevereNegative), "Severe microcephaly");
}

#[test]
fn indicator_names() {
    assert_eq!("BFA".parse::<Indicator>().unwrap(), Indicator::Bfa);
    assert!("zzz".parse::<Indicator>().is_err());
    assert_eq!(serde_json::to_string(&Indicator::Wflh).unwrap(), "\"wflh\"");
    assert_eq!(
        serde_json::to_string(&Severity::SevereNegative).unwrap(),
        "\"severe_negative\""
    );
}
