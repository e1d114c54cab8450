use kinanthro_core::error::CoreError;
use kinanthro_core::models::{Site, SkinfoldSite};
use kinanthro_core::reconcile::{reconcile, ReconcileStatus, Reliability};

const TRICEPS: Site = Site::Skinfold(SkinfoldSite::Triceps);

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn two_readings_report_mean_and_tem() {
    let r = reconcile(&[10.0, 10.6], TRICEPS).unwrap();
    assert!(approx(r.final_value, 10.3, 1e-9));

    let tem = r.tem.as_ref().unwrap();
    assert!(approx(tem.tem, 0.3, 1e-9));
    assert!(approx(tem.tem_percent, 2.9126, 1e-3));
    assert_eq!(tem.reliability, Reliability::Excellent);
    assert!(tem.is_reliable);
    assert!(tem.message.starts_with("Excellent reliability"));
}

#[test]
fn two_readings_more_than_five_percent_apart_ask_for_a_third() {
    // 0.6 / 10.3 = 5.8 %
    let r = reconcile(&[10.0, 10.6], TRICEPS).unwrap();
    assert!(r.needs_third_measurement());
    assert!(approx(r.relative_difference.unwrap(), 0.058252, 1e-5));
}

#[test]
fn exactly_five_percent_does_not_ask_for_a_third() {
    let r = reconcile(&[9.75, 10.25], TRICEPS).unwrap();
    assert_eq!(r.status, ReconcileStatus::Reconciled);
    assert!(approx(r.final_value, 10.0, 1e-12));
}

#[test]
fn three_readings_report_median() {
    let r = reconcile(&[10.4, 10.0, 10.2], TRICEPS).unwrap();
    assert_eq!(r.status, ReconcileStatus::Reconciled);
    assert!(approx(r.final_value, 10.2, 1e-12));
    assert_eq!(r.discarded_outlier, None);
    assert_eq!(r.readings, vec![10.0, 10.2, 10.4]);

    let tem = r.tem.unwrap();
    assert!(approx(tem.tem, (0.08_f64 / 3.0).sqrt(), 1e-9));
}

#[test]
fn clear_outlier_is_excluded_from_tem() {
    let r = reconcile(&[10.0, 12.0, 10.2], TRICEPS).unwrap();
    assert_eq!(r.discarded_outlier, Some(12.0));
    assert!(approx(r.final_value, 10.2, 1e-12));

    let tem = r.tem.unwrap();
    assert!(approx(tem.tem, 0.1, 1e-9));
    assert!(approx(tem.tem_percent, 0.1 / 10.1 * 100.0, 1e-9));
}

#[test]
fn low_outlier_is_excluded_too() {
    let r = reconcile(&[8.0, 10.0, 10.2], TRICEPS).unwrap();
    assert_eq!(r.discarded_outlier, Some(8.0));
    assert!(approx(r.final_value, 10.0, 1e-12));
}

#[test]
fn result_does_not_depend_on_input_order() {
    let orders: [[f64; 3]; 6] = [
        [10.0, 10.2, 10.9],
        [10.0, 10.9, 10.2],
        [10.2, 10.0, 10.9],
        [10.2, 10.9, 10.0],
        [10.9, 10.0, 10.2],
        [10.9, 10.2, 10.0],
    ];
    let first = reconcile(&orders[0], TRICEPS).unwrap();
    for order in &orders[1..] {
        assert_eq!(reconcile(order, TRICEPS).unwrap(), first);
    }

    assert_eq!(
        reconcile(&[10.0, 10.6], TRICEPS).unwrap(),
        reconcile(&[10.6, 10.0], TRICEPS).unwrap()
    );
}

#[test]
fn non_positive_readings_count_as_not_measured() {
    let r = reconcile(&[10.0, 0.0], TRICEPS).unwrap();
    assert_eq!(r.status, ReconcileStatus::InsufficientData);
    assert_eq!(r.final_value, 0.0);
    assert!(r.tem.is_none());
    assert_eq!(r.value(), None);
    assert_eq!(r.readings, vec![10.0]);

    let r = reconcile(&[10.0, -1.0, 10.2], TRICEPS).unwrap();
    assert_eq!(r.readings, vec![10.0, 10.2]);
    assert!(approx(r.final_value, 10.1, 1e-12));
}

#[test]
fn empty_input_is_insufficient_not_an_error() {
    let r = reconcile(&[], TRICEPS).unwrap();
    assert!(r.is_insufficient());
}

#[test]
fn reliability_bands() {
    // mean 10.6, TEM 0.6 -> 5.66 %
    let acceptable = reconcile(&[10.0, 11.2], TRICEPS).unwrap().tem.unwrap();
    assert_eq!(acceptable.reliability, Reliability::Acceptable);
    assert!(acceptable.is_reliable);

    // mean 11, TEM 1.0 -> 9.09 %
    let poor = reconcile(&[10.0, 12.0], TRICEPS).unwrap().tem.unwrap();
    assert_eq!(poor.reliability, Reliability::Poor);
    assert!(!poor.is_reliable);
    assert!(poor.message.contains("repeat the measurement"));

    assert_eq!(Reliability::from_tem_percent(4.99), Reliability::Excellent);
    assert_eq!(Reliability::from_tem_percent(5.0), Reliability::Acceptable);
    assert_eq!(Reliability::from_tem_percent(7.5), Reliability::Acceptable);
    assert_eq!(Reliability::from_tem_percent(7.51), Reliability::Poor);
}

#[test]
fn non_finite_readings_are_rejected() {
    let err = reconcile(&[f64::NAN, 10.0], TRICEPS).unwrap_err();
    assert!(matches!(err, CoreError::NonFinite { ref field } if field == "Triceps skinfold"));

    assert!(reconcile(&[f64::INFINITY, 10.0], TRICEPS).is_err());
}

#[test]
fn more_than_three_readings_are_rejected() {
    let err = reconcile(&[10.0, 10.1, 10.2, 10.3], TRICEPS).unwrap_err();
    assert!(matches!(err, CoreError::TooManyReplicates { count: 4, .. }));
}

#[test]
fn unmeasured_slots_do_not_count_towards_the_replicate_limit() {
    let r = reconcile(&[10.0, 10.2, 0.0, 0.0], TRICEPS).unwrap();
    assert_eq!(r.status, ReconcileStatus::Reconciled);
    assert_eq!(r.readings, vec![10.0, 10.2]);
    assert!((r.final_value - 10.1).abs() < 1e-12);

    let err = reconcile(&[10.0, 10.1, 0.0, 10.2, 10.3], TRICEPS).unwrap_err();
    assert!(matches!(err, CoreError::TooManyReplicates { count: 4, .. }));
}
