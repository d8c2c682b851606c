//! Integration tests for Julian-day difference paired data.

use approx::assert_abs_diff_eq;
use w2dss_series::{DssPath, julian_day_differences};

#[test]
fn regular_record_has_constant_gaps() {
    let jdays: Vec<f64> = (0..40).map(|i| 1.0 + f64::from(i) * 0.25).collect();
    let path = DssPath::parse("/DeGray Reservoir/Branch 1/JDAY//IR-MONTH/Example/").unwrap();

    let paired = julian_day_differences(&jdays, "Julian Day", "Days", &path).unwrap();

    assert_eq!(paired.number_ordinates(), 39);
    assert_eq!(paired.number_curves(), 1);
    for gap in &paired.curves()[0] {
        assert_abs_diff_eq!(*gap, 0.25, epsilon = 1e-12);
    }
    assert_eq!(paired.full_name(), path.full_name());
}

#[test]
fn gaps_and_backsteps_are_visible() {
    let jdays = [10.0, 11.0, 15.0, 12.0];
    let paired =
        julian_day_differences(&jdays, "Julian Day", "Days", &DssPath::default()).unwrap();
    assert_eq!(paired.curves()[0], vec![1.0, 4.0, -3.0]);
    assert_eq!(paired.x(), &[10.0, 11.0, 15.0]);
}

#[test]
fn empty_record_is_rejected() {
    assert!(julian_day_differences(&[], "x", "y", &DssPath::default()).is_err());
}
