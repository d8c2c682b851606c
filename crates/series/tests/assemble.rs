//! Integration tests assembling converted W2 records into series containers.

use w2dss_calendar::julian_to_dates;
use w2dss_series::{AssemblyError, DataType, DssPath, Interval, SeriesMetadata, assemble};

fn degray_path() -> DssPath {
    DssPath::new("DeGray Reservoir", "Branch 1", "Flow", "", "IR-MONTH", "Example")
}

fn hec_times(jdays: &[f64], reference_year: i32) -> Vec<i64> {
    julian_to_dates(jdays, reference_year)
        .unwrap()
        .into_iter()
        .map(|d| d.hec_minutes().unwrap())
        .collect()
}

#[test]
fn converted_times_pass_through_unchanged() {
    let jdays = [1.0, 1.5, 2.25, 366.0, 367.0];
    let times = hec_times(&jdays, 2017);
    let values = vec![10.0, 11.0, 12.0, 13.0, 14.0];
    let meta = SeriesMetadata::new("cms", DataType::PerAvg);

    let series = assemble(times.clone(), values.clone(), meta, degray_path()).unwrap();

    assert_eq!(series.times(), times.as_slice());
    assert_eq!(series.values(), values.as_slice());
    assert_eq!(series.number_values(), jdays.len());
    assert_eq!(series.start_time(), times[0]);
    assert_eq!(series.end_time(), times[4]);
    assert_eq!(
        series.full_name(),
        "/DeGray Reservoir/Branch 1/Flow//IR-MONTH/Example/"
    );
}

#[test]
fn unsorted_input_is_not_reordered() {
    let times = hec_times(&[5.0, 3.0, 4.0], 2014);
    let series = assemble(
        times.clone(),
        vec![0.0; 3],
        SeriesMetadata::new("m", DataType::InstVal),
        degray_path(),
    )
    .unwrap();
    assert_eq!(series.times(), times.as_slice());
    assert!(series.start_time() > series.end_time());
}

#[test]
fn metadata_survives_assembly() {
    let meta = SeriesMetadata::new("C", DataType::from_label("INST-CUM"))
        .with_interval(Interval::from_code(60).unwrap());
    let series = assemble(vec![0], vec![1.0], meta, degray_path()).unwrap();
    assert_eq!(series.units(), "C");
    assert_eq!(series.data_type().label(), "INST-CUM");
    assert_eq!(series.data_type().code(), 0);
    assert_eq!(series.interval().code(), 60);
}

#[test]
fn empty_parts_render_as_seven_slashes() {
    let series = assemble(
        vec![0],
        vec![0.0],
        SeriesMetadata::new("", DataType::PerAvg),
        DssPath::default(),
    )
    .unwrap();
    assert_eq!(series.full_name(), "///////");
}

#[test]
fn empty_series_is_rejected() {
    let err = assemble(
        Vec::new(),
        Vec::new(),
        SeriesMetadata::new("cms", DataType::PerAvg),
        degray_path(),
    )
    .unwrap_err();
    assert_eq!(err, AssemblyError::Empty);
}
