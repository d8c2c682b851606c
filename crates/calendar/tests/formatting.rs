use w2dss_calendar::{ConversionError, MAX_YEAR, excel_serial, julian_to_date, julian_to_dates};

fn is_hec_date_time(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 14
        && b[..2].iter().all(u8::is_ascii_digit)
        && b[2].is_ascii_uppercase()
        && b[3..5].iter().all(u8::is_ascii_lowercase)
        && b[5..9].iter().all(u8::is_ascii_digit)
        && b[9] == b' '
        && b[10..].iter().all(u8::is_ascii_digit)
        && s.matches(' ').count() == 1
}

fn is_excel_date_time(s: &str) -> bool {
    let b = s.as_bytes();
    let digits = |r: std::ops::Range<usize>| b[r].iter().all(u8::is_ascii_digit);
    b.len() == 16
        && digits(0..2)
        && b[2] == b'/'
        && digits(3..5)
        && b[5] == b'/'
        && digits(6..10)
        && b[10] == b' '
        && digits(11..13)
        && b[13] == b':'
        && digits(14..16)
}

#[test]
fn fixed_width_patterns_hold_across_a_record() {
    let jdays: Vec<f64> = (0..4000).map(|i| 1.0 + f64::from(i) * 0.37).collect();
    let dates = julian_to_dates(&jdays, 2014).unwrap();
    for date in dates {
        let hec = date.hec_date_time_string();
        let excel = date.excel_date_time_string();
        assert!(is_hec_date_time(&hec), "bad HEC string {hec:?}");
        assert!(is_excel_date_time(&excel), "bad Excel string {excel:?}");
    }
}

#[test]
fn fixed_width_patterns_hold_at_year_bounds() {
    for reference_year in [1, 999, MAX_YEAR - 3] {
        let jdays: Vec<f64> = (0..1461).map(|i| 1.0 + f64::from(i) + 0.999).collect();
        for date in julian_to_dates(&jdays, reference_year).unwrap() {
            assert!(is_hec_date_time(&date.hec_date_time_string()), "{date:?}");
            assert!(is_excel_date_time(&date.excel_date_time_string()), "{date:?}");
        }
    }
    assert_eq!(
        julian_to_date(1.0, 1).unwrap().hec_date_time_string(),
        "01Jan0001 0000"
    );
}

#[test]
fn far_rollover_is_rejected_instead_of_widening_the_year() {
    assert!(matches!(
        julian_to_date(3_000_000.0, 2014),
        Err(ConversionError::YearOverflow { .. })
    ));
}

#[test]
fn known_strings() {
    let date = julian_to_date(64.5625, 2014).unwrap();
    assert_eq!(date.hec_date_string(), "05Mar2014");
    assert_eq!(date.hec_time_string(), "1330");
    assert_eq!(date.hec_date_time_string(), "05Mar2014 1330");
    assert_eq!(date.excel_date_time_string(), "03/05/2014 13:30");
}

#[test]
fn hec_minutes_follow_julian_day_spacing() {
    let dates = julian_to_dates(&[1.0, 1.5, 2.0, 366.0], 2014).unwrap();
    let minutes: Vec<i64> = dates.iter().map(|d| d.hec_minutes().unwrap()).collect();
    assert_eq!(minutes[1] - minutes[0], 720);
    assert_eq!(minutes[2] - minutes[0], 1440);
    assert_eq!(minutes[3] - minutes[0], 365 * 1440);
    assert_eq!(excel_serial(minutes[0]), 41640.0);
}
