//! Julian day-of-year to calendar date conversion.

use rayon::prelude::*;
use tracing::debug;

use crate::date::DateParts;
use crate::error::ConversionError;
use crate::month_table::{CYCLE_DAYS, MAX_YEAR, days_in_year, month_day};

/// Converts a fractional Julian day-of-year into a calendar date and time.
///
/// The integer part of `jday` is the 1-based day counted from January 1 of
/// `reference_year`; values past the end of that year roll over into the
/// following years. The fractional part is the time of day, truncated to
/// the minute.
///
/// If rounding in the fractional part produces minute 60, it carries into
/// the hour, and hour 24 carries into the next day before rollover is
/// resolved.
///
/// # Errors
///
/// - [`ConversionError::NotFinite`] for NaN or infinite `jday`.
/// - [`ConversionError::NonPositiveDay`] for `jday < 1`.
/// - [`ConversionError::InvalidReferenceYear`] for `reference_year` outside 1..=9999.
/// - [`ConversionError::YearOverflow`] if rollover passes year 9999.
/// - [`ConversionError::DayOutOfRange`] if the resolved day matches no month.
///
/// # Examples
///
/// ```
/// use w2dss_calendar::julian_to_date;
///
/// // Day 367 of a 2017-based record is January 2, 2018.
/// let date = julian_to_date(367.0, 2017).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2018, 1, 2));
///
/// // Half a day past day 1 is noon.
/// let noon = julian_to_date(1.5, 2014).unwrap();
/// assert_eq!((noon.hour(), noon.minute()), (12, 0));
/// ```
pub fn julian_to_date(jday: f64, reference_year: i32) -> Result<DateParts, ConversionError> {
    if !jday.is_finite() {
        return Err(ConversionError::NotFinite { jday });
    }
    if jday < 1.0 {
        return Err(ConversionError::NonPositiveDay { jday });
    }
    if !(1..=MAX_YEAR).contains(&reference_year) {
        return Err(ConversionError::InvalidReferenceYear {
            year: reference_year,
        });
    }

    let whole = jday.floor();
    let (hour, minute) = time_of_day(jday - whole);
    // Saturates for huge inputs; rollover then reports YearOverflow.
    let (day, hour, minute) = carry_clock(whole as i64, hour, minute);

    let (day, year) = resolve_rollover(day, reference_year)
        .filter(|&(_, year)| year <= MAX_YEAR)
        .ok_or(ConversionError::YearOverflow {
            jday,
            reference_year,
        })?;
    let (month, day_of_month) = month_day(day, year)?;

    Ok(DateParts::from_parts_unchecked(
        year,
        month,
        day_of_month,
        hour as u8,
        minute as u8,
    ))
}

/// Converts every Julian day of a record, preserving input order.
///
/// Records are converted in parallel. On failure the lowest failing index
/// is reported.
///
/// # Errors
///
/// Returns [`ConversionError::AtIndex`] wrapping the failure of the first
/// record that cannot be converted.
pub fn julian_to_dates(jdays: &[f64], reference_year: i32) -> Result<Vec<DateParts>, ConversionError> {
    let converted: Vec<Result<DateParts, ConversionError>> = jdays
        .par_iter()
        .map(|&jday| julian_to_date(jday, reference_year))
        .collect();
    let dates = converted
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            result.map_err(|e| ConversionError::AtIndex {
                index,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        debug!(
            n = dates.len(),
            reference_year,
            first_year = first.year(),
            last_year = last.year(),
            "converted julian days"
        );
    }
    Ok(dates)
}

/// Splits a day fraction in `[0, 1)` into whole hours and minutes.
fn time_of_day(fraction: f64) -> (u32, u32) {
    let decimal_hour = fraction * 24.0;
    let hour = decimal_hour.floor();
    let minute = ((decimal_hour - hour) * 60.0).floor();
    (hour as u32, minute as u32)
}

/// Carries minute 60 into the hour and hour 24 into the day.
fn carry_clock(mut day: i64, mut hour: u32, mut minute: u32) -> (i64, u32, u32) {
    if minute >= 60 {
        minute -= 60;
        hour += 1;
    }
    if hour >= 24 {
        hour -= 24;
        day = day.saturating_add(1);
    }
    (day, hour, minute)
}

/// Resolves a day count from January 1 of `year` into `(day_of_year, year)`.
///
/// Returns `None` if the year overflows.
fn resolve_rollover(mut day: i64, mut year: i32) -> Option<(i64, i32)> {
    // Any four consecutive years hold exactly one leap year, so whole
    // cycles can be skipped while at least a full year remains after them.
    if day > i64::from(days_in_year(year)) {
        let cycles = (day - 366) / CYCLE_DAYS;
        if cycles > 0 {
            day -= cycles * CYCLE_DAYS;
            year = year.checked_add(i32::try_from(cycles.checked_mul(4)?).ok()?)?;
        }
    }
    while day > i64::from(days_in_year(year)) {
        day -= i64::from(days_in_year(year));
        year = year.checked_add(1)?;
    }
    Some((day, year))
}
