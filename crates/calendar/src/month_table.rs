//! Leap rule and month-boundary table.
//!
//! Leap years follow the divisible-by-4 rule only. Centennial exceptions
//! are not applied, so 1900 and 2100 count as leap years here.

use crate::error::ConversionError;

/// Number of days in four consecutive years under the divisible-by-4 rule.
pub(crate) const CYCLE_DAYS: i64 = 4 * 365 + 1;

/// Largest year accepted, keeping the year field of formatted dates four digits wide.
pub const MAX_YEAR: i32 = 9999;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One row of the month-boundary table.
///
/// `last_day` and `prior_days` are the non-leap cumulative counts; the leap
/// offset is added to `last_day` from February onward and to `prior_days`
/// from March onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthBoundary {
    pub(crate) month: u8,
    last_day: u16,
    prior_days: u16,
}

impl MonthBoundary {
    const fn new(month: u8, last_day: u16, prior_days: u16) -> Self {
        Self {
            month,
            last_day,
            prior_days,
        }
    }

    /// Last day-of-year belonging to this month.
    pub(crate) fn last_day(self, leap_offset: u16) -> u16 {
        if self.month >= 2 {
            self.last_day + leap_offset
        } else {
            self.last_day
        }
    }

    /// Days in all months before this one.
    pub(crate) fn prior_days(self, leap_offset: u16) -> u16 {
        if self.month >= 3 {
            self.prior_days + leap_offset
        } else {
            self.prior_days
        }
    }
}

/// Month boundaries in calendar order.
#[rustfmt::skip]
pub(crate) const MONTH_BOUNDARIES: [MonthBoundary; 12] = [
    MonthBoundary::new(1, 31, 0),
    MonthBoundary::new(2, 59, 31),
    MonthBoundary::new(3, 90, 59),
    MonthBoundary::new(4, 120, 90),
    MonthBoundary::new(5, 151, 120),
    MonthBoundary::new(6, 181, 151),
    MonthBoundary::new(7, 212, 181),
    MonthBoundary::new(8, 243, 212),
    MonthBoundary::new(9, 273, 243),
    MonthBoundary::new(10, 304, 273),
    MonthBoundary::new(11, 334, 304),
    MonthBoundary::new(12, 365, 334),
];

/// Returns `true` if `year` is divisible by 4.
///
/// # Examples
///
/// ```
/// use w2dss_calendar::is_leap_year;
///
/// assert!(is_leap_year(2016));
/// assert!(!is_leap_year(2017));
/// assert!(is_leap_year(1900)); // no centennial exception
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

/// Returns 366 for leap years and 365 otherwise.
pub fn days_in_year(year: i32) -> u16 {
    365 + leap_offset(year)
}

pub(crate) fn leap_offset(year: i32) -> u16 {
    u16::from(is_leap_year(year))
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub(crate) fn days_in_month(month: u8, year: i32) -> Option<u8> {
    let boundary = MONTH_BOUNDARIES.get(usize::from(month).checked_sub(1)?)?;
    let off = leap_offset(year);
    Some((boundary.last_day(off) - boundary.prior_days(off)) as u8)
}

/// Maps a day-of-year to `(month, day_of_month)` for `year`.
///
/// # Errors
///
/// Returns [`ConversionError::DayOutOfRange`] if `day` is not in
/// `1..=days_in_year(year)`.
pub fn month_day(day: i64, year: i32) -> Result<(u8, u8), ConversionError> {
    let off = leap_offset(year);
    let out_of_range = || ConversionError::DayOutOfRange {
        day,
        year,
        max_day: days_in_year(year),
    };
    if day < 1 {
        return Err(out_of_range());
    }
    let idx = MONTH_BOUNDARIES.partition_point(|b| i64::from(b.last_day(off)) < day);
    let boundary = MONTH_BOUNDARIES.get(idx).ok_or_else(out_of_range)?;
    let day_of_month = day - i64::from(boundary.prior_days(off));
    Ok((boundary.month, day_of_month as u8))
}
