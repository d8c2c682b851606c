//! Calendar date and time-of-day value.

use crate::error::ConversionError;
use crate::month_table::{MAX_YEAR, days_in_month};

/// A calendar date with minute-resolution time of day.
///
/// Month lengths follow the divisible-by-4 leap rule (see
/// [`is_leap_year`](crate::is_leap_year)). Values are produced by
/// [`julian_to_date`](crate::julian_to_date) or validated by [`DateParts::new`]
/// and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateParts {
    // Field order gives chronological ordering for the derived `Ord`.
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl DateParts {
    /// Creates a new `DateParts` after validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::YearOutOfRange`] if `year` is not in 1..=9999,
    /// [`ConversionError::InvalidMonth`] if `month` is not in 1..=12,
    /// [`ConversionError::InvalidDay`] if `day` does not exist in that month,
    /// and [`ConversionError::InvalidTime`] if `hour > 23` or `minute > 59`.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self, ConversionError> {
        if !(1..=MAX_YEAR).contains(&year) {
            return Err(ConversionError::YearOutOfRange { year });
        }
        let max_day = days_in_month(month, year).ok_or(ConversionError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(ConversionError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        if hour > 23 || minute > 59 {
            return Err(ConversionError::InvalidTime { hour, minute });
        }
        Ok(Self::from_parts_unchecked(year, month, day, hour, minute))
    }

    /// Builds a value whose fields the caller has already range-checked.
    pub(crate) fn from_parts_unchecked(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = DateParts::new(2014, 3, 5, 13, 45).unwrap();
        assert_eq!(date.year(), 2014);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 5);
        assert_eq!(date.hour(), 13);
        assert_eq!(date.minute(), 45);
    }

    #[test]
    fn new_feb_29_leap_year() {
        assert!(DateParts::new(2016, 2, 29, 0, 0).is_ok());
    }

    #[test]
    fn new_feb_29_non_leap_year() {
        assert_eq!(
            DateParts::new(2014, 2, 29, 0, 0).unwrap_err(),
            ConversionError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            DateParts::new(2014, 13, 1, 0, 0).unwrap_err(),
            ConversionError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            DateParts::new(2014, 0, 1, 0, 0).unwrap_err(),
            ConversionError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_day_zero() {
        assert!(matches!(
            DateParts::new(2014, 4, 0, 0, 0),
            Err(ConversionError::InvalidDay { day: 0, month: 4, max_day: 30 })
        ));
    }

    #[test]
    fn new_invalid_time() {
        assert_eq!(
            DateParts::new(2014, 1, 1, 24, 0).unwrap_err(),
            ConversionError::InvalidTime { hour: 24, minute: 0 }
        );
        assert_eq!(
            DateParts::new(2014, 1, 1, 0, 60).unwrap_err(),
            ConversionError::InvalidTime { hour: 0, minute: 60 }
        );
    }

    #[test]
    fn new_invalid_year() {
        assert_eq!(
            DateParts::new(0, 1, 1, 0, 0).unwrap_err(),
            ConversionError::YearOutOfRange { year: 0 }
        );
        assert_eq!(
            DateParts::new(10000, 1, 1, 0, 0).unwrap_err(),
            ConversionError::YearOutOfRange { year: 10000 }
        );
        assert!(DateParts::new(9999, 12, 31, 23, 59).is_ok());
    }

    #[test]
    fn ord_is_chronological() {
        let a = DateParts::new(2014, 12, 31, 23, 59).unwrap();
        let b = DateParts::new(2015, 1, 1, 0, 0).unwrap();
        let c = DateParts::new(2015, 1, 1, 0, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<DateParts>();
    }
}
