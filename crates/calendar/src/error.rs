//! Error types for the w2dss-calendar crate.

/// Error type for all fallible operations in the w2dss-calendar crate.
///
/// Covers rejected Julian-day inputs, rollover that cannot be resolved,
/// invalid calendar fields passed to [`DateParts::new`](crate::DateParts::new),
/// and dates that cannot be encoded as HEC minutes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Returned when a Julian day is NaN or infinite.
    #[error("julian day is not finite: {jday}")]
    NotFinite {
        /// The rejected Julian day.
        jday: f64,
    },

    /// Returned when a Julian day is below 1.0.
    #[error("julian day must be >= 1, got {jday}")]
    NonPositiveDay {
        /// The rejected Julian day.
        jday: f64,
    },

    /// Returned when the reference year is outside 1..=9999.
    #[error("invalid reference year: {year} (must be 1..=9999)")]
    InvalidReferenceYear {
        /// The rejected reference year.
        year: i32,
    },

    /// Returned when rollover would advance past year 9999.
    #[error("julian day {jday} overflows the year range from reference year {reference_year}")]
    YearOverflow {
        /// The Julian day being converted.
        jday: f64,
        /// The reference year the conversion started from.
        reference_year: i32,
    },

    /// Returned when a resolved day-of-year matches no month boundary.
    #[error("day of year {day} out of range for {year} (max {max_day})")]
    DayOutOfRange {
        /// The resolved day-of-year.
        day: i64,
        /// The resolved year.
        year: i32,
        /// The last valid day-of-year for `year`.
        max_day: u16,
    },

    /// Returned when a date field year is outside 1..=9999.
    #[error("year {year} out of range (must be 1..=9999)")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number.
        month: u8,
    },

    /// Returned when a day exceeds the length of its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The last valid day of that month.
        max_day: u8,
    },

    /// Returned when an hour or minute is outside the clock range.
    #[error("invalid time of day: {hour:02}:{minute:02}")]
    InvalidTime {
        /// The hour supplied.
        hour: u8,
        /// The minute supplied.
        minute: u8,
    },

    /// Returned when a date exists under the divisible-by-4 leap rule but
    /// not in the Gregorian calendar used for HEC minute encoding.
    #[error("date {date} cannot be represented in the Gregorian calendar")]
    Unrepresentable {
        /// The date in HEC date-time notation.
        date: String,
    },

    /// Wraps the first failure of a batch conversion with its position.
    #[error("record {index}: {source}")]
    AtIndex {
        /// 0-based index of the failing record.
        index: usize,
        /// The underlying conversion failure.
        source: Box<ConversionError>,
    },
}
