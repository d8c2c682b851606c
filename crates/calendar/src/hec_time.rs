//! Integer minute encoding used by HEC time series containers.
//!
//! Times are counted in minutes from 31 Dec 1899 00:00 in the Gregorian
//! calendar, so 01 Jan 1900 00:00 is 1440.

use chrono::NaiveDate;

use crate::date::DateParts;
use crate::error::ConversionError;

const MINUTES_PER_DAY: i64 = 1440;

fn hec_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 31).expect("31 Dec 1899 is a valid date")
}

impl DateParts {
    /// Minutes since 31 Dec 1899 00:00.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Unrepresentable`] for dates the
    /// divisible-by-4 rule admits but the Gregorian calendar does not
    /// (29 Feb of 1900, 2100, ...), or that fall outside chrono's range.
    pub fn hec_minutes(self) -> Result<i64, ConversionError> {
        let date = NaiveDate::from_ymd_opt(self.year(), u32::from(self.month()), u32::from(self.day()))
            .ok_or_else(|| ConversionError::Unrepresentable {
                date: self.hec_date_time_string(),
            })?;
        let days = date.signed_duration_since(hec_epoch()).num_days();
        Ok(days * MINUTES_PER_DAY + i64::from(self.hour()) * 60 + i64::from(self.minute()))
    }
}

/// Converts HEC minutes to an Excel serial date number.
///
/// Valid for dates on or after 1 Mar 1900, where Excel's phantom
/// 29 Feb 1900 has already been counted.
pub fn excel_serial(hec_minutes: i64) -> f64 {
    hec_minutes as f64 / MINUTES_PER_DAY as f64 + 1.0
}
