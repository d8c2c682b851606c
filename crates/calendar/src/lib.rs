//! # w2dss-calendar
//!
//! Converts fractional Julian day-of-year values into calendar dates and
//! renders them in HEC and Excel notation.
//!
//! Leap years follow the divisible-by-4 rule only. Centennial years are
//! treated as leap years, which keeps conversions consistent with existing
//! W2 records for the years in use (before 2100).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["jday + reference year"] -->|"julian_to_date()"| B["DateParts"]
//!     B -->|".hec_date_time_string()"| C["05Mar2014 1330"]
//!     B -->|".excel_date_time_string()"| D["03/05/2014 13:30"]
//!     B -->|".hec_minutes()"| E["i64 minutes"]
//!     E -->|"excel_serial()"| F["Excel serial"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use w2dss_calendar::{julian_to_date, julian_to_dates};
//!
//! let date = julian_to_date(367.0, 2017).unwrap();
//! assert_eq!(date.hec_date_time_string(), "02Jan2018 0000");
//!
//! let dates = julian_to_dates(&[1.5, 60.0], 2016).unwrap();
//! assert_eq!(dates[1].excel_date_time_string(), "02/29/2016 00:00");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month_table` | Leap rule and month-boundary table |
//! | `date` | Validated date/time value |
//! | `julian` | Julian day conversion with multi-year rollover |
//! | `format` | HEC and Excel string formatters |
//! | `hec_time` | HEC minute encoding and Excel serial numbers |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod hec_time;
mod julian;
mod month_table;

pub use date::DateParts;
pub use error::ConversionError;
pub use hec_time::excel_serial;
pub use julian::{julian_to_date, julian_to_dates};
pub use month_table::{MAX_YEAR, MONTH_NAMES, days_in_year, is_leap_year, month_day};
