//! # w2dss-io
//!
//! Read CE-QUAL-W2 text records and write finished series and paired data
//! to CSV and JSON. Bridges W2 files into the `&[f64]` slice APIs of
//! `w2dss-calendar` and `w2dss-series`.
//!
//! ## Quick Start
//!
//! ```
//! use w2dss_io::{ReaderConfig, parse_records};
//!
//! let text = "header\nheader\nheader\n1.0, 12.5\n1.5 13.0\n";
//! let records = parse_records(text, &ReaderConfig::default()).unwrap();
//! assert_eq!(records.jdays(), &[1.0, 1.5]);
//! ```

mod error;
mod json;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use json::{
    PairedDocument, SeriesDocument, paired_to_json, series_to_json, write_paired_json,
    write_series_json,
};
pub use reader::{ReaderConfig, W2Records, parse_records, read_julian_days, read_records};
pub use writer::{paired_to_csv, series_to_csv, write_paired_csv, write_series_csv};
