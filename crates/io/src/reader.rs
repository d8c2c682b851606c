//! W2 text record reader.
//!
//! A W2 input file has a fixed number of header lines followed by one record
//! per line: a fractional Julian day in column 0 and one or more values. Fields
//! are separated by commas, whitespace, or both.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::validate;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading W2 records.
///
/// The [`Default`] implementation matches the layout of W2 `.npt` inflow
/// files: three header lines and the value in the column after the Julian day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Number of lines to skip before the first record.
    header_lines: usize,
    /// 0-based column holding the value.
    value_column: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            header_lines: 3,
            value_column: 1,
        }
    }
}

impl ReaderConfig {
    /// Set the number of header lines.
    pub fn with_header_lines(mut self, n: usize) -> Self {
        self.header_lines = n;
        self
    }

    /// Set the 0-based value column.
    pub fn with_value_column(mut self, column: usize) -> Self {
        self.value_column = column;
        self
    }

    /// Number of header lines.
    pub fn header_lines(&self) -> usize {
        self.header_lines
    }

    /// 0-based value column.
    pub fn value_column(&self) -> usize {
        self.value_column
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `value_column` is 0.
    pub fn validate(&self) -> Result<(), IoError> {
        validate::validate_value_column(self.value_column).finish()
    }
}

// ---------------------------------------------------------------------------
// W2Records
// ---------------------------------------------------------------------------

/// Julian days and values read from a W2 file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct W2Records {
    jdays: Vec<f64>,
    values: Vec<f64>,
}

impl W2Records {
    /// Julian day of each record.
    pub fn jdays(&self) -> &[f64] {
        &self.jdays
    }

    /// Value of each record.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.jdays.len()
    }

    /// Returns `true` if no records were read.
    pub fn is_empty(&self) -> bool {
        self.jdays.is_empty()
    }

    /// Checks every record before conversion and reports all problems at once.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every Julian day that is not
    /// finite or below 1 and every non-finite value.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = validate::validate_julian_days(&self.jdays);
        c.extend(validate::validate_values_finite(&self.values));
        c.finish()
    }

    /// Consumes self and returns the Julian day and value vectors.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.jdays, self.values)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses W2 records from text.
///
/// Skips `header_lines` lines, then splits each line on commas and
/// whitespace. Blank lines are skipped. Extra columns beyond the value column
/// are ignored.
///
/// # Errors
///
/// - [`IoError::Validation`] if the configuration is invalid
/// - [`IoError::MissingColumn`] if a line is too short for the value column
/// - [`IoError::Parse`] if the Julian day or the value is not a number
///
/// Line numbers in errors are 1-based and count header lines.
pub fn parse_records(text: &str, config: &ReaderConfig) -> Result<W2Records, IoError> {
    config.validate()?;

    let mut records = W2Records::default();
    let mut blank = 0usize;

    for (idx, raw) in text.lines().enumerate().skip(config.header_lines) {
        let line = idx + 1;
        let cleaned = raw.trim().replace(',', " ");
        let fields: Vec<&str> = cleaned.split_whitespace().collect();
        if fields.is_empty() {
            blank += 1;
            continue;
        }
        if fields.len() <= config.value_column {
            return Err(IoError::MissingColumn {
                line,
                column: config.value_column,
                found: fields.len(),
            });
        }
        records.jdays.push(parse_field(fields[0], line, 0)?);
        records
            .values
            .push(parse_field(fields[config.value_column], line, config.value_column)?);
    }

    debug!(records = records.len(), blank, "parsed w2 records");
    Ok(records)
}

fn parse_field(field: &str, line: usize, column: usize) -> Result<f64, IoError> {
    field.parse::<f64>().map_err(|_| IoError::Parse {
        line,
        column,
        field: field.to_string(),
    })
}

fn read_text(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| IoError::io(path, e))
}

/// Reads W2 records from a file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Io`] if it cannot be read, or any error from [`parse_records`].
pub fn read_records(path: &Path, config: &ReaderConfig) -> Result<W2Records, IoError> {
    config.validate()?;
    let text = read_text(path)?;
    let records = parse_records(&text, config)?;
    info!(path = %path.display(), records = records.len(), "read w2 records");
    Ok(records)
}

/// Reads only the Julian day column of a W2 file.
///
/// Lines need just one field, so files without a value column are accepted.
///
/// # Errors
///
/// Same as [`read_records`], except that short lines cannot occur.
pub fn read_julian_days(path: &Path, header_lines: usize) -> Result<Vec<f64>, IoError> {
    let text = read_text(path)?;
    let mut jdays = Vec::new();
    for (idx, raw) in text.lines().enumerate().skip(header_lines) {
        let cleaned = raw.trim().replace(',', " ");
        if let Some(first) = cleaned.split_whitespace().next() {
            jdays.push(parse_field(first, idx + 1, 0)?);
        }
    }
    info!(path = %path.display(), records = jdays.len(), "read julian days");
    Ok(jdays)
}
