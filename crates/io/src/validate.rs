//! Accumulated validation utilities.
//!
//! [`ValidationCollector`] gathers every violation into a single
//! [`IoError::Validation`] so a bad record file is reported in one pass
//! instead of one error at a time.

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Moves every message from `other` into this collector.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` if nothing was recorded, otherwise every message joined with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Column 0 holds the Julian day, so values must come from column 1 or later.
pub(crate) fn validate_value_column(value_column: usize) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    if value_column == 0 {
        c.push("value_column must be >= 1 (column 0 is the julian day)");
    }
    c
}

/// Records one message per Julian day that is not finite or below 1.
pub(crate) fn validate_julian_days(jdays: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &jday) in jdays.iter().enumerate() {
        if !jday.is_finite() || jday < 1.0 {
            c.push(format!("julian day at record {i} is {jday}"));
        }
    }
    c
}

/// Records one message per non-finite value.
pub(crate) fn validate_values_finite(values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            c.push(format!("value at record {i} is {v}"));
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_finishes_ok() {
        assert!(ValidationCollector::new().finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("a");
        c.push("b");
        assert_eq!(c.len(), 2);
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "a; b");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn extend_merges_collectors() {
        let mut a = validate_julian_days(&[0.0]);
        a.extend(validate_values_finite(&[f64::NAN]));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn value_column_zero_rejected() {
        assert_eq!(validate_value_column(0).len(), 1);
        assert_eq!(validate_value_column(1).len(), 0);
    }

    #[test]
    fn julian_days_reports_every_bad_record() {
        let c = validate_julian_days(&[1.0, 0.5, 2.0, f64::NAN, 400.0, -3.0]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn values_must_be_finite() {
        assert_eq!(validate_values_finite(&[1.0, f64::INFINITY, -2.0]).len(), 1);
        assert_eq!(validate_values_finite(&[-999.0, 0.0]).len(), 0);
    }
}
