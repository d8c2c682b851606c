//! JSON sinks for finished series and paired data.

use std::path::Path;

use serde::Serialize;
use tracing::info;
use w2dss_series::{DssPath, PairedDataContainer, SeriesContainer};

use crate::error::IoError;
use crate::writer::write_text;

/// JSON document for a time series.
#[derive(Debug, Serialize)]
pub struct SeriesDocument<'a> {
    pub full_name: String,
    pub path: &'a DssPath,
    pub units: &'a str,
    pub data_type: String,
    pub data_type_code: i32,
    pub interval: i32,
    pub start_time: i64,
    pub end_time: i64,
    pub number_values: usize,
    pub times: &'a [i64],
    pub values: &'a [f64],
}

impl<'a> From<&'a SeriesContainer> for SeriesDocument<'a> {
    fn from(s: &'a SeriesContainer) -> Self {
        Self {
            full_name: s.full_name(),
            path: s.path(),
            units: s.units(),
            data_type: s.data_type().label().to_string(),
            data_type_code: s.data_type().code(),
            interval: s.interval().code(),
            start_time: s.start_time(),
            end_time: s.end_time(),
            number_values: s.number_values(),
            times: s.times(),
            values: s.values(),
        }
    }
}

/// JSON document for paired data.
#[derive(Debug, Serialize)]
pub struct PairedDocument<'a> {
    pub full_name: String,
    pub path: &'a DssPath,
    pub x_units: &'a str,
    pub y_units: &'a str,
    pub labels: &'a [String],
    pub number_ordinates: usize,
    pub number_curves: usize,
    pub x: &'a [f64],
    pub curves: &'a [Vec<f64>],
}

impl<'a> From<&'a PairedDataContainer> for PairedDocument<'a> {
    fn from(p: &'a PairedDataContainer) -> Self {
        Self {
            full_name: p.full_name(),
            path: p.path(),
            x_units: p.x_units(),
            y_units: p.y_units(),
            labels: p.labels(),
            number_ordinates: p.number_ordinates(),
            number_curves: p.number_curves(),
            x: p.x(),
            curves: p.curves(),
        }
    }
}

/// Serializes a series to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialization fails. Non-finite values are
/// written as `null`.
pub fn series_to_json(series: &SeriesContainer) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(&SeriesDocument::from(series))?)
}

/// Serializes paired data to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialization fails.
pub fn paired_to_json(paired: &PairedDataContainer) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(&PairedDocument::from(paired))?)
}

/// Writes a series JSON document.
///
/// # Errors
///
/// Returns [`IoError::Json`] or [`IoError::Io`].
pub fn write_series_json(path: &Path, series: &SeriesContainer) -> Result<(), IoError> {
    write_text(path, &series_to_json(series)?)?;
    info!(path = %path.display(), full_name = %series.full_name(), "wrote series json");
    Ok(())
}

/// Writes a paired-data JSON document.
///
/// # Errors
///
/// Returns [`IoError::Json`] or [`IoError::Io`].
pub fn write_paired_json(path: &Path, paired: &PairedDataContainer) -> Result<(), IoError> {
    write_text(path, &paired_to_json(paired)?)?;
    info!(path = %path.display(), full_name = %paired.full_name(), "wrote paired json");
    Ok(())
}
