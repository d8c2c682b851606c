//! Labeled irregular time series container.

use tracing::debug;

use crate::error::AssemblyError;
use crate::metadata::{DataType, Interval, SeriesMetadata};
use crate::path::DssPath;

/// A converted time series ready for storage.
///
/// Timestamps and values are kept in input order; the container never sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesContainer {
    times: Vec<i64>,
    values: Vec<f64>,
    metadata: SeriesMetadata,
    path: DssPath,
}

/// Builds a [`SeriesContainer`] from parallel timestamp and value sequences.
///
/// # Errors
///
/// - [`AssemblyError::LengthMismatch`] if the sequences differ in length
/// - [`AssemblyError::Empty`] if both are empty
///
/// # Example
///
/// ```
/// use w2dss_series::{assemble, DataType, DssPath, SeriesMetadata};
///
/// let path = DssPath::new("DeGray Reservoir", "Branch 1", "Flow", "", "IR-MONTH", "Example");
/// let meta = SeriesMetadata::new("cms", DataType::PerAvg);
/// let series = assemble(vec![10, 20], vec![1.0, 2.0], meta, path).unwrap();
/// assert_eq!(series.number_values(), 2);
/// assert_eq!(series.full_name(), "/DeGray Reservoir/Branch 1/Flow//IR-MONTH/Example/");
/// ```
pub fn assemble(
    times: Vec<i64>,
    values: Vec<f64>,
    metadata: SeriesMetadata,
    path: DssPath,
) -> Result<SeriesContainer, AssemblyError> {
    if times.len() != values.len() {
        return Err(AssemblyError::LengthMismatch {
            times: times.len(),
            values: values.len(),
        });
    }
    if times.is_empty() {
        return Err(AssemblyError::Empty);
    }

    debug!(
        full_name = %path,
        n = times.len(),
        units = metadata.units(),
        data_type = %metadata.data_type(),
        "assembled series"
    );

    Ok(SeriesContainer {
        times,
        values,
        metadata,
        path,
    })
}

impl SeriesContainer {
    /// Timestamps in input order.
    pub fn times(&self) -> &[i64] {
        &self.times
    }

    /// Values in input order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    pub fn number_values(&self) -> usize {
        self.values.len()
    }

    /// First timestamp in input order.
    pub fn start_time(&self) -> i64 {
        self.times[0]
    }

    /// Last timestamp in input order.
    pub fn end_time(&self) -> i64 {
        self.times[self.times.len() - 1]
    }

    /// `"/A/B/C/D/E/F/"`.
    pub fn full_name(&self) -> String {
        self.path.full_name()
    }

    /// The identifying path.
    pub fn path(&self) -> &DssPath {
        &self.path
    }

    /// Part A.
    pub fn watershed(&self) -> &str {
        self.path.a()
    }

    /// Part B.
    pub fn location(&self) -> &str {
        self.path.b()
    }

    /// Part C.
    pub fn parameter(&self) -> &str {
        self.path.c()
    }

    /// Part F.
    pub fn version(&self) -> &str {
        self.path.f()
    }

    /// Units, data type and interval.
    pub fn metadata(&self) -> &SeriesMetadata {
        &self.metadata
    }

    /// Units label.
    pub fn units(&self) -> &str {
        self.metadata.units()
    }

    /// Data type.
    pub fn data_type(&self) -> &DataType {
        self.metadata.data_type()
    }

    /// Interval.
    pub fn interval(&self) -> Interval {
        self.metadata.interval()
    }

    /// Iterates over `(time, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Consumes self and returns the timestamp and value vectors.
    pub fn into_parts(self) -> (Vec<i64>, Vec<f64>) {
        (self.times, self.values)
    }
}
