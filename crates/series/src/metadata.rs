//! Series metadata: data type, interval, units.

use std::fmt;

use serde::Serialize;

use crate::error::AssemblyError;

/// How each value relates to its timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum DataType {
    /// Instantaneous value (`INST-VAL`).
    InstVal,
    /// Period average (`PER-AVG`).
    PerAvg,
    /// Period cumulative (`PER-CUM`).
    PerCum,
    /// Any other label; stored verbatim with code 0.
    Other(String),
}

impl DataType {
    /// Parses a label. Unknown labels become [`DataType::Other`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "INST-VAL" => Self::InstVal,
            "PER-AVG" => Self::PerAvg,
            "PER-CUM" => Self::PerCum,
            other => Self::Other(other.to_string()),
        }
    }

    /// The label string, e.g. `"PER-AVG"`.
    pub fn label(&self) -> &str {
        match self {
            Self::InstVal => "INST-VAL",
            Self::PerAvg => "PER-AVG",
            Self::PerCum => "PER-CUM",
            Self::Other(label) => label,
        }
    }

    /// Numeric code: 1, 2, 3 for the known types and 0 otherwise.
    pub fn code(&self) -> i32 {
        match self {
            Self::InstVal => 1,
            Self::PerAvg => 2,
            Self::PerCum => 3,
            Self::Other(_) => 0,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<DataType> for String {
    fn from(d: DataType) -> Self {
        d.label().to_string()
    }
}

/// Sampling interval of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i32")]
pub enum Interval {
    /// Irregular timestamps (code -1).
    #[default]
    Irregular,
    /// Regular spacing in minutes.
    Regular {
        /// Spacing between samples.
        minutes: u32,
    },
}

impl Interval {
    /// Parses an interval code: -1 is irregular, positive values are minutes.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::InvalidInterval`] for 0 or codes below -1.
    pub fn from_code(code: i32) -> Result<Self, AssemblyError> {
        match code {
            -1 => Ok(Self::Irregular),
            c if c > 0 => Ok(Self::Regular { minutes: c as u32 }),
            _ => Err(AssemblyError::InvalidInterval { code }),
        }
    }

    /// The numeric code, -1 for irregular.
    pub fn code(self) -> i32 {
        match self {
            Self::Irregular => -1,
            Self::Regular { minutes } => i32::try_from(minutes).unwrap_or(i32::MAX),
        }
    }

    /// Returns `true` for irregular series.
    pub fn is_irregular(self) -> bool {
        matches!(self, Self::Irregular)
    }
}

impl From<Interval> for i32 {
    fn from(i: Interval) -> Self {
        i.code()
    }
}

/// Units, data type and interval shared by every value of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesMetadata {
    units: String,
    data_type: DataType,
    interval: Interval,
}

impl SeriesMetadata {
    /// Creates metadata for an irregular series.
    pub fn new(units: impl Into<String>, data_type: DataType) -> Self {
        Self {
            units: units.into(),
            data_type,
            interval: Interval::Irregular,
        }
    }

    /// Sets the interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Units label, e.g. `"cms"`.
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Data type.
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// Interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }
}
