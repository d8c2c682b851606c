//! Paired-data container and Julian-day differencing.

use tracing::debug;

use crate::error::AssemblyError;
use crate::path::DssPath;

/// One x-ordinate vector with one or more y curves of the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedDataContainer {
    x: Vec<f64>,
    curves: Vec<Vec<f64>>,
    x_units: String,
    y_units: String,
    labels: Vec<String>,
    path: DssPath,
}

impl PairedDataContainer {
    /// Creates a paired-data container after validating its shape.
    ///
    /// The path's C part is replaced by the first curve label.
    ///
    /// # Errors
    ///
    /// - [`AssemblyError::Empty`] if `x` is empty
    /// - [`AssemblyError::NoCurves`] if `curves` is empty
    /// - [`AssemblyError::CurveLengthMismatch`] if a curve differs in length from `x`
    /// - [`AssemblyError::LabelCountMismatch`] if labels and curves differ in count
    pub fn new(
        x: Vec<f64>,
        curves: Vec<Vec<f64>>,
        x_units: impl Into<String>,
        y_units: impl Into<String>,
        path: &DssPath,
        labels: Vec<String>,
    ) -> Result<Self, AssemblyError> {
        if x.is_empty() {
            return Err(AssemblyError::Empty);
        }
        if curves.is_empty() {
            return Err(AssemblyError::NoCurves);
        }
        if let Some((curve, y)) = curves.iter().enumerate().find(|(_, y)| y.len() != x.len()) {
            return Err(AssemblyError::CurveLengthMismatch {
                curve,
                expected: x.len(),
                got: y.len(),
            });
        }
        if labels.len() != curves.len() {
            return Err(AssemblyError::LabelCountMismatch {
                labels: labels.len(),
                curves: curves.len(),
            });
        }

        let path = path.with_c(labels[0].as_str());
        Ok(Self {
            x,
            curves,
            x_units: x_units.into(),
            y_units: y_units.into(),
            labels,
            path,
        })
    }

    /// X ordinates.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y curves, each the length of [`x`](Self::x).
    pub fn curves(&self) -> &[Vec<f64>] {
        &self.curves
    }

    /// Number of ordinates per curve.
    pub fn number_ordinates(&self) -> usize {
        self.x.len()
    }

    /// Number of curves.
    pub fn number_curves(&self) -> usize {
        self.curves.len()
    }

    /// X units label.
    pub fn x_units(&self) -> &str {
        &self.x_units
    }

    /// Y units label.
    pub fn y_units(&self) -> &str {
        &self.y_units
    }

    /// One label per curve.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The identifying path (C is the first label).
    pub fn path(&self) -> &DssPath {
        &self.path
    }

    /// `"/A/B/C/D/E/F/"`.
    pub fn full_name(&self) -> String {
        self.path.full_name()
    }
}

/// `x[i] - x[i - 1]` for every `i >= 1`.
///
/// Returns an empty vector for fewer than two samples.
pub fn differences(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Pairs each Julian day (except the last) with the gap to the next one.
///
/// Large or negative gaps in a W2 record usually mark missing blocks or
/// concatenation errors.
///
/// # Errors
///
/// Returns [`AssemblyError::InsufficientData`] for fewer than two samples.
pub fn julian_day_differences(
    jdays: &[f64],
    x_units: &str,
    y_units: &str,
    path: &DssPath,
) -> Result<PairedDataContainer, AssemblyError> {
    if jdays.len() < 2 {
        return Err(AssemblyError::InsufficientData {
            needed: 2,
            got: jdays.len(),
        });
    }

    let diffs = differences(jdays);
    let x = jdays[..jdays.len() - 1].to_vec();
    debug!(
        n = diffs.len(),
        min = diffs.iter().copied().fold(f64::INFINITY, f64::min),
        max = diffs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        "julian day differences"
    );

    PairedDataContainer::new(x, vec![diffs], x_units, y_units, path, vec![path.c().to_string()])
}
