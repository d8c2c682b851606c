//! Error types for w2dss-series.

/// Error type for all fallible operations in the w2dss-series crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    /// Returned when a container is built from empty sequences.
    #[error("cannot assemble an empty series")]
    Empty,

    /// Returned when timestamp and value sequences differ in length.
    #[error("length mismatch: {times} timestamps, {values} values")]
    LengthMismatch {
        /// Number of timestamps supplied.
        times: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// Returned when a path string does not have six slash-delimited parts.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The rejected path string.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// Returned when an interval code is neither -1 nor a positive minute count.
    #[error("invalid interval code: {code} (use -1 for irregular or minutes > 0)")]
    InvalidInterval {
        /// The rejected code.
        code: i32,
    },

    /// Returned when paired data has no curves.
    #[error("paired data requires at least one curve")]
    NoCurves,

    /// Returned when a paired-data curve is not the length of the x ordinates.
    #[error("curve {curve} has {got} ordinates, expected {expected}")]
    CurveLengthMismatch {
        /// 0-based index of the offending curve.
        curve: usize,
        /// Number of x ordinates.
        expected: usize,
        /// Number of y ordinates in the curve.
        got: usize,
    },

    /// Returned when the number of labels differs from the number of curves.
    #[error("{labels} label(s) for {curves} curve(s)")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of curves supplied.
        curves: usize,
    },

    /// Returned when an analysis needs more samples than were supplied.
    #[error("need at least {needed} samples, got {got}")]
    InsufficientData {
        /// Minimum number of samples.
        needed: usize,
        /// Number of samples supplied.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length_mismatch() {
        let err = AssemblyError::LengthMismatch { times: 3, values: 2 };
        assert_eq!(err.to_string(), "length mismatch: 3 timestamps, 2 values");
    }

    #[test]
    fn display_invalid_path() {
        let err = AssemblyError::InvalidPath {
            path: "/A/B/".to_string(),
            reason: "expected 6 parts, got 2".to_string(),
        };
        assert_eq!(err.to_string(), "invalid path '/A/B/': expected 6 parts, got 2");
    }

    #[test]
    fn display_curve_length_mismatch() {
        let err = AssemblyError::CurveLengthMismatch {
            curve: 1,
            expected: 10,
            got: 9,
        };
        assert_eq!(err.to_string(), "curve 1 has 9 ordinates, expected 10");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<AssemblyError>();
    }
}
