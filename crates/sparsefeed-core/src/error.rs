//! Error types for sparse storage and batch supply.
//!
//! Every error here is a caller error: malformed inputs, mismatched shapes
//! or indices outside the valid range. None of them are retryable.

use thiserror::Error;

/// Errors that can occur while building sparse matrices or supplying batches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Dimension mismatch between two arrays.
    ///
    /// Raised when features and labels disagree on the row count, or when
    /// raw CSR buffers have inconsistent lengths.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Index outside the valid range.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of valid indices
        len: usize,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {reason} ({parameter} = {value})")]
    InvalidConfiguration {
        /// Description of the configuration error
        reason: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was invalid
        value: String,
    },

    /// Structurally malformed sparse matrix data.
    #[error("Invalid sparse structure: {reason}")]
    InvalidStructure {
        /// Description of the structural problem
        reason: String,
    },
}

impl DataError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an IndexOutOfRange error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2, S3>(reason: S1, parameter: S2, value: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::InvalidConfiguration {
            reason: reason.into(),
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Create an InvalidStructure error.
    pub fn invalid_structure<S: Into<String>>(reason: S) -> Self {
        Self::InvalidStructure {
            reason: reason.into(),
        }
    }
}

/// Result type alias for operations that can produce DataError.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DataError::dimension_mismatch("10 rows", "9 rows");
        assert!(matches!(err, DataError::DimensionMismatch { .. }));
        assert_eq!(err.to_string(), "Dimension mismatch: expected 10 rows, got 9 rows");

        let err = DataError::index_out_of_range(3, 3);
        assert_eq!(err.to_string(), "Index 3 out of range for length 3");
    }

    #[test]
    fn test_configuration_error_context() {
        let err = DataError::invalid_configuration("must be positive", "batch_size", "0");

        if let DataError::InvalidConfiguration {
            reason,
            parameter,
            value,
        } = &err
        {
            assert_eq!(reason, "must be positive");
            assert_eq!(parameter, "batch_size");
            assert_eq!(value, "0");
        } else {
            panic!("Expected InvalidConfiguration variant");
        }
        assert!(err.to_string().contains("batch_size = 0"));
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            DataError::dimension_mismatch("a", "b"),
            DataError::index_out_of_range(0, 0),
            DataError::invalid_configuration("negative", "seed", "-1"),
            DataError::invalid_structure("row_ptr not monotonic"),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
