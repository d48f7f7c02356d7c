//! Error types for device probing.

use thiserror::Error;

/// Errors raised while querying a device registry or writing the report.
///
/// A machine without a GPU is not an error; it is reported as an empty
/// device list.
#[derive(Debug, Error)]
pub enum GpuError {
    /// The GPU driver could not be queried.
    #[error("GPU driver query failed: {0}")]
    DriverError(String),

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl GpuError {
    /// Create a DriverError from any displayable driver failure.
    pub fn driver<E: std::fmt::Display>(err: E) -> Self {
        Self::DriverError(err.to_string())
    }
}

/// Result type alias for device probing.
pub type Result<T> = std::result::Result<T, GpuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GpuError::driver("CUDA_ERROR_NO_DEVICE");
        assert_eq!(err.to_string(), "GPU driver query failed: CUDA_ERROR_NO_DEVICE");

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: GpuError = io.into();
        assert!(matches!(err, GpuError::Io(_)));
    }
}
