//! Error types for biped_walk

use thiserror::Error;

/// Main error type for walk trajectory generation
#[derive(Debug, Error)]
pub enum WalkError {
    /// Invalid step parameter (non-positive period, negative lift, ...)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Visualization error
    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for walk operations
pub type WalkResult<T> = Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalkError::InvalidParameter("period must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid parameter: period must be positive");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WalkError = io_err.into();
        assert!(matches!(err, WalkError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
