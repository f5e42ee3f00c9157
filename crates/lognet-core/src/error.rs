//! Error types for the log registry.

use thiserror::Error;

/// Errors that can occur in the log registry.
///
/// Registry operations are total over their inputs; only `export`, which
/// touches the filesystem, can fail.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An I/O error occurred while exporting logs to disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such folder");
        let err: RegistryError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("no such folder"));
    }

    #[test]
    fn serialization_error_conversion() {
        let serde_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: RegistryError = serde_err.into();
        assert!(matches!(err, RegistryError::Serialization(_)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RegistryError>();
    }
}
