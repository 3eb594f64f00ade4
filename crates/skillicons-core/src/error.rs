//! Error types for registry construction and loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building an icon registry.
///
/// Resolution and compositing never fail; only startup can.
#[derive(Error, Debug)]
pub enum Error {
    /// The registry would contain no icons.
    #[error("icon registry is empty")]
    EmptyRegistry,

    /// The registry source path does not exist.
    #[error("icon source not found: {}", .0.display())]
    InvalidPath(PathBuf),

    /// I/O error while reading icon files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON icon map could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_display() {
        assert_eq!(Error::EmptyRegistry.to_string(), "icon registry is empty");
    }

    #[test]
    fn test_invalid_path_display() {
        let err = Error::InvalidPath(PathBuf::from("/nope/icons"));
        let msg = err.to_string();
        assert!(msg.contains("icon source not found"));
        assert!(msg.contains("/nope/icons"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
