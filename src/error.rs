//! Crate error type
//!
//! All fallible public operations return [`Result`]. Invalid numeric or
//! color parameters are rejected at the API boundary before any state is
//! touched; I/O and JSON errors only arise from the settings file.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the sandbox core.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Propagated I/O errors (settings file).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Propagated JSON errors (settings file).
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_display_is_informative() {
        let e = Error::InvalidParam("radius must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("radius"));
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e = Error::from(io);
        assert!(matches!(e, Error::Io(_)));
    }
}
