//! Error types for the CLI

use std::path::Path;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Template file could not be read
    #[error("Cannot read template '{path}': {source}")]
    ReadTemplate {
        /// Template path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generator error
    #[error("{0}")]
    Gen(#[from] webpart_gen::GenError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a template read error
    #[must_use]
    pub fn read_template(path: &Path, source: std::io::Error) -> Self {
        Self::ReadTemplate {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webpart_gen::GenError;

    #[test]
    fn test_gen_error_displays_unwrapped() {
        let err: CliError = GenError::WouldOverwrite {
            path: "components/Demo/demo_web_part.rs".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Refusing to overwrite 'components/Demo/demo_web_part.rs' (use --force)"
        );
    }

    #[test]
    fn test_read_template_display() {
        let err = CliError::read_template(
            Path::new("missing.tmpl"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "Cannot read template 'missing.tmpl': not found");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::invalid_argument("duplicate key NAME");
        assert_eq!(err.to_string(), "Invalid argument: duplicate key NAME");
    }
}
