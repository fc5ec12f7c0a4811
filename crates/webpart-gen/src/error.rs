//! Error types for `webpart-gen`.

use thiserror::Error;

/// Result type alias for generator operations.
pub type GenResult<T> = std::result::Result<T, GenError>;

/// Errors that can occur while substituting, scaffolding or verifying.
#[derive(Debug, Error)]
pub enum GenError {
    /// Tokens in the template with no value in the mapping
    #[error("Unresolved token(s) in template: {}", tokens.join(", "))]
    UnresolvedToken {
        /// Distinct missing token names, sorted
        tokens: Vec<String>,
    },

    /// Mapping keys the template never references
    #[error("Unknown token(s) not used by template: {}", tokens.join(", "))]
    UnknownToken {
        /// Distinct unused keys, sorted
        tokens: Vec<String>,
    },

    /// Mapping key that is not a valid token name
    #[error("Invalid token name '{name}': expected [A-Z_]+")]
    InvalidTokenName {
        /// The offending key
        name: String,
    },

    /// Replacement value that would itself read as a token
    #[error("Value for '{key}' contains token syntax")]
    TokenInValue {
        /// Key whose value was rejected
        key: String,
    },

    /// A reserved module value failed validation
    #[error("Invalid value for {token}: {reason}")]
    InvalidValue {
        /// Token the value was meant for
        token: String,
        /// Why it was rejected
        reason: String,
    },

    /// Target exists and was not produced by this generator
    #[error("Refusing to overwrite '{path}' (use --force)")]
    WouldOverwrite {
        /// Path to the file
        path: String,
    },

    /// Manifest missing or unreadable
    #[error("Manifest verification failed for '{path}': {reason}")]
    ManifestError {
        /// Path to the file
        path: String,
        /// Why verification failed
        reason: String,
    },

    /// Hash mismatch (generated file was modified)
    #[error("Hash mismatch for '{path}': expected {expected}, got {actual}")]
    HashMismatch {
        /// Path to the file
        path: String,
        /// Expected hash
        expected: String,
        /// Actual hash
        actual: String,
    },

    /// Token pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenError {
    /// Build an [`GenError::InvalidValue`]
    pub fn invalid_value(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
