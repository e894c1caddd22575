//! Error types and exit codes for hypenote
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O on a specific file, serialization)
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (vault unavailable, invalid frontmatter, missing note)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the command-line shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - vault unavailable, invalid frontmatter (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during hypenote operations
#[derive(Error, Debug)]
pub enum HypenoteError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data/store errors (exit code 3)
    /// The vault is not configured, or its directories cannot be created.
    /// Every store operation fails with this until the location is fixed.
    #[error("storage unavailable{}: {reason}", path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    StorageUnavailable {
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    #[error("invalid frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl HypenoteError {
    /// Create a storage-unavailable error for a vault location
    pub fn storage_unavailable(
        path: Option<impl Into<PathBuf>>,
        reason: impl std::fmt::Display,
    ) -> Self {
        HypenoteError::StorageUnavailable {
            path: path.map(Into::into),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation on a specific file
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        HypenoteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a file that is not a recognized note
    pub fn invalid_frontmatter(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        HypenoteError::InvalidFrontmatter {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HypenoteError::UsageError(_) => ExitCode::Usage,

            HypenoteError::StorageUnavailable { .. }
            | HypenoteError::NoteNotFound { .. }
            | HypenoteError::InvalidFrontmatter { .. } => ExitCode::Data,

            HypenoteError::Io(_)
            | HypenoteError::Json(_)
            | HypenoteError::Toml(_)
            | HypenoteError::TomlSerialize(_)
            | HypenoteError::FailedOperationWithTarget { .. }
            | HypenoteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            HypenoteError::UsageError(_) => "usage_error",
            HypenoteError::StorageUnavailable { .. } => "storage_unavailable",
            HypenoteError::NoteNotFound { .. } => "note_not_found",
            HypenoteError::InvalidFrontmatter { .. } => "invalid_frontmatter",
            HypenoteError::Io(_) => "io_error",
            HypenoteError::Json(_) => "json_error",
            HypenoteError::Toml(_) => "toml_error",
            HypenoteError::TomlSerialize(_) => "toml_error",
            HypenoteError::FailedOperationWithTarget { .. } => "io_failure",
            HypenoteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hypenote operations
pub type Result<T> = std::result::Result<T, HypenoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            HypenoteError::storage_unavailable(None::<PathBuf>, "no vault selected").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            HypenoteError::UsageError("bad".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            HypenoteError::io_operation("write", "notes/a.md", "disk full").exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_storage_unavailable_message() {
        let err = HypenoteError::storage_unavailable(Some("/vault"), "permission denied");
        assert_eq!(
            err.to_string(),
            "storage unavailable at /vault: permission denied"
        );

        let err = HypenoteError::storage_unavailable(None::<PathBuf>, "no vault selected");
        assert_eq!(err.to_string(), "storage unavailable: no vault selected");
    }

    #[test]
    fn test_to_json() {
        let err = HypenoteError::NoteNotFound {
            id: "20250109140000".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "note_not_found");
        assert_eq!(json["error"]["message"], "note not found: 20250109140000");
    }
}
