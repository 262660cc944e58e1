use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Branch {0} not found")]
    BranchNotFound(String),

    #[error("Repository has no branches")]
    NoBranches,

    #[error("Commit {id} has invalid timestamp (seconds={seconds})")]
    InvalidTimestamp { id: String, seconds: i64 },

    #[error("Specify file format --txt | --rtf | --md | --html")]
    MissingFormat,

    #[error("Unknown format '{0}'")]
    UnknownFormat(String),

    #[error("Invalid extension .{0}")]
    InvalidExtension(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog-gen
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Whether the error stems from how the tool was invoked.
    ///
    /// Usage errors are detected before any repository access.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ChangelogError::MissingFormat
                | ChangelogError::UnknownFormat(_)
                | ChangelogError::InvalidExtension(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChangelogError::config("bad date format");
        assert_eq!(err.to_string(), "Configuration error: bad date format");
    }

    #[test]
    fn test_branch_not_found_message() {
        let err = ChangelogError::BranchNotFound("release".to_string());
        assert_eq!(err.to_string(), "Branch release not found");
    }

    #[test]
    fn test_invalid_extension_message() {
        let err = ChangelogError::InvalidExtension("txt".to_string());
        assert_eq!(err.to_string(), "Invalid extension .txt");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ChangelogError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert!(!err.is_usage());
    }

    #[test]
    fn test_usage_classification() {
        assert!(ChangelogError::MissingFormat.is_usage());
        assert!(ChangelogError::UnknownFormat("pdf".to_string()).is_usage());
        assert!(ChangelogError::InvalidExtension("txt".to_string()).is_usage());
        assert!(!ChangelogError::BranchNotFound("x".to_string()).is_usage());
        assert!(!ChangelogError::NoBranches.is_usage());
        assert!(!ChangelogError::config("x").is_usage());
    }

    #[test]
    fn test_invalid_timestamp_message() {
        let err = ChangelogError::InvalidTimestamp {
            id: "abc123".to_string(),
            seconds: i64::MAX,
        };
        let msg = err.to_string();
        assert!(msg.contains("abc123"));
        assert!(msg.contains("invalid timestamp"));
    }
}
