//! Errors raised while discovering tasks.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a discovery pass.
///
/// Every variant aborts the pass it occurred in. The discovery cache is
/// left in the state it had before the pass started.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The host's file search failed for a workspace root.
    #[error("Failed to enumerate build files under {}: {source}", root.display())]
    EnumerationFailure {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A candidate build file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl TaskError {
    pub fn enumeration(root: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::EnumerationFailure {
            root: root.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_enumeration_failure_display() {
        let err = TaskError::enumeration(
            "/work/project",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.contains("/work/project"));
        assert!(matches!(err, TaskError::EnumerationFailure { .. }));
    }

    #[test]
    fn test_read_failure_keeps_source() {
        let err = TaskError::read(
            "/work/project/build.gradle",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("build.gradle"));
        let source = err.source().expect("io error source");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = TaskError::InvalidPattern {
            pattern: "[".into(),
            message: "unclosed class".into(),
        };
        assert!(err.to_string().contains("'['"));
        assert!(err.to_string().contains("unclosed class"));
    }
}
