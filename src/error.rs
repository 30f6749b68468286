use thiserror::Error;

/// Unified error type for autover operations
#[derive(Error, Debug)]
pub enum AutoverError {
    #[error("Malformed version spec: {0}")]
    Spec(String),

    #[error("Tag source failed: {0}")]
    TagSource(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in autover
pub type Result<T> = std::result::Result<T, AutoverError>;

impl AutoverError {
    /// Create a malformed-spec error with context
    pub fn spec(msg: impl Into<String>) -> Self {
        AutoverError::Spec(msg.into())
    }

    /// Create a tag-source error with context
    pub fn tag_source(msg: impl Into<String>) -> Self {
        AutoverError::TagSource(msg.into())
    }
}
