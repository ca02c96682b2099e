use thiserror::Error;

/// Errors raised while loading or reading repository data.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The snapshot file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The snapshot document is not valid JSON for the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record failed domain validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
