use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Store-side failures keep the category the store reported so callers can
/// tell throttling apart from validation or missing tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found in {collection}: {id}")]
    NotFound { collection: String, id: String },
    #[error("Record already exists in {collection}: {id}")]
    AlreadyExists { collection: String, id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("Throughput exceeded: {0}")]
    ThroughputExceeded(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
