//! Error types for the record engine
//!
//! Each rejection kind gets its own variant so the surrounding service
//! layer can map it to a distinct response without re-deriving the cause.

use thiserror::Error;

/// Result type alias for record engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the record engine
#[derive(Error, Debug)]
pub enum Error {
    /// The user already owns the maximum number of records
    #[error("user {username} has reached the maximum number of DNS records ({limit})")]
    QuotaExceeded {
        /// Owning user
        username: String,
        /// Configured per-user limit
        limit: u32,
    },

    /// A record with the same (username, type, subdomain, value) tuple exists
    #[error("DNS record already exists: {0}")]
    DuplicateRecord(String),

    /// Name or value failed syntactic validation
    #[error("validation failed: {0}")]
    Validation(String),

    /// Operation on a record id that does not exist
    #[error("record not found: {0}")]
    NotFound(String),

    /// The store returned no record on create
    #[error("could not create DNS record: {0}")]
    Persistence(String),

    /// Record store-related errors
    #[error("record store error: {0}")]
    Store(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a quota-exceeded error
    pub fn quota_exceeded(username: impl Into<String>, limit: u32) -> Self {
        Self::QuotaExceeded {
            username: username.into(),
            limit,
        }
    }

    /// Create a duplicate-record error
    pub fn duplicate_record(msg: impl Into<String>) -> Self {
        Self::DuplicateRecord(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a record store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
