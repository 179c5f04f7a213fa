//! Error types for the database client

use salon_common::SalonError;
use thiserror::Error;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// A UNIQUE constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// Error with database transaction
    #[error("Database transaction error: {0}")]
    TransactionError(String),

    /// A stored value could not be read back into its domain type
    #[error("Database decode error: {0}")]
    DecodeError(String),
}

impl DbError {
    /// Classifies a failed statement, separating uniqueness failures from the rest.
    pub fn from_query(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::UniqueViolation(db_err.message().to_string())
            }
            other => DbError::QueryError(other.to_string()),
        }
    }
}

impl From<DbError> for SalonError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(msg) => SalonError::ConflictError(msg),
            DbError::ConfigError(msg) | DbError::UrlError(msg) => SalonError::ConfigError(msg),
            other => SalonError::DatabaseError(other.to_string()),
        }
    }
}
