// --- File: crates/salon_common/src/error.rs ---
use thiserror::Error;

/// The error type every handler in the salon backend ends up returning.
///
/// Domain crates keep their own error enums and convert into this one with
/// `From`, so the HTTP mapping lives in a single place.
#[derive(Error, Debug)]
pub enum SalonError {
    /// Missing or malformed request fields
    #[error("{0}")]
    ValidationError(String),

    /// The date or slot is not bookable (closed weekday, past date, closure, block, grid)
    #[error("{0}")]
    EligibilityError(String),

    /// The (date, time) key is already taken
    #[error("{0}")]
    ConflictError(String),

    /// The target of a delete or cancel does not exist
    #[error("{0}")]
    NotFoundError(String),

    /// Missing or wrong admin credentials
    #[error("{0}")]
    AuthError(String),

    /// The store is unreachable or a statement failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SalonError {
    fn status_code(&self) -> u16 {
        match self {
            SalonError::ValidationError(_) => 400,
            SalonError::EligibilityError(_) => 400,
            SalonError::ConflictError(_) => 409,
            SalonError::NotFoundError(_) => 404,
            SalonError::AuthError(_) => 401,
            SalonError::DatabaseError(_) => 500,
            SalonError::ConfigError(_) => 500,
            SalonError::InternalError(_) => 500,
        }
    }
}

impl SalonError {
    /// True for errors whose detail must stay in the logs.
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<serde_json::Error> for SalonError {
    fn from(err: serde_json::Error) -> Self {
        SalonError::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for SalonError {
    fn from(err: std::io::Error) -> Self {
        SalonError::InternalError(err.to_string())
    }
}

impl From<salon_config::ConfigValueError> for SalonError {
    fn from(err: salon_config::ConfigValueError) -> Self {
        SalonError::ConfigError(err.to_string())
    }
}
