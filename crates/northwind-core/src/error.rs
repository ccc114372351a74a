//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of the Northwind API.
///
/// Data access, service and presentation code all report failures through
/// this enum; the REST layer turns it into an HTTP status and an
/// [`ErrorResponse`] body.
#[derive(Error, Debug)]
pub enum NorthwindError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// An argument was outside its accepted range (non-positive id,
    /// negative offset, empty name list, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (duplicate key, dangling foreign key)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error while reading a request payload
    #[error("I/O error: {0}")]
    Io(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NorthwindError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::InvalidArgument(_) => 400,
            Self::Validation(_) => 422,
            Self::Conflict(_) => 409,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for the not-found variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for NorthwindError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                    return Self::Conflict(db_err.message().to_string());
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for NorthwindError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Database(format!("Migration failed: {err}"))
    }
}

impl From<serde_json::Error> for NorthwindError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

impl From<std::io::Error> for NorthwindError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `NorthwindError`.
    #[must_use]
    pub fn from_error(error: &NorthwindError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&NorthwindError> for ErrorResponse {
    fn from(error: &NorthwindError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(NorthwindError::not_found("Product", 1).status_code(), 404);
        assert_eq!(NorthwindError::invalid_argument("id").status_code(), 400);
        assert_eq!(NorthwindError::validation("name too long").status_code(), 422);
        assert_eq!(NorthwindError::conflict("duplicate").status_code(), 409);
        assert_eq!(NorthwindError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(NorthwindError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(NorthwindError::not_found("Product", 1).error_code(), "NOT_FOUND");
        assert_eq!(NorthwindError::invalid_argument("offset").error_code(), "INVALID_ARGUMENT");
        assert_eq!(NorthwindError::validation("bad").error_code(), "VALIDATION_ERROR");
        assert_eq!(NorthwindError::conflict("dup").error_code(), "CONFLICT");
        assert_eq!(NorthwindError::Io("eof".to_string()).error_code(), "IO_ERROR");
        assert_eq!(NorthwindError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_is_not_found() {
        assert!(NorthwindError::not_found("Employee", 7).is_not_found());
        assert!(!NorthwindError::invalid_argument("id").is_not_found());
    }

    #[test]
    fn test_error_constructors() {
        let not_found = NorthwindError::not_found("ProductCategory", "123");
        assert!(not_found.to_string().contains("ProductCategory"));
        assert!(not_found.to_string().contains("123"));

        let invalid = NorthwindError::invalid_argument("limit must be at least 1");
        assert!(invalid.to_string().contains("limit must be at least 1"));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: NorthwindError = sqlx::Error::RowNotFound.into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err: NorthwindError = io.into();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("stream closed"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = NorthwindError::not_found("Product", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = NorthwindError::validation("bad input");
        let details = vec![FieldError {
            field: "name".to_string(),
            message: "too long".to_string(),
            code: "length".to_string(),
        }];
        let response = ErrorResponse::from_error(&err)
            .with_details(details);
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert_eq!(response.details.map(|d| d.len()), Some(1));
    }
}
