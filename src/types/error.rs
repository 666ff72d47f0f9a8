//! Error types for the transaction statistics service
//!
//! This module defines all error types the service can produce. The store
//! itself never fails; errors come from request validation at the HTTP
//! boundary and from server startup.
//!
//! # Error Categories
//!
//! - **Validation Errors**: missing fields, non-positive amounts, future timestamps (422)
//! - **Body Errors**: malformed JSON or wrong content type (400)
//! - **Startup Errors**: invalid bind address, bind failure, runtime creation (fatal)

use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Main error type for the service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// A required request field is absent or null
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Name of the field as it appears on the wire
        field: String,
    },

    /// Amount is zero or negative
    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Transaction timestamp is later than the current instant
    #[error("Transaction timestamp {timestamp} is in the future")]
    FutureTimestamp {
        /// The rejected timestamp, with the offset it was sent with
        timestamp: DateTime<FixedOffset>,
    },

    /// Body is valid JSON but a field has the wrong type or format
    #[error("Invalid payload: {message}")]
    InvalidPayload {
        /// Description from the JSON decoder
        message: String,
    },

    /// Body could not be read as JSON at all
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Description of the problem
        message: String,
    },

    /// Configured host/port does not form a socket address
    #[error("Invalid server address '{address}'")]
    InvalidAddress {
        /// The address that failed to parse
        address: String,
    },

    /// TCP listener could not be bound
    #[error("Failed to bind to {address}: {message}")]
    Bind {
        /// Address we tried to bind
        address: String,
        /// Underlying I/O error
        message: String,
    },

    /// Async runtime could not be created
    #[error("Failed to create tokio runtime: {message}")]
    Runtime {
        /// Underlying error
        message: String,
    },

    /// I/O error while serving
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for ServiceError {
    fn from(error: std::io::Error) -> Self {
        ServiceError::Io {
            message: error.to_string(),
        }
    }
}

impl ServiceError {
    /// Create a MissingField error
    pub fn missing_field(field: &str) -> Self {
        ServiceError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: f64) -> Self {
        ServiceError::InvalidAmount { amount }
    }

    /// Create a FutureTimestamp error
    pub fn future_timestamp(timestamp: DateTime<FixedOffset>) -> Self {
        ServiceError::FutureTimestamp { timestamp }
    }

    /// Create an InvalidPayload error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        ServiceError::InvalidPayload {
            message: message.into(),
        }
    }

    /// Create a MalformedBody error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        ServiceError::MalformedBody {
            message: message.into(),
        }
    }

    /// Create a Bind error
    pub fn bind(address: &str, error: &std::io::Error) -> Self {
        ServiceError::Bind {
            address: address.to_string(),
            message: error.to_string(),
        }
    }

    /// HTTP status reported for this error
    ///
    /// Startup errors never reach a handler; they map to 500 for completeness.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MissingField { .. }
            | ServiceError::InvalidAmount { .. }
            | ServiceError::FutureTimestamp { .. }
            | ServiceError::InvalidPayload { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            ServiceError::InvalidAddress { .. }
            | ServiceError::Bind { .. }
            | ServiceError::Runtime { .. }
            | ServiceError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is the caller's fault and should be reported as a
    /// rejected request rather than a server failure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::MissingField { .. }
                | ServiceError::InvalidAmount { .. }
                | ServiceError::FutureTimestamp { .. }
                | ServiceError::InvalidPayload { .. }
                | ServiceError::MalformedBody { .. }
        )
    }
}
