//! Type-safe error codes for API responses.
//!
//! Each code has a string identifier, an integer for logs and monitoring,
//! and a default human-readable message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1499)
    /// Request validation failed
    ValidationError,

    /// Request body could not be read as JSON of the expected shape
    JsonExtraction,

    /// Request is malformed in some other way
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// No route matches the request path
    RouteNotFound,

    /// The path exists but does not accept the request method
    MethodNotAllowed,

    // Server errors (1500-1999)
    /// An unexpected internal server error occurred
    InternalError,

    /// A dependency such as the database is unavailable
    ServiceUnavailable,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1499: Client errors
    /// - 1500-1999: Server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1002,
            Self::BadRequest => 1003,
            Self::NotFound => 1004,
            Self::RouteNotFound => 1005,
            Self::MethodNotAllowed => 1006,

            Self::InternalError => 1501,
            Self::ServiceUnavailable => 1502,
        }
    }

    /// Message used when the error carries no more specific text.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::JsonExtraction => "Failed to parse request body",
            Self::BadRequest => "Bad request",
            Self::NotFound => "Resource not found",
            Self::RouteNotFound => "Route not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::InternalError => "Internal server error",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
