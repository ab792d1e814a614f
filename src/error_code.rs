//! Classification of BosonNLP HTTP failures.
//!
//! The service reports failures through plain HTTP status codes. This module
//! maps them onto a small set of named codes so callers can tell a bad token
//! apart from an oversized batch without matching on raw numbers.
//!
//! | Status | Code               | Meaning                                  |
//! |--------|--------------------|------------------------------------------|
//! | 400    | `invalid_request`  | Malformed body or bad parameters         |
//! | 401    | `authentication`   | Missing or invalid `X-Token`             |
//! | 403    | `permission_denied`| Token lacks access to the endpoint       |
//! | 404    | `not_found`        | Unknown endpoint or task                 |
//! | 413    | `request_too_large`| More than 100 items, or body too large   |
//! | 429    | `rate_limited`     | Daily or per-second quota exceeded       |
//! | 5xx    | `server_error`     | Service-side failure                     |
//!
//! ## Example
//!
//! ```rust
//! use bosonnlp::error_code::ServiceErrorCode;
//!
//! let code = ServiceErrorCode::from_http_status(413);
//! assert_eq!(code, ServiceErrorCode::RequestTooLarge);
//! assert_eq!(code.name(), "request_too_large");
//! assert_eq!(code.category(), "client");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorCode {
    /// Malformed request, invalid parameters, or missing required fields
    InvalidRequest,
    /// Invalid or missing API token
    Authentication,
    /// Valid token but no access to the endpoint
    PermissionDenied,
    /// Endpoint or task does not exist
    NotFound,
    /// Batch larger than 100 items or payload over the service limit
    RequestTooLarge,
    /// Request quota exceeded
    RateLimited,
    /// Internal server error on the service side
    ServerError,
    /// Service temporarily unavailable
    Overloaded,
    /// Status code without a dedicated mapping
    Unknown,
}

impl ServiceErrorCode {
    /// Returns the standard name (e.g., `"request_too_large"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RequestTooLarge => "request_too_large",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Overloaded => "overloaded",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the category: `"client"`, `"rate"`, `"server"`, or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::RequestTooLarge => "client",
            Self::RateLimited => "rate",
            Self::ServerError | Self::Overloaded => "server",
            Self::Unknown => "unknown",
        }
    }

    /// Maps an HTTP status code to the most likely `ServiceErrorCode`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            413 => Self::RequestTooLarge,
            429 => Self::RateLimited,
            503 => Self::Overloaded,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
