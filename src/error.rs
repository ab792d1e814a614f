use crate::error_code::ServiceErrorCode;
use crate::task::TaskState;
use crate::transport::TransportError;
use std::time::Duration;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or argument that caused the error (e.g., "ner.sensitivity", "config.base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected range, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "task.analysis", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the BosonNLP client.
///
/// Every variant is a distinct condition callers may match on; in particular
/// a polling [`Error::Timeout`] is never folded into [`Error::Http`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP {status} ({code}): {body}")]
    Http {
        status: u16,
        code: ServiceErrorCode,
        /// Raw response body as returned by the service.
        body: String,
    },

    #[error("Task result requested before the job completed")]
    NotReady,

    #[error("Cannot {operation} a task in state {state}")]
    InvalidState {
        operation: &'static str,
        state: TaskState,
    },

    #[error("Timed out after {elapsed:?} waiting for task completion")]
    Timeout { elapsed: Duration },

    #[error("Task {task_id} failed on the server")]
    TaskFailed { task_id: String },

    #[error("Task {task_id} not found on the server")]
    TaskNotFound { task_id: String },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Config(#[from] serde_yaml::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Build an HTTP error from a non-2xx status and the raw body.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Error::Http {
            status,
            code: ServiceErrorCode::from_http_status(status),
            body: body.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// HTTP status code, when the error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classified service error code, when the error came from a non-2xx response.
    pub fn service_code(&self) -> Option<ServiceErrorCode> {
        match self {
            Error::Http { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Raw response body of an HTTP error.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_authentication(&self) -> bool {
        self.service_code() == Some(ServiceErrorCode::Authentication)
    }

    pub fn is_request_too_large(&self) -> bool {
        self.service_code() == Some(ServiceErrorCode::RequestTooLarge)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_classification() {
        let err = Error::http(413, "{\"message\":\"too many\"}");
        assert_eq!(err.status(), Some(413));
        assert!(err.is_request_too_large());
        assert!(!err.is_authentication());
        assert_eq!(err.response_body(), Some("{\"message\":\"too many\"}"));

        let err = Error::http(401, "invalid token");
        assert!(err.is_authentication());
        assert_eq!(err.to_string(), "HTTP 401 (authentication): invalid token");
    }

    #[test]
    fn test_timeout_is_not_http() {
        let err = Error::Timeout {
            elapsed: Duration::from_secs(2),
        };
        assert!(err.is_timeout());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_context_formatting() {
        let err = Error::validation_with_context(
            "sensitivity out of range",
            ErrorContext::new()
                .with_field_path("ner.sensitivity")
                .with_details("expected 1..=4, got 9"),
        );
        assert_eq!(
            err.to_string(),
            "Validation error: sensitivity out of range (field: ner.sensitivity, details: expected 1..=4, got 9)"
        );
        assert!(err.context().is_some());
        assert_eq!(Error::NotReady.context(), None);
    }
}
