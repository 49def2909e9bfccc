//! Core error type.

use thiserror::Error;

/// Errors surfaced by every client operation.
///
/// Nothing is retried or swallowed internally: each variant reaches the caller
/// exactly as it was detected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevAiError {
    /// A required input was missing or empty. Raised before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The local file for a multipart upload does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The server answered 404 for a per-job endpoint.
    #[error("Job not found: {id}")]
    JobNotFound { id: String, body: String },

    /// Any other non-2xx response.
    #[error("HTTP error {status}: {message}")]
    HttpError {
        status: u16,
        message: String,
        body: String,
        details: Option<serde_json::Value>,
    },

    /// The response body did not match the expected shape.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// The transport failed before a response was produced.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Invalid client configuration (header values, proxy URL, client build).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Reading a local file failed for a reason other than not-found.
    #[error("IO error: {0}")]
    IoError(String),
}

impl RevAiError {
    /// Shorthand for [`RevAiError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Build an [`RevAiError::HttpError`], keeping the raw body and its JSON form if it parses.
    pub fn http_error(status: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        let details = serde_json::from_str::<serde_json::Value>(&body).ok();
        Self::HttpError {
            status,
            message: message.into(),
            body,
            details,
        }
    }

    /// The HTTP status associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            Self::JobNotFound { .. } => Some(404),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::JobNotFound { .. } | Self::FileNotFound(_))
    }
}
