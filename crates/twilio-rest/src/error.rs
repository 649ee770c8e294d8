//! Error types for the twilio-rest library.
//!
//! Every verb (GET, POST, DELETE) reports failures through the same
//! taxonomy: transport failures, server errors, structured API errors,
//! unexpected responses, decode failures, and pagination exhaustion.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// The unified error type for twilio-rest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered HTTP 500. The body is never inspected.
    #[error("server error (HTTP {status})")]
    Server { status: u16 },

    /// A structured error returned by the API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A failure status whose body is not a structured API error, or a
    /// DELETE that succeeded with something other than 204.
    #[error("unexpected HTTP {status} response: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A success body that did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input validation errors (invalid SID, base URL, page link).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The page iterator has no further pages to fetch.
    #[error("no more results")]
    NoMoreResults,
}

impl Error {
    /// Returns true for the pagination exhaustion sentinel.
    pub fn is_no_more_results(&self) -> bool {
        matches!(self, Error::NoMoreResults)
    }

    /// Returns the structured API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status } | Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Api(err) => Some(err.status),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request exceeded the configured deadline.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    Builder { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl TransportError {
    /// Classify a reqwest error, recording `timeout` for expired deadlines.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_builder() {
            TransportError::Builder {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

/// A structured error payload as documented by the API.
///
/// ```json
/// {"code": 20404, "message": "The requested resource was not found",
///  "more_info": "https://www.twilio.com/docs/errors/20404", "status": 404}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Twilio error code.
    pub code: u32,
    /// Human-readable message.
    pub message: String,
    /// Link to the error documentation.
    #[serde(default)]
    pub more_info: Option<String>,
    /// HTTP status. Filled from the response when the body omits it.
    #[serde(default)]
    pub status: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} [{}]: {}", self.status, self.code, self.message)?;
        if let Some(ref more_info) = self.more_info {
            write!(f, " ({})", more_info)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns true when the API rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.code == 20003
    }

    /// Returns true when the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.code == 20404
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid resource identifier.
    #[error("invalid SID '{value}': {reason}")]
    Sid { value: String, reason: String },

    /// Invalid API base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// A next-page link that is not a URL, or points at another host.
    #[error("invalid page link '{value}': {reason}")]
    PageLink { value: String, reason: String },

    /// A timestamp in neither RFC 2822 nor RFC 3339 form.
    #[error("invalid timestamp '{value}'")]
    Timestamp { value: String },
}
