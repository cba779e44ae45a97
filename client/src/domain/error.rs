//! Domain-level error types.
//!
//! These errors are transport agnostic. The list state machine surfaces their
//! `Display` text; terminal views may prefer [`Error::user_message`].

use serde::Serialize;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The catalogue could not be reached.
    ServiceUnavailable,
    /// The catalogue did not answer in time.
    Timeout,
    /// The catalogue refused the request because of its rate limit.
    RateLimited,
    /// The catalogue answered with an error or an unreadable payload.
    UpstreamError,
    /// An unexpected error occurred inside the client.
    InternalError,
}

impl ErrorCode {
    /// Friendly sentence shown to people instead of the developer message.
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Please check the requested page and try again.",
            Self::ServiceUnavailable => "Please check your network connection.",
            Self::Timeout => "The movie catalogue is taking too long to respond.",
            Self::RateLimited => "Too many requests were sent. Please wait a moment.",
            Self::UpstreamError => "The movie catalogue is having a temporary problem.",
            Self::InternalError => "Something went wrong. Please try again.",
        }
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use popular_movies::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::InvalidRequest, "page number must be at least 1");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.to_string(), "page number must be at least 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    EmptyMessage,
}

impl std::fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error.
    ///
    /// Blank messages are replaced by the code's user message so the
    /// non-empty invariant always holds.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message).unwrap_or_else(|_| Self {
            code,
            message: code.user_message().to_owned(),
        })
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self { code, message })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Developer-facing message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Friendly message for the error's category.
    pub fn user_message(&self) -> &'static str {
        self.code.user_message()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, message)
    }

    /// Convenience constructor for [`ErrorCode::RateLimited`].
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RateLimited, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamError`].
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamError, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
