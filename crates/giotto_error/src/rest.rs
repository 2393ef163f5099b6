//! REST response error types.
//!
//! Discord surfaces failures through documented HTTP statuses plus a JSON
//! error code and message. These variants mirror that contract so callers can
//! match on the condition instead of re-parsing status codes.

use crate::RetryableError;

/// Error kinds for a non-success Discord REST response.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum RestErrorKind {
    /// 400: the request body or parameters were rejected.
    #[display("Bad Request (JSON code {}): {}", code, message)]
    BadRequest {
        /// Discord's JSON error code
        code: i64,
        /// Discord's error message
        message: String,
    },
    /// 401: the token is missing, malformed, or revoked.
    #[display("Unauthorized: {}", message)]
    Unauthorized {
        /// Discord's error message
        message: String,
    },
    /// 403: the token is valid but lacks access to the resource.
    #[display("Forbidden (JSON code {}): {}", code, message)]
    Forbidden {
        /// Discord's JSON error code
        code: i64,
        /// Discord's error message
        message: String,
    },
    /// 404: the resource does not exist or is not visible to the bot.
    #[display("Not Found: {}", message)]
    NotFound {
        /// Discord's error message
        message: String,
    },
    /// 429: the request was rate limited and can be retried.
    #[display(
        "Rate limited ({}) for {}s",
        if *global { "globally" } else { "bucket" },
        retry_after
    )]
    RateLimited {
        /// Seconds to wait before retrying, from the 429 body
        retry_after: f64,
        /// Whether the entire token is limited rather than one bucket
        global: bool,
    },
    /// A rate limit wait would exceed the configured maximum.
    #[display(
        "Rate limit on bucket {} of {}s exceeds the configured maximum of {}s",
        bucket,
        retry_after,
        max_retry_after
    )]
    RateLimitTooLong {
        /// The bucket that imposed the wait
        bucket: String,
        /// Seconds until the bucket resets
        retry_after: f64,
        /// The configured ceiling that was exceeded
        max_retry_after: f64,
    },
    /// 5xx: Discord had an internal failure; the request may be retried.
    #[display("Discord internal error (status {}): {}", status, message)]
    Internal {
        /// The HTTP status received
        status: u16,
        /// The response body, or a synthesized message
        message: String,
    },
    /// Any other unexpected status.
    #[display("Unexpected HTTP status {}: {}", status, message)]
    Unexpected {
        /// The HTTP status received
        status: u16,
        /// The response body, or a synthesized message
        message: String,
    },
}

impl RestErrorKind {
    /// Build the kind for an error response from its status and parsed body.
    pub fn from_status(status: u16, code: i64, message: String) -> Self {
        match status {
            400 => Self::BadRequest { code, message },
            401 => Self::Unauthorized { message },
            403 => Self::Forbidden { code, message },
            404 => Self::NotFound { message },
            500..=599 => Self::Internal { status, message },
            _ => Self::Unexpected { status, message },
        }
    }
}

/// REST error with source location tracking.
///
/// # Examples
///
/// ```
/// use giotto_error::{RestError, RestErrorKind, RetryableError};
///
/// let err = RestError::new(RestErrorKind::NotFound {
///     message: "Unknown Channel".to_string(),
/// });
/// assert!(!err.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("REST Error: {} at line {} in {}", kind, line, file)]
pub struct RestError {
    kind: RestErrorKind,
    line: u32,
    file: &'static str,
}

impl RestError {
    /// Create a new REST error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RestErrorKind {
        &self.kind
    }

    /// The suggested delay before retrying, in seconds, if the response
    /// carried one.
    pub fn retry_after(&self) -> Option<f64> {
        match &self.kind {
            RestErrorKind::RateLimited { retry_after, .. } => Some(*retry_after),
            RestErrorKind::RateLimitTooLong { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }
}

impl RetryableError for RestError {
    fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            RestErrorKind::RateLimited { .. } | RestErrorKind::Internal { .. }
        )
    }
}

impl<T> From<T> for RestError
where
    T: Into<RestErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
