//! Top-level error wrapper types.

use crate::{
    BulkDeleteError, ConfigError, GatewayError, HttpError, JsonError, RestError, ValidationError,
};

/// This is the foundation error enum. Variants cover every failure family a
/// Giotto operation can surface.
///
/// # Examples
///
/// ```
/// use giotto_error::{GiottoError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: GiottoError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GiottoErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// REST response error
    #[from(RestError)]
    Rest(RestError),
    /// Gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Bulk operation partial failure
    #[from(BulkDeleteError)]
    BulkDelete(BulkDeleteError),
}

/// Giotto error with kind discrimination.
///
/// # Examples
///
/// ```
/// use giotto_error::{GiottoResult, ConfigError};
///
/// fn might_fail() -> GiottoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Giotto Error: {}", _0)]
pub struct GiottoError(Box<GiottoErrorKind>);

impl GiottoError {
    /// Create a new error from a kind.
    pub fn new(kind: GiottoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GiottoErrorKind {
        &self.0
    }

    /// Consume the error and return its kind.
    pub fn into_kind(self) -> GiottoErrorKind {
        *self.0
    }
}

// Generic From implementation for any type that converts to GiottoErrorKind
impl<T> From<T> for GiottoError
where
    T: Into<GiottoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Giotto operations.
///
/// # Examples
///
/// ```
/// use giotto_error::{GiottoResult, HttpError};
///
/// fn fetch_data() -> GiottoResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type GiottoResult<T> = std::result::Result<T, GiottoError>;
