//! Error types for the Giotto library.
//!
//! This crate provides the foundation error types used throughout the Giotto
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enums define specific error conditions
//! - `*Error` structs wrap the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use giotto_error::{GiottoResult, HttpError};
//!
//! fn fetch_data() -> GiottoResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bulk;
mod config;
mod error;
mod gateway;
mod http;
mod json;
mod rest;
mod validate;

pub use bulk::BulkDeleteError;
pub use config::ConfigError;
pub use error::{GiottoError, GiottoErrorKind, GiottoResult};
pub use gateway::{CloseFrame, GatewayError, GatewayErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use rest::{RestError, RestErrorKind};
pub use validate::ValidationError;

/// Trait for errors that can be classified as transient or permanent.
///
/// The REST client uses this to decide whether a failed request should be
/// retried with backoff or surfaced immediately.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient conditions like 5xx responses, 429 rate limits, or network
    /// timeouts should return true. Permanent conditions like 401
    /// (unauthorized) or 400 (bad request) should return false.
    fn is_retryable(&self) -> bool;
}
