//! Rate limiting primitives for the Giotto Discord API library.
//!
//! Discord enforces limits on three surfaces: per-route REST buckets driven
//! by `X-RateLimit-*` response headers, a token-wide global limit surfaced
//! through 429 responses, and a fixed command quota on each gateway
//! connection. This crate provides a limiter for each, plus the exponential
//! backoff used when reconnecting.
//!
//! The REST limiters are server-driven: the window sizes are not known until
//! a response arrives, so [`RestBucketManager`] maps routes to buckets lazily
//! and treats unresolved buckets as unlimited. The gateway quota is fixed and
//! client-side, so it rides on `governor` instead.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backoff;
mod bucket;
mod command;
mod global;
mod headers;
mod window;

pub use backoff::ExponentialBackOff;
pub use bucket::{BucketLease, RestBucket, RestBucketManager, UNKNOWN_HASH};
pub use command::CommandRateLimiter;
pub use global::GlobalRateLimiter;
pub use headers::RateLimitHeaders;
pub use window::WindowedBurstRateLimiter;
