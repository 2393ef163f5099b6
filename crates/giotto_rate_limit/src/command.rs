//! The client-side gateway command quota.

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;

const GATEWAY_COMMANDS_PER_MINUTE: NonZeroU32 = match NonZeroU32::new(120) {
    Some(n) => n,
    None => unreachable!(),
};

/// Limiter for commands sent over one gateway connection.
///
/// Unlike the REST limits, this quota is fixed and documented: 120 commands
/// per 60 seconds per connection, enforced client-side so the server never
/// closes the connection for flooding. Heartbeats count against it too.
#[derive(Debug)]
pub struct CommandRateLimiter {
    inner: DefaultDirectRateLimiter,
}

impl CommandRateLimiter {
    /// Create a limiter with the documented gateway quota.
    pub fn new() -> Self {
        Self::with_quota(GATEWAY_COMMANDS_PER_MINUTE)
    }

    /// Create a limiter with a custom per-minute quota.
    pub fn with_quota(per_minute: NonZeroU32) -> Self {
        Self {
            inner: RateLimiter::direct(Quota::per_minute(per_minute)),
        }
    }

    /// Wait until a command may be sent.
    pub async fn acquire(&self) {
        self.inner.until_ready().await;
    }

    /// Take a slot without waiting, if one is available.
    pub fn try_acquire(&self) -> bool {
        self.inner.check().is_ok()
    }
}

impl Default for CommandRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
