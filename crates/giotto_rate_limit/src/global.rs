//! The token-wide global rate limit.

use std::sync::Mutex;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::warn;

/// Handler for the global HTTP rate limit.
///
/// Discord does not advertise the global limit ahead of time; it appears as a
/// 429 response with `"global": true`. Until [`throttle`](Self::throttle) is
/// invoked, acquiring completes immediately. After it, acquirers wait out the
/// advertised delay. Throttling again while locked replaces the deadline, so
/// a fresh 429 extends the lock rather than stacking behind it.
#[derive(Debug, Default)]
pub struct GlobalRateLimiter {
    locked_until: Mutex<Option<Instant>>,
}

impl GlobalRateLimiter {
    /// Create an unlocked limiter.
    pub fn new() -> Self {
        Self::default()
    }

    fn deadline(&self) -> Option<Instant> {
        match self.locked_until.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Lock the token for `retry_after`, replacing any earlier lock.
    pub fn throttle(&self, retry_after: Duration) {
        warn!(
            retry_after_s = retry_after.as_secs_f64(),
            "globally rate limited"
        );
        let deadline = Instant::now() + retry_after;
        match self.locked_until.lock() {
            Ok(mut guard) => *guard = Some(deadline),
            Err(poisoned) => *poisoned.into_inner() = Some(deadline),
        }
    }

    /// Whether the token is currently locked.
    pub fn is_locked(&self) -> bool {
        matches!(self.deadline(), Some(at) if at > Instant::now())
    }

    /// Wait until the token is unlocked.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                match self.locked_until.lock() {
                    Ok(mut guard) => match *guard {
                        Some(at) if at > Instant::now() => at - Instant::now(),
                        _ => {
                            *guard = None;
                            return;
                        }
                    },
                    Err(poisoned) => match *poisoned.into_inner() {
                        Some(at) if at > Instant::now() => at - Instant::now(),
                        _ => return,
                    },
                }
            };
            sleep(wait).await;
        }
    }
}
