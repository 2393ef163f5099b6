//! Fixed-window burst rate limiting.

use std::sync::Mutex;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct WindowState {
    reset_at: Instant,
    remaining: u64,
    limit: u64,
    period: Duration,
}

impl WindowState {
    /// Whether the window is exhausted at `now`. Rolls the window over first
    /// if it has expired, so only the current time may be passed in.
    fn is_rate_limited(&mut self, now: Instant) -> bool {
        if self.reset_at <= now {
            self.remaining = self.limit;
            self.reset_at = now + self.period;
            return false;
        }
        self.remaining == 0
    }
}

/// A rate limiter for limits that allow a fixed burst per fixed time window.
///
/// Acquiring inside an open window decrements the remaining count and returns
/// immediately. Once the window is exhausted, acquirers queue in arrival
/// order and are released as windows roll over.
#[derive(Debug)]
pub struct WindowedBurstRateLimiter {
    name: Mutex<String>,
    state: Mutex<WindowState>,
    // Exhausted-window waiters queue here; tokio mutexes wake in FIFO order.
    gate: tokio::sync::Mutex<()>,
}

impl WindowedBurstRateLimiter {
    /// Create a limiter allowing `limit` acquisitions per `period`.
    pub fn new(name: impl Into<String>, period: Duration, limit: u64) -> Self {
        Self {
            name: Mutex::new(name.into()),
            state: Mutex::new(WindowState {
                reset_at: Instant::now(),
                remaining: 0,
                limit,
                period,
            }),
            gate: tokio::sync::Mutex::new(()),
        }
    }

    /// The limiter's name, used in logs.
    pub fn name(&self) -> String {
        match self.name.lock() {
            Ok(name) => name.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub(crate) fn rename(&self, name: String) {
        match self.name.lock() {
            Ok(mut guard) => *guard = name,
            Err(poisoned) => *poisoned.into_inner() = name,
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut WindowState) -> T) -> T {
        match self.state.lock() {
            Ok(mut state) => f(&mut state),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    /// Take one acquisition from the current window if it has capacity.
    pub fn try_acquire(&self) -> bool {
        self.with_state(|state| {
            if state.is_rate_limited(Instant::now()) {
                false
            } else {
                state.remaining -= 1;
                true
            }
        })
    }

    /// Wait for and take one acquisition, queuing behind earlier waiters if
    /// the window is exhausted.
    pub async fn acquire(&self) {
        if self.try_acquire() {
            return;
        }
        let _gate = self.gate.lock().await;
        loop {
            if self.try_acquire() {
                return;
            }
            let wait = self.time_until_reset();
            debug!(
                name = %self.name(),
                wait_s = wait.as_secs_f64(),
                "rate limited, backing off until the window resets"
            );
            sleep(wait).await;
        }
    }

    /// How long until the exhausted window resets, or zero if it has
    /// capacity. Rolls an expired window over as a side effect.
    pub fn time_until_reset(&self) -> Duration {
        self.with_state(|state| {
            let now = Instant::now();
            if state.is_rate_limited(now) {
                state.reset_at.duration_since(now)
            } else {
                Duration::ZERO
            }
        })
    }

    /// Acquisitions left in the current window.
    pub fn remaining(&self) -> u64 {
        self.with_state(|state| state.remaining)
    }

    /// The burst capacity of one window.
    pub fn limit(&self) -> u64 {
        self.with_state(|state| state.limit)
    }

    /// When the current window resets.
    pub fn reset_at(&self) -> Instant {
        self.with_state(|state| state.reset_at)
    }

    /// Replace the window with authoritative values from a response.
    pub fn update(&self, remaining: u64, limit: u64, reset_at: Instant) {
        self.with_state(|state| {
            state.remaining = remaining;
            state.limit = limit;
            state.reset_at = reset_at;
            state.period = reset_at.duration_since(Instant::now());
        });
    }
}
