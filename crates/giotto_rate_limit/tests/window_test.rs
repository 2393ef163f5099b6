//! Tests for the windowed burst rate limiter.

use giotto_rate_limit::{GlobalRateLimiter, WindowedBurstRateLimiter};
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_burst_within_window_is_immediate() {
    let limiter = WindowedBurstRateLimiter::new("test", Duration::from_secs(60), 3);
    let before = Instant::now();
    for _ in 0..3 {
        limiter.acquire().await;
    }
    assert_eq!(Instant::now(), before);
    assert_eq!(limiter.remaining(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_window_waits_for_reset() {
    let limiter = WindowedBurstRateLimiter::new("test", Duration::from_secs(10), 1);
    limiter.acquire().await;
    let before = Instant::now();
    limiter.acquire().await;
    let waited = Instant::now() - before;
    assert!(waited >= Duration::from_secs(10), "waited only {waited:?}");
}

#[tokio::test(start_paused = true)]
async fn test_window_rolls_over_after_period() {
    let limiter = WindowedBurstRateLimiter::new("test", Duration::from_secs(5), 2);
    assert!(limiter.try_acquire());
    assert!(limiter.try_acquire());
    assert!(!limiter.try_acquire());
    tokio::time::advance(Duration::from_secs(6)).await;
    assert!(limiter.try_acquire());
    assert_eq!(limiter.remaining(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_update_replaces_window() {
    let limiter = WindowedBurstRateLimiter::new("test", Duration::from_secs(60), 1);
    limiter.acquire().await;
    assert!(!limiter.try_acquire());
    // Authoritative headers say there is more room than assumed.
    limiter.update(5, 10, Instant::now() + Duration::from_secs(30));
    assert!(limiter.try_acquire());
    assert_eq!(limiter.remaining(), 4);
    assert_eq!(limiter.limit(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_global_limiter_only_blocks_when_throttled() {
    let limiter = GlobalRateLimiter::new();
    assert!(!limiter.is_locked());
    let before = Instant::now();
    limiter.acquire().await;
    assert_eq!(Instant::now(), before);

    limiter.throttle(Duration::from_secs(7));
    assert!(limiter.is_locked());
    limiter.acquire().await;
    assert!(Instant::now() - before >= Duration::from_secs(7));
    assert!(!limiter.is_locked());
}

#[tokio::test(start_paused = true)]
async fn test_global_throttle_replaces_deadline() {
    let limiter = GlobalRateLimiter::new();
    limiter.throttle(Duration::from_secs(60));
    // A fresh 429 shortens the lock rather than stacking on it.
    limiter.throttle(Duration::from_secs(2));
    let before = Instant::now();
    limiter.acquire().await;
    let waited = Instant::now() - before;
    assert!(waited < Duration::from_secs(60));
}
