//! Tests for the bucketed REST rate limiter.

use giotto_error::RestErrorKind;
use giotto_rate_limit::{RateLimitHeaders, RestBucketManager, UNKNOWN_HASH};
use std::time::Duration;
use tokio::time::Instant;

const ROUTE: &str = "POST /channels/{channel}/messages";

fn headers(bucket: &str, remaining: u64, limit: u64, reset_after: f64) -> RateLimitHeaders {
    RateLimitHeaders {
        limit: Some(limit),
        remaining: Some(remaining),
        bucket: Some(bucket.to_string()),
        reset_after: Some(reset_after),
    }
}

#[tokio::test(start_paused = true)]
async fn test_unresolved_routes_are_unlimited() {
    let manager = RestBucketManager::new(Duration::from_secs(300));
    let before = Instant::now();
    for _ in 0..50 {
        let lease = manager.acquire(ROUTE, "123").await.unwrap();
        assert!(lease.bucket_name().starts_with(UNKNOWN_HASH));
        drop(lease);
    }
    assert_eq!(Instant::now(), before);
}

#[tokio::test(start_paused = true)]
async fn test_headers_resolve_the_placeholder_bucket() {
    let manager = RestBucketManager::new(Duration::from_secs(300));
    let lease = manager.acquire(ROUTE, "123").await.unwrap();
    drop(lease);
    manager.update_rate_limits(ROUTE, "123", &headers("a1b2c3", 4, 5, 2.5));

    let lease = manager.acquire(ROUTE, "123").await.unwrap();
    assert_eq!(lease.bucket_name(), "a1b2c3;123");
    // The placeholder was remapped, not duplicated.
    assert_eq!(manager.bucket_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_major_parameters_get_separate_buckets() {
    let manager = RestBucketManager::new(Duration::from_secs(300));
    manager.update_rate_limits(ROUTE, "123", &headers("a1b2c3", 0, 5, 60.0));
    manager.update_rate_limits(ROUTE, "456", &headers("a1b2c3", 5, 5, 60.0));

    // Channel 123 is exhausted but channel 456 proceeds immediately.
    let before = Instant::now();
    let lease = manager.acquire(ROUTE, "456").await.unwrap();
    assert_eq!(Instant::now(), before);
    assert_eq!(lease.bucket_name(), "a1b2c3;456");
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_bucket_waits_out_the_window() {
    let manager = RestBucketManager::new(Duration::from_secs(300));
    manager.update_rate_limits(ROUTE, "123", &headers("a1b2c3", 0, 5, 3.0));

    let before = Instant::now();
    let lease = manager.acquire(ROUTE, "123").await.unwrap();
    assert!(Instant::now() - before >= Duration::from_secs(3));
    drop(lease);
}

#[tokio::test(start_paused = true)]
async fn test_wait_beyond_maximum_errors_instead_of_sleeping() {
    let manager = RestBucketManager::new(Duration::from_secs(10));
    manager.update_rate_limits(ROUTE, "123", &headers("a1b2c3", 0, 5, 120.0));

    let err = manager.acquire(ROUTE, "123").await.unwrap_err();
    match err.kind() {
        RestErrorKind::RateLimitTooLong {
            bucket,
            retry_after,
            max_retry_after,
        } => {
            assert_eq!(bucket, "a1b2c3;123");
            assert!(*retry_after > 100.0);
            assert_eq!(*max_retry_after, 10.0);
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_incomplete_headers_are_ignored() {
    let manager = RestBucketManager::new(Duration::from_secs(300));
    let partial = RateLimitHeaders {
        limit: Some(5),
        remaining: Some(0),
        bucket: None,
        reset_after: Some(60.0),
    };
    manager.update_rate_limits(ROUTE, "123", &partial);
    assert_eq!(manager.bucket_count(), 0);

    let lease = manager.acquire(ROUTE, "123").await.unwrap();
    assert!(lease.bucket_name().starts_with(UNKNOWN_HASH));
}

#[tokio::test(start_paused = true)]
async fn test_gc_purges_expired_idle_buckets() {
    let manager = RestBucketManager::new(Duration::from_secs(300));
    manager.update_rate_limits(ROUTE, "123", &headers("a1b2c3", 5, 5, 1.0));
    assert_eq!(manager.bucket_count(), 1);

    // Not yet past reset + expiry.
    manager.gc_pass(Duration::from_secs(10));
    assert_eq!(manager.bucket_count(), 1);

    tokio::time::advance(Duration::from_secs(12)).await;
    manager.gc_pass(Duration::from_secs(10));
    assert_eq!(manager.bucket_count(), 0);

    // A purged route is recreated on next use.
    let lease = manager.acquire(ROUTE, "123").await.unwrap();
    assert_eq!(lease.bucket_name(), "a1b2c3;123");
}

#[test]
fn test_header_parsing() {
    let lookup = |name: &str| match name {
        RateLimitHeaders::LIMIT => Some("5".to_string()),
        RateLimitHeaders::REMAINING => Some("3".to_string()),
        RateLimitHeaders::BUCKET => Some("abc123".to_string()),
        RateLimitHeaders::RESET_AFTER => Some("1.25".to_string()),
        _ => None,
    };
    let headers = RateLimitHeaders::from_lookup(lookup);
    assert!(headers.is_complete());
    assert_eq!(headers.limit, Some(5));
    assert_eq!(headers.remaining, Some(3));
    assert_eq!(headers.bucket.as_deref(), Some("abc123"));
    assert_eq!(headers.reset_after, Some(1.25));

    let empty = RateLimitHeaders::from_lookup(|_| None);
    assert!(!empty.is_complete());
}
