//! Server-driven per-route REST rate limit buckets.
//!
//! Discord assigns each route family a bucket identified by the
//! `X-RateLimit-Bucket` response header. The real limit applies per major
//! parameter (the leading channel, guild, or webhook id in the path), so a
//! bucket's full identity is the header hash joined with the major parameter
//! value. None of this is known before the first response arrives, so routes
//! start out mapped to an unlimited placeholder bucket and are remapped once
//! the first set of headers comes back.

use crate::{RateLimitHeaders, WindowedBurstRateLimiter};
use giotto_error::{RestError, RestErrorKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Notify, OwnedMutexGuard};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

/// The hash prefix of a bucket whose real hash is not yet known.
pub const UNKNOWN_HASH: &str = "UNKNOWN";

const HASH_SEPARATOR: char = ';';

fn real_hash(bucket_header: &str, major: &str) -> String {
    format!("{bucket_header}{HASH_SEPARATOR}{major}")
}

fn unknown_hash(route_key: &str, major: &str) -> String {
    format!("{UNKNOWN_HASH}{HASH_SEPARATOR}{route_key}{HASH_SEPARATOR}{major}")
}

/// The rate limit state for one bucket hash and major parameter combination.
///
/// Requests on the same bucket are serialized: a lease is held from before
/// the request is sent until its response headers have been applied, so the
/// window is never dripped on stale information. Buckets whose hash is still
/// unknown impose no limit.
#[derive(Debug)]
pub struct RestBucket {
    window: WindowedBurstRateLimiter,
    max_rate_limit: Duration,
    lock: Arc<tokio::sync::Mutex<()>>,
}

impl RestBucket {
    fn new(name: String, max_rate_limit: Duration) -> Self {
        Self {
            window: WindowedBurstRateLimiter::new(name, Duration::from_secs(1), 1),
            max_rate_limit,
            lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// The bucket's full hash.
    pub fn name(&self) -> String {
        self.window.name()
    }

    /// Whether the real bucket hash has not yet been learned from a response.
    pub fn is_unknown(&self) -> bool {
        self.name().starts_with(UNKNOWN_HASH)
    }

    /// When the current window resets.
    pub fn reset_at(&self) -> Instant {
        self.window.reset_at()
    }

    fn is_idle(&self) -> bool {
        // A held request lock means a caller is mid-flight on this bucket.
        self.lock.try_lock().is_ok()
    }

    async fn acquire(&self) -> Result<OwnedMutexGuard<()>, RestError> {
        let permit = Arc::clone(&self.lock).lock_owned().await;

        if self.is_unknown() {
            return Ok(permit);
        }

        let retry_after = self.window.time_until_reset();
        if retry_after > self.max_rate_limit {
            return Err(RestError::new(RestErrorKind::RateLimitTooLong {
                bucket: self.name(),
                retry_after: retry_after.as_secs_f64(),
                max_retry_after: self.max_rate_limit.as_secs_f64(),
            }));
        }

        self.window.acquire().await;
        Ok(permit)
    }

    fn update(&self, remaining: u64, limit: u64, reset_at: Instant) {
        self.window.update(remaining, limit, reset_at);
    }

    fn resolve(&self, hash: String) {
        debug_assert!(self.is_unknown(), "cannot resolve a known bucket");
        self.window.rename(hash);
    }
}

/// Permission to perform one request on a bucket.
///
/// Hold the lease for the whole request, from sending until
/// [`RestBucketManager::update_rate_limits`] has been called with the
/// response headers, then drop it.
#[derive(Debug)]
pub struct BucketLease {
    bucket: Arc<RestBucket>,
    _permit: OwnedMutexGuard<()>,
}

impl BucketLease {
    /// The full hash of the leased bucket.
    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}

#[derive(Debug, Default)]
struct BucketMaps {
    /// Route key to its `X-RateLimit-Bucket` header value.
    routes_to_hashes: HashMap<String, String>,
    /// Full bucket hash to its limiter.
    buckets: HashMap<String, Arc<RestBucket>>,
}

#[derive(Debug)]
struct ManagerInner {
    maps: Mutex<BucketMaps>,
    max_rate_limit: Duration,
    closed: AtomicBool,
    close_signal: Notify,
}

impl ManagerInner {
    fn with_maps<T>(&self, f: impl FnOnce(&mut BucketMaps) -> T) -> T {
        match self.maps.lock() {
            Ok(mut maps) => f(&mut maps),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    fn gc_pass(&self, expire_after: Duration) {
        let now = Instant::now();
        self.with_maps(|maps| {
            let before = maps.buckets.len();
            maps.buckets
                .retain(|_, bucket| !bucket.is_idle() || bucket.reset_at() + expire_after >= now);
            let purged = before - maps.buckets.len();
            if purged > 0 {
                trace!(purged, remaining = maps.buckets.len(), "purged stale buckets");
            }
        });
    }
}

/// The bucketed rate limiter for the REST client.
///
/// Acquire a [`BucketLease`] before each request and feed the response
/// headers back through [`update_rate_limits`](Self::update_rate_limits).
/// Any limit may change at any time; the manager assumes nothing it has not
/// been told by a response.
#[derive(Debug)]
pub struct RestBucketManager {
    inner: Arc<ManagerInner>,
    gc_task: Mutex<Option<JoinHandle<()>>>,
}

impl RestBucketManager {
    /// Period at which stale buckets are collected.
    pub const GC_POLL_PERIOD: Duration = Duration::from_secs(20);
    /// How long past its reset an idle bucket is kept.
    pub const GC_EXPIRE_AFTER: Duration = Duration::from_secs(10);

    /// Create a manager.
    ///
    /// `max_rate_limit` bounds how long one acquisition may wait; a bucket
    /// demanding a longer wait fails with
    /// [`RestErrorKind::RateLimitTooLong`] instead of sleeping.
    pub fn new(max_rate_limit: Duration) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                maps: Mutex::new(BucketMaps::default()),
                max_rate_limit,
                closed: AtomicBool::new(false),
                close_signal: Notify::new(),
            }),
            gc_task: Mutex::new(None),
        }
    }

    /// Start the background collection of stale buckets.
    pub fn start(&self) {
        let mut slot = match self.gc_task.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        if slot.is_some() {
            return;
        }
        let inner = Arc::clone(&self.inner);
        *slot = Some(tokio::spawn(async move {
            trace!("rate limit garbage collector started");
            while !inner.closed.load(Ordering::Acquire) {
                tokio::select! {
                    _ = inner.close_signal.notified() => {}
                    _ = tokio::time::sleep(Self::GC_POLL_PERIOD) => {
                        inner.gc_pass(Self::GC_EXPIRE_AFTER);
                    }
                }
            }
        }));
    }

    /// Whether the collection task is running.
    pub fn is_started(&self) -> bool {
        match self.gc_task.lock() {
            Ok(slot) => slot.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }

    /// Stop the collector and drop all bucket state.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
        self.inner.close_signal.notify_waiters();
        let handle = match self.gc_task.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.abort();
        }
        self.inner.with_maps(|maps| {
            maps.buckets.clear();
            maps.routes_to_hashes.clear();
        });
    }

    fn bucket_for(&self, route_key: &str, major: &str) -> Arc<RestBucket> {
        let max_rate_limit = self.inner.max_rate_limit;
        self.inner.with_maps(|maps| {
            let full_hash = match maps.routes_to_hashes.get(route_key) {
                Some(hash) => real_hash(hash, major),
                None => unknown_hash(route_key, major),
            };
            match maps.buckets.get(&full_hash) {
                Some(bucket) => {
                    trace!(route = route_key, bucket = %full_hash, "mapped to existing bucket");
                    Arc::clone(bucket)
                }
                None => {
                    debug!(route = route_key, bucket = %full_hash, "mapped to new bucket");
                    let bucket = Arc::new(RestBucket::new(full_hash.clone(), max_rate_limit));
                    maps.buckets.insert(full_hash, Arc::clone(&bucket));
                    bucket
                }
            }
        })
    }

    /// Wait for permission to perform one request on a route.
    ///
    /// `route_key` identifies the route template including its method;
    /// `major` is the rendered major parameter value, or an empty string for
    /// routes without one.
    pub async fn acquire(&self, route_key: &str, major: &str) -> Result<BucketLease, RestError> {
        let bucket = self.bucket_for(route_key, major);
        let permit = bucket.acquire().await?;
        Ok(BucketLease {
            bucket,
            _permit: permit,
        })
    }

    /// Apply the rate limit headers of a response.
    ///
    /// Remaps the route to its real bucket when the hash was previously
    /// unknown. Incomplete header sets are ignored.
    pub fn update_rate_limits(&self, route_key: &str, major: &str, headers: &RateLimitHeaders) {
        let (Some(bucket_header), Some(remaining), Some(limit), Some(reset_after)) = (
            headers.bucket.as_deref(),
            headers.remaining,
            headers.limit,
            headers.reset_after,
        ) else {
            return;
        };

        let reset_at = Instant::now() + Duration::from_secs_f64(reset_after.max(0.0));
        let full_hash = real_hash(bucket_header, major);
        let max_rate_limit = self.inner.max_rate_limit;

        self.inner.with_maps(|maps| {
            maps.routes_to_hashes
                .insert(route_key.to_string(), bucket_header.to_string());

            let bucket = match maps.buckets.get(&full_hash) {
                Some(bucket) => Arc::clone(bucket),
                None => {
                    let placeholder = unknown_hash(route_key, major);
                    let bucket = match maps.buckets.remove(&placeholder) {
                        Some(bucket) => {
                            debug!(
                                route = route_key,
                                bucket = %full_hash,
                                "resolved placeholder to real bucket"
                            );
                            bucket.resolve(full_hash.clone());
                            bucket
                        }
                        None => {
                            debug!(route = route_key, bucket = %full_hash, "created real bucket");
                            Arc::new(RestBucket::new(full_hash.clone(), max_rate_limit))
                        }
                    };
                    maps.buckets.insert(full_hash.clone(), Arc::clone(&bucket));
                    bucket
                }
            };

            debug!(
                route = route_key,
                bucket = %full_hash,
                reset_after_s = reset_after,
                limit,
                remaining,
                "updated bucket from response headers"
            );
            bucket.update(remaining, limit, reset_at);
        });
    }

    /// How many buckets are currently tracked.
    pub fn bucket_count(&self) -> usize {
        self.inner.with_maps(|maps| maps.buckets.len())
    }

    /// Run one collection pass immediately.
    pub fn gc_pass(&self, expire_after: Duration) {
        self.inner.gc_pass(expire_after);
    }
}

impl Drop for RestBucketManager {
    fn drop(&mut self) {
        self.close();
    }
}
