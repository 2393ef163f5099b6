//! The REST client core.

use crate::{CompiledRoute, Method, RestConfig};
use giotto_error::{GiottoError, GiottoResult, HttpError, JsonError, RestError, RestErrorKind};
use giotto_rate_limit::{GlobalRateLimiter, RateLimitHeaders, RestBucketManager};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry2::strategy::{jitter, ExponentialBackoff};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};

/// The user agent sent with every request, as the API documentation asks.
const USER_AGENT: &str = concat!(
    "DiscordBot (https://github.com/crumplecup/giotto, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Shape of the JSON body on an error response.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Shape of the JSON body on a 429 response.
#[derive(Debug, Deserialize)]
struct RateLimitBody {
    #[serde(default)]
    retry_after: f64,
    #[serde(default)]
    global: bool,
}

/// An HTTP client for the Discord REST API.
///
/// Handles authentication, per-bucket and global rate limits, and retries of
/// transient failures. Endpoint methods live in sibling modules grouped by
/// resource; they all funnel through [`request`](Self::request).
///
/// The client is cheap to clone; clones share the connection pool and rate
/// limit state.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
    buckets: Arc<RestBucketManager>,
    global: Arc<GlobalRateLimiter>,
    max_rate_limit: Duration,
    max_retries: usize,
    retry_backoff_ms: u64,
}

impl RestClient {
    /// Create a client from a bot token and settings.
    ///
    /// The token may be passed with or without its `Bot ` prefix.
    pub fn new(token: impl Into<String>, config: &RestConfig) -> GiottoResult<Self> {
        let raw = token.into();
        let token = if raw.starts_with("Bot ") {
            raw
        } else {
            format!("Bot {raw}")
        };

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {e}")))?;

        let buckets = Arc::new(RestBucketManager::new(config.max_rate_limit()));
        buckets.start();

        Ok(Self {
            http,
            token,
            base_url: config.base_url.clone(),
            buckets,
            global: Arc::new(GlobalRateLimiter::new()),
            max_rate_limit: config.max_rate_limit(),
            max_retries: config.max_retries,
            retry_backoff_ms: config.retry_backoff_ms,
        })
    }

    fn reqwest_method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    /// Perform one attempt: wait out rate limits, send, apply response
    /// headers. Returns the response body on success.
    async fn attempt(
        &self,
        route: &CompiledRoute,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
        reason: Option<&str>,
    ) -> Result<bytes::Bytes, RetryError<GiottoError>> {
        self.global.acquire().await;
        let lease = self
            .buckets
            .acquire(&route.route_key, &route.major)
            .await
            .map_err(|e| RetryError::Permanent(GiottoError::from(e)))?;

        let mut request = self
            .http
            .request(Self::reqwest_method(route.method), route.url(&self.base_url))
            .header(reqwest::header::AUTHORIZATION, &self.token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(reason) = reason {
            request = request.header("X-Audit-Log-Reason", reason);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                // Connection and timeout failures are worth retrying.
                warn!(route = %route, error = %e, "request failed to send");
                return Err(RetryError::Transient {
                    err: HttpError::new(format!("Request to {route} failed: {e}")).into(),
                    retry_after: None,
                });
            }
        };

        let status = response.status();
        let rate_headers = RateLimitHeaders::from_lookup(|name| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        });
        self.buckets
            .update_rate_limits(&route.route_key, &route.major, &rate_headers);

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return Err(RetryError::Transient {
                    err: HttpError::new(format!("Failed to read response from {route}: {e}"))
                        .into(),
                    retry_after: None,
                })
            }
        };
        drop(lease);

        if status.is_success() {
            return Ok(bytes);
        }

        if status.as_u16() == 429 {
            let parsed: RateLimitBody = serde_json::from_slice(&bytes).unwrap_or(RateLimitBody {
                retry_after: rate_headers.reset_after.unwrap_or(1.0),
                global: false,
            });
            // Body and header timings can disagree; honor whichever reaches
            // further into the future.
            let wait = parsed
                .retry_after
                .max(rate_headers.reset_after.unwrap_or(0.0));
            let wait = Duration::from_secs_f64(wait.max(0.0));
            if wait > self.max_rate_limit {
                return Err(RetryError::Permanent(
                    RestError::new(RestErrorKind::RateLimitTooLong {
                        bucket: route.route_key.clone(),
                        retry_after: wait.as_secs_f64(),
                        max_retry_after: self.max_rate_limit.as_secs_f64(),
                    })
                    .into(),
                ));
            }
            warn!(
                route = %route,
                global = parsed.global,
                wait_s = wait.as_secs_f64(),
                "rate limited by a 429 response"
            );
            // The retry driver only sleeps its own backoff schedule between
            // attempts, so the server's wait has to be served here: a global
            // limit locks the token until the deadline, a bucket limit is
            // slept out directly.
            if parsed.global {
                self.global.throttle(wait);
            } else {
                tokio::time::sleep(wait).await;
            }
            return Err(RetryError::Transient {
                err: RestError::new(RestErrorKind::RateLimited {
                    retry_after: wait.as_secs_f64(),
                    global: parsed.global,
                })
                .into(),
                retry_after: Some(wait),
            });
        }

        let parsed: ApiErrorBody = serde_json::from_slice(&bytes).unwrap_or(ApiErrorBody {
            code: 0,
            message: String::from_utf8_lossy(&bytes).into_owned(),
        });
        let error = RestError::new(RestErrorKind::from_status(
            status.as_u16(),
            parsed.code,
            parsed.message,
        ));
        if status.is_server_error() {
            Err(RetryError::Transient {
                err: error.into(),
                retry_after: None,
            })
        } else {
            Err(RetryError::Permanent(error.into()))
        }
    }

    /// Perform a request, retrying transient failures, and return the raw
    /// response body.
    #[instrument(skip(self, query, body, reason), fields(route = %route))]
    pub(crate) async fn request_raw(
        &self,
        route: CompiledRoute,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        reason: Option<&str>,
    ) -> GiottoResult<bytes::Bytes> {
        debug!("performing request");
        let strategy = ExponentialBackoff::from_millis(self.retry_backoff_ms)
            .factor(2)
            .max_delay(Duration::from_secs(60))
            .map(jitter)
            .take(self.max_retries);

        Retry::spawn(strategy, || {
            self.attempt(&route, query, body.as_ref(), reason)
        })
        .await
    }

    /// Perform a request and deserialize the JSON response.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        route: CompiledRoute,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        reason: Option<&str>,
    ) -> GiottoResult<T> {
        let bytes = self.request_raw(route, query, body, reason).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| JsonError::new(format!("Failed to deserialize response: {e}")).into())
    }

    /// Perform a request that returns no body.
    pub(crate) async fn request_empty(
        &self,
        route: CompiledRoute,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_raw(route, query, body, reason).await?;
        Ok(())
    }

    /// Serialize a request body, funneling serializer failures into the
    /// error hierarchy.
    pub(crate) fn body<T: serde::Serialize>(value: &T) -> GiottoResult<serde_json::Value> {
        serde_json::to_value(value)
            .map_err(|e| JsonError::new(format!("Failed to serialize request body: {e}")).into())
    }

    /// Stop background rate limit bookkeeping.
    ///
    /// Dropping the last clone does this implicitly.
    pub fn close(&self) {
        self.buckets.close();
    }
}
