//! Parsing of the `X-RateLimit-*` response headers.

/// The rate limit fields carried on a REST response.
///
/// Header names are matched case-insensitively by HTTP clients, so the
/// constants here use the lowercase form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateLimitHeaders {
    /// `X-RateLimit-Limit`: the burst capacity of the bucket.
    pub limit: Option<u64>,
    /// `X-RateLimit-Remaining`: requests left in the current window.
    pub remaining: Option<u64>,
    /// `X-RateLimit-Bucket`: the bucket hash shared across major parameters.
    pub bucket: Option<String>,
    /// `X-RateLimit-Reset-After`: seconds until the window resets, with
    /// millisecond precision.
    pub reset_after: Option<f64>,
}

impl RateLimitHeaders {
    /// Header carrying the bucket's burst capacity.
    pub const LIMIT: &'static str = "x-ratelimit-limit";
    /// Header carrying the remaining request count.
    pub const REMAINING: &'static str = "x-ratelimit-remaining";
    /// Header carrying the bucket hash.
    pub const BUCKET: &'static str = "x-ratelimit-bucket";
    /// Header carrying the seconds until reset.
    pub const RESET_AFTER: &'static str = "x-ratelimit-reset-after";

    /// Build from a header lookup function, typically a closure over a
    /// response's header map. Unparseable values read as absent.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            limit: get(Self::LIMIT).and_then(|v| v.parse().ok()),
            remaining: get(Self::REMAINING).and_then(|v| v.parse().ok()),
            bucket: get(Self::BUCKET),
            reset_after: get(Self::RESET_AFTER).and_then(|v| v.parse().ok()),
        }
    }

    /// Whether every field needed to update a bucket is present.
    ///
    /// Some endpoints omit the headers entirely; an incomplete set must be
    /// ignored rather than partially applied.
    pub fn is_complete(&self) -> bool {
        self.limit.is_some()
            && self.remaining.is_some()
            && self.bucket.is_some()
            && self.reset_after.is_some()
    }
}
