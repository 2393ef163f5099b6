use giotto_core::Snowflake;
use giotto_error::{GiottoError, GiottoErrorKind, RestErrorKind};
use giotto_http::{RestClient, RestConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn config_for(server: &MockServer) -> RestConfig {
    RestConfig {
        base_url: server.uri(),
        max_retries: 2,
        retry_backoff_ms: 10,
        ..RestConfig::default()
    }
}

fn rest_kind(error: GiottoError) -> RestErrorKind {
    match error.into_kind() {
        GiottoErrorKind::Rest(rest) => rest.kind().clone(),
        other => panic!("unexpected kind: {other}"),
    }
}

/// Counts requests while always returning the same response.
struct Counting {
    hits: Arc<AtomicUsize>,
    template: ResponseTemplate,
}

impl Respond for Counting {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.template.clone()
    }
}

/// Returns one response on the first request and another afterwards.
struct FirstThen {
    hits: Arc<AtomicUsize>,
    first: ResponseTemplate,
    then: ResponseTemplate,
}

impl Respond for FirstThen {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        if self.hits.fetch_add(1, Ordering::SeqCst) == 0 {
            self.first.clone()
        } else {
            self.then.clone()
        }
    }
}

#[tokio::test]
async fn test_client_builds_from_defaults() {
    let client = RestClient::new("abc123", &RestConfig::default()).unwrap();
    client.close();
}

#[tokio::test]
async fn test_client_accepts_prefixed_token() {
    let client = RestClient::new("Bot abc123", &RestConfig::default()).unwrap();
    client.close();
}

#[tokio::test]
async fn test_clones_share_rate_limit_state() {
    let client = RestClient::new("abc123", &RestConfig::default()).unwrap();
    let clone = client.clone();
    client.close();
    drop(clone);
}

#[tokio::test]
async fn test_error_statuses_map_onto_kinds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/channels/1/typing"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": 50013,
            "message": "Missing Permissions"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/channels/2/typing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": 10003,
            "message": "Unknown Channel"
        })))
        .mount(&server)
        .await;

    let client = RestClient::new("abc123", &config_for(&server)).unwrap();

    let err = client.trigger_typing(Snowflake::new(1)).await.unwrap_err();
    assert!(matches!(
        rest_kind(err),
        RestErrorKind::Forbidden { code: 50013, .. }
    ));

    let err = client.trigger_typing(Snowflake::new(2)).await.unwrap_err();
    assert!(matches!(rest_kind(err), RestErrorKind::NotFound { .. }));
    client.close();
}

#[tokio::test]
async fn test_server_errors_retry_until_exhausted() {
    let server = MockServer::start().await;
    let hits = Arc::new(AtomicUsize::new(0));
    Mock::given(method("POST"))
        .and(path("/channels/1/typing"))
        .respond_with(Counting {
            hits: hits.clone(),
            template: ResponseTemplate::new(502).set_body_string("bad gateway"),
        })
        .mount(&server)
        .await;

    let client = RestClient::new("abc123", &config_for(&server)).unwrap();
    let err = client.trigger_typing(Snowflake::new(1)).await.unwrap_err();
    assert!(matches!(
        rest_kind(err),
        RestErrorKind::Internal { status: 502, .. }
    ));
    // Initial attempt plus the configured retries.
    assert_eq!(hits.load(Ordering::SeqCst), 3);
    client.close();
}

#[tokio::test]
async fn test_headerless_429_waits_out_the_body_retry_after() {
    let server = MockServer::start().await;
    let hits = Arc::new(AtomicUsize::new(0));
    Mock::given(method("POST"))
        .and(path("/channels/1/typing"))
        .respond_with(FirstThen {
            hits: hits.clone(),
            first: ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "retry_after": 0.4,
                "global": false
            })),
            then: ResponseTemplate::new(204),
        })
        .mount(&server)
        .await;

    let client = RestClient::new("abc123", &config_for(&server)).unwrap();
    let started = Instant::now();
    client.trigger_typing(Snowflake::new(1)).await.unwrap();
    assert!(
        started.elapsed() >= Duration::from_millis(400),
        "retried after only {:?}",
        started.elapsed()
    );
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    client.close();
}

#[tokio::test]
async fn test_429_honors_the_further_of_body_and_header() {
    let server = MockServer::start().await;
    let hits = Arc::new(AtomicUsize::new(0));
    Mock::given(method("POST"))
        .and(path("/channels/1/typing"))
        .respond_with(FirstThen {
            hits: hits.clone(),
            first: ResponseTemplate::new(429)
                .insert_header("x-ratelimit-reset-after", "0.05")
                .set_body_json(serde_json::json!({
                    "retry_after": 0.35,
                    "global": false
                })),
            then: ResponseTemplate::new(204),
        })
        .mount(&server)
        .await;

    let client = RestClient::new("abc123", &config_for(&server)).unwrap();
    let started = Instant::now();
    client.trigger_typing(Snowflake::new(1)).await.unwrap();
    assert!(
        started.elapsed() >= Duration::from_millis(350),
        "retried after only {:?}",
        started.elapsed()
    );
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    client.close();
}

#[tokio::test]
async fn test_global_429_locks_until_the_deadline() {
    let server = MockServer::start().await;
    let hits = Arc::new(AtomicUsize::new(0));
    Mock::given(method("POST"))
        .and(path("/channels/1/typing"))
        .respond_with(FirstThen {
            hits: hits.clone(),
            first: ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "retry_after": 0.3,
                "global": true
            })),
            then: ResponseTemplate::new(204),
        })
        .mount(&server)
        .await;

    let client = RestClient::new("abc123", &config_for(&server)).unwrap();
    let started = Instant::now();
    client.trigger_typing(Snowflake::new(1)).await.unwrap();
    assert!(
        started.elapsed() >= Duration::from_millis(300),
        "retried after only {:?}",
        started.elapsed()
    );
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    client.close();
}

#[tokio::test]
async fn test_429_beyond_the_maximum_fails_without_retrying() {
    let server = MockServer::start().await;
    let hits = Arc::new(AtomicUsize::new(0));
    Mock::given(method("POST"))
        .and(path("/channels/1/typing"))
        .respond_with(Counting {
            hits: hits.clone(),
            template: ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "retry_after": 3600.0,
                "global": false
            })),
        })
        .mount(&server)
        .await;

    let config = RestConfig {
        max_rate_limit_secs: 5,
        ..config_for(&server)
    };
    let client = RestClient::new("abc123", &config).unwrap();
    let started = Instant::now();
    let err = client.trigger_typing(Snowflake::new(1)).await.unwrap_err();
    match rest_kind(err) {
        RestErrorKind::RateLimitTooLong {
            retry_after,
            max_retry_after,
            ..
        } => {
            assert!(retry_after >= 3600.0);
            assert_eq!(max_retry_after, 5.0);
        }
        other => panic!("unexpected kind: {other}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(started.elapsed() < Duration::from_secs(2));
    client.close();
}
