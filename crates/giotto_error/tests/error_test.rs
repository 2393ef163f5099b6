use giotto_error::{
    BulkDeleteError, CloseFrame, GatewayError, GatewayErrorKind, GiottoError, GiottoErrorKind,
    RestError, RestErrorKind, RetryableError,
};

#[test]
fn test_rest_kind_maps_documented_statuses() {
    let kind = RestErrorKind::from_status(400, 50006, "Cannot send an empty message".to_string());
    assert!(matches!(kind, RestErrorKind::BadRequest { code: 50006, .. }));

    let kind = RestErrorKind::from_status(401, 0, "401: Unauthorized".to_string());
    assert!(matches!(kind, RestErrorKind::Unauthorized { .. }));

    let kind = RestErrorKind::from_status(403, 50013, "Missing Permissions".to_string());
    assert!(matches!(kind, RestErrorKind::Forbidden { code: 50013, .. }));

    let kind = RestErrorKind::from_status(404, 10003, "Unknown Channel".to_string());
    assert!(matches!(kind, RestErrorKind::NotFound { .. }));

    let kind = RestErrorKind::from_status(502, 0, "bad gateway".to_string());
    assert!(matches!(kind, RestErrorKind::Internal { status: 502, .. }));

    let kind = RestErrorKind::from_status(418, 0, "teapot".to_string());
    assert!(matches!(kind, RestErrorKind::Unexpected { status: 418, .. }));
}

#[test]
fn test_only_rate_limits_and_server_errors_retry() {
    let retryable = RestError::new(RestErrorKind::RateLimited {
        retry_after: 1.5,
        global: false,
    });
    assert!(retryable.is_retryable());
    assert_eq!(retryable.retry_after(), Some(1.5));

    let retryable = RestError::new(RestErrorKind::Internal {
        status: 500,
        message: "oops".to_string(),
    });
    assert!(retryable.is_retryable());

    let permanent = RestError::new(RestErrorKind::Forbidden {
        code: 50013,
        message: "Missing Permissions".to_string(),
    });
    assert!(!permanent.is_retryable());
    assert_eq!(permanent.retry_after(), None);
}

#[test]
fn test_gateway_resumability_follows_the_kind() {
    let conn = GatewayError::new(GatewayErrorKind::Connection("refused".to_string()));
    assert!(conn.can_resume());

    let resumable = GatewayError::new(GatewayErrorKind::ServerClosed {
        frame: CloseFrame {
            code: 4009,
            reason: "Session timed out".to_string(),
        },
        can_resume: true,
    });
    assert!(resumable.can_resume());

    let fatal = GatewayError::new(GatewayErrorKind::ServerClosed {
        frame: CloseFrame {
            code: 4004,
            reason: "Authentication failed".to_string(),
        },
        can_resume: false,
    });
    assert!(!fatal.can_resume());
}

#[test]
fn test_errors_capture_their_construction_site() {
    let err = RestError::new(RestErrorKind::NotFound {
        message: "Unknown Webhook".to_string(),
    });
    assert!(format!("{err}").contains("error_test.rs"));
}

#[test]
fn test_bulk_delete_reports_both_halves() {
    let source = RestError::new(RestErrorKind::Forbidden {
        code: 50013,
        message: "Missing Permissions".to_string(),
    });
    let err = BulkDeleteError::new(vec![1, 2], vec![3, 4, 5], source);
    let wrapped: GiottoError = err.into();
    match wrapped.kind() {
        GiottoErrorKind::BulkDelete(bulk) => {
            assert_eq!(bulk.deleted, vec![1, 2]);
            assert_eq!(bulk.failed, vec![3, 4, 5]);
        }
        other => panic!("unexpected kind: {other}"),
    }
}
