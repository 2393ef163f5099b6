use giotto_gateway::close;

#[test]
fn test_transport_level_codes_are_resumable() {
    // Normal closure, going away, abnormal closure.
    assert!(close::is_resumable(1000));
    assert!(close::is_resumable(1001));
    assert!(close::is_resumable(1006));
}

#[test]
fn test_resumable_gateway_codes() {
    // Unknown error, decode error, invalid seq, rate limited, session timeout.
    for code in [4000, 4002, 4007, 4008, 4009] {
        assert!(close::is_resumable(code), "{code} should be resumable");
    }
}

#[test]
fn test_fatal_codes() {
    // Auth, sharding, and intent failures replay identically.
    for code in [4004, 4010, 4011, 4012, 4013, 4014] {
        assert!(close::is_fatal(code), "{code} should be fatal");
        assert!(!close::is_resumable(code), "{code} should not be resumable");
    }
}

#[test]
fn test_client_fault_codes_are_fatal() {
    // Unknown opcode, not authenticated, already authenticated, invalid
    // session: reconnecting would only replay the client bug.
    for code in [4001, 4003, 4005, 4006] {
        assert!(close::is_fatal(code), "{code} should be fatal");
        assert!(!close::is_resumable(code), "{code} should not be resumable");
    }
}

#[test]
fn test_resumable_codes_are_never_fatal() {
    for code in [1000, 4000, 4002, 4007, 4008, 4009] {
        assert!(!close::is_fatal(code));
    }
}
