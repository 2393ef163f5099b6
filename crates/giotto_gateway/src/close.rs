//! Close-code classification.
//!
//! The gateway reports why it hung up through websocket close codes. One
//! answer matters to the shard: can the session be resumed, or is the
//! failure one no reconnect will fix.

/// The server did not recognize the last payload's opcode.
pub const UNKNOWN_OPCODE: u16 = 4001;
/// Authentication failed; the token is wrong.
pub const AUTHENTICATION_FAILED: u16 = 4004;
/// A payload was sent before identifying.
pub const NOT_AUTHENTICATED: u16 = 4003;
/// The shard id/count pair sent on IDENTIFY was invalid.
pub const INVALID_SHARD: u16 = 4010;
/// The guild count requires sharding.
pub const SHARDING_REQUIRED: u16 = 4011;
/// The requested gateway version does not exist.
pub const INVALID_VERSION: u16 = 4012;
/// The intents bit set was malformed.
pub const INVALID_INTENTS: u16 = 4013;
/// A privileged intent was requested but not enabled for the application.
pub const DISALLOWED_INTENTS: u16 = 4014;

/// Whether a close code permits resuming the session.
///
/// Everything below the 4000 range is transport-level noise and resumable.
/// Within the 4000 range, only a handful of server-side hiccups keep the
/// session alive: unknown error (4000), decode error (4002), invalid seq
/// (4007), rate limited (4008), and session timeout (4009).
pub const fn is_resumable(code: u16) -> bool {
    if code < 4000 {
        return true;
    }
    matches!(code, 4000 | 4002 | 4007 | 4008 | 4009)
}

/// Whether a close code signals a failure that reconnecting cannot fix.
///
/// Every gateway-range code outside the resumable set is fatal. Bad
/// credentials, bad sharding, and bad intents fail identically on every
/// attempt, and the remaining codes (unknown opcode, not authenticated,
/// already authenticated) report a client bug that reconnecting would only
/// replay.
pub const fn is_fatal(code: u16) -> bool {
    code >= 4000 && !is_resumable(code)
}
