//! Gateway error types.

/// A close frame received from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{} ({})", code, reason)]
pub struct CloseFrame {
    /// The close code sent by the server
    pub code: u16,
    /// The close reason, if any
    pub reason: String,
}

/// Error kinds for gateway operations.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum GatewayErrorKind {
    /// Establishing or negotiating the websocket failed.
    #[display("Connection failed: {}", _0)]
    Connection(String),
    /// The server violated the expected handshake sequence.
    #[display("Protocol violation: {}", _0)]
    Protocol(String),
    /// The server closed the connection with a close frame.
    ///
    /// `can_resume` records whether the close code permits resuming the
    /// session on reconnect, per the shard's close-code table.
    #[display("Server closed the connection with {}", frame)]
    ServerClosed {
        /// The close frame received
        frame: CloseFrame,
        /// Whether the session may be resumed after this closure
        can_resume: bool,
    },
    /// The socket ended without a close frame.
    #[display("Socket closed unexpectedly")]
    SocketClosed,
    /// The shard was asked to shut down and has done so.
    #[display("Gateway client was shut down")]
    ClientClosed,
}

/// Gateway error with source location tracking.
///
/// # Examples
///
/// ```
/// use giotto_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Protocol(
///     "expected HELLO".to_string(),
/// ));
/// assert!(format!("{}", err).contains("expected HELLO"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    kind: GatewayErrorKind,
    line: u32,
    file: &'static str,
}

impl GatewayError {
    /// Create a new gateway error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GatewayErrorKind {
        &self.kind
    }

    /// Whether the session may be resumed after this error.
    ///
    /// Connection failures and unexpected socket closures are always worth a
    /// resume attempt; server closures defer to the close-code table.
    pub fn can_resume(&self) -> bool {
        match &self.kind {
            GatewayErrorKind::Connection(_) | GatewayErrorKind::SocketClosed => true,
            GatewayErrorKind::ServerClosed { can_resume, .. } => *can_resume,
            GatewayErrorKind::Protocol(_) | GatewayErrorKind::ClientClosed => false,
        }
    }
}

impl<T> From<T> for GatewayError
where
    T: Into<GatewayErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
