//! Gateway operation codes.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// The opcode of a gateway payload.
///
/// Send and receive directions share one numbering; the doc comment on each
/// variant notes which way it travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Opcode {
    /// An event dispatch. Receive.
    Dispatch = 0,
    /// Keepalive ping carrying the last seen sequence number. Send, or
    /// receive as a demand for an immediate beat.
    Heartbeat = 1,
    /// Start a new session. Send.
    Identify = 2,
    /// Update the bot's presence. Send.
    PresenceUpdate = 3,
    /// Join, move, or leave a voice channel. Send.
    VoiceStateUpdate = 4,
    /// Resume a disconnected session. Send.
    Resume = 6,
    /// The server wants the client to reconnect and resume. Receive.
    Reconnect = 7,
    /// Request guild member chunks. Send.
    RequestGuildMembers = 8,
    /// The session is invalid; the payload data says whether it can be
    /// resumed. Receive.
    InvalidSession = 9,
    /// First payload after connecting, carries the heartbeat interval.
    /// Receive.
    Hello = 10,
    /// Acknowledgement of a heartbeat. Receive.
    HeartbeatAck = 11,
}
