//! Gateway wire payloads.

use crate::Opcode;
use giotto_core::{Intents, Snowflake, UnavailableGuild, UpdatePresence, User};
use serde::{Deserialize, Serialize};

/// The envelope every gateway message travels in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayPayload {
    /// The operation code
    pub op: Opcode,
    /// The payload data, shape determined by `op` (and `t` for dispatches)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<serde_json::Value>,
    /// Sequence number, only on dispatches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,
    /// Event name, only on dispatches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
}

impl GatewayPayload {
    /// Wrap data in an envelope for sending. Outbound payloads never carry
    /// `s` or `t`.
    pub fn send(op: Opcode, d: serde_json::Value) -> Self {
        Self {
            op,
            d: Some(d),
            s: None,
            t: None,
        }
    }
}

/// Data of the HELLO payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hello {
    /// Milliseconds between heartbeats
    pub heartbeat_interval: u64,
}

/// Library identification sent on IDENTIFY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProperties {
    /// The host operating system
    pub os: String,
    /// The library name
    pub browser: String,
    /// The library name again, per the documented shape
    pub device: String,
}

impl Default for ConnectionProperties {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            browser: "giotto".to_string(),
            device: "giotto".to_string(),
        }
    }
}

/// Data of the IDENTIFY payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identify {
    /// The bot token, without its `Bot ` prefix
    pub token: String,
    /// Library identification
    pub properties: ConnectionProperties,
    /// Subscribed event groups
    pub intents: Intents,
    /// This shard's `[id, count]` pair
    pub shard: [u32; 2],
    /// Member count past which offline members are withheld
    pub large_threshold: u32,
    /// Initial presence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<UpdatePresence>,
}

/// Data of the RESUME payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// The bot token, without its `Bot ` prefix
    pub token: String,
    /// The session being resumed
    pub session_id: String,
    /// The last sequence number seen before disconnecting
    pub seq: u64,
}

/// Data of the READY dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ready {
    /// The gateway version in use
    pub v: u8,
    /// The bot's own user
    pub user: User,
    /// The session id, needed to resume
    pub session_id: String,
    /// The URL resume attempts must connect to
    pub resume_gateway_url: String,
    /// Guilds the bot is in, delivered unavailable and filled in by
    /// subsequent GUILD_CREATE dispatches
    #[serde(default)]
    pub guilds: Vec<UnavailableGuild>,
    /// This shard's `[id, count]` pair, echoed back
    #[serde(default)]
    pub shard: Option<[u32; 2]>,
}

/// Data of the VOICE_STATE_UPDATE command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVoiceState {
    /// The guild whose voice state changes
    pub guild_id: Snowflake,
    /// The voice channel to join, or `None` to disconnect
    pub channel_id: Option<Snowflake>,
    /// Whether the bot mutes itself
    pub self_mute: bool,
    /// Whether the bot deafens itself
    pub self_deaf: bool,
}
