//! Webhook models.

use crate::{Snowflake, User};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The type of a webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum WebhookType {
    /// A standard incoming webhook posting into a channel
    Incoming = 1,
    /// An internal channel-follower webhook
    ChannelFollower = 2,
    /// An interaction response webhook
    Application = 3,
}

/// A webhook attached to a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// The webhook's id
    pub id: Snowflake,
    /// The webhook type
    #[serde(rename = "type")]
    pub kind: WebhookType,
    /// The guild the webhook posts into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// The channel the webhook posts into
    #[serde(default)]
    pub channel_id: Option<Snowflake>,
    /// The user that created the webhook, absent when fetched by token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// The default name
    #[serde(default)]
    pub name: Option<String>,
    /// The default avatar hash
    #[serde(default)]
    pub avatar: Option<String>,
    /// The secure execution token, incoming webhooks only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// The application that created the webhook
    #[serde(default)]
    pub application_id: Option<Snowflake>,
}
