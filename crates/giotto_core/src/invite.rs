//! Invite models.

use crate::{Channel, Guild, User};
use serde::{Deserialize, Serialize};

/// An invite to a guild or group DM channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    /// The unique invite code
    pub code: String,
    /// The guild the invite points into, partial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<Guild>,
    /// The channel the invite points at, partial
    #[serde(default)]
    pub channel: Option<Channel>,
    /// The user that created the invite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inviter: Option<User>,
    /// Approximate online count, with_counts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<u32>,
    /// Approximate member count, with_counts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<u32>,
    /// When the invite expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Total uses, present when fetched from guild endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<u32>,
    /// Maximum uses, 0 for unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    /// Lifetime in seconds, 0 for never expiring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// Whether the invite only grants temporary membership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    /// When the invite was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
