//! Channel models.

use crate::Snowflake;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The type of a channel, as transmitted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ChannelType {
    /// A text channel within a guild
    GuildText = 0,
    /// A direct message between users
    Dm = 1,
    /// A voice channel within a guild
    GuildVoice = 2,
    /// A direct message between multiple users
    GroupDm = 3,
    /// An organizational category
    GuildCategory = 4,
    /// An announcement channel
    GuildAnnouncement = 5,
    /// A thread under an announcement channel
    AnnouncementThread = 10,
    /// A public thread
    PublicThread = 11,
    /// A private thread
    PrivateThread = 12,
    /// A stage voice channel
    GuildStageVoice = 13,
    /// A hub directory channel
    GuildDirectory = 14,
    /// A forum channel
    GuildForum = 15,
    /// A media channel
    GuildMedia = 16,
}

/// Whether a permission overwrite targets a role or a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum OverwriteType {
    /// The overwrite applies to a role
    Role = 0,
    /// The overwrite applies to a member
    Member = 1,
}

/// A permission overwrite on a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    /// Role or user id
    pub id: Snowflake,
    /// Whether this targets a role or a member
    #[serde(rename = "type")]
    pub kind: OverwriteType,
    /// Permission bit set explicitly allowed, as a string-encoded integer
    pub allow: String,
    /// Permission bit set explicitly denied, as a string-encoded integer
    pub deny: String,
}

/// Metadata carried only by thread channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMetadata {
    /// Whether the thread is archived
    pub archived: bool,
    /// Minutes of inactivity before auto-archive
    pub auto_archive_duration: u32,
    /// When the archive status last changed
    pub archive_timestamp: String,
    /// Whether the thread is locked
    #[serde(default)]
    pub locked: bool,
    /// Whether non-moderators can add members (private threads)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
}

/// A guild or DM channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// The channel's id
    pub id: Snowflake,
    /// The channel type
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// The guild owning this channel, absent for DMs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// Sorting position within the guild
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Explicit permission overwrites
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<PermissionOverwrite>,
    /// The channel name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The channel topic, up to 1024 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Whether the channel is age-restricted
    #[serde(default)]
    pub nsfw: bool,
    /// Id of the most recent message, may point at a deleted message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,
    /// Voice bitrate in bits per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// Voice user limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    /// Slowmode interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u32>,
    /// Parent category, or owning channel for threads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// Creator of a thread or group DM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
    /// Approximate message count in a thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u32>,
    /// Approximate member count in a thread, capped at 50
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    /// Thread-only metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_metadata: Option<ThreadMetadata>,
}
