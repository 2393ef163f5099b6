//! Guild scheduled event models.

use crate::{Snowflake, User};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Who can see a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ScheduledEventPrivacyLevel {
    /// Visible to guild members only
    GuildOnly = 2,
}

/// Where a scheduled event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ScheduledEventEntityType {
    /// In a stage channel
    StageInstance = 1,
    /// In a voice channel
    Voice = 2,
    /// Somewhere described in the entity metadata
    External = 3,
}

/// The lifecycle status of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ScheduledEventStatus {
    /// Not yet started
    Scheduled = 1,
    /// In progress
    Active = 2,
    /// Finished; terminal
    Completed = 3,
    /// Cancelled before starting; terminal
    Canceled = 4,
}

/// Location details for external events.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduledEventEntityMetadata {
    /// Free-form location text, 1-100 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A scheduled event within a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// The event's id
    pub id: Snowflake,
    /// The guild it belongs to
    pub guild_id: Snowflake,
    /// The stage or voice channel, null for external events
    #[serde(default)]
    pub channel_id: Option<Snowflake>,
    /// The user that created the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<Snowflake>,
    /// The event name, 1-100 characters
    pub name: String,
    /// The event description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the event starts
    pub scheduled_start_time: String,
    /// When the event ends, required for external events
    #[serde(default)]
    pub scheduled_end_time: Option<String>,
    /// Visibility level
    pub privacy_level: ScheduledEventPrivacyLevel,
    /// Lifecycle status
    pub status: ScheduledEventStatus,
    /// Where the event takes place
    pub entity_type: ScheduledEventEntityType,
    /// Location details for external events
    #[serde(default)]
    pub entity_metadata: Option<ScheduledEventEntityMetadata>,
    /// The creating user, partial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    /// How many users subscribed to the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u32>,
    /// Cover image hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
