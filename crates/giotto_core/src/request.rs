//! Request bodies for the REST endpoints.
//!
//! Each struct serializes only the fields that were set, so an empty builder
//! produces an empty JSON object and the API leaves unset fields untouched.

use crate::{
    AllowedMentions, ChannelType, Embed, MessageReference, PermissionOverwrite,
    ScheduledEventEntityMetadata, ScheduledEventEntityType, ScheduledEventPrivacyLevel, Snowflake,
};
use derive_setters::Setters;
use serde::Serialize;

/// Body of a message creation request.
///
/// ```
/// use giotto_core::CreateMessage;
///
/// let body = CreateMessage::default()
///     .content("ciao")
///     .tts(false);
/// assert_eq!(body.content.as_deref(), Some("ciao"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct CreateMessage {
    /// Text content, up to 2000 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Whether to send as text-to-speech
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    /// Embeds, up to 10
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[setters(skip)]
    pub embeds: Vec<Embed>,
    /// Mention controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Reply target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReference>,
    /// Ids of guild stickers to send, up to 3
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[setters(skip)]
    pub sticker_ids: Vec<Snowflake>,
}

impl CreateMessage {
    /// Append an embed.
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Mark this message as a reply to another message in the same channel.
    pub fn reply_to(self, message_id: Snowflake) -> Self {
        self.message_reference(MessageReference {
            message_id: Some(message_id),
            ..MessageReference::default()
        })
    }
}

/// Body of a message edit request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct EditMessage {
    /// Replacement content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Replacement embeds; an empty vec is not sent
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[setters(skip)]
    pub embeds: Vec<Embed>,
    /// Mention controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Replacement flags; only SUPPRESS_EMBEDS can be toggled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl EditMessage {
    /// Append an embed.
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }
}

/// Body of a webhook execution request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct ExecuteWebhook {
    /// Text content, up to 2000 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Override the webhook's default name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Override the webhook's default avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whether to send as text-to-speech
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    /// Embeds, up to 10
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[setters(skip)]
    pub embeds: Vec<Embed>,
    /// Mention controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
}

impl ExecuteWebhook {
    /// Append an embed.
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }
}

/// Body of a webhook creation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct CreateWebhook {
    /// The webhook name, 1-80 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Image data URI for the default avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Body of a guild role creation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct CreateGuildRole {
    /// The role name, defaults to "new role"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Permission bit set as a string-encoded integer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    /// Integer RGB color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Whether to pin the role in the sidebar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoist: Option<bool>,
    /// Whether the role is mentionable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentionable: Option<bool>,
}

/// Body of a guild channel creation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct CreateGuildChannel {
    /// The channel name, 1-100 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The channel type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChannelType>,
    /// The channel topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Voice bitrate in bits per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// Voice user limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    /// Slowmode interval in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u32>,
    /// Sorting position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Explicit permission overwrites
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[setters(skip)]
    pub permission_overwrites: Vec<PermissionOverwrite>,
    /// Parent category id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// Whether the channel is age-restricted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

impl CreateGuildChannel {
    /// Append a permission overwrite.
    pub fn overwrite(mut self, overwrite: PermissionOverwrite) -> Self {
        self.permission_overwrites.push(overwrite);
        self
    }
}

/// Body of a channel modification request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct ModifyChannel {
    /// Replacement name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Replacement position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Replacement age restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    /// Replacement slowmode interval in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u32>,
    /// Replacement voice bitrate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// Replacement voice user limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    /// Replacement parent category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// Archive or unarchive a thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Lock or unlock a thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

/// Body of a guild modification request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct ModifyGuild {
    /// Replacement name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement verification level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<u8>,
    /// Replacement AFK channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Snowflake>,
    /// Replacement AFK timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    /// Replacement system messages channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Snowflake>,
    /// Replacement rules channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_channel_id: Option<Snowflake>,
    /// Replacement description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement preferred locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_locale: Option<String>,
}

/// Body of a guild member modification request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct ModifyGuildMember {
    /// Replacement nickname; requires manage-nicknames
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Replacement role set; requires manage-roles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Snowflake>>,
    /// Server-mute or unmute; requires mute-members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    /// Server-deafen or undeafen; requires deafen-members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
    /// Move to a voice channel, or null to disconnect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Timeout expiry, up to 28 days out; requires moderate-members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<String>,
}

/// Body of a scheduled event creation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
pub struct CreateScheduledEvent {
    /// The stage or voice channel, omit for external events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Location details, external events only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_metadata: Option<ScheduledEventEntityMetadata>,
    /// The event name, 1-100 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Visibility level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<ScheduledEventPrivacyLevel>,
    /// When the event starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_time: Option<String>,
    /// When the event ends, required for external events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<String>,
    /// The event description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the event takes place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<ScheduledEventEntityType>,
}
