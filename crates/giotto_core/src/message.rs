//! Message models.

use crate::{Embed, Member, Reaction, Snowflake, User};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The type of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum MessageType {
    /// An ordinary message
    Default = 0,
    /// A member joined a group DM
    RecipientAdd = 1,
    /// A member left a group DM
    RecipientRemove = 2,
    /// An incoming call
    Call = 3,
    /// A channel name change
    ChannelNameChange = 4,
    /// A channel icon change
    ChannelIconChange = 5,
    /// A pin notification
    ChannelPinnedMessage = 6,
    /// A member join notification
    UserJoin = 7,
    /// A boost notification
    GuildBoost = 8,
    /// A reply to another message
    Reply = 19,
    /// A slash command invocation result
    ChatInputCommand = 20,
    /// A thread starter message
    ThreadStarterMessage = 21,
    /// A context menu command invocation result
    ContextMenuCommand = 23,
}

/// A reference from one message to another, used for replies and crossposts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageReference {
    /// The id of the referenced message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Snowflake>,
    /// The id of the referenced message's channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// The id of the referenced message's guild
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// Whether to error when the referenced message is gone, default true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_if_not_exists: Option<bool>,
}

/// Controls which mentions in a message actually notify.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllowedMentions {
    /// Mention types to parse from content: "roles", "users", "everyone"
    #[serde(default)]
    pub parse: Vec<String>,
    /// Role ids to mention, up to 100
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
    /// User ids to mention, up to 100
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<Snowflake>,
    /// Whether a reply pings the replied-to author
    #[serde(default)]
    pub replied_user: bool,
}

impl AllowedMentions {
    /// Suppress every mention in the message.
    pub fn none() -> Self {
        Self::default()
    }
}

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// The attachment's id
    pub id: Snowflake,
    /// The original file name
    pub filename: String,
    /// Size in bytes
    pub size: u64,
    /// Source URL
    pub url: String,
    /// Proxied URL
    pub proxy_url: String,
    /// The media type, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Image height, if an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Image width, if an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// A message in a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The message's id
    pub id: Snowflake,
    /// The channel the message was sent in
    pub channel_id: Snowflake,
    /// The guild the message was sent in, absent for DMs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// The author; a partial webhook user for webhook messages
    pub author: User,
    /// The author's member data, present in guild dispatch payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
    /// The text content; empty without the message-content intent
    #[serde(default)]
    pub content: String,
    /// When the message was sent
    pub timestamp: String,
    /// When the message was last edited
    #[serde(default)]
    pub edited_timestamp: Option<String>,
    /// Whether this is a text-to-speech message
    #[serde(default)]
    pub tts: bool,
    /// Whether the message mentions everyone
    #[serde(default)]
    pub mention_everyone: bool,
    /// Users mentioned in the message
    #[serde(default)]
    pub mentions: Vec<User>,
    /// Attached files
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Attached embeds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    /// Reactions on the message
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<Reaction>,
    /// Whether the message is pinned
    #[serde(default)]
    pub pinned: bool,
    /// The webhook that produced the message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<Snowflake>,
    /// The message type
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// The message this one references, for replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReference>,
    /// The replied-to message, resolved by the API for replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_message: Option<Box<Message>>,
}
