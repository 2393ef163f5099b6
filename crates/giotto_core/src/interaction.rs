//! Interaction models.

use crate::{AllowedMentions, Channel, CommandOptionType, Embed, Member, Message, Snowflake, User};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The type of an incoming interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum InteractionType {
    /// The URL-verification ping
    Ping = 1,
    /// An application command invocation
    ApplicationCommand = 2,
    /// A component press or selection
    MessageComponent = 3,
    /// An autocomplete request
    ApplicationCommandAutocomplete = 4,
    /// A modal submission
    ModalSubmit = 5,
}

/// The way a bot responds to an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum InteractionCallbackType {
    /// Acknowledge a ping
    Pong = 1,
    /// Respond with a message
    ChannelMessageWithSource = 4,
    /// Acknowledge now, edit a response in later
    DeferredChannelMessageWithSource = 5,
    /// Acknowledge a component press, edit the message later
    DeferredUpdateMessage = 6,
    /// Edit the message a component lives on
    UpdateMessage = 7,
}

/// An option value supplied with a command invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionDataOption {
    /// The option name
    pub name: String,
    /// The option type
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    /// The supplied value, absent for subcommands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Nested values for subcommands and groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<InteractionDataOption>,
}

/// The command- or component-specific payload of an interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionData {
    /// Invoked command id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    /// Invoked command name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Supplied option values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<InteractionDataOption>,
    /// Developer-assigned component id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Component type, component interactions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<u8>,
    /// Selected values, select-menu interactions only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// An incoming interaction delivered over the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// The interaction's id
    pub id: Snowflake,
    /// The owning application
    pub application_id: Snowflake,
    /// The interaction type
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// The command or component payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionData>,
    /// The guild it came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// The channel it came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    /// The invoking member, guild interactions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
    /// The invoking user, DM interactions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// The continuation token for responding, valid 15 minutes
    pub token: String,
    /// The message a component lives on, component interactions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
}

impl Interaction {
    /// The user that triggered the interaction, whichever shape carried it.
    pub fn invoking_user(&self) -> Option<&User> {
        self.user
            .as_ref()
            .or_else(|| self.member.as_ref().and_then(|m| m.user.as_ref()))
    }
}

/// The message body of an interaction response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionCallbackData {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Embeds, up to 10
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    /// Mention controls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Message flags; 64 marks the response ephemeral
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

/// A complete interaction response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionCallback {
    /// The response type
    #[serde(rename = "type")]
    pub kind: InteractionCallbackType,
    /// The message body, when the type carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

impl InteractionCallback {
    /// Respond immediately with a plain text message.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: InteractionCallbackType::ChannelMessageWithSource,
            data: Some(InteractionCallbackData {
                content: Some(content.into()),
                ..InteractionCallbackData::default()
            }),
        }
    }

    /// Acknowledge now and edit the response in later.
    pub fn deferred() -> Self {
        Self {
            kind: InteractionCallbackType::DeferredChannelMessageWithSource,
            data: None,
        }
    }

    /// Acknowledge a ping.
    pub fn pong() -> Self {
        Self {
            kind: InteractionCallbackType::Pong,
            data: None,
        }
    }
}
