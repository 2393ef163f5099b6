//! Dispatch events surfaced to the caller.

use crate::payload::Ready;
use giotto_core::{Channel, Guild, Interaction, Member, Message, Role, Snowflake, User};
use giotto_error::{GiottoResult, JsonError};
use serde::{Deserialize, Serialize};

/// Data of a MESSAGE_DELETE dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDelete {
    /// The deleted message's id
    pub id: Snowflake,
    /// The channel it was in
    pub channel_id: Snowflake,
    /// The guild it was in, absent for DMs
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
}

/// Data of a GUILD_MEMBER_REMOVE dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRemove {
    /// The guild the member left
    pub guild_id: Snowflake,
    /// The departed user
    pub user: User,
}

/// Data of a GUILD_DELETE dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildDelete {
    /// The guild's id
    pub id: Snowflake,
    /// Set when the guild went unavailable rather than removing the bot
    #[serde(default)]
    pub unavailable: bool,
}

/// Data of a role lifecycle dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleUpdate {
    /// The guild the role belongs to
    pub guild_id: Snowflake,
    /// The created or updated role
    pub role: Role,
}

/// Data of a GUILD_ROLE_DELETE dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDelete {
    /// The guild the role belonged to
    pub guild_id: Snowflake,
    /// The deleted role's id
    pub role_id: Snowflake,
}

/// An event received from the gateway.
///
/// Large payloads are boxed so the enum stays small enough to pass through
/// channels cheaply. Dispatches the library has no typed model for arrive as
/// [`Event::Unknown`] with the raw data attached.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The session is live; carries the session id and the bot's user.
    Ready(Box<Ready>),
    /// A dropped session was resumed; missed dispatches were replayed.
    Resumed,
    /// A message was sent.
    MessageCreate(Box<Message>),
    /// A message was edited.
    MessageUpdate(Box<Message>),
    /// A message was deleted.
    MessageDelete(MessageDelete),
    /// A guild became available, or the bot joined one.
    GuildCreate(Box<Guild>),
    /// A guild's settings changed.
    GuildUpdate(Box<Guild>),
    /// A guild became unavailable, or the bot left it.
    GuildDelete(GuildDelete),
    /// A member joined a guild.
    MemberAdd(Box<Member>),
    /// A member's guild profile changed.
    MemberUpdate(Box<Member>),
    /// A member left a guild, by choice or otherwise.
    MemberRemove(MemberRemove),
    /// A role was created.
    RoleCreate(RoleUpdate),
    /// A role changed.
    RoleUpdate(RoleUpdate),
    /// A role was deleted.
    RoleDelete(RoleDelete),
    /// A channel was created.
    ChannelCreate(Box<Channel>),
    /// A channel changed.
    ChannelUpdate(Box<Channel>),
    /// A channel was deleted.
    ChannelDelete(Box<Channel>),
    /// A user invoked a command or component.
    InteractionCreate(Box<Interaction>),
    /// A dispatch without a typed model.
    Unknown {
        /// The dispatch name as sent on the wire
        name: String,
        /// The raw payload data
        data: serde_json::Value,
    },
}

impl Event {
    /// Decode a dispatch from its wire name and data.
    pub fn parse(name: &str, data: serde_json::Value) -> GiottoResult<Self> {
        fn decode<T: serde::de::DeserializeOwned>(
            name: &str,
            data: serde_json::Value,
        ) -> GiottoResult<T> {
            serde_json::from_value(data)
                .map_err(|e| JsonError::new(format!("Failed to decode {name}: {e}")).into())
        }

        let event = match name {
            "READY" => Self::Ready(Box::new(decode(name, data)?)),
            "RESUMED" => Self::Resumed,
            "MESSAGE_CREATE" => Self::MessageCreate(Box::new(decode(name, data)?)),
            "MESSAGE_UPDATE" => Self::MessageUpdate(Box::new(decode(name, data)?)),
            "MESSAGE_DELETE" => Self::MessageDelete(decode(name, data)?),
            "GUILD_CREATE" => Self::GuildCreate(Box::new(decode(name, data)?)),
            "GUILD_UPDATE" => Self::GuildUpdate(Box::new(decode(name, data)?)),
            "GUILD_DELETE" => Self::GuildDelete(decode(name, data)?),
            "GUILD_MEMBER_ADD" => Self::MemberAdd(Box::new(decode(name, data)?)),
            "GUILD_MEMBER_UPDATE" => Self::MemberUpdate(Box::new(decode(name, data)?)),
            "GUILD_MEMBER_REMOVE" => Self::MemberRemove(decode(name, data)?),
            "GUILD_ROLE_CREATE" => Self::RoleCreate(decode(name, data)?),
            "GUILD_ROLE_UPDATE" => Self::RoleUpdate(decode(name, data)?),
            "GUILD_ROLE_DELETE" => Self::RoleDelete(decode(name, data)?),
            "CHANNEL_CREATE" => Self::ChannelCreate(Box::new(decode(name, data)?)),
            "CHANNEL_UPDATE" => Self::ChannelUpdate(Box::new(decode(name, data)?)),
            "CHANNEL_DELETE" => Self::ChannelDelete(Box::new(decode(name, data)?)),
            "INTERACTION_CREATE" => Self::InteractionCreate(Box::new(decode(name, data)?)),
            _ => Self::Unknown {
                name: name.to_string(),
                data,
            },
        };
        Ok(event)
    }

    /// The wire name of this event.
    pub fn name(&self) -> &str {
        match self {
            Self::Ready(_) => "READY",
            Self::Resumed => "RESUMED",
            Self::MessageCreate(_) => "MESSAGE_CREATE",
            Self::MessageUpdate(_) => "MESSAGE_UPDATE",
            Self::MessageDelete(_) => "MESSAGE_DELETE",
            Self::GuildCreate(_) => "GUILD_CREATE",
            Self::GuildUpdate(_) => "GUILD_UPDATE",
            Self::GuildDelete(_) => "GUILD_DELETE",
            Self::MemberAdd(_) => "GUILD_MEMBER_ADD",
            Self::MemberUpdate(_) => "GUILD_MEMBER_UPDATE",
            Self::MemberRemove(_) => "GUILD_MEMBER_REMOVE",
            Self::RoleCreate(_) => "GUILD_ROLE_CREATE",
            Self::RoleUpdate(_) => "GUILD_ROLE_UPDATE",
            Self::RoleDelete(_) => "GUILD_ROLE_DELETE",
            Self::ChannelCreate(_) => "CHANNEL_CREATE",
            Self::ChannelUpdate(_) => "CHANNEL_UPDATE",
            Self::ChannelDelete(_) => "CHANNEL_DELETE",
            Self::InteractionCreate(_) => "INTERACTION_CREATE",
            Self::Unknown { name, .. } => name,
        }
    }
}
