//! Core data types for the Giotto Discord API library.
//!
//! This crate provides the identifier, flag, and entity types shared by the
//! REST and gateway crates, along with request builders and validation for
//! Discord's documented payload limits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod command;
mod embed;
mod emoji;
mod guild;
mod intents;
mod interaction;
mod invite;
mod message;
mod presence;
mod request;
mod scheduled_event;
mod snowflake;
mod user;
pub mod validate;
mod webhook;

pub use channel::{Channel, ChannelType, PermissionOverwrite, OverwriteType, ThreadMetadata};
pub use command::{
    ApplicationCommand, CommandOption, CommandOptionChoice, CommandOptionType, CommandType,
};
pub use embed::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider, EmbedThumbnail,
    EmbedVideo,
};
pub use emoji::{Emoji, Reaction};
pub use guild::{Ban, Guild, Member, PartialGuild, Role, RoleTags, UnavailableGuild};
pub use intents::Intents;
pub use interaction::{
    Interaction, InteractionCallback, InteractionCallbackData, InteractionCallbackType,
    InteractionData, InteractionDataOption, InteractionType,
};
pub use invite::Invite;
pub use message::{AllowedMentions, Attachment, Message, MessageReference, MessageType};
pub use presence::{Activity, ActivityType, Status, UpdatePresence};
pub use request::{
    CreateGuildChannel, CreateGuildRole, CreateMessage, CreateScheduledEvent, CreateWebhook,
    EditMessage, ExecuteWebhook, ModifyChannel, ModifyGuild, ModifyGuildMember,
};
pub use scheduled_event::{
    ScheduledEvent, ScheduledEventEntityMetadata, ScheduledEventEntityType,
    ScheduledEventPrivacyLevel, ScheduledEventStatus,
};
pub use snowflake::Snowflake;
pub use user::User;
pub use webhook::{Webhook, WebhookType};
