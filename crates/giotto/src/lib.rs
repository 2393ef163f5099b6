//! Giotto - an async client library for the Discord REST and gateway APIs.
//!
//! Giotto covers the two halves of running a bot: a [`RestClient`] for the
//! HTTP API with server-driven rate limit handling, and a gateway [`Shard`]
//! that maintains the websocket session and delivers [`Event`]s.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use giotto::{Event, GiottoConfig, Intents, RestClient, Shard, ShardConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     giotto::init_telemetry();
//!
//!     let token = std::env::var("DISCORD_TOKEN")?;
//!     let config = GiottoConfig::load()?;
//!     let rest = RestClient::new(&token, &config.rest)?;
//!
//!     let shard_config = ShardConfig::builder()
//!         .token(token)
//!         .intents(Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT)
//!         .build()?;
//!     let (shard, _handle, mut events) = Shard::new(shard_config);
//!     tokio::spawn(shard.run());
//!
//!     while let Some(event) = events.recv().await {
//!         if let Event::MessageCreate(message) = event {
//!             if message.content == "!ping" {
//!                 let body = giotto::CreateMessage::default().content("pong");
//!                 rest.create_message(message.channel_id, &body).await?;
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The workspace is split into focused crates, all re-exported here:
//!
//! - `giotto_core` - entity models, intents, request builders, validation
//! - `giotto_error` - the error hierarchy
//! - `giotto_rate_limit` - bucket, global, and gateway command limiters
//! - `giotto_http` - the REST client and route table
//! - `giotto_gateway` - the shard state machine

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use telemetry::init_telemetry;

pub use giotto_core::{
    validate, Activity, ActivityType, AllowedMentions, ApplicationCommand, Attachment, Ban,
    Channel, ChannelType, CommandOption, CommandOptionChoice, CommandOptionType, CommandType,
    CreateGuildChannel, CreateGuildRole, CreateMessage, CreateScheduledEvent, CreateWebhook,
    EditMessage, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, Emoji, ExecuteWebhook,
    Guild, Intents, Interaction, InteractionCallback, InteractionCallbackData, InteractionData,
    InteractionType, Invite, Member, Message, MessageReference, MessageType, ModifyChannel,
    ModifyGuild, ModifyGuildMember, PartialGuild, PermissionOverwrite, Reaction, Role,
    ScheduledEvent, Snowflake, Status, UnavailableGuild, UpdatePresence, User, Webhook,
};
pub use giotto_error::{
    BulkDeleteError, ConfigError, GatewayError, GatewayErrorKind, GiottoError, GiottoErrorKind,
    GiottoResult, HttpError, JsonError, RestError, RestErrorKind, ValidationError,
};
pub use giotto_gateway::{
    close, Event, GatewayPayload, Opcode, Ready, Shard, ShardConfig, ShardHandle,
};
pub use giotto_http::{
    routes, CompiledRoute, GatewayBotInfo, GatewayConfig, GatewayInfo, GiottoConfig, Method,
    RestClient, RestConfig, Route, SessionStartLimit,
};
pub use giotto_rate_limit::{
    CommandRateLimiter, ExponentialBackOff, GlobalRateLimiter, RestBucketManager,
};
