//! Gateway shard for the Giotto Discord API library.
//!
//! A [`Shard`] holds one websocket connection to the gateway, performs the
//! HELLO/IDENTIFY handshake, heartbeats on the server's schedule, and
//! decodes dispatches into [`Event`]s delivered over an mpsc channel. On
//! disconnect it resumes the session when the close code allows and
//! re-identifies otherwise, backing off exponentially when reconnects come
//! too fast.
//!
//! # Example
//!
//! ```no_run
//! use giotto_core::Intents;
//! use giotto_gateway::{Event, Shard, ShardConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ShardConfig::builder()
//!     .token("my-bot-token")
//!     .intents(Intents::GUILDS | Intents::GUILD_MESSAGES)
//!     .build()?;
//! let (shard, handle, mut events) = Shard::new(config);
//! tokio::spawn(shard.run());
//!
//! while let Some(event) = events.recv().await {
//!     if let Event::MessageCreate(message) = event {
//!         println!("{}: {}", message.author.tag(), message.content);
//!     }
//! }
//! handle.close()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod close;
mod event;
mod opcode;
mod payload;
mod shard;

pub use event::{Event, GuildDelete, MemberRemove, MessageDelete, RoleDelete, RoleUpdate};
pub use opcode::Opcode;
pub use payload::{
    ConnectionProperties, GatewayPayload, Hello, Identify, Ready, Resume, UpdateVoiceState,
};
pub use shard::{Shard, ShardConfig, ShardConfigBuilder, ShardHandle};
