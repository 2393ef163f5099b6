//! REST client for the Giotto Discord API library.
//!
//! [`RestClient`] authenticates with a bot token and exposes one method per
//! endpoint, grouped into modules by resource. Requests honor Discord's
//! server-driven rate limit buckets, the global account limit, and retry
//! transient failures with jittered exponential backoff.
//!
//! # Example
//!
//! ```no_run
//! use giotto_http::{GiottoConfig, RestClient};
//! use giotto_core::{CreateMessage, Snowflake};
//!
//! # async fn run() -> Result<(), giotto_error::GiottoError> {
//! let config = GiottoConfig::load()?;
//! let client = RestClient::new("my-bot-token", &config.rest)?;
//!
//! let channel = Snowflake::new(123456789012345678);
//! let body = CreateMessage::default().content("hello");
//! let message = client.create_message(channel, &body).await?;
//! println!("sent {}", message.id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channels;
mod client;
mod commands;
mod config;
mod events;
mod gateway_info;
mod guilds;
mod route;
mod users;
mod webhooks;

pub use client::RestClient;
pub use config::{GatewayConfig, GiottoConfig, RestConfig};
pub use gateway_info::{GatewayBotInfo, GatewayInfo, SessionStartLimit};
pub use route::{routes, CompiledRoute, Method, Route};
