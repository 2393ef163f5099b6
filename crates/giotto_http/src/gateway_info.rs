//! Gateway connection metadata endpoints.

use crate::route::routes;
use crate::RestClient;
use giotto_error::GiottoResult;
use serde::{Deserialize, Serialize};

/// Response of the unauthenticated gateway endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayInfo {
    /// The websocket URL to connect to
    pub url: String,
}

/// Identify concurrency allowance within the session start limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionStartLimit {
    /// Total session starts allowed per window
    pub total: u32,
    /// Session starts remaining in the current window
    pub remaining: u32,
    /// Milliseconds until the window resets
    pub reset_after: u64,
    /// Identify requests allowed per 5 seconds
    pub max_concurrency: u32,
}

/// Response of the bot gateway endpoint, with sharding advice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayBotInfo {
    /// The websocket URL to connect to
    pub url: String,
    /// Recommended shard count
    pub shards: u32,
    /// Session start budget
    pub session_start_limit: SessionStartLimit,
}

impl RestClient {
    /// Fetch the gateway websocket URL.
    pub async fn gateway(&self) -> GiottoResult<GatewayInfo> {
        self.request(routes::GET_GATEWAY.compile(&[]), &[], None, None)
            .await
    }

    /// Fetch the gateway URL along with sharding advice and the session
    /// start budget.
    pub async fn gateway_bot(&self) -> GiottoResult<GatewayBotInfo> {
        self.request(routes::GET_GATEWAY_BOT.compile(&[]), &[], None, None)
            .await
    }
}
