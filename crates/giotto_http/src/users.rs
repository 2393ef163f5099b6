//! User and current-user endpoints.

use crate::route::routes;
use crate::RestClient;
use giotto_core::{Channel, PartialGuild, Snowflake, User};
use giotto_error::GiottoResult;

impl RestClient {
    /// Fetch the bot's own user.
    pub async fn current_user(&self) -> GiottoResult<User> {
        self.request(routes::GET_MY_USER.compile(&[]), &[], None, None)
            .await
    }

    /// Fetch a user by id.
    pub async fn user(&self, user_id: Snowflake) -> GiottoResult<User> {
        self.request(routes::GET_USER.compile(&[&user_id]), &[], None, None)
            .await
    }

    /// Open (or reuse) a DM channel with a user.
    pub async fn create_dm(&self, recipient_id: Snowflake) -> GiottoResult<Channel> {
        self.request(
            routes::POST_MY_CHANNELS.compile(&[]),
            &[],
            Some(serde_json::json!({ "recipient_id": recipient_id })),
            None,
        )
        .await
    }

    /// List the guilds the bot is in, in abbreviated form.
    pub async fn current_user_guilds(&self) -> GiottoResult<Vec<PartialGuild>> {
        self.request(routes::GET_MY_GUILDS.compile(&[]), &[], None, None)
            .await
    }

    /// Leave a guild.
    pub async fn leave_guild(&self, guild_id: Snowflake) -> GiottoResult<()> {
        self.request_empty(routes::DELETE_MY_GUILD.compile(&[&guild_id]), &[], None, None)
            .await
    }
}
