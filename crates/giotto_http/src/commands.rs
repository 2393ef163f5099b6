//! Application command and interaction endpoints.

use crate::route::routes;
use crate::RestClient;
use giotto_core::{ApplicationCommand, ExecuteWebhook, InteractionCallback, Message, Snowflake};
use giotto_error::GiottoResult;

impl RestClient {
    /// List an application's global commands.
    pub async fn global_commands(
        &self,
        application_id: Snowflake,
    ) -> GiottoResult<Vec<ApplicationCommand>> {
        self.request(
            routes::GET_APPLICATION_COMMANDS.compile(&[&application_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Create (or update by name) a global command. Global rollout can take
    /// up to an hour.
    pub async fn create_global_command(
        &self,
        application_id: Snowflake,
        body: &ApplicationCommand,
    ) -> GiottoResult<ApplicationCommand> {
        self.request(
            routes::POST_APPLICATION_COMMANDS.compile(&[&application_id]),
            &[],
            Some(Self::body(body)?),
            None,
        )
        .await
    }

    /// Replace the full set of global commands in one call.
    pub async fn set_global_commands(
        &self,
        application_id: Snowflake,
        commands: &[ApplicationCommand],
    ) -> GiottoResult<Vec<ApplicationCommand>> {
        self.request(
            routes::PUT_APPLICATION_COMMANDS.compile(&[&application_id]),
            &[],
            Some(Self::body(&commands)?),
            None,
        )
        .await
    }

    /// Delete a global command.
    pub async fn delete_global_command(
        &self,
        application_id: Snowflake,
        command_id: Snowflake,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_APPLICATION_COMMAND.compile(&[&application_id, &command_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// List an application's commands in one guild.
    pub async fn guild_commands(
        &self,
        application_id: Snowflake,
        guild_id: Snowflake,
    ) -> GiottoResult<Vec<ApplicationCommand>> {
        self.request(
            routes::GET_GUILD_COMMANDS.compile(&[&application_id, &guild_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Create (or update by name) a guild command. Guild commands roll out
    /// immediately.
    pub async fn create_guild_command(
        &self,
        application_id: Snowflake,
        guild_id: Snowflake,
        body: &ApplicationCommand,
    ) -> GiottoResult<ApplicationCommand> {
        self.request(
            routes::POST_GUILD_COMMANDS.compile(&[&application_id, &guild_id]),
            &[],
            Some(Self::body(body)?),
            None,
        )
        .await
    }

    /// Replace the full set of guild commands in one call.
    pub async fn set_guild_commands(
        &self,
        application_id: Snowflake,
        guild_id: Snowflake,
        commands: &[ApplicationCommand],
    ) -> GiottoResult<Vec<ApplicationCommand>> {
        self.request(
            routes::PUT_GUILD_COMMANDS.compile(&[&application_id, &guild_id]),
            &[],
            Some(Self::body(&commands)?),
            None,
        )
        .await
    }

    /// Delete a guild command.
    pub async fn delete_guild_command(
        &self,
        application_id: Snowflake,
        guild_id: Snowflake,
        command_id: Snowflake,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_GUILD_COMMAND.compile(&[&application_id, &guild_id, &command_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Respond to an interaction. Must land within 3 seconds of receipt;
    /// defer first when the real response needs longer.
    pub async fn create_interaction_response(
        &self,
        interaction_id: Snowflake,
        token: &str,
        body: &InteractionCallback,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::POST_INTERACTION_RESPONSE.compile(&[&interaction_id, &token]),
            &[],
            Some(Self::body(body)?),
            None,
        )
        .await
    }

    /// Edit the original interaction response.
    pub async fn edit_interaction_response(
        &self,
        application_id: Snowflake,
        token: &str,
        body: &ExecuteWebhook,
    ) -> GiottoResult<Message> {
        self.request(
            routes::PATCH_INTERACTION_RESPONSE.compile(&[&application_id, &token]),
            &[],
            Some(Self::body(body)?),
            None,
        )
        .await
    }

    /// Delete the original interaction response.
    pub async fn delete_interaction_response(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_INTERACTION_RESPONSE.compile(&[&application_id, &token]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Send a followup message to an interaction.
    pub async fn create_followup_message(
        &self,
        application_id: Snowflake,
        token: &str,
        body: &ExecuteWebhook,
    ) -> GiottoResult<Message> {
        self.request(
            routes::POST_INTERACTION_FOLLOWUP.compile(&[&application_id, &token]),
            &[],
            Some(Self::body(body)?),
            None,
        )
        .await
    }
}
