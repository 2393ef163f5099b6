//! Guild scheduled event endpoints.

use crate::route::routes;
use crate::RestClient;
use giotto_core::{CreateScheduledEvent, ScheduledEvent, Snowflake};
use giotto_error::GiottoResult;

impl RestClient {
    /// List a guild's scheduled events, including subscriber counts.
    pub async fn scheduled_events(&self, guild_id: Snowflake) -> GiottoResult<Vec<ScheduledEvent>> {
        self.request(
            routes::GET_GUILD_SCHEDULED_EVENTS.compile(&[&guild_id]),
            &[("with_user_count", "true".to_string())],
            None,
            None,
        )
        .await
    }

    /// Fetch a single scheduled event.
    pub async fn scheduled_event(
        &self,
        guild_id: Snowflake,
        event_id: Snowflake,
    ) -> GiottoResult<ScheduledEvent> {
        self.request(
            routes::GET_GUILD_SCHEDULED_EVENT.compile(&[&guild_id, &event_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Create a scheduled event.
    pub async fn create_scheduled_event(
        &self,
        guild_id: Snowflake,
        body: &CreateScheduledEvent,
        reason: Option<&str>,
    ) -> GiottoResult<ScheduledEvent> {
        self.request(
            routes::POST_GUILD_SCHEDULED_EVENTS.compile(&[&guild_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// Modify a scheduled event. Takes the same body shape as creation, with
    /// all fields optional.
    pub async fn modify_scheduled_event(
        &self,
        guild_id: Snowflake,
        event_id: Snowflake,
        body: &CreateScheduledEvent,
        reason: Option<&str>,
    ) -> GiottoResult<ScheduledEvent> {
        self.request(
            routes::PATCH_GUILD_SCHEDULED_EVENT.compile(&[&guild_id, &event_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// Delete a scheduled event.
    pub async fn delete_scheduled_event(
        &self,
        guild_id: Snowflake,
        event_id: Snowflake,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_GUILD_SCHEDULED_EVENT.compile(&[&guild_id, &event_id]),
            &[],
            None,
            None,
        )
        .await
    }
}
