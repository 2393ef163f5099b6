//! Webhook endpoints.
//!
//! Execution with a token is unauthenticated on the API side; the client
//! still routes it through the shared rate limit machinery.

use crate::route::routes;
use crate::RestClient;
use giotto_core::{validate, CreateWebhook, ExecuteWebhook, Message, Snowflake, Webhook};
use giotto_error::GiottoResult;

impl RestClient {
    /// List a channel's webhooks.
    pub async fn channel_webhooks(&self, channel_id: Snowflake) -> GiottoResult<Vec<Webhook>> {
        self.request(
            routes::GET_CHANNEL_WEBHOOKS.compile(&[&channel_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Create a webhook on a channel.
    pub async fn create_webhook(
        &self,
        channel_id: Snowflake,
        body: &CreateWebhook,
        reason: Option<&str>,
    ) -> GiottoResult<Webhook> {
        self.request(
            routes::POST_CHANNEL_WEBHOOKS.compile(&[&channel_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// Fetch a webhook by id.
    pub async fn webhook(&self, webhook_id: Snowflake) -> GiottoResult<Webhook> {
        self.request(routes::GET_WEBHOOK.compile(&[&webhook_id]), &[], None, None)
            .await
    }

    /// Delete a webhook.
    pub async fn delete_webhook(
        &self,
        webhook_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_WEBHOOK.compile(&[&webhook_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// Execute a webhook, waiting for the created message.
    pub async fn execute_webhook(
        &self,
        webhook_id: Snowflake,
        token: &str,
        body: &ExecuteWebhook,
    ) -> GiottoResult<Message> {
        if let Some(content) = &body.content {
            validate::content(content)?;
        }
        for embed in &body.embeds {
            validate::embed(embed)?;
        }
        self.request(
            routes::POST_WEBHOOK_WITH_TOKEN.compile(&[&webhook_id, &token]),
            &[("wait", "true".to_string())],
            Some(Self::body(body)?),
            None,
        )
        .await
    }
}
