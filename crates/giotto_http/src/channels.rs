//! Channel, message, reaction, and pin endpoints.

use crate::route::routes;
use crate::RestClient;
use giotto_core::{
    validate, Channel, CreateMessage, EditMessage, Invite, Message, ModifyChannel, Snowflake, User,
};
use giotto_error::{BulkDeleteError, GiottoError, GiottoErrorKind, GiottoResult};
use tracing::instrument;

impl RestClient {
    /// Fetch a channel by id.
    pub async fn channel(&self, channel_id: Snowflake) -> GiottoResult<Channel> {
        self.request(routes::GET_CHANNEL.compile(&[&channel_id]), &[], None, None)
            .await
    }

    /// Modify a channel, with an optional audit log reason.
    pub async fn modify_channel(
        &self,
        channel_id: Snowflake,
        body: &ModifyChannel,
        reason: Option<&str>,
    ) -> GiottoResult<Channel> {
        self.request(
            routes::PATCH_CHANNEL.compile(&[&channel_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// Delete a channel, or close a DM.
    pub async fn delete_channel(
        &self,
        channel_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<Channel> {
        self.request(
            routes::DELETE_CHANNEL.compile(&[&channel_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// Trigger the typing indicator in a channel for a few seconds.
    pub async fn trigger_typing(&self, channel_id: Snowflake) -> GiottoResult<()> {
        self.request_empty(
            routes::POST_CHANNEL_TYPING.compile(&[&channel_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// List a channel's invites.
    pub async fn channel_invites(&self, channel_id: Snowflake) -> GiottoResult<Vec<Invite>> {
        self.request(
            routes::GET_CHANNEL_INVITES.compile(&[&channel_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Create an invite to a channel with default settings.
    pub async fn create_invite(
        &self,
        channel_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<Invite> {
        self.request(
            routes::POST_CHANNEL_INVITES.compile(&[&channel_id]),
            &[],
            Some(serde_json::json!({})),
            reason,
        )
        .await
    }

    /// Fetch a single message.
    pub async fn message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> GiottoResult<Message> {
        self.request(
            routes::GET_CHANNEL_MESSAGE.compile(&[&channel_id, &message_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Fetch up to `limit` recent messages, newest first, optionally only
    /// those before a given message.
    pub async fn messages(
        &self,
        channel_id: Snowflake,
        limit: u8,
        before: Option<Snowflake>,
    ) -> GiottoResult<Vec<Message>> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(before) = before {
            query.push(("before", before.to_string()));
        }
        self.request(
            routes::GET_CHANNEL_MESSAGES.compile(&[&channel_id]),
            &query,
            None,
            None,
        )
        .await
    }

    /// Send a message to a channel.
    ///
    /// The body is validated against the documented limits before anything
    /// goes over the wire.
    #[instrument(skip(self, body))]
    pub async fn create_message(
        &self,
        channel_id: Snowflake,
        body: &CreateMessage,
    ) -> GiottoResult<Message> {
        validate::create_message(body)?;
        self.request(
            routes::POST_CHANNEL_MESSAGES.compile(&[&channel_id]),
            &[],
            Some(Self::body(body)?),
            None,
        )
        .await
    }

    /// Edit a message the bot authored.
    pub async fn edit_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        body: &EditMessage,
    ) -> GiottoResult<Message> {
        if let Some(content) = &body.content {
            validate::content(content)?;
        }
        for embed in &body.embeds {
            validate::embed(embed)?;
        }
        self.request(
            routes::PATCH_CHANNEL_MESSAGE.compile(&[&channel_id, &message_id]),
            &[],
            Some(Self::body(body)?),
            None,
        )
        .await
    }

    /// Delete a message.
    pub async fn delete_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_CHANNEL_MESSAGE.compile(&[&channel_id, &message_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// Delete between 2 and 100 messages younger than two weeks in one call.
    pub async fn bulk_delete_messages(
        &self,
        channel_id: Snowflake,
        message_ids: &[Snowflake],
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        let now_ms = now_unix_ms();
        validate::bulk_delete(message_ids, now_ms)?;
        self.request_empty(
            routes::POST_DELETE_CHANNEL_MESSAGES_BULK.compile(&[&channel_id]),
            &[],
            Some(serde_json::json!({ "messages": message_ids })),
            reason,
        )
        .await
    }

    /// Delete any number of messages, chunking into bulk calls.
    ///
    /// Single leftovers are deleted individually, since the bulk endpoint
    /// requires at least two ids. On a mid-run failure the error reports
    /// which ids were already deleted and which were not.
    pub async fn delete_messages(
        &self,
        channel_id: Snowflake,
        message_ids: &[Snowflake],
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        let mut deleted: Vec<u64> = Vec::with_capacity(message_ids.len());
        let mut chunks = message_ids.chunks(100);
        while let Some(chunk) = chunks.next() {
            let result = if chunk.len() == 1 {
                self.delete_message(channel_id, chunk[0], reason).await
            } else {
                self.bulk_delete_messages(channel_id, chunk, reason).await
            };
            if let Err(error) = result {
                let failed = chunk
                    .iter()
                    .chain(chunks.flatten())
                    .map(|id| id.get())
                    .collect();
                let source = match error.into_kind() {
                    GiottoErrorKind::Rest(rest) => rest,
                    other => return Err(GiottoError::new(other)),
                };
                return Err(BulkDeleteError::new(deleted, failed, source).into());
            }
            deleted.extend(chunk.iter().map(|id| id.get()));
        }
        Ok(())
    }

    /// List pinned messages.
    pub async fn pins(&self, channel_id: Snowflake) -> GiottoResult<Vec<Message>> {
        self.request(
            routes::GET_CHANNEL_PINS.compile(&[&channel_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Pin a message.
    pub async fn pin_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::PUT_CHANNEL_PIN.compile(&[&channel_id, &message_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// Unpin a message.
    pub async fn unpin_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_CHANNEL_PIN.compile(&[&channel_id, &message_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// React to a message as the bot.
    ///
    /// `emoji` takes the `name:id` form for custom emojis or the raw
    /// codepoints for unicode ones; see
    /// [`Emoji::reaction_form`](giotto_core::Emoji::reaction_form).
    pub async fn create_reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &str,
    ) -> GiottoResult<()> {
        let encoded = encode_emoji(emoji);
        self.request_empty(
            routes::PUT_MY_REACTION.compile(&[&channel_id, &message_id, &encoded]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Remove the bot's own reaction.
    pub async fn delete_own_reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &str,
    ) -> GiottoResult<()> {
        let encoded = encode_emoji(emoji);
        self.request_empty(
            routes::DELETE_MY_REACTION.compile(&[&channel_id, &message_id, &encoded]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Remove another user's reaction.
    pub async fn delete_user_reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &str,
        user_id: Snowflake,
    ) -> GiottoResult<()> {
        let encoded = encode_emoji(emoji);
        self.request_empty(
            routes::DELETE_REACTION_USER.compile(&[&channel_id, &message_id, &encoded, &user_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// List the users that reacted with one emoji.
    pub async fn reactions(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &str,
        limit: u8,
    ) -> GiottoResult<Vec<User>> {
        let encoded = encode_emoji(emoji);
        self.request(
            routes::GET_REACTIONS.compile(&[&channel_id, &message_id, &encoded]),
            &[("limit", limit.to_string())],
            None,
            None,
        )
        .await
    }

    /// Remove every reaction of one emoji.
    pub async fn delete_reaction_emoji(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &str,
    ) -> GiottoResult<()> {
        let encoded = encode_emoji(emoji);
        self.request_empty(
            routes::DELETE_REACTION_EMOJI.compile(&[&channel_id, &message_id, &encoded]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Remove all reactions from a message.
    pub async fn delete_all_reactions(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_ALL_REACTIONS.compile(&[&channel_id, &message_id]),
            &[],
            None,
            None,
        )
        .await
    }
}

/// Milliseconds since the Unix epoch.
fn now_unix_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Percent-encode an emoji for use as a path segment.
fn encode_emoji(emoji: &str) -> String {
    let mut out = String::with_capacity(emoji.len() * 3);
    for byte in emoji.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b':' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
