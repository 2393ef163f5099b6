//! Guild, member, ban, role, and emoji endpoints.

use crate::route::routes;
use crate::RestClient;
use giotto_core::{
    Ban, Channel, CreateGuildChannel, CreateGuildRole, Emoji, Guild, Invite, Member, ModifyGuild,
    ModifyGuildMember, Role, Snowflake,
};
use giotto_error::GiottoResult;

impl RestClient {
    /// Fetch a guild, including approximate member counts.
    pub async fn guild(&self, guild_id: Snowflake) -> GiottoResult<Guild> {
        self.request(
            routes::GET_GUILD.compile(&[&guild_id]),
            &[("with_counts", "true".to_string())],
            None,
            None,
        )
        .await
    }

    /// Modify guild settings.
    pub async fn modify_guild(
        &self,
        guild_id: Snowflake,
        body: &ModifyGuild,
        reason: Option<&str>,
    ) -> GiottoResult<Guild> {
        self.request(
            routes::PATCH_GUILD.compile(&[&guild_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// List a guild's channels. Threads are not included.
    pub async fn guild_channels(&self, guild_id: Snowflake) -> GiottoResult<Vec<Channel>> {
        self.request(
            routes::GET_GUILD_CHANNELS.compile(&[&guild_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Create a channel in a guild.
    pub async fn create_guild_channel(
        &self,
        guild_id: Snowflake,
        body: &CreateGuildChannel,
        reason: Option<&str>,
    ) -> GiottoResult<Channel> {
        self.request(
            routes::POST_GUILD_CHANNELS.compile(&[&guild_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// List a guild's invites.
    pub async fn guild_invites(&self, guild_id: Snowflake) -> GiottoResult<Vec<Invite>> {
        self.request(
            routes::GET_GUILD_INVITES.compile(&[&guild_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Fetch a guild member.
    pub async fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> GiottoResult<Member> {
        self.request(
            routes::GET_GUILD_MEMBER.compile(&[&guild_id, &user_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// List up to `limit` members, ordered by id, starting after `after`.
    pub async fn members(
        &self,
        guild_id: Snowflake,
        limit: u16,
        after: Option<Snowflake>,
    ) -> GiottoResult<Vec<Member>> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }
        self.request(
            routes::GET_GUILD_MEMBERS.compile(&[&guild_id]),
            &query,
            None,
            None,
        )
        .await
    }

    /// Modify a guild member.
    pub async fn modify_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: &ModifyGuildMember,
        reason: Option<&str>,
    ) -> GiottoResult<Member> {
        self.request(
            routes::PATCH_GUILD_MEMBER.compile(&[&guild_id, &user_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// Kick a member from a guild.
    pub async fn kick_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_GUILD_MEMBER.compile(&[&guild_id, &user_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// Add a role to a member.
    pub async fn add_member_role(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::PUT_GUILD_MEMBER_ROLE.compile(&[&guild_id, &user_id, &role_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// Remove a role from a member.
    pub async fn remove_member_role(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_GUILD_MEMBER_ROLE.compile(&[&guild_id, &user_id, &role_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// List a guild's bans.
    pub async fn bans(&self, guild_id: Snowflake) -> GiottoResult<Vec<Ban>> {
        self.request(
            routes::GET_GUILD_BANS.compile(&[&guild_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Fetch the ban entry for a user, if one exists.
    pub async fn ban(&self, guild_id: Snowflake, user_id: Snowflake) -> GiottoResult<Ban> {
        self.request(
            routes::GET_GUILD_BAN.compile(&[&guild_id, &user_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Ban a user, optionally purging up to 7 days of their messages.
    pub async fn ban_user(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        delete_message_days: u8,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::PUT_GUILD_BAN.compile(&[&guild_id, &user_id]),
            &[],
            Some(serde_json::json!({
                "delete_message_seconds": u32::from(delete_message_days.min(7)) * 86_400,
            })),
            reason,
        )
        .await
    }

    /// Lift a ban.
    pub async fn unban_user(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_GUILD_BAN.compile(&[&guild_id, &user_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// List a guild's roles.
    pub async fn roles(&self, guild_id: Snowflake) -> GiottoResult<Vec<Role>> {
        self.request(
            routes::GET_GUILD_ROLES.compile(&[&guild_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Create a role.
    pub async fn create_role(
        &self,
        guild_id: Snowflake,
        body: &CreateGuildRole,
        reason: Option<&str>,
    ) -> GiottoResult<Role> {
        self.request(
            routes::POST_GUILD_ROLES.compile(&[&guild_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// Modify a role. Takes the same body shape as role creation.
    pub async fn modify_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        body: &CreateGuildRole,
        reason: Option<&str>,
    ) -> GiottoResult<Role> {
        self.request(
            routes::PATCH_GUILD_ROLE.compile(&[&guild_id, &role_id]),
            &[],
            Some(Self::body(body)?),
            reason,
        )
        .await
    }

    /// Delete a role.
    pub async fn delete_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_GUILD_ROLE.compile(&[&guild_id, &role_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// List a guild's custom emojis.
    pub async fn emojis(&self, guild_id: Snowflake) -> GiottoResult<Vec<Emoji>> {
        self.request(
            routes::GET_GUILD_EMOJIS.compile(&[&guild_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Fetch a single custom emoji.
    pub async fn emoji(&self, guild_id: Snowflake, emoji_id: Snowflake) -> GiottoResult<Emoji> {
        self.request(
            routes::GET_GUILD_EMOJI.compile(&[&guild_id, &emoji_id]),
            &[],
            None,
            None,
        )
        .await
    }

    /// Upload a custom emoji. `image_data` is a data URI such as
    /// `data:image/png;base64,...`.
    pub async fn create_emoji(
        &self,
        guild_id: Snowflake,
        name: &str,
        image_data: &str,
        reason: Option<&str>,
    ) -> GiottoResult<Emoji> {
        self.request(
            routes::POST_GUILD_EMOJIS.compile(&[&guild_id]),
            &[],
            Some(serde_json::json!({
                "name": name,
                "image": image_data,
                "roles": [],
            })),
            reason,
        )
        .await
    }

    /// Delete a custom emoji.
    pub async fn delete_emoji(
        &self,
        guild_id: Snowflake,
        emoji_id: Snowflake,
        reason: Option<&str>,
    ) -> GiottoResult<()> {
        self.request_empty(
            routes::DELETE_GUILD_EMOJI.compile(&[&guild_id, &emoji_id]),
            &[],
            None,
            reason,
        )
        .await
    }

    /// Fetch an invite by code.
    pub async fn invite(&self, code: &str) -> GiottoResult<Invite> {
        self.request(routes::GET_INVITE.compile(&[&code]), &[], None, None)
            .await
    }

    /// Revoke an invite.
    pub async fn delete_invite(&self, code: &str, reason: Option<&str>) -> GiottoResult<Invite> {
        self.request(routes::DELETE_INVITE.compile(&[&code]), &[], None, reason)
            .await
    }
}
