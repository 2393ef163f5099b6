//! Route templates for the Discord REST API.
//!
//! A [`Route`] is a method plus a path template such as
//! `POST /channels/{channel}/messages`. Compiling it with parameter values
//! yields a [`CompiledRoute`] carrying the rendered path and the major
//! parameter value that scopes its rate limit bucket. The major parameter is
//! always the first placeholder in the template.

use std::fmt;

/// An HTTP method, restricted to the verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// The method's wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route template without parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    /// The HTTP method.
    pub method: Method,
    /// The path template with `{name}` placeholders.
    pub path_template: &'static str,
}

impl Route {
    /// Define a route.
    pub const fn new(method: Method, path_template: &'static str) -> Self {
        Self {
            method,
            path_template,
        }
    }

    /// The identity of this template for bucket mapping, `METHOD template`.
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.path_template)
    }

    /// Render the template with parameter values, in template order.
    ///
    /// The first parameter becomes the major parameter of the compiled
    /// route. Routes without placeholders compile with an empty slice.
    pub fn compile(&self, params: &[&dyn fmt::Display]) -> CompiledRoute {
        let mut path = String::with_capacity(self.path_template.len());
        let mut rest = self.path_template;
        let mut params = params.iter();
        let mut major = String::from("-");
        let mut first = true;
        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let close = rest[open..].find('}').map(|i| open + i).unwrap_or(open);
            rest = &rest[close + 1..];
            if let Some(value) = params.next() {
                let rendered = value.to_string();
                if first {
                    major = rendered.clone();
                    first = false;
                }
                path.push_str(&rendered);
            }
        }
        path.push_str(rest);
        CompiledRoute {
            method: self.method,
            route_key: self.key(),
            path,
            major,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_template)
    }
}

/// A route with parameter values rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRoute {
    /// The HTTP method.
    pub method: Method,
    /// The template identity, used to look up the rate limit bucket.
    pub route_key: String,
    /// The rendered path.
    pub path: String,
    /// The major parameter value, `-` when the route has none.
    pub major: String,
}

impl CompiledRoute {
    /// The full request URL.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for CompiledRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// The route constants, named `METHOD_RESOURCE` after their wire shape.
pub mod routes {
    use super::{Method, Route};

    // Channels
    /// Fetch a channel.
    pub const GET_CHANNEL: Route = Route::new(Method::Get, "/channels/{channel}");
    /// Modify a channel.
    pub const PATCH_CHANNEL: Route = Route::new(Method::Patch, "/channels/{channel}");
    /// Delete a channel, or close a DM.
    pub const DELETE_CHANNEL: Route = Route::new(Method::Delete, "/channels/{channel}");
    /// Trigger the typing indicator.
    pub const POST_CHANNEL_TYPING: Route = Route::new(Method::Post, "/channels/{channel}/typing");
    /// List a channel's invites.
    pub const GET_CHANNEL_INVITES: Route = Route::new(Method::Get, "/channels/{channel}/invites");
    /// Create a channel invite.
    pub const POST_CHANNEL_INVITES: Route = Route::new(Method::Post, "/channels/{channel}/invites");

    // Messages
    /// Fetch recent messages.
    pub const GET_CHANNEL_MESSAGES: Route = Route::new(Method::Get, "/channels/{channel}/messages");
    /// Send a message.
    pub const POST_CHANNEL_MESSAGES: Route =
        Route::new(Method::Post, "/channels/{channel}/messages");
    /// Fetch a single message.
    pub const GET_CHANNEL_MESSAGE: Route =
        Route::new(Method::Get, "/channels/{channel}/messages/{message}");
    /// Edit a message.
    pub const PATCH_CHANNEL_MESSAGE: Route =
        Route::new(Method::Patch, "/channels/{channel}/messages/{message}");
    /// Delete a message.
    pub const DELETE_CHANNEL_MESSAGE: Route =
        Route::new(Method::Delete, "/channels/{channel}/messages/{message}");
    /// Delete several messages in one call.
    pub const POST_DELETE_CHANNEL_MESSAGES_BULK: Route =
        Route::new(Method::Post, "/channels/{channel}/messages/bulk-delete");

    // Pins
    /// List pinned messages.
    pub const GET_CHANNEL_PINS: Route = Route::new(Method::Get, "/channels/{channel}/pins");
    /// Pin a message.
    pub const PUT_CHANNEL_PIN: Route =
        Route::new(Method::Put, "/channels/{channel}/pins/{message}");
    /// Unpin a message.
    pub const DELETE_CHANNEL_PIN: Route =
        Route::new(Method::Delete, "/channels/{channel}/pins/{message}");

    // Reactions
    /// Add the bot's reaction.
    pub const PUT_MY_REACTION: Route = Route::new(
        Method::Put,
        "/channels/{channel}/messages/{message}/reactions/{emoji}/@me",
    );
    /// Remove the bot's reaction.
    pub const DELETE_MY_REACTION: Route = Route::new(
        Method::Delete,
        "/channels/{channel}/messages/{message}/reactions/{emoji}/@me",
    );
    /// Remove another user's reaction.
    pub const DELETE_REACTION_USER: Route = Route::new(
        Method::Delete,
        "/channels/{channel}/messages/{message}/reactions/{emoji}/{user}",
    );
    /// List the users that reacted with one emoji.
    pub const GET_REACTIONS: Route = Route::new(
        Method::Get,
        "/channels/{channel}/messages/{message}/reactions/{emoji}",
    );
    /// Remove every reaction of one emoji.
    pub const DELETE_REACTION_EMOJI: Route = Route::new(
        Method::Delete,
        "/channels/{channel}/messages/{message}/reactions/{emoji}",
    );
    /// Remove all reactions.
    pub const DELETE_ALL_REACTIONS: Route = Route::new(
        Method::Delete,
        "/channels/{channel}/messages/{message}/reactions",
    );

    // Guilds
    /// Fetch a guild.
    pub const GET_GUILD: Route = Route::new(Method::Get, "/guilds/{guild}");
    /// Modify a guild.
    pub const PATCH_GUILD: Route = Route::new(Method::Patch, "/guilds/{guild}");
    /// List a guild's channels.
    pub const GET_GUILD_CHANNELS: Route = Route::new(Method::Get, "/guilds/{guild}/channels");
    /// Create a guild channel.
    pub const POST_GUILD_CHANNELS: Route = Route::new(Method::Post, "/guilds/{guild}/channels");
    /// List a guild's invites.
    pub const GET_GUILD_INVITES: Route = Route::new(Method::Get, "/guilds/{guild}/invites");

    // Members
    /// Fetch a member.
    pub const GET_GUILD_MEMBER: Route = Route::new(Method::Get, "/guilds/{guild}/members/{user}");
    /// List members, paginated.
    pub const GET_GUILD_MEMBERS: Route = Route::new(Method::Get, "/guilds/{guild}/members");
    /// Modify a member.
    pub const PATCH_GUILD_MEMBER: Route =
        Route::new(Method::Patch, "/guilds/{guild}/members/{user}");
    /// Kick a member.
    pub const DELETE_GUILD_MEMBER: Route =
        Route::new(Method::Delete, "/guilds/{guild}/members/{user}");
    /// Add a role to a member.
    pub const PUT_GUILD_MEMBER_ROLE: Route = Route::new(
        Method::Put,
        "/guilds/{guild}/members/{user}/roles/{role}",
    );
    /// Remove a role from a member.
    pub const DELETE_GUILD_MEMBER_ROLE: Route = Route::new(
        Method::Delete,
        "/guilds/{guild}/members/{user}/roles/{role}",
    );

    // Bans
    /// List a guild's bans.
    pub const GET_GUILD_BANS: Route = Route::new(Method::Get, "/guilds/{guild}/bans");
    /// Fetch one ban.
    pub const GET_GUILD_BAN: Route = Route::new(Method::Get, "/guilds/{guild}/bans/{user}");
    /// Ban a user.
    pub const PUT_GUILD_BAN: Route = Route::new(Method::Put, "/guilds/{guild}/bans/{user}");
    /// Remove a ban.
    pub const DELETE_GUILD_BAN: Route = Route::new(Method::Delete, "/guilds/{guild}/bans/{user}");

    // Roles
    /// List a guild's roles.
    pub const GET_GUILD_ROLES: Route = Route::new(Method::Get, "/guilds/{guild}/roles");
    /// Create a role.
    pub const POST_GUILD_ROLES: Route = Route::new(Method::Post, "/guilds/{guild}/roles");
    /// Modify a role.
    pub const PATCH_GUILD_ROLE: Route = Route::new(Method::Patch, "/guilds/{guild}/roles/{role}");
    /// Delete a role.
    pub const DELETE_GUILD_ROLE: Route =
        Route::new(Method::Delete, "/guilds/{guild}/roles/{role}");

    // Emojis
    /// List a guild's emojis.
    pub const GET_GUILD_EMOJIS: Route = Route::new(Method::Get, "/guilds/{guild}/emojis");
    /// Fetch one emoji.
    pub const GET_GUILD_EMOJI: Route = Route::new(Method::Get, "/guilds/{guild}/emojis/{emoji}");
    /// Create an emoji.
    pub const POST_GUILD_EMOJIS: Route = Route::new(Method::Post, "/guilds/{guild}/emojis");
    /// Delete an emoji.
    pub const DELETE_GUILD_EMOJI: Route =
        Route::new(Method::Delete, "/guilds/{guild}/emojis/{emoji}");

    // Invites
    /// Fetch an invite by code.
    pub const GET_INVITE: Route = Route::new(Method::Get, "/invites/{invite_code}");
    /// Delete an invite.
    pub const DELETE_INVITE: Route = Route::new(Method::Delete, "/invites/{invite_code}");

    // Users
    /// Fetch the bot's own user.
    pub const GET_MY_USER: Route = Route::new(Method::Get, "/users/@me");
    /// Fetch a user by id.
    pub const GET_USER: Route = Route::new(Method::Get, "/users/{user}");
    /// Open (or fetch) a DM channel.
    pub const POST_MY_CHANNELS: Route = Route::new(Method::Post, "/users/@me/channels");
    /// List the guilds the bot is in.
    pub const GET_MY_GUILDS: Route = Route::new(Method::Get, "/users/@me/guilds");
    /// Leave a guild.
    pub const DELETE_MY_GUILD: Route = Route::new(Method::Delete, "/users/@me/guilds/{guild}");

    // Webhooks
    /// List a channel's webhooks.
    pub const GET_CHANNEL_WEBHOOKS: Route =
        Route::new(Method::Get, "/channels/{channel}/webhooks");
    /// Create a webhook.
    pub const POST_CHANNEL_WEBHOOKS: Route =
        Route::new(Method::Post, "/channels/{channel}/webhooks");
    /// Fetch a webhook.
    pub const GET_WEBHOOK: Route = Route::new(Method::Get, "/webhooks/{webhook}");
    /// Delete a webhook.
    pub const DELETE_WEBHOOK: Route = Route::new(Method::Delete, "/webhooks/{webhook}");
    /// Execute a webhook by token.
    pub const POST_WEBHOOK_WITH_TOKEN: Route =
        Route::new(Method::Post, "/webhooks/{webhook}/{token}");

    // Application commands
    /// List global commands.
    pub const GET_APPLICATION_COMMANDS: Route =
        Route::new(Method::Get, "/applications/{application}/commands");
    /// Create or update a global command.
    pub const POST_APPLICATION_COMMANDS: Route =
        Route::new(Method::Post, "/applications/{application}/commands");
    /// Replace all global commands.
    pub const PUT_APPLICATION_COMMANDS: Route =
        Route::new(Method::Put, "/applications/{application}/commands");
    /// Delete a global command.
    pub const DELETE_APPLICATION_COMMAND: Route = Route::new(
        Method::Delete,
        "/applications/{application}/commands/{command}",
    );
    /// List guild commands.
    pub const GET_GUILD_COMMANDS: Route = Route::new(
        Method::Get,
        "/applications/{application}/guilds/{guild}/commands",
    );
    /// Create or update a guild command.
    pub const POST_GUILD_COMMANDS: Route = Route::new(
        Method::Post,
        "/applications/{application}/guilds/{guild}/commands",
    );
    /// Replace all guild commands.
    pub const PUT_GUILD_COMMANDS: Route = Route::new(
        Method::Put,
        "/applications/{application}/guilds/{guild}/commands",
    );
    /// Delete a guild command.
    pub const DELETE_GUILD_COMMAND: Route = Route::new(
        Method::Delete,
        "/applications/{application}/guilds/{guild}/commands/{command}",
    );

    // Interactions
    /// Respond to an interaction.
    pub const POST_INTERACTION_RESPONSE: Route = Route::new(
        Method::Post,
        "/interactions/{interaction}/{token}/callback",
    );
    /// Edit the original interaction response.
    pub const PATCH_INTERACTION_RESPONSE: Route = Route::new(
        Method::Patch,
        "/webhooks/{application}/{token}/messages/@original",
    );
    /// Delete the original interaction response.
    pub const DELETE_INTERACTION_RESPONSE: Route = Route::new(
        Method::Delete,
        "/webhooks/{application}/{token}/messages/@original",
    );
    /// Send a followup message.
    pub const POST_INTERACTION_FOLLOWUP: Route =
        Route::new(Method::Post, "/webhooks/{application}/{token}");

    // Scheduled events
    /// List a guild's scheduled events.
    pub const GET_GUILD_SCHEDULED_EVENTS: Route =
        Route::new(Method::Get, "/guilds/{guild}/scheduled-events");
    /// Create a scheduled event.
    pub const POST_GUILD_SCHEDULED_EVENTS: Route =
        Route::new(Method::Post, "/guilds/{guild}/scheduled-events");
    /// Fetch one scheduled event.
    pub const GET_GUILD_SCHEDULED_EVENT: Route =
        Route::new(Method::Get, "/guilds/{guild}/scheduled-events/{event}");
    /// Modify a scheduled event.
    pub const PATCH_GUILD_SCHEDULED_EVENT: Route =
        Route::new(Method::Patch, "/guilds/{guild}/scheduled-events/{event}");
    /// Delete a scheduled event.
    pub const DELETE_GUILD_SCHEDULED_EVENT: Route = Route::new(
        Method::Delete,
        "/guilds/{guild}/scheduled-events/{event}",
    );

    // Gateway
    /// Fetch the gateway URL.
    pub const GET_GATEWAY: Route = Route::new(Method::Get, "/gateway");
    /// Fetch the gateway URL plus sharding and session-start advice.
    pub const GET_GATEWAY_BOT: Route = Route::new(Method::Get, "/gateway/bot");
}
