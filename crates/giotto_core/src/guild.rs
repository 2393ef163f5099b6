//! Guild, member, and role models.

use crate::{Snowflake, User};
use serde::{Deserialize, Serialize};

/// A guild (a "server" in the client UI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    /// The guild's id
    pub id: Snowflake,
    /// The guild name, 2-100 characters
    pub name: String,
    /// Icon hash
    #[serde(default)]
    pub icon: Option<String>,
    /// Splash hash
    #[serde(default)]
    pub splash: Option<String>,
    /// Id of the owner
    pub owner_id: Snowflake,
    /// Id of the AFK voice channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Snowflake>,
    /// AFK timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    /// Required verification level, 0-4
    #[serde(default)]
    pub verification_level: u8,
    /// Roles in the guild
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
    /// Enabled guild features
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Id of the system messages channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Snowflake>,
    /// Id of the rules channel for community guilds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_channel_id: Option<Snowflake>,
    /// The vanity invite code, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vanity_url_code: Option<String>,
    /// Guild description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The preferred locale of a community guild
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_locale: Option<String>,
    /// Approximate member count, only on fetch with counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<u32>,
    /// Approximate online count, only on fetch with counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<u32>,
}

/// The abbreviated guild shape returned when listing the bot's own guilds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialGuild {
    /// The guild's id
    pub id: Snowflake,
    /// The guild name
    pub name: String,
    /// Icon hash
    #[serde(default)]
    pub icon: Option<String>,
    /// Whether the bot owns this guild
    #[serde(default)]
    pub owner: bool,
    /// The bot's permissions in the guild, as a stringified bit set
    #[serde(default)]
    pub permissions: Option<String>,
    /// Enabled guild features
    #[serde(default)]
    pub features: Vec<String>,
}

/// A guild whose data is unavailable, as delivered on READY and outages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableGuild {
    /// The guild's id
    pub id: Snowflake,
    /// Always true in this shape
    #[serde(default)]
    pub unavailable: bool,
}

/// A ban entry in a guild's ban list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ban {
    /// The reason recorded when the ban was issued
    #[serde(default)]
    pub reason: Option<String>,
    /// The banned user
    pub user: User,
}

/// A member of a guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// The underlying user, absent in some interaction payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Guild-specific nickname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Guild-specific avatar hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Ids of the member's roles
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    /// When the member joined the guild
    pub joined_at: String,
    /// When the member started boosting, if boosting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_since: Option<String>,
    /// Whether the member is server-deafened
    #[serde(default)]
    pub deaf: bool,
    /// Whether the member is server-muted
    #[serde(default)]
    pub mute: bool,
    /// Whether the member has not yet passed membership screening
    #[serde(default)]
    pub pending: bool,
    /// When a timeout expires, if timed out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<String>,
}

/// A guild role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// The role's id
    pub id: Snowflake,
    /// The role name
    pub name: String,
    /// Integer RGB color, 0 for no color
    pub color: u32,
    /// Whether the role is pinned in the sidebar
    pub hoist: bool,
    /// Sorting position
    pub position: i32,
    /// Permission bit set as a string-encoded integer
    pub permissions: String,
    /// Whether the role is managed by an integration
    pub managed: bool,
    /// Whether the role is mentionable
    pub mentionable: bool,
    /// Tags describing what manages the role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<RoleTags>,
}

/// Tags on a managed role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleTags {
    /// The bot this role belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<Snowflake>,
    /// The integration this role belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<Snowflake>,
}
