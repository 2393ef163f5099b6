//! Gateway intent flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// The set of gateway event groups a shard subscribes to.
///
/// Discord requires intents on IDENTIFY; events outside the declared set are
/// never delivered. Some intents are privileged and must be enabled in the
/// developer portal before the gateway will accept them.
///
/// # Examples
///
/// ```
/// use giotto_core::Intents;
///
/// let intents = Intents::GUILDS | Intents::GUILD_MESSAGES;
/// assert!(intents.contains(Intents::GUILDS));
/// assert!(!intents.contains(Intents::GUILD_MEMBERS));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Intents(u64);

impl Intents {
    /// Guild create/update/delete, role and channel lifecycle events.
    pub const GUILDS: Self = Self(1 << 0);
    /// Member join/update/leave events. Privileged.
    pub const GUILD_MEMBERS: Self = Self(1 << 1);
    /// Ban add/remove events.
    pub const GUILD_BANS: Self = Self(1 << 2);
    /// Emoji and sticker update events.
    pub const GUILD_EMOJIS: Self = Self(1 << 3);
    /// Integration update events.
    pub const GUILD_INTEGRATIONS: Self = Self(1 << 4);
    /// Webhook update events.
    pub const GUILD_WEBHOOKS: Self = Self(1 << 5);
    /// Invite create/delete events.
    pub const GUILD_INVITES: Self = Self(1 << 6);
    /// Voice state update events.
    pub const GUILD_VOICE_STATES: Self = Self(1 << 7);
    /// Presence update events. Privileged.
    pub const GUILD_PRESENCES: Self = Self(1 << 8);
    /// Message lifecycle events in guild channels.
    pub const GUILD_MESSAGES: Self = Self(1 << 9);
    /// Reaction events in guild channels.
    pub const GUILD_MESSAGE_REACTIONS: Self = Self(1 << 10);
    /// Typing events in guild channels.
    pub const GUILD_MESSAGE_TYPING: Self = Self(1 << 11);
    /// Message lifecycle events in direct messages.
    pub const DM_MESSAGES: Self = Self(1 << 12);
    /// Reaction events in direct messages.
    pub const DM_MESSAGE_REACTIONS: Self = Self(1 << 13);
    /// Typing events in direct messages.
    pub const DM_MESSAGE_TYPING: Self = Self(1 << 14);
    /// Message content in message events. Privileged.
    pub const MESSAGE_CONTENT: Self = Self(1 << 15);
    /// Scheduled event lifecycle events.
    pub const GUILD_SCHEDULED_EVENTS: Self = Self(1 << 16);

    /// No intents.
    pub const fn none() -> Self {
        Self(0)
    }

    /// Every unprivileged intent.
    pub const fn unprivileged() -> Self {
        Self(
            Self::GUILDS.0
                | Self::GUILD_BANS.0
                | Self::GUILD_EMOJIS.0
                | Self::GUILD_INTEGRATIONS.0
                | Self::GUILD_WEBHOOKS.0
                | Self::GUILD_INVITES.0
                | Self::GUILD_VOICE_STATES.0
                | Self::GUILD_MESSAGES.0
                | Self::GUILD_MESSAGE_REACTIONS.0
                | Self::GUILD_MESSAGE_TYPING.0
                | Self::DM_MESSAGES.0
                | Self::DM_MESSAGE_REACTIONS.0
                | Self::DM_MESSAGE_TYPING.0
                | Self::GUILD_SCHEDULED_EVENTS.0,
        )
    }

    /// Every intent, privileged included.
    pub const fn all() -> Self {
        Self(
            Self::unprivileged().0
                | Self::GUILD_MEMBERS.0
                | Self::GUILD_PRESENCES.0
                | Self::MESSAGE_CONTENT.0,
        )
    }

    /// Whether every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any privileged intent is requested.
    pub const fn is_privileged(self) -> bool {
        self.0 & (Self::GUILD_MEMBERS.0 | Self::GUILD_PRESENCES.0 | Self::MESSAGE_CONTENT.0) != 0
    }

    /// The raw bit value sent on IDENTIFY.
    pub const fn bits(self) -> u64 {
        self.0
    }
}

impl BitOr for Intents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Intents {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Intents {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for Intents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
