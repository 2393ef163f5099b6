//! Emoji and reaction models.

use crate::{Snowflake, User};
use serde::{Deserialize, Serialize};

/// A custom or unicode emoji.
///
/// Unicode emojis carry their codepoints in `name` and have no `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emoji {
    /// The emoji's id, absent for unicode emojis
    #[serde(default)]
    pub id: Option<Snowflake>,
    /// The emoji name, or unicode codepoints
    #[serde(default)]
    pub name: Option<String>,
    /// Role ids allowed to use the emoji
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
    /// The user that created the emoji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Whether the emoji must be wrapped in colons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_colons: Option<bool>,
    /// Whether the emoji is managed by an integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
    /// Whether the emoji is animated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    /// Whether the emoji is usable, may be false on boost loss
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl Emoji {
    /// Render the emoji in the `name:id` form the reaction endpoints take.
    ///
    /// Unicode emojis render as their raw codepoints.
    pub fn reaction_form(&self) -> String {
        match (&self.name, &self.id) {
            (Some(name), Some(id)) => format!("{name}:{id}"),
            (Some(name), None) => name.clone(),
            _ => String::new(),
        }
    }
}

/// A tally of one emoji's reactions on a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// How many users reacted with this emoji
    pub count: u32,
    /// Whether the current user is among them
    #[serde(default)]
    pub me: bool,
    /// The emoji, partial for custom emojis
    pub emoji: Emoji,
}
