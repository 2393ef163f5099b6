//! User models.

use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// A Discord user.
///
/// # Examples
///
/// ```
/// use giotto_core::User;
///
/// let json = r#"{"id":"80351110224678912","username":"nelly","discriminator":"0","bot":false}"#;
/// let user: User = serde_json::from_str(json).unwrap();
/// assert_eq!(user.username, "nelly");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user's id
    pub id: Snowflake,
    /// The user's username, not unique across the platform
    pub username: String,
    /// Legacy discriminator; `"0"` for migrated users
    #[serde(default)]
    pub discriminator: String,
    /// The user's display name, if set
    #[serde(default)]
    pub global_name: Option<String>,
    /// The user's avatar hash
    #[serde(default)]
    pub avatar: Option<String>,
    /// Whether the user is a bot account
    #[serde(default)]
    pub bot: bool,
    /// Whether the user is an official Discord system user
    #[serde(default)]
    pub system: bool,
    /// The user's banner hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// The user's accent color as an integer RGB value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    /// The user's chosen locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// The public flags on the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
}

impl User {
    /// The `username#discriminator` tag, or the bare username for migrated
    /// accounts.
    pub fn tag(&self) -> String {
        if self.discriminator.is_empty() || self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }
}
