//! Presence models sent over the gateway.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{Display, EnumString};

/// The online status a connection advertises.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// Shown as online
    Online,
    /// Shown as away
    Idle,
    /// Shown as do-not-disturb
    Dnd,
    /// Shown as offline while still connected
    Invisible,
    /// Actually offline
    Offline,
}

/// The kind of activity being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ActivityType {
    /// "Playing {name}"
    Playing = 0,
    /// "Streaming {details}"
    Streaming = 1,
    /// "Listening to {name}"
    Listening = 2,
    /// "Watching {name}"
    Watching = 3,
    /// Custom status text
    Custom = 4,
    /// "Competing in {name}"
    Competing = 5,
}

/// An activity shown on a presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// The activity name
    pub name: String,
    /// The activity type
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Stream URL, validated only for streaming activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Custom status text, custom activities only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Activity {
    /// A "Playing {name}" activity.
    pub fn playing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ActivityType::Playing,
            url: None,
            state: None,
        }
    }

    /// A "Watching {name}" activity.
    pub fn watching(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ActivityType::Watching,
            url: None,
            state: None,
        }
    }

    /// A "Listening to {name}" activity.
    pub fn listening(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ActivityType::Listening,
            url: None,
            state: None,
        }
    }
}

/// The payload of a presence update command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePresence {
    /// Unix millis the client went idle, or null if not idle
    #[serde(default)]
    pub since: Option<u64>,
    /// Activities to advertise
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// The online status
    pub status: Status,
    /// Whether the connection is flagged as AFK
    #[serde(default)]
    pub afk: bool,
}

impl UpdatePresence {
    /// An online presence with a single activity.
    pub fn online(activity: Activity) -> Self {
        Self {
            since: None,
            activities: vec![activity],
            status: Status::Online,
            afk: false,
        }
    }
}

impl Default for UpdatePresence {
    fn default() -> Self {
        Self {
            since: None,
            activities: Vec::new(),
            status: Status::Online,
            afk: false,
        }
    }
}
