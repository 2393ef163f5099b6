//! Application command models.

use crate::Snowflake;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The top-level type of an application command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum CommandType {
    /// A slash command typed into chat
    ChatInput = 1,
    /// A command in the user context menu
    User = 2,
    /// A command in the message context menu
    Message = 3,
}

/// The type of a command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum CommandOptionType {
    /// A nested subcommand
    SubCommand = 1,
    /// A group of subcommands
    SubCommandGroup = 2,
    /// A string value
    String = 3,
    /// An integer value
    Integer = 4,
    /// A boolean value
    Boolean = 5,
    /// A user mention
    User = 6,
    /// A channel mention
    Channel = 7,
    /// A role mention
    Role = 8,
    /// A user or role mention
    Mentionable = 9,
    /// A floating-point value
    Number = 10,
    /// A file attachment
    Attachment = 11,
}

/// A fixed choice a command option offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOptionChoice {
    /// The display name, 1-100 characters
    pub name: String,
    /// The value passed through on selection
    pub value: serde_json::Value,
}

/// An option (parameter) of an application command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    /// The option type
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    /// The option name, 1-32 characters
    pub name: String,
    /// The option description, 1-100 characters
    pub description: String,
    /// Whether the option must be supplied
    #[serde(default)]
    pub required: bool,
    /// Fixed choices, string/integer/number options only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<CommandOptionChoice>,
    /// Nested options, subcommand and group options only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl CommandOption {
    /// A required string option.
    pub fn string(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            kind: CommandOptionType::String,
            name: name.into(),
            description: description.into(),
            required,
            choices: Vec::new(),
            options: Vec::new(),
        }
    }
}

/// An application command as registered with the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCommand {
    /// The command's id, absent when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    /// The command type, defaults to chat input
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommandType>,
    /// The owning application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    /// The guild the command is scoped to, absent for global commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// The command name, 1-32 characters
    pub name: String,
    /// The command description, empty for context menu commands
    #[serde(default)]
    pub description: String,
    /// The command's options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    /// Autoincrementing version id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Snowflake>,
}

impl ApplicationCommand {
    /// A new chat-input command definition ready for registration.
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: Some(CommandType::ChatInput),
            application_id: None,
            guild_id: None,
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            version: None,
        }
    }

    /// Append an option to the command.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}
