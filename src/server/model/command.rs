//! Command request and response models.
//!
//! These models are the boundary between the Discord gateway and the command handlers.
//! `CommandRequest` is converted from Serenity's `CommandData` in the bot layer so that
//! handlers never see gateway types, and `CommandResponse` is turned back into an
//! interaction response only when it is sent.

use serenity::all::{CommandData, CreateInteractionResponse, CreateInteractionResponseMessage};

/// A single named option supplied with a command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOption {
    /// Option name as registered with Discord.
    pub name: String,
    /// String value provided by the user.
    pub value: String,
}

/// An inbound command invocation.
///
/// One request is created per interaction event and dispatched to exactly one handler
/// keyed by `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    /// Command name, e.g. `list` or `start`.
    pub name: String,
    /// String-valued options in the order Discord delivered them.
    pub options: Vec<CommandOption>,
}

impl CommandRequest {
    /// Creates a request from a command name and `(name, value)` option pairs.
    ///
    /// # Arguments
    /// - `name` - Command name
    /// - `options` - Option name/value pairs, kept in order
    ///
    /// # Returns
    /// - `CommandRequest` - The assembled request
    #[cfg(test)]
    pub fn new(name: &str, options: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            options: options
                .iter()
                .map(|(option_name, value)| CommandOption {
                    name: option_name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    /// Option values in delivery order.
    pub fn string_values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.value.as_str())
    }
}

/// Converts Serenity command data into a request.
///
/// Only top-level options carrying a string value are kept; options of any other type
/// are dropped since every registered option is a string.
impl From<&CommandData> for CommandRequest {
    fn from(data: &CommandData) -> Self {
        Self {
            name: data.name.clone(),
            options: data
                .options
                .iter()
                .filter_map(|option| {
                    option.value.as_str().map(|value| CommandOption {
                        name: option.name.clone(),
                        value: value.to_string(),
                    })
                })
                .collect(),
        }
    }
}

/// Text reply to a command.
///
/// Exactly one response is produced for every request whose name matches a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub content: String,
}

impl CommandResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Converts the response into a channel message interaction reply.
    pub fn into_interaction_response(self) -> CreateInteractionResponse {
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content(self.content),
        )
    }
}

/// Result of validating the servers named in a `/start` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Every requested server is known; holds them in request order.
    Accepted(Vec<String>),
    /// The first requested server that is not known. Later servers were not checked.
    Rejected { identifier: String },
}

impl StartOutcome {
    /// Renders the outcome as reply text.
    ///
    /// # Returns
    /// - `"Started Server: "` followed by `"\n<server>"` per accepted server
    /// - `"<server> does not exist."` for a rejection
    pub fn content(&self) -> String {
        match self {
            Self::Accepted(servers) => {
                let mut content = String::from("Started Server: ");
                for server in servers {
                    content.push('\n');
                    content.push_str(server);
                }
                content
            }
            Self::Rejected { identifier } => format!("{} does not exist.", identifier),
        }
    }

    pub fn into_response(self) -> CommandResponse {
        CommandResponse::new(self.content())
    }
}
