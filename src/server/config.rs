use std::fmt;
use std::num::NonZeroU64;
use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVERS_FILE: &str = "servers.txt";

pub struct Config {
    pub discord_bot_token: String,
    pub guild_id: NonZeroU64,

    /// Path of the line-oriented server list.
    pub servers_file: PathBuf,
    /// Remove the guild's registered commands when the bot shuts down.
    pub remove_commands: bool,

    pub virtualization: Option<VirtualizationConfig>,
}

/// Credentials for the virtualization control endpoint.
///
/// Read from the environment for deployments that already provide them, but never used to
/// contact the endpoint: `/start` only validates the requested servers.
#[derive(Clone, PartialEq)]
pub struct VirtualizationConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub node: String,
    pub vm_id: String,
}

impl fmt::Debug for VirtualizationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualizationConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("node", &self.node)
            .field("vm_id", &self.vm_id)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or `GUILD_ID`
    ///   is not a valid, non-zero snowflake
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let guild_id = require("GUILD_ID")?;
        let guild_id = guild_id
            .trim()
            .parse::<NonZeroU64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "GUILD_ID".to_string(),
                value: guild_id.clone(),
                source: e,
            })?;

        let virtualization = lookup("VAULT_HOST")
            .filter(|host| !host.is_empty())
            .map(|host| VirtualizationConfig {
                host,
                username: lookup("USERNAME").unwrap_or_default(),
                password: lookup("PASSWORD").unwrap_or_default(),
                node: lookup("NODE").unwrap_or_default(),
                vm_id: lookup("VM_ID").unwrap_or_default(),
            });

        Ok(Self {
            discord_bot_token: require("DISCORD_TOKEN")?,
            guild_id,
            servers_file: lookup("SERVERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SERVERS_FILE)),
            remove_commands: lookup("REMOVE_COMMANDS")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
            virtualization,
        })
    }
}

/// Interprets `true`, `1` and `yes` (any case) as set; everything else as unset.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
