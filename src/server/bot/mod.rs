//! Discord bot integration for slash command handling.
//!
//! This module connects the command dispatcher to Discord. The bot registers its slash
//! commands in the configured guild once the gateway session is ready, converts incoming
//! command interactions into `CommandRequest`s, and sends the dispatcher's reply back as
//! the interaction response.
//!
//! The bot runs until a shutdown signal is received, at which point all shards are
//! stopped and, if configured, the guild commands are removed again.
//!
//! # Gateway Intents
//!
//! The bot requires only the `GUILDS` intent. Interactions are delivered regardless of
//! intents, so no privileged intents need to be enabled in the Discord Developer Portal.

pub mod command;
pub mod handler;
pub mod start;
