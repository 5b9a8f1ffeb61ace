//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. This is the
//! first event received after authentication and indicates the bot is ready to
//! process other events.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Register the slash commands in the configured guild

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};

use crate::server::{bot::command::register_commands, service::command::CommandDispatcher};

/// Handles the ready event when the bot connects to Discord.
///
/// This event fires once per gateway session. Registration is a bulk overwrite, so
/// repeating it after a reconnect leaves the same commands in place.
///
/// # Arguments
/// - `dispatcher` - Dispatcher providing the commands to register
/// - `guild_id` - Guild the commands are registered in
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    dispatcher: &CommandDispatcher,
    guild_id: GuildId,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("Logged in as: {}", ready.user.tag());

    register_commands(&ctx.http, guild_id, dispatcher).await;
}
