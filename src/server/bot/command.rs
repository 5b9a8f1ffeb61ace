//! Guild slash command registration.

use dioxus_logger::tracing;
use serenity::all::GuildId;
use serenity::http::Http;

use crate::server::service::command::CommandDispatcher;

/// Replaces the guild's slash commands with the dispatcher's commands.
///
/// Uses a bulk overwrite, so commands from a previous run that are no longer handled
/// are removed at the same time. Failures are logged; the bot keeps running so that
/// commands registered earlier still work.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `guild_id` - Guild to register the commands in
/// - `dispatcher` - Dispatcher providing the command metadata
pub async fn register_commands(http: &Http, guild_id: GuildId, dispatcher: &CommandDispatcher) {
    tracing::debug!(
        "Registering commands {:?} in guild {}",
        dispatcher.command_names(),
        guild_id
    );

    match guild_id.set_commands(http, dispatcher.registrations()).await {
        Ok(commands) => {
            let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
            tracing::info!(
                "Registered {} commands in guild {}: {:?}",
                commands.len(),
                guild_id,
                names
            );
        }
        Err(e) => {
            tracing::error!("Failed to register commands in guild {}: {:?}", guild_id, e);
        }
    }
}

/// Removes all of the bot's slash commands from the guild.
pub async fn remove_commands(http: &Http, guild_id: GuildId) {
    match guild_id.set_commands(http, Vec::new()).await {
        Ok(_) => tracing::info!("Removed commands from guild {}", guild_id),
        Err(e) => tracing::error!("Failed to remove commands from guild {}: {:?}", guild_id, e),
    }
}
