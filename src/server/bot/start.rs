use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents, GuildId};

use crate::server::{
    bot::{command::remove_commands, handler::Handler},
    config::Config,
    error::AppError,
    service::command::CommandDispatcher,
    startup,
};

/// Builds the Discord bot client.
///
/// Configures the gateway intents and installs the event handler that answers slash
/// commands through `dispatcher`. The gateway connection is not opened until
/// `start_bot` is called.
///
/// # Arguments
/// - `config` - Application configuration providing the token and guild
/// - `dispatcher` - Command dispatcher shared by all interaction events
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    dispatcher: Arc<CommandDispatcher>,
) -> Result<Client, AppError> {
    // Interactions are delivered without any intent; GUILDS keeps the guild cache populated
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(dispatcher, GuildId::new(config.guild_id.get()));

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the Discord bot until a shutdown signal is received.
///
/// Spawns a task waiting for SIGINT/SIGTERM that stops all shards, then blocks on the
/// gateway connection. Once the shards have stopped the guild commands are removed
/// when `remove_commands_on_exit` is set.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
/// - `guild_id` - Guild the commands were registered in
/// - `remove_commands_on_exit` - Whether to remove the guild commands after shutdown
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - The gateway connection failed
pub async fn start_bot(
    mut client: Client,
    guild_id: GuildId,
    remove_commands_on_exit: bool,
) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        startup::shutdown_signal().await;
        tracing::info!("Shutdown signal received, stopping Discord bot");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    // Blocks until all shards are shut down
    client.start().await?;

    if remove_commands_on_exit {
        remove_commands(&client.http, guild_id).await;
    }

    tracing::info!("Discord bot stopped");

    Ok(())
}
