mod server;

use std::sync::Arc;

use dioxus_logger::tracing::{self, Level};
use serenity::all::GuildId;

use crate::server::{
    bot, config::Config, error::AppError, service::command::CommandDispatcher, startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!("Starting server bot");

    let config = Config::from_env()?;
    startup::log_virtualization_config(&config);

    let registry = startup::load_server_registry(&config).await?;
    let dispatcher = Arc::new(CommandDispatcher::standard(registry));

    let client = bot::start::init_bot(&config, dispatcher).await?;

    bot::start::start_bot(
        client,
        GuildId::new(config.guild_id.get()),
        config.remove_commands,
    )
    .await?;

    tracing::info!("Server bot stopped");

    Ok(())
}
