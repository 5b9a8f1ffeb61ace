use std::sync::Arc;

use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

use crate::server::service::command::CommandDispatcher;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<CommandDispatcher>,
    pub guild_id: GuildId,
}

impl Handler {
    pub fn new(dispatcher: Arc<CommandDispatcher>, guild_id: GuildId) -> Self {
        Self {
            dispatcher,
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.dispatcher, self.guild_id, ctx, ready).await;
    }

    /// Called when a user invokes a slash command or another interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.dispatcher, ctx, interaction).await;
    }
}
