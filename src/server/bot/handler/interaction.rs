//! Interaction event handler for slash commands.
//!
//! Command interactions are converted into a `CommandRequest` and dispatched. When the
//! command is known, its reply is sent as the initial interaction response; unknown
//! commands and non-command interactions get no response.

use dioxus_logger::tracing;
use serenity::all::{CommandData, Context, Interaction};

use crate::server::{
    model::command::{CommandRequest, CommandResponse},
    service::command::CommandDispatcher,
};

/// Handles an interaction created by a user.
///
/// Failing to deliver the response is logged and otherwise ignored.
///
/// # Arguments
/// - `dispatcher` - Dispatcher answering the command
/// - `ctx` - Discord context providing the HTTP client
/// - `interaction` - The incoming interaction
pub async fn handle_interaction_create(
    dispatcher: &CommandDispatcher,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(response) = respond_to_command(dispatcher, &command.data) else {
        return;
    };

    if let Err(e) = command
        .create_response(&ctx.http, response.into_interaction_response())
        .await
    {
        tracing::error!(
            "Failed to respond to command '{}': {:?}",
            command.data.name,
            e
        );
    }
}

/// Produces the reply for a command interaction's data.
///
/// # Returns
/// - `Some(CommandResponse)` - Reply to send
/// - `None` - Command is not handled by the bot
pub fn respond_to_command(
    dispatcher: &CommandDispatcher,
    data: &CommandData,
) -> Option<CommandResponse> {
    dispatcher.dispatch(&CommandRequest::from(data))
}
