//! `/list` command.

use serenity::all::CreateCommand;

use crate::server::{
    data::registry::ServerRegistry,
    model::command::{CommandRequest, CommandResponse},
};

use super::CommandHandler;

/// Lists every known server.
pub struct ListCommand;

impl ListCommand {
    /// Renders the server list reply.
    ///
    /// The reply is `"Servers:"` followed by `"\r<server>"` for each server in registry
    /// order. The bare carriage return separator matches the output existing users of
    /// the bot already see.
    pub fn render(registry: &ServerRegistry) -> String {
        let mut content = String::from("Servers:");
        for server in registry.all() {
            content.push('\r');
            content.push_str(server);
        }
        content
    }
}

impl CommandHandler for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn registration(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("List servers and status")
    }

    /// Options are ignored.
    fn handle(&self, _request: &CommandRequest, registry: &ServerRegistry) -> CommandResponse {
        CommandResponse::new(Self::render(registry))
    }
}
