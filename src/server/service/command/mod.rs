//! Slash command handlers and dispatch.
//!
//! Each command is a `CommandHandler` implementation describing both its Discord
//! registration and the reply it produces. `CommandDispatcher` holds the handlers and the
//! shared `ServerRegistry`; both are fixed once the dispatcher is built, so a single
//! dispatcher can serve concurrent interactions without locking.

pub mod dispatcher;
pub mod list;
pub mod start;

use serenity::all::CreateCommand;

use crate::server::{
    data::registry::ServerRegistry,
    model::command::{CommandRequest, CommandResponse},
};

pub use dispatcher::CommandDispatcher;
pub use list::ListCommand;
pub use start::StartCommand;

/// A slash command the bot answers.
pub trait CommandHandler: Send + Sync {
    /// Name the command is registered and dispatched under.
    fn name(&self) -> &'static str;

    /// Discord registration metadata for the command.
    fn registration(&self) -> CreateCommand;

    /// Produces the reply for a request.
    ///
    /// Handlers are total: negative results are ordinary response content.
    fn handle(&self, request: &CommandRequest, registry: &ServerRegistry) -> CommandResponse;
}
