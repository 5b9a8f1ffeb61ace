use std::collections::BTreeMap;
use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::CreateCommand;

use crate::server::{
    data::registry::ServerRegistry,
    model::command::{CommandRequest, CommandResponse},
};

use super::{CommandHandler, ListCommand, StartCommand};

/// Routes command requests to the handler registered for their name.
///
/// Built once at startup and shared behind an `Arc`. No state changes after
/// construction.
pub struct CommandDispatcher {
    registry: Arc<ServerRegistry>,
    handlers: BTreeMap<&'static str, Box<dyn CommandHandler>>,
}

impl CommandDispatcher {
    /// Creates a dispatcher with no handlers.
    ///
    /// # Arguments
    /// - `registry` - Known servers passed to every handler
    pub fn new(registry: Arc<ServerRegistry>) -> Self {
        Self {
            registry,
            handlers: BTreeMap::new(),
        }
    }

    /// Creates a dispatcher answering `/list` and `/start`.
    pub fn standard(registry: Arc<ServerRegistry>) -> Self {
        Self::new(registry)
            .with_handler(ListCommand)
            .with_handler(StartCommand)
    }

    /// Registers a handler under its name, replacing any handler with the same name.
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: CommandHandler + 'static,
    {
        self.handlers.insert(handler.name(), Box::new(handler));
        self
    }

    /// Dispatches a request to its handler.
    ///
    /// Unknown command names are ignored: no reply is produced and no error is raised.
    ///
    /// # Arguments
    /// - `request` - Incoming command request
    ///
    /// # Returns
    /// - `Some(CommandResponse)` - Reply from the matching handler
    /// - `None` - No handler is registered under `request.name`
    pub fn dispatch(&self, request: &CommandRequest) -> Option<CommandResponse> {
        let Some(handler) = self.handlers.get(request.name.as_str()) else {
            tracing::debug!("Ignoring unknown command '{}'", request.name);
            return None;
        };

        tracing::debug!(
            "Dispatching command '{}' with {} option(s)",
            request.name,
            request.options.len()
        );

        Some(handler.handle(request, &self.registry))
    }

    /// Names of all registered commands, sorted.
    pub fn command_names(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    /// Discord registration metadata for all registered commands.
    pub fn registrations(&self) -> Vec<CreateCommand> {
        self.handlers
            .values()
            .map(|handler| handler.registration())
            .collect()
    }
}
