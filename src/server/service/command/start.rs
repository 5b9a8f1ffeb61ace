//! `/start` command.
//!
//! Validates the requested servers against the registry and echoes them back. No
//! virtual machine is actually started.

use dioxus_logger::tracing;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::{
    data::registry::ServerRegistry,
    model::command::{CommandRequest, CommandResponse, StartOutcome},
};

use super::CommandHandler;

/// Name of the registered server option.
pub const SERVER_OPTION: &str = "server";

/// Validates and acknowledges start requests.
pub struct StartCommand;

impl StartCommand {
    /// Checks requested servers against the registry in order.
    ///
    /// Stops at the first unknown server; servers after it are never checked, even if
    /// they would have been valid. An empty request is accepted.
    ///
    /// # Arguments
    /// - `values` - Requested server identifiers, in request order
    /// - `registry` - Known servers
    ///
    /// # Returns
    /// - `StartOutcome::Accepted` - All requested servers are known
    /// - `StartOutcome::Rejected` - The first unknown server
    pub fn evaluate<'a, I>(values: I, registry: &ServerRegistry) -> StartOutcome
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut accepted = Vec::new();
        for value in values {
            if !registry.contains(value) {
                return StartOutcome::Rejected {
                    identifier: value.to_string(),
                };
            }
            accepted.push(value.to_string());
        }

        StartOutcome::Accepted(accepted)
    }
}

impl CommandHandler for StartCommand {
    fn name(&self) -> &'static str {
        "start"
    }

    fn registration(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Start a server")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, SERVER_OPTION, "Server name")
                    .required(true),
            )
    }

    /// Every string option is treated as a requested server, not only `server`.
    fn handle(&self, request: &CommandRequest, registry: &ServerRegistry) -> CommandResponse {
        let outcome = Self::evaluate(request.string_values(), registry);

        match &outcome {
            StartOutcome::Accepted(servers) => {
                tracing::info!("Start accepted for {:?}", servers)
            }
            StartOutcome::Rejected { identifier } => {
                tracing::warn!("Start rejected, unknown server '{}'", identifier)
            }
        }

        outcome.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    fn start(options: &[(&str, &str)], registry: &ServerRegistry) -> String {
        StartCommand
            .handle(&CommandRequest::new("start", options), registry)
            .content
    }

    /// Tests starting a single known server, the registered shape.
    ///
    /// Expected: "Started Server: \nvalheim"
    #[test]
    fn starts_single_known_server() {
        let registry = ServerRegistry::from_lines(fixture::servers::servers());

        assert_eq!(
            start(&[(SERVER_OPTION, "valheim")], &registry),
            "Started Server: \nvalheim"
        );
    }

    /// Tests starting a single unknown server.
    ///
    /// Expected: "<server> does not exist."
    #[test]
    fn rejects_single_unknown_server() {
        let registry = ServerRegistry::from_lines(fixture::servers::servers());

        assert_eq!(
            start(&[(SERVER_OPTION, fixture::servers::UNKNOWN_SERVER)], &registry),
            "terraria does not exist."
        );
    }

    /// Tests starting several known servers.
    ///
    /// Expected: "Started Server: \na\nb"
    #[test]
    fn starts_multiple_known_servers() {
        let registry = ServerRegistry::from_lines(["a", "b", "c"]);

        assert_eq!(
            start(&[("server", "a"), ("server", "b")], &registry),
            "Started Server: \na\nb"
        );
    }

    /// Tests that validation stops at the first unknown server.
    ///
    /// Verifies that the accepted prefix is discarded and the valid server after the
    /// unknown one is never evaluated.
    ///
    /// Expected: "z does not exist."
    #[test]
    fn stops_at_first_unknown_server() {
        let registry = ServerRegistry::from_lines(["a", "b"]);

        assert_eq!(
            start(&[("server", "a"), ("server", "z"), ("server", "b")], &registry),
            "z does not exist."
        );
        assert_eq!(
            StartCommand::evaluate(["a", "z", "b"], &registry),
            StartOutcome::Rejected {
                identifier: "z".to_string()
            }
        );
    }

    /// Tests that only the first of several unknown servers is reported.
    ///
    /// Expected: "x does not exist."
    #[test]
    fn reports_first_of_many_unknown_servers() {
        let registry = ServerRegistry::from_lines(["a"]);

        assert_eq!(
            start(&[("server", "x"), ("server", "y")], &registry),
            "x does not exist."
        );
    }

    /// Tests a request with no options.
    ///
    /// Expected: "Started Server: " with the trailing space
    #[test]
    fn accepts_empty_request() {
        let registry = ServerRegistry::from_lines(["a"]);

        assert_eq!(start(&[], &registry), "Started Server: ");
        assert_eq!(
            StartCommand::evaluate(std::iter::empty(), &registry),
            StartOutcome::Accepted(Vec::new())
        );
    }

    /// Tests that matching is case-sensitive and exact.
    ///
    /// Expected: rejection for a differently cased name
    #[test]
    fn matches_case_sensitively() {
        let registry = ServerRegistry::from_lines(["Minecraft"]);

        assert_eq!(
            start(&[("server", "minecraft")], &registry),
            "minecraft does not exist."
        );
    }

    /// Tests that the registration declares one required string option.
    ///
    /// Expected: command metadata with a required "server" option
    #[test]
    fn registers_required_server_option() {
        let registration = serde_json::to_value(StartCommand.registration()).unwrap();

        assert_eq!(registration["name"], "start");
        assert_eq!(registration["options"][0]["name"], SERVER_OPTION);
        assert_eq!(registration["options"][0]["type"], 3);
        assert_eq!(registration["options"][0]["required"], true);
    }
}
