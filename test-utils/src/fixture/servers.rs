//! Server identifier fixtures.

/// Default set of known server identifiers, in registry order.
pub const DEFAULT_SERVERS: [&str; 3] = ["minecraft", "valheim", "factorio"];

/// Identifier that never appears in `DEFAULT_SERVERS`.
pub const UNKNOWN_SERVER: &str = "terraria";

/// Returns `DEFAULT_SERVERS` as owned strings.
pub fn servers() -> Vec<String> {
    DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect()
}
