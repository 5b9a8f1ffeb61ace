//! Registry of known server identifiers.
//!
//! The registry is loaded once at startup from a line-oriented text file and is
//! read-only afterwards. It is shared behind an `Arc` by every command invocation, so
//! queries need no synchronization.

use std::path::Path;

use crate::server::error::registry::RegistryError;

/// Ordered, immutable list of known server identifiers.
///
/// Identifiers are kept exactly as they appear in the source: no trimming, case
/// folding, or deduplication is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerRegistry {
    servers: Vec<String>,
}

impl ServerRegistry {
    /// Loads the registry from a server list file.
    ///
    /// Each line of the file becomes one identifier, see `parse` for the exact line
    /// handling.
    ///
    /// # Arguments
    /// - `path` - Path of the server list file
    ///
    /// # Returns
    /// - `Ok(ServerRegistry)` - Registry containing one identifier per line
    /// - `Err(RegistryError::Read)` - File missing, unreadable, or not valid UTF-8
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| RegistryError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        Ok(Self::parse(&contents))
    }

    /// Builds a registry from the contents of a server list.
    ///
    /// Lines are split on `\n` with a trailing `\r` removed from each, including a last
    /// line that has no `\n` after it. A final line terminator does not produce an extra
    /// empty identifier, while blank and whitespace-only lines elsewhere are kept as
    /// identifiers.
    pub fn parse(contents: &str) -> Self {
        if contents.is_empty() {
            return Self::default();
        }

        let body = contents.strip_suffix('\n').unwrap_or(contents);

        Self::from_lines(
            body.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    /// Builds a registry from identifiers in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            servers: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether `identifier` is a known server.
    ///
    /// Uses exact, case-sensitive string equality.
    pub fn contains(&self, identifier: &str) -> bool {
        self.servers.iter().any(|server| server == identifier)
    }

    /// All identifiers in load order, duplicates included.
    pub fn all(&self) -> &[String] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
