use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// Server list source could not be opened or read.
    ///
    /// Also covers files that are not valid UTF-8.
    #[error("Failed to read server list '{}': {source}", .path.display())]
    Read {
        /// Path of the server list source
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
