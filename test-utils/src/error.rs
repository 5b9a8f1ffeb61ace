use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create or write the temporary server list file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
