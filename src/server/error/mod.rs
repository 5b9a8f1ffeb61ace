//! Error types for bot startup and operation.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors and is returned from `main`.
//! Only startup failures propagate this far; the command dispatch path never fails and
//! reports negative outcomes as ordinary response content.

pub mod config;
pub mod registry;

use thiserror::Error;

use crate::server::error::{config::ConfigError, registry::RegistryError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can abort the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The server list could not be loaded.
    ///
    /// Fatal at startup; the bot never runs with a silently empty registry.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when the client cannot be built or the
    /// gateway connection fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
