//! Server-side domain models.
//!
//! This module contains the models passed between the bot layer and the command
//! handlers. Serenity gateway types are converted into these models at the bot boundary
//! so handlers stay free of Discord specifics and can be tested without a gateway.

pub mod command;
