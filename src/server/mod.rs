//! Bot backend and command logic.
//!
//! This module contains the complete implementation of the server bot: loading the list
//! of known servers, answering the `/list` and `/start` slash commands, and the Serenity
//! integration that connects those commands to Discord.
//!
//! # Architecture
//!
//! The bot follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Serenity client, event handlers, and command registration
//! - **Service Layer** (`service/`) - Command handlers and dispatch
//! - **Data Layer** (`data/`) - Server registry loading and queries
//! - **Model Layer** (`model/`) - Command requests, responses, and outcomes
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Registry loading and shutdown signal handling
//!
//! # Interaction Flow
//!
//! 1. **Bot** receives a command interaction from the gateway
//! 2. **Bot** converts the interaction data into a `CommandRequest`
//! 3. **Service** looks up the handler by command name, ignoring unknown names
//! 4. **Service** handler queries the **Data** layer's registry and builds the reply
//! 5. **Bot** sends the reply as the interaction response

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
