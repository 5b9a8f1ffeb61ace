//! Service layer for command handling.
//!
//! This module contains the business logic of the bot. Services sit between the bot
//! (gateway) layer and the data layer and are responsible for:
//!
//! - **Dispatch**: Routing a command request to the handler registered for its name
//! - **Business Logic**: Producing the reply for each command from the server registry

pub mod command;
