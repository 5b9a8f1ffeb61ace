//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for
//! testing purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::command::create_test_command_data;
//!
//! #[test]
//! fn converts_start_command() {
//!     let data = create_test_command_data("start", &[("server", "minecraft")]);
//!     let request = CommandRequest::from(&data);
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `command::create_test_command_data` - Command data with string options
//! - `command::create_test_command_data_from_options` - Command data with raw JSON options

pub mod command;

pub use command::{create_test_command_data, create_test_command_data_from_options};
