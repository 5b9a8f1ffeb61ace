//! Test factory for creating Serenity CommandData objects.
//!
//! This module provides factory functions for creating mock Serenity `CommandData`
//! structs for testing purposes. These factories create valid CommandData objects by
//! deserializing JSON, simulating the `data` field of an application command
//! interaction.

use serde_json::Value;
use serenity::all::CommandData;

/// Discord application command option type for strings.
const STRING_OPTION_TYPE: u8 = 3;

/// Discord application command type for slash commands.
const CHAT_INPUT_COMMAND_TYPE: u8 = 1;

/// Creates a test Serenity CommandData with string-valued options.
///
/// # Arguments
/// - `name` - Command name
/// - `options` - `(name, value)` pairs, each becoming a string option in order
///
/// # Returns
/// - `CommandData` - A valid Serenity CommandData struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into CommandData (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::command::create_test_command_data;
///
/// let data = create_test_command_data("start", &[("server", "minecraft")]);
/// assert_eq!(data.name, "start");
/// assert_eq!(data.options.len(), 1);
///
/// // Command without options
/// let data = create_test_command_data("list", &[]);
/// ```
pub fn create_test_command_data(name: &str, options: &[(&str, &str)]) -> CommandData {
    let options = options
        .iter()
        .map(|(option_name, value)| {
            serde_json::json!({
                "name": option_name,
                "type": STRING_OPTION_TYPE,
                "value": value,
            })
        })
        .collect();

    create_test_command_data_from_options(name, options)
}

/// Creates a test Serenity CommandData from raw option JSON.
///
/// Use this when an option of a type other than string is needed, for example
/// `{"name": "count", "type": 4, "value": 3}` for an integer option.
///
/// # Panics
/// - If the JSON cannot be deserialized into CommandData (indicates invalid test data)
pub fn create_test_command_data_from_options(name: &str, options: Vec<Value>) -> CommandData {
    serde_json::from_value(serde_json::json!({
        "id": "1100000000000000001",
        "name": name,
        "type": CHAT_INPUT_COMMAND_TYPE,
        "options": options,
    }))
    .expect("Failed to create test command data - invalid JSON structure")
}
