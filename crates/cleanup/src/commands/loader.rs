// ABOUTME: Loader for the builtin command registry from embedded JSON data.
// ABOUTME: Provides load_builtin_registry() to initialize the default CommandRegistry.

use crate::commands::registry::CommandRegistry;

/// Embedded JSON with the builtin formatting commands.
const BUILTIN_COMMANDS_JSON: &str = include_str!("../../data/commands.json");

/// Loads the builtin command registry from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or a class pattern fails to compile.
pub fn load_builtin_registry() -> CommandRegistry {
    CommandRegistry::from_json(BUILTIN_COMMANDS_JSON).expect("failed to parse builtin commands")
}
