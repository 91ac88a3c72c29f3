// ABOUTME: Error types for loading cleanup configuration tables.
// ABOUTME: Provides ConfigError with Parse and Pattern variants plus convenience constructors.

use std::fmt;
use thiserror::Error;

/// Which configuration table failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTable {
    TagPolicy,
    Commands,
}

impl fmt::Display for ConfigTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConfigTable::TagPolicy => "tag policy",
            ConfigTable::Commands => "command registry",
        };
        write!(f, "{}", s)
    }
}

/// Errors that can occur while loading a tag policy or command registry.
///
/// The cleanup passes themselves never fail; only configuration does.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be deserialized.
    #[error("failed to parse {table}: {source}")]
    Parse {
        table: ConfigTable,
        #[source]
        source: serde_json::Error,
    },

    /// A command declared a class pattern that is not a valid regex.
    #[error("invalid class pattern for command {command:?}: {source}")]
    Pattern {
        command: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    /// Creates a Parse error for the given table.
    pub fn parse(table: ConfigTable, source: serde_json::Error) -> Self {
        ConfigError::Parse { table, source }
    }

    /// Creates a Pattern error for the given command.
    pub fn pattern(command: impl Into<String>, source: regex::Error) -> Self {
        ConfigError::Pattern {
            command: command.into(),
            source,
        }
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ConfigError::Parse { .. })
    }

    /// Returns true if this is a Pattern error.
    pub fn is_pattern(&self) -> bool {
        matches!(self, ConfigError::Pattern { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_table() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::parse(ConfigTable::Commands, source);
        assert!(err.is_parse());
        assert!(err.to_string().starts_with("failed to parse command registry"));
    }

    #[test]
    fn pattern_error_names_the_command() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ConfigError::pattern("fontSize", source);
        assert!(err.is_pattern());
        assert!(err.to_string().contains("\"fontSize\""));
    }
}
