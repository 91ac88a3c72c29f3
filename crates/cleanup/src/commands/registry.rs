// ABOUTME: Command configuration data models and the registry keyed by style, class and tag.
// ABOUTME: Maps a style or class name to its logical editing command and class family pattern.

//! Editing command registry.
//!
//! Each [`CommandConfig`] names a logical formatting command and the ways it
//! shows up in markup: a style property, an exact class, a family of mutually
//! exclusive classes, or tags that imply the command's style value.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ConfigError, ConfigTable};

/// Serialized form of a command entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommandSpec {
    /// Logical command name, e.g. "bold"
    pub command: String,
    /// Style property the command writes, e.g. "font-weight"
    #[serde(default)]
    pub style_name: Option<String>,
    /// Value implied by `tag_names`
    #[serde(default)]
    pub style_value: Option<String>,
    /// Tags that apply the command without a style, e.g. ["b", "strong"]
    #[serde(default)]
    pub tag_names: Vec<String>,
    /// Exact class the command adds
    #[serde(default)]
    pub class_name: Option<String>,
    /// Regex matching every class of a mutually exclusive family
    #[serde(default)]
    pub class_name_pattern: Option<String>,
}

/// A registered command with its class pattern compiled.
#[derive(Debug, Clone)]
pub struct CommandConfig {
    pub command_name: String,
    pub style_name: Option<String>,
    pub style_value: Option<String>,
    pub tag_names: Vec<String>,
    pub class_name: Option<String>,
    pub class_name_pattern: Option<Regex>,
}

impl CommandConfig {
    /// Compile a spec. Fails if the class pattern is not a valid regex.
    pub fn from_spec(spec: CommandSpec) -> Result<Self, ConfigError> {
        let class_name_pattern = spec
            .class_name_pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| ConfigError::pattern(&spec.command, e))?;
        Ok(Self {
            command_name: spec.command,
            style_name: spec.style_name.map(|s| s.trim().to_ascii_lowercase()),
            style_value: spec.style_value,
            tag_names: spec
                .tag_names
                .into_iter()
                .map(|t| t.to_ascii_lowercase())
                .collect(),
            class_name: spec.class_name,
            class_name_pattern,
        })
    }

    /// A command keyed only by a style property.
    pub fn for_style(command: impl Into<String>, style_name: &str) -> Self {
        Self {
            command_name: command.into(),
            style_name: Some(style_name.to_ascii_lowercase()),
            style_value: None,
            tag_names: Vec::new(),
            class_name: None,
            class_name_pattern: None,
        }
    }

    /// Whether `class` belongs to this command.
    pub fn matches_class(&self, class: &str) -> bool {
        self.class_name.as_deref() == Some(class)
            || self
                .class_name_pattern
                .as_ref()
                .is_some_and(|p| p.is_match(class))
    }
}

/// What a command lookup is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKey<'a> {
    Style(&'a str),
    Class(&'a str),
}

/// Registry for looking up command configs by style, class or tag.
#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandConfig>,
    by_style: HashMap<String, usize>,
    by_class: HashMap<String, usize>,
    by_tag: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of command specs.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let specs: Vec<CommandSpec> =
            serde_json::from_str(json).map_err(|e| ConfigError::parse(ConfigTable::Commands, e))?;
        let mut registry = CommandRegistry::new();
        for spec in specs {
            registry.register(CommandConfig::from_spec(spec)?);
        }
        Ok(registry)
    }

    /// Registers a command. Earlier registrations win on key clashes.
    pub fn register(&mut self, config: CommandConfig) {
        let index = self.commands.len();
        if let Some(style) = &config.style_name {
            self.by_style.entry(style.clone()).or_insert(index);
        }
        if let Some(class) = &config.class_name {
            self.by_class.entry(class.clone()).or_insert(index);
        }
        for tag in &config.tag_names {
            self.by_tag.entry(tag.clone()).or_insert(index);
        }
        self.commands.push(config);
    }

    /// Looks up the command for a style or class name.
    pub fn command_for(&self, key: CommandKey<'_>) -> Option<&CommandConfig> {
        match key {
            CommandKey::Style(name) => self.for_style(name),
            CommandKey::Class(name) => self.for_class(name),
        }
    }

    pub fn for_style(&self, style_name: &str) -> Option<&CommandConfig> {
        let index = self.by_style.get(&style_name.trim().to_ascii_lowercase())?;
        self.commands.get(*index)
    }

    /// Exact class registrations take precedence over pattern families.
    pub fn for_class(&self, class: &str) -> Option<&CommandConfig> {
        if let Some(index) = self.by_class.get(class) {
            return self.commands.get(*index);
        }
        self.commands.iter().find(|c| c.matches_class(class))
    }

    /// The command a tag implies, e.g. `b` for bold.
    pub fn for_tag(&self, tag: &str) -> Option<&CommandConfig> {
        let index = self.by_tag.get(tag)?;
        self.commands.get(*index)
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
