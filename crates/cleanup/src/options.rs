// ABOUTME: Configuration for cleanup runs: per-call CleanupOptions and the CleanerBuilder.
// ABOUTME: CleanerBuilder provides a fluent API for constructing a Cleaner with custom tables.

use ego_tree::NodeId;

use crate::cleanup::Cleaner;
use crate::commands::loader::load_builtin_registry;
use crate::commands::registry::CommandRegistry;
use crate::policy::TagPolicy;

/// Per-call options for [`Cleaner::cleanup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Topmost node ancestor searches may reach. When unset, the nearest
    /// editable element around the first root is used.
    pub scope_boundary: Option<NodeId>,
}

impl CleanupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scope boundary explicitly.
    pub fn with_scope_boundary(mut self, boundary: NodeId) -> Self {
        self.scope_boundary = Some(boundary);
        self
    }
}

/// Builder for constructing Cleaner instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct CleanerBuilder {
    policy: Option<TagPolicy>,
    registry: Option<CommandRegistry>,
}

impl CleanerBuilder {
    /// Create a new CleanerBuilder using the builtin tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom tag policy.
    pub fn policy(mut self, policy: TagPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Use a custom command registry.
    pub fn registry(mut self, registry: CommandRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the Cleaner, filling unset tables with the builtins.
    pub fn build(self) -> Cleaner {
        Cleaner::new(
            self.policy.unwrap_or_else(TagPolicy::builtin),
            self.registry.unwrap_or_else(load_builtin_registry),
        )
    }
}
