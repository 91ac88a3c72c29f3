// ABOUTME: Cleanup orchestrator sequencing marker, empty, list and recursive markup passes.
// ABOUTME: Exposes Cleaner (custom tables) and the cleanup() entry point using builtin tables.

//! Markup cleanup.
//!
//! [`Cleaner::cleanup`] runs, in order:
//!
//! 1. unwrap wrappers whose only child is a selection marker
//! 2. prune empty elements, repeating both steps until nothing is pruned
//! 3. merge adjacent lists of the same type
//! 4. a post-order pass over every element: bubble styles up from the
//!    children, drop redundant styles, merge equal siblings, unwrap
//!    redundant children
//!
//! All passes mutate the document in place.

mod bubble;
mod empty;
mod lists;
mod markers;
mod merge;
mod scope;
mod unwrap;

use ego_tree::NodeId;
use log::debug;
use once_cell::sync::Lazy;

use crate::commands::registry::CommandRegistry;
use crate::dom::Document;
use crate::options::{CleanerBuilder, CleanupOptions};
use crate::policy::TagPolicy;

static BUILTIN_CLEANER: Lazy<Cleaner> = Lazy::new(Cleaner::default);

/// Clean up `roots` in place using the builtin tag policy and commands.
pub fn cleanup(doc: &mut Document, roots: &[NodeId], options: &CleanupOptions) {
    BUILTIN_CLEANER.cleanup(doc, roots, options);
}

/// Runs cleanup with a fixed tag policy and command registry.
#[derive(Debug, Clone)]
pub struct Cleaner {
    policy: TagPolicy,
    registry: CommandRegistry,
}

impl Default for Cleaner {
    fn default() -> Self {
        CleanerBuilder::new().build()
    }
}

impl Cleaner {
    pub fn new(policy: TagPolicy, registry: CommandRegistry) -> Self {
        Self { policy, registry }
    }

    /// Create a builder starting from the builtin tables.
    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::new()
    }

    pub fn policy(&self) -> &TagPolicy {
        &self.policy
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Normalize the subtrees under `roots`.
    ///
    /// Running it a second time over the result changes nothing.
    pub fn cleanup(&self, doc: &mut Document, roots: &[NodeId], options: &CleanupOptions) {
        let Some(&first) = roots.first() else {
            return;
        };
        let scope = options
            .scope_boundary
            .or_else(|| scope::find_editable_scope(doc, first));
        let attached: Vec<bool> = roots.iter().map(|&root| doc.parent(root).is_some()).collect();
        let ctx = Context {
            policy: &self.policy,
            registry: &self.registry,
            scope,
            roots,
        };
        debug!("cleanup: {} root(s), scope boundary {:?}", roots.len(), scope);

        // pruning can leave a marker alone in its wrapper
        let (mut markers, mut empties) = (0, 0);
        loop {
            let unwrapped = markers::unwrap_solitary_markers(doc, &ctx);
            let removed = empty::remove_empty_elements(doc, &ctx);
            markers += unwrapped;
            empties += removed;
            if removed == 0 {
                break;
            }
        }

        // a root unwrapped around a marker is gone from the tree
        let live: Vec<NodeId> = roots
            .iter()
            .zip(attached)
            .filter(|&(&root, was_attached)| !was_attached || doc.parent(root).is_some())
            .map(|(&root, _)| root)
            .collect();
        let ctx = Context {
            roots: &live,
            ..ctx
        };

        let mut lists = lists::merge_adjacent_lists(doc, &ctx);
        debug!(
            "cleanup: unwrapped {} marker wrapper(s), removed {} empty element(s), merged {} list(s)",
            markers, empties, lists
        );

        // unwrapping can bring lists next to each other
        loop {
            for &root in ctx.roots {
                normalize(doc, &ctx, root);
            }
            let more = lists::merge_adjacent_lists(doc, &ctx);
            if more == 0 {
                break;
            }
            lists += more;
            debug!("cleanup: merged {} more list(s), {} in total", more, lists);
        }
    }
}

/// Per-run state threaded through every pass.
pub(crate) struct Context<'a> {
    pub policy: &'a TagPolicy,
    pub registry: &'a CommandRegistry,
    /// Ancestor searches include this node and never go above it.
    pub scope: Option<NodeId>,
    pub roots: &'a [NodeId],
}

impl Context<'_> {
    pub fn is_block(&self, doc: &Document, id: NodeId) -> bool {
        doc.tag_name(id).is_some_and(|tag| self.policy.is_block(tag))
    }

    pub fn is_void(&self, doc: &Document, id: NodeId) -> bool {
        doc.tag_name(id).is_some_and(|tag| self.policy.is_void(tag))
    }

    /// The scope boundary is never unwrapped.
    pub fn is_protected(&self, id: NodeId) -> bool {
        self.scope == Some(id)
    }
}

/// Post-order normalization of one node and everything below it.
///
/// The passes repeat at a node only while merging or unwrapping removed a
/// child, so every extra round shrinks the tree.
fn normalize(doc: &mut Document, ctx: &Context<'_>, id: NodeId) {
    for child in doc.content_nodes(id) {
        normalize(doc, ctx, child);
    }
    if !doc.is_element(id) {
        return;
    }

    loop {
        bubble::bubble_styles_from_children(doc, ctx, id);
        bubble::remove_redundant_styles(doc, ctx, id);

        // merged children meet new neighbours inside their target
        let targets = merge::merge_children(doc, ctx, id);
        for &target in &targets {
            normalize(doc, ctx, target);
        }
        let unwrapped = unwrap::unwrap_redundant_children(doc, ctx, id);

        if targets.is_empty() && unwrapped == 0 {
            break;
        }
    }
}
