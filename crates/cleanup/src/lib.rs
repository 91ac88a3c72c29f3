// ABOUTME: Main library entry point for the rich-text markup cleanup engine.
// ABOUTME: Re-exports the public API: Document, Cleaner, cleanup, CleanupOptions, TagPolicy, CommandRegistry.

//! rte-cleanup - normalizes markup left behind by browser rich-text editing.
//!
//! The engine removes redundant wrappers, merges equivalent siblings and
//! lists, hoists shared formatting to the highest equivalent node and prunes
//! empty elements, leaving a tree that renders the same with less nesting.
//!
//! # Example
//!
//! ```
//! use rte_cleanup::{cleanup, CleanupOptions, Document};
//!
//! let mut doc = Document::parse_fragment(r#"<div><span style="color: red">X</span></div>"#);
//! let roots = doc.top_level();
//! cleanup(&mut doc, &roots, &CleanupOptions::default());
//! assert_eq!(doc.to_html(), r#"<div style="color: red">X</div>"#);
//! ```

pub mod cleanup;
pub mod commands;
pub mod dom;
pub mod error;
pub mod options;
pub mod paragraphs;
pub mod policy;

pub use crate::cleanup::{cleanup, Cleaner};
pub use crate::commands::loader::load_builtin_registry;
pub use crate::commands::registry::{CommandConfig, CommandKey, CommandRegistry, CommandSpec};
pub use crate::dom::{
    is_blank_text, is_void_tag, ClassSet, Document, ElementData, Marker, Node, NodeId, StyleMap,
    SELECTION_MARKER_CLASS, VOID_TAGS,
};
pub use crate::error::{ConfigError, ConfigTable};
pub use crate::options::{CleanerBuilder, CleanupOptions};
pub use crate::paragraphs::convert_divs_to_paragraphs;
pub use crate::policy::TagPolicy;
