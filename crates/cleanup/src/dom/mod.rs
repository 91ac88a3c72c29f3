// ABOUTME: Markup tree model: node enumeration, style/class sets and the Document arena.
// ABOUTME: Also hosts HTML fragment parsing and serialization for the arena.

//! Markup tree model.
//!
//! A [`Document`] is an ego-tree arena of [`Node`]s rooted at a
//! [`Node::Fragment`]. Parsing goes through scraper; serialization writes the
//! arena back out as an HTML fragment.

mod document;
mod node;
mod parse;
mod serialize;
mod style;

pub use document::Document;
pub use ego_tree::NodeId;
pub use node::{
    is_blank_text, is_void_tag, ElementData, Marker, Node, SELECTION_MARKER_CLASS, VOID_TAGS,
};
pub use style::{ClassSet, StyleMap};
