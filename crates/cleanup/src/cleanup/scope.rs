// ABOUTME: Scope boundary resolution and ancestor searches bounded by it.
// ABOUTME: Answers "which value does this node inherit" for styles, tag-implied styles and classes.

use ego_tree::NodeId;

use super::Context;
use crate::dom::{Document, ElementData, Node};

/// Nearest editable element at or above `start`.
pub(crate) fn find_editable_scope(doc: &Document, start: NodeId) -> Option<NodeId> {
    std::iter::once(start)
        .chain(doc.ancestors(start))
        .find(|&id| doc.element(id).is_some_and(ElementData::is_editable))
}

impl Context<'_> {
    /// Elements from `start` upward, nearest first, ending at the scope
    /// boundary. Empty when a boundary is set and `start` is not inside it.
    pub(crate) fn scoped_chain(&self, doc: &Document, start: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = Some(start);
        while let Some(id) = current {
            match doc.node(id) {
                Some(Node::Element(_)) => chain.push(id),
                Some(Node::Fragment) | None => break,
                Some(_) => {}
            }
            if self.scope == Some(id) {
                return chain;
            }
            current = doc.parent(id);
        }
        if self.scope.is_some() {
            Vec::new()
        } else {
            chain
        }
    }

    /// Value of `style_name` supplied by the nearest element at or above
    /// `start`, either explicitly or implied by its tag (`b` for bold).
    pub(crate) fn inherited_style_value(
        &self,
        doc: &Document,
        start: NodeId,
        style_name: &str,
    ) -> Option<String> {
        self.scoped_chain(doc, start).into_iter().find_map(|id| {
            let el = doc.element(id)?;
            el.styles
                .get(style_name)
                .or_else(|| self.implied_style_value(&el.name, style_name))
                .map(str::to_string)
        })
    }

    fn implied_style_value(&self, tag: &str, style_name: &str) -> Option<&str> {
        let config = self.registry.for_tag(tag)?;
        if config.style_name.as_deref()? == style_name {
            config.style_value.as_deref()
        } else {
            None
        }
    }

    /// Whether any element at or above `start` carries `class`.
    pub(crate) fn ancestors_have_class(&self, doc: &Document, start: NodeId, class: &str) -> bool {
        self.scoped_chain(doc, start)
            .into_iter()
            .any(|id| doc.element(id).is_some_and(|el| el.classes.contains(class)))
    }
}
