// ABOUTME: Document arena over ego-tree holding a forest of nodes under a Fragment root.
// ABOUTME: Provides navigation helpers and the structural primitives the cleanup passes use.

use ego_tree::{NodeId, Tree};

use super::node::{ElementData, Node};

/// A mutable markup forest.
///
/// Nodes are addressed by stable [`NodeId`]s. Structural primitives keep the
/// parent and sibling links consistent; a removed node is detached and stays
/// in the arena, unreachable from the root.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(Node::Fragment),
        }
    }

    /// The Fragment root.
    pub fn root(&self) -> NodeId {
        self.tree.root().id()
    }

    /// Children of the Fragment root, in document order.
    pub fn top_level(&self) -> Vec<NodeId> {
        self.children(self.root())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tree.get(id).map(|n| n.value())
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).and_then(Node::as_element)
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(Node::tag_name)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_element)
    }

    pub fn is_marker(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_marker)
    }

    pub fn is_insignificant(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_insignificant)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.parent().map(|p| p.id())
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|n| n.children().map(|c| c.id()).collect())
            .unwrap_or_default()
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(|n| n.has_children())
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.tree.get(id).map_or(0, |n| n.children().count())
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.prev_sibling().map(|s| s.id())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.next_sibling().map(|s| s.id())
    }

    /// Nearest preceding sibling that is not insignificant.
    pub fn prev_significant_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.prev_sibling(id);
        while let Some(sibling) = current {
            if !self.is_insignificant(sibling) {
                return Some(sibling);
            }
            current = self.prev_sibling(sibling);
        }
        None
    }

    /// Nearest following sibling that is not insignificant.
    pub fn next_significant_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.next_sibling(id);
        while let Some(sibling) = current {
            if !self.is_insignificant(sibling) {
                return Some(sibling);
            }
            current = self.next_sibling(sibling);
        }
        None
    }

    /// Children that count as content: everything but insignificant nodes.
    pub fn content_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .into_iter()
            .filter(|&child| !self.is_insignificant(child))
            .collect()
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|n| n.descendants().skip(1).map(|d| d.id()).collect())
            .unwrap_or_default()
    }

    /// Ancestors of `id`, nearest first, ending at the Fragment root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|n| n.ancestors().map(|a| a.id()).collect())
            .unwrap_or_default()
    }

    /// Whether `id` is reachable from the Fragment root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        id == self.root() || self.ancestors(id).last() == Some(&self.root())
    }

    /// Run `f` against the element data of `id`. Returns `None` for non-elements.
    pub fn update_element<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut ElementData) -> R,
    ) -> Option<R> {
        let mut node = self.tree.get_mut(id)?;
        node.value().as_element_mut().map(f)
    }

    /// Allocate a detached node.
    pub fn create_node(&mut self, node: Node) -> NodeId {
        self.tree.orphan(node).id()
    }

    /// Allocate a detached element with no attributes.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.create_node(Node::Element(ElementData::new(name)))
    }

    /// Allocate `node` and append it as the last child of `parent`.
    pub fn append_node(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.create_node(node);
        self.append(parent, id);
        id
    }

    /// Move `child` to the end of `parent`'s children.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if parent == child {
            return;
        }
        if let Some(mut parent) = self.tree.get_mut(parent) {
            parent.append_id(child);
        }
    }

    /// Move `node` immediately before `reference`. No-op if `reference` is detached.
    pub fn insert_before(&mut self, node: NodeId, reference: NodeId) {
        if node == reference || self.parent(reference).is_none() {
            return;
        }
        if let Some(mut reference) = self.tree.get_mut(reference) {
            reference.insert_id_before(node);
        }
    }

    /// Detach `id` (and its subtree) from the document.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root() {
            return;
        }
        if let Some(mut node) = self.tree.get_mut(id) {
            node.detach();
        }
    }

    /// Replace `id` with its children. Returns false if `id` has no parent.
    pub fn unwrap(&mut self, id: NodeId) -> bool {
        if self.parent(id).is_none() {
            return false;
        }
        for child in self.children(id) {
            self.insert_before(child, id);
        }
        self.remove(id);
        true
    }

    /// Put `new` where `old` is and detach `old`.
    pub fn replace(&mut self, old: NodeId, new: NodeId) {
        if old == new || self.parent(old).is_none() {
            return;
        }
        self.insert_before(new, old);
        self.remove(old);
    }

    /// Append every child of `from` to `to`, preserving order.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        for child in self.children(from) {
            self.append(to, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn first(doc: &Document, tag: &str) -> NodeId {
        doc.descendants(doc.root())
            .into_iter()
            .find(|&id| doc.tag_name(id) == Some(tag))
            .unwrap()
    }

    #[test]
    fn unwrap_splices_children_in_place() {
        let mut doc = Document::parse_fragment("<p>a<span>b<i>c</i></span>d</p>");
        let span = first(&doc, "span");
        assert!(doc.unwrap(span));
        assert_eq!(doc.to_html(), "<p>ab<i>c</i>d</p>");
        assert!(!doc.is_attached(span));
    }

    #[test]
    fn replace_and_move_children() {
        let mut doc = Document::parse_fragment("<div><b>x</b>y</div>");
        let div = first(&doc, "div");
        let p = doc.create_element("p");
        doc.move_children(div, p);
        doc.replace(div, p);
        assert_eq!(doc.to_html(), "<p><b>x</b>y</p>");
        assert!(doc.is_attached(p));
        assert!(!doc.is_attached(div));
    }

    #[test]
    fn significant_siblings_skip_blank_text_and_markers() {
        let doc = Document::parse_fragment(
            r#"<b>a</b> <span class="rangySelectionBoundary"></span> <i>b</i>"#,
        );
        let b = first(&doc, "b");
        let i = first(&doc, "i");
        assert_eq!(doc.next_significant_sibling(b), Some(i));
        assert_eq!(doc.prev_significant_sibling(i), Some(b));
        assert_eq!(doc.content_nodes(doc.root()), vec![b, i]);
    }

    #[test]
    fn update_element_ignores_text() {
        let mut doc = Document::parse_fragment("text<b>x</b>");
        let text = doc.top_level()[0];
        assert_eq!(doc.update_element(text, |el| el.name.clone()), None);
        let b = first(&doc, "b");
        doc.update_element(b, |el| el.styles.set("color", "red"));
        assert_eq!(doc.to_html(), r#"text<b style="color: red">x</b>"#);
    }
}
