// ABOUTME: HTML serialization of the Document arena.
// ABOUTME: Emits remaining attributes, then class, then style; void elements self-close.

use ego_tree::NodeId;

use super::document::Document;
use super::node::{is_void_tag, Node};

impl Document {
    /// Serialize every top-level node.
    pub fn to_html(&self) -> String {
        self.inner_html(self.root())
    }

    /// Serialize the children of `id`.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            serialize_node(self, child, &mut out);
        }
        out
    }

    /// Serialize `id` including its own tag.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        serialize_node(self, id, &mut out);
        out
    }
}

fn serialize_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(node) = doc.node(id) else {
        return;
    };
    match node {
        Node::Fragment => {
            for child in doc.children(id) {
                serialize_node(doc, child, out);
            }
        }
        Node::Text(text) => push_escaped(out, text, false),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Marker(marker) => {
            out.push_str("<span");
            for (k, v) in &marker.attrs {
                push_attr(out, k, v);
            }
            out.push('>');
            push_escaped(out, &marker.text, false);
            out.push_str("</span>");
        }
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.name);
            for (k, v) in &el.attrs {
                push_attr(out, k, v);
            }
            if !el.classes.is_empty() {
                push_attr(out, "class", &el.classes.to_attr_value());
            }
            if !el.styles.is_empty() {
                push_attr(out, "style", &el.styles.to_attr_value());
            }

            if is_void_tag(&el.name) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            for child in doc.children(id) {
                serialize_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(&el.name);
            out.push('>');
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value, true);
    out.push('"');
}

/// Append `s` with markup characters replaced by entities. Quotes only
/// matter inside attribute values.
fn push_escaped(out: &mut String, s: &str, in_attr: bool) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
