// ABOUTME: HTML fragment parsing into the Document arena via scraper (html5ever).
// ABOUTME: Spans carrying the selection marker class become Marker nodes.

use ego_tree::NodeId;
use scraper::Html;

use super::document::Document;
use super::node::{ElementData, Marker, Node, SELECTION_MARKER_CLASS};

impl Document {
    /// Parse an HTML fragment, recognizing the default selection marker class.
    pub fn parse_fragment(html: &str) -> Self {
        Self::parse_fragment_with(html, SELECTION_MARKER_CLASS)
    }

    /// Parse an HTML fragment, treating elements with `marker_class` as
    /// selection-boundary markers.
    pub fn parse_fragment_with(html: &str, marker_class: &str) -> Self {
        let fragment = Html::parse_fragment(html);
        let mut doc = Document::new();
        let root = doc.root();
        for child in fragment.root_element().children() {
            import_node(&mut doc, root, child, marker_class);
        }
        doc
    }
}

fn import_node(
    doc: &mut Document,
    parent: NodeId,
    node: ego_tree::NodeRef<scraper::Node>,
    marker_class: &str,
) {
    match node.value() {
        scraper::Node::Text(text) => {
            doc.append_node(parent, Node::Text(String::from(&**text)));
        }
        scraper::Node::Comment(comment) => {
            doc.append_node(parent, Node::Comment(String::from(&**comment)));
        }
        scraper::Node::Element(el) => {
            if !marker_class.is_empty() && el.classes().any(|c| c == marker_class) {
                let mut attrs: Vec<(String, String)> = el
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                attrs.sort();
                let text = node
                    .descendants()
                    .filter_map(|d| match d.value() {
                        scraper::Node::Text(t) => Some(&**t),
                        _ => None,
                    })
                    .collect::<String>();
                doc.append_node(parent, Node::Marker(Marker { attrs, text }));
                return;
            }

            let data = ElementData::from_attrs(el.name(), el.attrs());
            let id = doc.append_node(parent, Node::Element(data));
            for child in node.children() {
                import_node(doc, id, child, marker_class);
            }
        }
        _ => {}
    }
}
