// ABOUTME: Replaces div elements with paragraphs at the roots and one level below them.
// ABOUTME: Only style, id and class carry over to the new paragraph.

use ego_tree::NodeId;
use log::trace;

use crate::dom::{Document, ElementData, Node};

/// Convert each root that is a `div`, and each `div` directly under a root,
/// into a `p` with the same content. Returns the node now standing in each
/// root's place.
pub fn convert_divs_to_paragraphs(doc: &mut Document, roots: &[NodeId]) -> Vec<NodeId> {
    roots
        .iter()
        .map(|&root| {
            for child in doc.children(root) {
                convert_div(doc, child);
            }
            convert_div(doc, root)
        })
        .collect()
}

fn convert_div(doc: &mut Document, id: NodeId) -> NodeId {
    let paragraph = match doc.element(id) {
        Some(div) if div.name == "div" && doc.parent(id).is_some() => {
            let mut p = ElementData::new("p");
            p.styles = div.styles.clone();
            p.classes = div.classes.clone();
            if let Some(value) = div.attr("id").filter(|v| !v.is_empty()) {
                p.set_attr("id", value);
            }
            p
        }
        _ => return id,
    };

    let p = doc.create_node(Node::Element(paragraph));
    doc.move_children(id, p);
    doc.replace(id, p);
    trace!("converted div {:?} to paragraph {:?}", id, p);
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn div_becomes_paragraph_keeping_presentation() {
        let mut doc = Document::parse_fragment(
            "<div id=\"x\" style=\"color: red\" class=\"k\" data-role=\"note\">Hi</div>",
        );
        let roots = doc.top_level();
        let converted = convert_divs_to_paragraphs(&mut doc, &roots);
        assert_eq!(
            doc.to_html(),
            "<p id=\"x\" class=\"k\" style=\"color: red\">Hi</p>"
        );
        assert_eq!(converted.len(), 1);
        assert_eq!(doc.tag_name(converted[0]), Some("p"));
    }

    #[test]
    fn converts_one_level_deep_only() {
        let mut doc =
            Document::parse_fragment("<section><div>a</div><div><div>b</div></div></section>");
        let roots = doc.top_level();
        let converted = convert_divs_to_paragraphs(&mut doc, &roots);
        assert_eq!(
            doc.to_html(),
            "<section><p>a</p><p><div>b</div></p></section>"
        );
        assert_eq!(converted, roots);
    }

    #[test]
    fn other_roots_pass_through() {
        let mut doc = Document::parse_fragment("<p>a</p>text");
        let roots = doc.top_level();
        let converted = convert_divs_to_paragraphs(&mut doc, &roots);
        assert_eq!(converted, roots);
        assert_eq!(doc.to_html(), "<p>a</p>text");
    }
}
