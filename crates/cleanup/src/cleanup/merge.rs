// ABOUTME: Merges adjacent inline siblings that share tag, styles, classes and attributes.
// ABOUTME: Insignificant nodes between the pair move into the surviving sibling.

use ego_tree::NodeId;
use log::trace;

use super::Context;
use crate::dom::Document;

/// Fold each inline content node of `container` into an identical
/// preceding sibling, scanning left to right. Returns the siblings that
/// received children.
pub(crate) fn merge_children(
    doc: &mut Document,
    ctx: &Context<'_>,
    container: NodeId,
) -> Vec<NodeId> {
    let mut targets = Vec::new();
    if !doc.is_element(container) {
        return targets;
    }

    for current in doc.content_nodes(container).into_iter().skip(1) {
        if !doc.is_element(current) || ctx.is_block(doc, current) || ctx.is_void(doc, current) {
            continue;
        }
        let Some((target, between)) = prev_mergable_sibling(doc, ctx, current) else {
            continue;
        };

        for node in between {
            doc.append(target, node);
        }
        doc.move_children(current, target);
        doc.remove(current);
        trace!("merged {:?} into preceding sibling {:?}", current, target);
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    targets
}

/// The preceding element sibling `current` can fold into, plus the
/// insignificant nodes between them in document order.
fn prev_mergable_sibling(
    doc: &Document,
    ctx: &Context<'_>,
    current: NodeId,
) -> Option<(NodeId, Vec<NodeId>)> {
    let mut between = Vec::new();
    let mut sibling = doc.prev_sibling(current);
    while let Some(id) = sibling {
        if !doc.is_insignificant(id) {
            break;
        }
        between.push(id);
        sibling = doc.prev_sibling(id);
    }

    let sibling = sibling?;
    let (prev, this) = (doc.element(sibling)?, doc.element(current)?);
    if ctx.policy.is_block(&prev.name) || !prev.same_presentation(this) {
        return None;
    }
    between.reverse();
    Some((sibling, between))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::loader::load_builtin_registry;
    use crate::policy::TagPolicy;
    use pretty_assertions::assert_eq;

    fn merged(html: &str) -> String {
        let mut doc = Document::parse_fragment(html);
        let policy = TagPolicy::builtin();
        let registry = load_builtin_registry();
        let root = doc.top_level()[0];
        let ctx = Context {
            policy: &policy,
            registry: &registry,
            scope: None,
            roots: &[root],
        };
        merge_children(&mut doc, &ctx, root);
        doc.to_html()
    }

    #[test]
    fn identical_inline_siblings_merge() {
        assert_eq!(merged("<p><b>A</b><b>B</b></p>"), "<p><b>AB</b></p>");
        assert_eq!(merged("<p><b>A</b><b>B</b><b>C</b></p>"), "<p><b>ABC</b></p>");
    }

    #[test]
    fn insignificant_nodes_move_along() {
        assert_eq!(
            merged("<p><i>A</i> <i>B</i></p>"),
            "<p><i>A B</i></p>"
        );
    }

    #[test]
    fn differing_siblings_stay_apart() {
        assert_eq!(
            merged("<p><span style=\"color: red\">A</span><span style=\"color: blue\">B</span></p>"),
            "<p><span style=\"color: red\">A</span><span style=\"color: blue\">B</span></p>"
        );
        assert_eq!(merged("<p><b>A</b>x<b>B</b></p>"), "<p><b>A</b>x<b>B</b></p>");
        assert_eq!(
            merged("<p><a href=\"/a\">A</a><a href=\"/b\">B</a></p>"),
            "<p><a href=\"/a\">A</a><a href=\"/b\">B</a></p>"
        );
    }

    #[test]
    fn blocks_and_void_elements_never_merge() {
        assert_eq!(merged("<div><p>A</p><p>B</p></div>"), "<div><p>A</p><p>B</p></div>");
        assert_eq!(merged("<p>A<br><br>B</p>"), "<p>A<br /><br />B</p>");
    }
}
