// ABOUTME: Removes child wrappers whose styles and classes are already supplied from above.
// ABOUTME: Only tag pairs allowed by the tag policy's mergable table are considered.

use ego_tree::NodeId;
use log::trace;

use super::Context;
use crate::dom::Document;

/// Replace redundant wrappers among the content nodes of `container` with
/// their children. Returns how many wrappers went.
pub(crate) fn unwrap_redundant_children(
    doc: &mut Document,
    ctx: &Context<'_>,
    container: NodeId,
) -> usize {
    let Some(container_tag) = doc.tag_name(container).map(str::to_string) else {
        return 0;
    };
    let content = doc.content_nodes(container);
    let sole = content.len() == 1;

    let candidates: Vec<NodeId> = content
        .into_iter()
        .filter(|&id| match doc.tag_name(id) {
            Some(tag) => {
                (sole || !ctx.policy.is_block(tag)) && ctx.policy.can_merge_into(tag, &container_tag)
            }
            None => false,
        })
        .collect();

    let mut unwrapped = 0;
    for candidate in candidates {
        if is_redundant(doc, ctx, container, candidate) && doc.unwrap(candidate) {
            unwrapped += 1;
            trace!("unwrapped redundant {:?} inside {:?}", candidate, container);
        }
    }
    unwrapped
}

/// Every style resolves to the same value from `container` upward, every
/// class sits on an ancestor in scope, and there is nothing else to lose.
fn is_redundant(doc: &Document, ctx: &Context<'_>, container: NodeId, candidate: NodeId) -> bool {
    let Some(el) = doc.element(candidate) else {
        return false;
    };
    if !el.attrs.is_empty() {
        return false;
    }

    let styles_supplied = el.styles.iter().all(|(name, value)| {
        ctx.registry.for_style(name).is_some()
            && ctx.inherited_style_value(doc, container, name).as_deref() == Some(value)
    });
    styles_supplied
        && el
            .classes
            .iter()
            .all(|class| ctx.ancestors_have_class(doc, container, class))
}
