// ABOUTME: Fixpoint removal of childless elements under the cleanup roots.
// ABOUTME: An empty block between two significant siblings leaves a <br> behind.

use ego_tree::NodeId;
use log::trace;

use super::Context;
use crate::dom::Document;

/// Remove empty elements until none are left. Returns how many went.
pub(crate) fn remove_empty_elements(doc: &mut Document, ctx: &Context<'_>) -> usize {
    let mut removed = 0;
    loop {
        let empties: Vec<NodeId> = ctx
            .roots
            .iter()
            .flat_map(|&root| doc.descendants(root))
            .filter(|&id| is_empty_element(doc, ctx, id))
            .collect();
        if empties.is_empty() {
            break;
        }

        for id in empties {
            if ctx.is_block(doc, id)
                && doc.prev_significant_sibling(id).is_some()
                && doc.next_significant_sibling(id).is_some()
            {
                let br = doc.create_element("br");
                doc.insert_before(br, id);
                trace!("kept line break for empty block {:?}", id);
            }
            doc.remove(id);
            removed += 1;
        }
    }
    removed
}

/// Line breaks, void elements and markers never count as empty.
fn is_empty_element(doc: &Document, ctx: &Context<'_>, id: NodeId) -> bool {
    match doc.tag_name(id) {
        Some(tag) => {
            !doc.has_children(id) && !ctx.policy.is_line_break(tag) && !ctx.policy.is_void(tag)
        }
        None => false,
    }
}
