// ABOUTME: Unwraps elements whose only child is a selection-boundary marker.
// ABOUTME: Only the scope boundary is kept when it holds nothing but a marker.

use log::trace;

use super::Context;
use crate::dom::Document;

/// Lift each solitary marker out of its wrappers. Returns how many wrappers
/// were removed.
pub(crate) fn unwrap_solitary_markers(doc: &mut Document, ctx: &Context<'_>) -> usize {
    let markers: Vec<_> = ctx
        .roots
        .iter()
        .flat_map(|&root| doc.descendants(root))
        .filter(|&id| doc.is_marker(id))
        .collect();

    let mut unwrapped = 0;
    for marker in markers {
        while let Some(parent) = doc.parent(marker) {
            if !doc.is_element(parent) || ctx.is_protected(parent) || doc.child_count(parent) != 1 {
                break;
            }
            doc.unwrap(parent);
            unwrapped += 1;
            trace!("unwrapped {:?} around marker {:?}", parent, marker);
        }
    }
    unwrapped
}
