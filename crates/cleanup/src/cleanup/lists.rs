// ABOUTME: Consolidates adjacent lists of the same type under each root.
// ABOUTME: Lists are visited last to first so whole chains collapse in one sweep.

use log::trace;

use super::Context;
use crate::dom::Document;

const LIST_TAGS: [&str; 2] = ["ol", "ul"];

/// Merge every list into a preceding same-type sibling list. Returns how
/// many lists were folded away.
pub(crate) fn merge_adjacent_lists(doc: &mut Document, ctx: &Context<'_>) -> usize {
    let mut merged = 0;
    for &root in ctx.roots {
        for tag in LIST_TAGS {
            let mut lists: Vec<_> = doc
                .descendants(root)
                .into_iter()
                .filter(|&id| doc.tag_name(id) == Some(tag))
                .collect();

            while let Some(current) = lists.pop() {
                let Some(prev) = doc.prev_significant_sibling(current) else {
                    continue;
                };
                if doc.tag_name(prev) != Some(tag) {
                    continue;
                }
                doc.move_children(current, prev);
                doc.remove(current);
                merged += 1;
                trace!("merged <{}> {:?} into {:?}", tag, current, prev);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::loader::load_builtin_registry;
    use crate::policy::TagPolicy;
    use pretty_assertions::assert_eq;

    fn merged(html: &str) -> (String, usize) {
        let mut doc = Document::parse_fragment(html);
        let policy = TagPolicy::builtin();
        let registry = load_builtin_registry();
        let roots = doc.top_level();
        let ctx = Context {
            policy: &policy,
            registry: &registry,
            scope: None,
            roots: &roots,
        };
        let count = merge_adjacent_lists(&mut doc, &ctx);
        (doc.to_html(), count)
    }

    #[test]
    fn chains_collapse_into_the_first_list() {
        let (html, count) =
            merged("<div><ul><li>1</li></ul> <ul><li>2</li></ul><ul><li>3</li></ul></div>");
        assert_eq!(html, "<div><ul><li>1</li><li>2</li><li>3</li></ul> </div>");
        assert_eq!(count, 2);
    }

    #[test]
    fn list_types_do_not_mix() {
        let (html, count) = merged("<div><ol><li>1</li></ol><ul><li>2</li></ul></div>");
        assert_eq!(html, "<div><ol><li>1</li></ol><ul><li>2</li></ul></div>");
        assert_eq!(count, 0);
    }

    #[test]
    fn separated_lists_stay_apart() {
        let (html, _) = merged("<div><ul><li>1</li></ul><p>x</p><ul><li>2</li></ul></div>");
        assert_eq!(html, "<div><ul><li>1</li></ul><p>x</p><ul><li>2</li></ul></div>");
    }

    #[test]
    fn nested_lists_merge_too() {
        let (html, count) = merged(
            "<ul><li>a<ol><li>1</li></ol><ol><li>2</li></ol></li></ul>",
        );
        assert_eq!(html, "<ul><li>a<ol><li>1</li><li>2</li></ol></li></ul>");
        assert_eq!(count, 1);
    }
}
