// ABOUTME: Hoists styles and classes shared by a container's children up to the container.
// ABOUTME: Also strips container styles and classes already restated below or inherited from above.

use ego_tree::NodeId;
use log::trace;

use super::Context;
use crate::dom::Document;

/// Move presentation shared by every content node of `container` onto it.
///
/// A single element child gives up everything, unless it is a void element:
/// an image's width belongs to the image. With several content nodes a
/// style moves only when each of them resolves to the same value and the
/// style belongs to a known command; a class moves only when each of them
/// carries it.
pub(crate) fn bubble_styles_from_children(doc: &mut Document, ctx: &Context<'_>, container: NodeId) {
    let Some(tag) = doc.tag_name(container) else {
        return;
    };
    if !ctx.policy.is_styleable(tag) {
        return;
    }

    let content = doc.content_nodes(container);
    let candidates: Vec<NodeId> = content
        .iter()
        .copied()
        .filter(|&id| doc.is_element(id) && !ctx.is_void(doc, id))
        .collect();

    if content.len() == 1 {
        if let Some(&child) = candidates.first() {
            hoist_everything(doc, ctx, container, child);
        }
        return;
    }

    for candidate in candidates {
        hoist_shared_styles(doc, ctx, container, candidate, &content);
        hoist_shared_classes(doc, ctx, container, candidate, &content);
    }
}

fn hoist_everything(doc: &mut Document, ctx: &Context<'_>, container: NodeId, child: NodeId) {
    let Some((styles, classes)) = doc
        .element(child)
        .map(|el| (el.styles.to_vec(), el.classes.to_vec()))
    else {
        return;
    };

    for (name, value) in &styles {
        doc.update_element(container, |el| el.styles.set(name, value));
        doc.update_element(child, |el| el.styles.remove(name));
    }
    for class in &classes {
        add_class(doc, ctx, container, class);
        doc.update_element(child, |el| el.classes.remove(class));
    }

    if !styles.is_empty() || !classes.is_empty() {
        trace!(
            "bubbled {} style(s) and {} class(es) from sole child {:?}",
            styles.len(),
            classes.len(),
            child
        );
    }
}

fn hoist_shared_styles(
    doc: &mut Document,
    ctx: &Context<'_>,
    container: NodeId,
    candidate: NodeId,
    content: &[NodeId],
) {
    let styles = match doc.element(candidate) {
        Some(el) => el.styles.to_vec(),
        None => return,
    };

    for (name, value) in styles {
        if ctx.registry.for_style(&name).is_none() {
            continue;
        }
        let unanimous = content.iter().all(|&node| {
            ctx.inherited_style_value(doc, node, &name).as_deref() == Some(value.as_str())
        });
        if !unanimous {
            continue;
        }

        doc.update_element(container, |el| el.styles.set(&name, &value));
        for &node in content {
            doc.update_element(node, |el| el.styles.remove(&name));
        }
        trace!("bubbled shared style {}: {} into {:?}", name, value, container);
    }
}

fn hoist_shared_classes(
    doc: &mut Document,
    ctx: &Context<'_>,
    container: NodeId,
    candidate: NodeId,
    content: &[NodeId],
) {
    let classes = doc
        .element(candidate)
        .map(|el| el.classes.to_vec())
        .unwrap_or_default();

    for class in classes {
        let unanimous = content
            .iter()
            .all(|&node| doc.element(node).is_some_and(|el| el.classes.contains(&class)));
        if !unanimous {
            continue;
        }

        add_class(doc, ctx, container, &class);
        for &node in content {
            doc.update_element(node, |el| el.classes.remove(&class));
        }
        trace!("bubbled shared class {} into {:?}", class, container);
    }
}

/// Add `class`, first dropping any class of the same family.
fn add_class(doc: &mut Document, ctx: &Context<'_>, container: NodeId, class: &str) {
    let family = ctx
        .registry
        .for_class(class)
        .and_then(|config| config.class_name_pattern.as_ref());
    doc.update_element(container, |el| {
        if let Some(pattern) = family {
            el.classes.remove_matching(pattern);
        }
        el.classes.insert(class);
    });
}

/// Drop styles and classes from `container` that change nothing.
///
/// A style goes when every content node restates the same value, or when
/// the nearest ancestor in scope already supplies that value for a known
/// command. A class goes when every content node carries a class of the
/// same family, or when an ancestor in scope carries the class itself.
pub(crate) fn remove_redundant_styles(doc: &mut Document, ctx: &Context<'_>, container: NodeId) {
    let Some((styles, classes)) = doc
        .element(container)
        .map(|el| (el.styles.to_vec(), el.classes.to_vec()))
    else {
        return;
    };
    let content = doc.content_nodes(container);
    let parent = doc.parent(container);

    for (name, value) in styles {
        let restated = !content.is_empty()
            && content.iter().all(|&node| {
                doc.element(node).and_then(|el| el.styles.get(&name)) == Some(value.as_str())
            });
        let inherited = ctx.registry.for_style(&name).is_some()
            && parent.is_some_and(|p| {
                ctx.inherited_style_value(doc, p, &name).as_deref() == Some(value.as_str())
            });
        if restated || inherited {
            doc.update_element(container, |el| el.styles.remove(&name));
            trace!("dropped redundant style {} from {:?}", name, container);
        }
    }

    for class in classes {
        let family_restated = !content.is_empty()
            && ctx
                .registry
                .for_class(&class)
                .and_then(|config| config.class_name_pattern.as_ref())
                .is_some_and(|pattern| {
                    content.iter().all(|&node| {
                        doc.element(node)
                            .is_some_and(|el| el.classes.any_matching(pattern))
                    })
                });
        let inherited = parent.is_some_and(|p| ctx.ancestors_have_class(doc, p, &class));
        if family_restated || inherited {
            doc.update_element(container, |el| el.classes.remove(&class));
            trace!("dropped redundant class {} from {:?}", class, container);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::loader::load_builtin_registry;
    use crate::policy::TagPolicy;
    use pretty_assertions::assert_eq;

    fn run(html: &str, pass: fn(&mut Document, &Context<'_>, NodeId)) -> String {
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
        pass(&mut doc, &ctx, root);
        doc.to_html()
    }

    #[test]
    fn sole_child_gives_up_everything() {
        assert_eq!(
            run(
                "<div class=\"font-size-small\"><span class=\"font-size-large x\" style=\"color: red\">X</span></div>",
                bubble_styles_from_children
            ),
            "<div class=\"font-size-large x\" style=\"color: red\"><span>X</span></div>"
        );
    }

    #[test]
    fn shared_style_needs_unanimity() {
        assert_eq!(
            run(
                "<div><span style=\"color: red\">A</span><span style=\"color: blue\">B</span></div>",
                bubble_styles_from_children
            ),
            "<div><span style=\"color: red\">A</span><span style=\"color: blue\">B</span></div>"
        );
        assert_eq!(
            run(
                "<div><span style=\"color: red\">A</span> <span style=\"color: red\">B</span></div>",
                bubble_styles_from_children
            ),
            "<div style=\"color: red\"><span>A</span> <span>B</span></div>"
        );
    }

    #[test]
    fn tag_implied_values_count_towards_unanimity() {
        assert_eq!(
            run(
                "<p><b>A</b><span style=\"font-weight: bold\">B</span></p>",
                bubble_styles_from_children
            ),
            "<p style=\"font-weight: bold\"><b>A</b><span>B</span></p>"
        );
    }

    #[test]
    fn unknown_styles_and_text_block_hoisting() {
        assert_eq!(
            run(
                "<div><span style=\"cursor: pointer\">A</span><span style=\"cursor: pointer\">B</span></div>",
                bubble_styles_from_children
            ),
            "<div><span style=\"cursor: pointer\">A</span><span style=\"cursor: pointer\">B</span></div>"
        );
        assert_eq!(
            run(
                "<div><span style=\"color: red\">A</span>B</div>",
                bubble_styles_from_children
            ),
            "<div><span style=\"color: red\">A</span>B</div>"
        );
    }

    #[test]
    fn shared_classes_move_only_when_everyone_has_them() {
        assert_eq!(
            run(
                "<div><span class=\"a b\">A</span><span class=\"a\">B</span></div>",
                bubble_styles_from_children
            ),
            "<div class=\"a\"><span class=\"b\">A</span><span>B</span></div>"
        );
    }

    #[test]
    fn void_children_keep_their_styles() {
        assert_eq!(
            run("<span><img style=\"width: 10px\"></span>", bubble_styles_from_children),
            "<span><img style=\"width: 10px\" /></span>"
        );
        assert_eq!(
            run(
                "<p><img class=\"highlight\"><img class=\"highlight\"></p>",
                bubble_styles_from_children
            ),
            "<p><img class=\"highlight\" /><img class=\"highlight\" /></p>"
        );
    }

    #[test]
    fn non_styleable_containers_are_skipped() {
        assert_eq!(
            run("<b><span style=\"color: red\">A</span></b>", bubble_styles_from_children),
            "<b><span style=\"color: red\">A</span></b>"
        );
    }

    #[test]
    fn restated_styles_are_dropped_from_container() {
        assert_eq!(
            run(
                "<div style=\"color: red\"><p style=\"color: red\">A</p><p style=\"color: red\">B</p></div>",
                remove_redundant_styles
            ),
            "<div><p style=\"color: red\">A</p><p style=\"color: red\">B</p></div>"
        );
        // a bare text child does not restate anything
        assert_eq!(
            run(
                "<div style=\"color: red\"><p style=\"color: red\">A</p>B</div>",
                remove_redundant_styles
            ),
            "<div style=\"color: red\"><p style=\"color: red\">A</p>B</div>"
        );
    }

    #[test]
    fn family_restated_classes_are_dropped() {
        assert_eq!(
            run(
                "<div class=\"text-align-left\"><p class=\"text-align-right\">A</p></div>",
                remove_redundant_styles
            ),
            "<div><p class=\"text-align-right\">A</p></div>"
        );
    }

    #[test]
    fn inherited_style_is_dropped() {
        let mut doc = Document::parse_fragment(
            "<div style=\"color: red\" class=\"note\"><p style=\"color: red\" class=\"note\">A</p></div>",
        );
        let policy = TagPolicy::builtin();
        let registry = load_builtin_registry();
        let div = doc.top_level()[0];
        let p = doc.children(div)[0];
        let ctx = Context {
            policy: &policy,
            registry: &registry,
            scope: None,
            roots: &[div],
        };
        remove_redundant_styles(&mut doc, &ctx, p);
        assert_eq!(doc.to_html(), "<div class=\"note\" style=\"color: red\"><p>A</p></div>");
    }
}
