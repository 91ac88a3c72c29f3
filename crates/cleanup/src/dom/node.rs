// ABOUTME: The closed node enumeration stored in the document arena.
// ABOUTME: Capability predicates (element, marker, insignificant) are pure functions over it.

use super::style::{ClassSet, StyleMap};

/// Class that identifies a selection-boundary marker span.
pub const SELECTION_MARKER_CLASS: &str = "rangySelectionBoundary";

/// HTML elements that never have content. Serialized as `<tag />`, and the
/// default for [`TagPolicy::void_tags`](crate::TagPolicy::void_tags).
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Characters editors insert as invisible caret placeholders.
const PLACEHOLDER_CHARS: &[char] = &['\u{200B}', '\u{FEFF}'];

/// A node in the document arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Arena root holding the top-level forest. Never an element.
    Fragment,
    Element(ElementData),
    Text(String),
    Comment(String),
    Marker(Marker),
}

impl Node {
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Node::Marker(_))
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Tag name for elements, `None` for everything else.
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|el| el.name.as_str())
    }

    /// Nodes that take no part in significance checks: blank or
    /// placeholder-only text, selection markers and comments.
    pub fn is_insignificant(&self) -> bool {
        match self {
            Node::Text(text) => is_blank_text(text),
            Node::Marker(_) | Node::Comment(_) => true,
            Node::Fragment | Node::Element(_) => false,
        }
    }
}

/// True when text holds nothing but whitespace and caret placeholders.
pub fn is_blank_text(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || PLACEHOLDER_CHARS.contains(&c))
}

/// An element: tag, inline presentation and the remaining attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercase tag name.
    pub name: String,
    pub styles: StyleMap,
    pub classes: ClassSet,
    /// Attributes other than `style` and `class`, sorted by name.
    pub attrs: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_ascii_lowercase(),
            styles: StyleMap::new(),
            classes: ClassSet::new(),
            attrs: Vec::new(),
        }
    }

    /// Build an element from raw attributes, splitting out `style` and `class`.
    pub fn from_attrs<'a>(
        name: impl AsRef<str>,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut el = ElementData::new(name);
        for (key, value) in attrs {
            el.set_attr(key, value);
        }
        el
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute. `style` and `class` are parsed into their typed forms.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "style" => self.styles = StyleMap::parse(value),
            "class" => self.classes = ClassSet::parse(value),
            _ => match self.attrs.binary_search_by(|(k, _)| k.as_str().cmp(&name)) {
                Ok(index) => self.attrs[index].1 = value.to_string(),
                Err(index) => self.attrs.insert(index, (name, value.to_string())),
            },
        }
    }

    /// Whether the element opens an editing host.
    pub fn is_editable(&self) -> bool {
        matches!(
            self.attr("contenteditable")
                .map(|v| v.trim().to_ascii_lowercase())
                .as_deref(),
            Some("" | "true" | "plaintext-only")
        )
    }

    /// Same tag, styles, classes and remaining attributes.
    pub fn same_presentation(&self, other: &ElementData) -> bool {
        self.name == other.name
            && self.styles == other.styles
            && self.classes == other.classes
            && self.attrs == other.attrs
    }
}

/// A selection-boundary marker, kept verbatim so it round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// All attributes of the marker span, sorted by name.
    pub attrs: Vec<(String, String)>,
    pub text: String,
}

impl Marker {
    pub fn new(marker_class: &str) -> Self {
        Self {
            attrs: vec![("class".to_string(), marker_class.to_string())],
            text: String::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == "id")
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_includes_placeholders() {
        assert!(Node::Text(" \n\t".to_string()).is_insignificant());
        assert!(Node::Text("\u{FEFF}\u{200B}".to_string()).is_insignificant());
        assert!(Node::Text(String::new()).is_insignificant());
        assert!(!Node::Text(" a ".to_string()).is_insignificant());
    }

    #[test]
    fn node_kind_predicates() {
        let text = Node::Text("a".to_string());
        let element = Node::Element(ElementData::new("b"));
        let marker = Node::Marker(Marker::new(SELECTION_MARKER_CLASS));

        assert!(text.is_text() && !text.is_element() && !text.is_marker());
        assert!(element.is_element() && !element.is_text());
        assert!(marker.is_marker() && !marker.is_text() && !marker.is_element());
        assert!(!Node::Fragment.is_text());
        assert_eq!(element.tag_name(), Some("b"));
        assert_eq!(marker.tag_name(), None);
    }

    #[test]
    fn void_tags_are_lowercase_html_names() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("img"));
        assert!(!is_void_tag("BR"));
        assert!(!is_void_tag("span"));
    }

    #[test]
    fn markers_and_comments_are_insignificant() {
        assert!(Node::Marker(Marker::new(SELECTION_MARKER_CLASS)).is_insignificant());
        assert!(Node::Comment("x".to_string()).is_insignificant());
        assert!(!Node::Element(ElementData::new("br")).is_insignificant());
    }

    #[test]
    fn from_attrs_splits_style_and_class() {
        let el = ElementData::from_attrs(
            "DIV",
            [("style", "color: red"), ("id", "x"), ("class", "a b"), ("data-k", "v")],
        );
        assert_eq!(el.name, "div");
        assert_eq!(el.styles.get("color"), Some("red"));
        assert!(el.classes.contains("b"));
        assert_eq!(
            el.attrs,
            vec![
                ("data-k".to_string(), "v".to_string()),
                ("id".to_string(), "x".to_string())
            ]
        );
    }

    #[test]
    fn editable_flag() {
        let on = ElementData::from_attrs("div", [("contenteditable", "TRUE")]);
        let empty = ElementData::from_attrs("div", [("contenteditable", "")]);
        let off = ElementData::from_attrs("div", [("contenteditable", "false")]);
        assert!(on.is_editable());
        assert!(empty.is_editable());
        assert!(!off.is_editable());
        assert!(!ElementData::new("div").is_editable());
    }

    #[test]
    fn presentation_compares_attributes_too() {
        let a = ElementData::from_attrs("a", [("href", "/x")]);
        let b = ElementData::from_attrs("a", [("href", "/y")]);
        let c = ElementData::from_attrs("a", [("href", "/x")]);
        assert!(!a.same_presentation(&b));
        assert!(a.same_presentation(&c));
    }
}
