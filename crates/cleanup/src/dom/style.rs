// ABOUTME: StyleMap and ClassSet, the inline presentation carried by an element.
// ABOUTME: Both keep insertion order for output but compare order-insensitively.

use regex::Regex;

/// Inline style declarations of one element, keyed by lowercase property name.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the value of a `style` attribute.
    ///
    /// Declarations without a colon or with an empty value are dropped; a
    /// repeated property keeps the last value, as the browser would.
    pub fn parse(attr: &str) -> Self {
        let mut styles = StyleMap::new();
        for declaration in attr.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            styles.set(name, value);
        }
        styles
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a property, replacing an existing value in place.
    /// An empty value clears the property.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        let name = name.as_ref().trim().to_ascii_lowercase();
        let value = value.as_ref().trim();
        if name.is_empty() {
            return;
        }
        if value.is_empty() {
            self.remove(&name);
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name, value.to_string())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        let index = self
            .entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned snapshot, for loops that mutate the element they read from.
    pub fn to_vec(&self) -> Vec<(String, String)> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize back to a `style` attribute value.
    pub fn to_attr_value(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl PartialEq for StyleMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for StyleMap {}

/// Class names of one element.
#[derive(Debug, Clone, Default)]
pub struct ClassSet {
    names: Vec<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the value of a `class` attribute.
    pub fn parse(attr: &str) -> Self {
        let mut classes = ClassSet::new();
        for name in attr.split_whitespace() {
            classes.insert(name);
        }
        classes
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a class. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Remove every class matching `pattern`, returning how many were dropped.
    pub fn remove_matching(&mut self, pattern: &Regex) -> usize {
        let before = self.names.len();
        self.names.retain(|n| !pattern.is_match(n));
        before - self.names.len()
    }

    pub fn any_matching(&self, pattern: &Regex) -> bool {
        self.names.iter().any(|n| pattern.is_match(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.clone()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn to_attr_value(&self) -> String {
        self.names.join(" ")
    }
}

impl PartialEq for ClassSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|n| other.contains(n))
    }
}

impl Eq for ClassSet {}
