// ABOUTME: Tag policy tables: styleable tags, mergable tag pairs, block and void tags.
// ABOUTME: The builtin policy is embedded JSON; callers may load their own with from_json.

//! Tag policy.
//!
//! The policy decides which elements may receive hoisted styles, which
//! child/parent tag pairs may be fused, and how tags classify for the
//! significance and emptiness checks.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::dom::VOID_TAGS;
use crate::error::{ConfigError, ConfigTable};

/// Embedded JSON with the builtin policy tables.
const BUILTIN_TAG_POLICY_JSON: &str = include_str!("../data/tag_policy.json");

/// Static tag configuration consulted by every cleanup pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagPolicy {
    /// Tags that may carry styles or classes pushed up from their children.
    #[serde(default)]
    pub styleable_tags: HashSet<String>,
    /// Child tag -> tags it may be merged into (directional).
    #[serde(default)]
    pub mergable_tags: HashMap<String, HashSet<String>>,
    /// Block-level tags.
    #[serde(default)]
    pub block_tags: HashSet<String>,
    /// Tags that never have children and so are never "empty". Defaults to
    /// the HTML void elements.
    #[serde(default = "default_void_tags")]
    pub void_tags: HashSet<String>,
}

fn default_void_tags() -> HashSet<String> {
    VOID_TAGS.iter().map(|tag| tag.to_string()).collect()
}

impl TagPolicy {
    /// Loads the builtin policy from embedded JSON.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON is malformed.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_TAG_POLICY_JSON).expect("failed to parse builtin tag policy")
    }

    /// Parse a policy from JSON. Tag names are lowercased.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let policy: TagPolicy =
            serde_json::from_str(json).map_err(|e| ConfigError::parse(ConfigTable::TagPolicy, e))?;
        Ok(policy.normalized())
    }

    fn normalized(self) -> Self {
        let lower = |set: HashSet<String>| -> HashSet<String> {
            set.into_iter().map(|t| t.to_ascii_lowercase()).collect()
        };
        Self {
            styleable_tags: lower(self.styleable_tags),
            mergable_tags: self
                .mergable_tags
                .into_iter()
                .map(|(child, targets)| (child.to_ascii_lowercase(), lower(targets)))
                .collect(),
            block_tags: lower(self.block_tags),
            void_tags: lower(self.void_tags),
        }
    }

    pub fn is_styleable(&self, tag: &str) -> bool {
        self.styleable_tags.contains(tag)
    }

    /// Whether an element tagged `child` may be merged into one tagged `target`.
    pub fn can_merge_into(&self, child: &str, target: &str) -> bool {
        self.mergable_tags
            .get(child)
            .is_some_and(|targets| targets.contains(target))
    }

    pub fn is_block(&self, tag: &str) -> bool {
        self.block_tags.contains(tag)
    }

    pub fn is_void(&self, tag: &str) -> bool {
        self.void_tags.contains(tag)
    }

    pub fn is_line_break(&self, tag: &str) -> bool {
        tag == "br"
    }
}
