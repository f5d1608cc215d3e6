//! The collected metadata tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node of the metadata tree.
///
/// A path that returns a listing becomes a `Directory`; anything else is a
/// `Leaf` holding the literal response body, which may itself span several
/// lines (public-key material, large documents).
///
/// Serialized untagged: a leaf is a JSON string, a directory a JSON
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataNode {
    Leaf(String),
    Directory(BTreeMap<String, MetadataNode>),
}

impl MetadataNode {
    /// An empty directory node.
    pub fn empty() -> Self {
        MetadataNode::Directory(BTreeMap::new())
    }

    /// Whether this node holds nothing: an empty leaf or a directory with
    /// no entries.
    pub fn is_empty(&self) -> bool {
        match self {
            MetadataNode::Leaf(value) => value.is_empty(),
            MetadataNode::Directory(entries) => entries.is_empty(),
        }
    }

    /// Look up a direct child of a directory node.
    pub fn get(&self, key: &str) -> Option<&MetadataNode> {
        match self {
            MetadataNode::Directory(entries) => entries.get(key),
            MetadataNode::Leaf(_) => None,
        }
    }

    /// The pretty-printed JSON document for this node.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&str> for MetadataNode {
    fn from(value: &str) -> Self {
        MetadataNode::Leaf(value.to_string())
    }
}

impl From<String> for MetadataNode {
    fn from(value: String) -> Self {
        MetadataNode::Leaf(value)
    }
}
