//! Immutable per-locale message trees.
//!
//! A [`Catalog`] is built once from a JSON document and never mutated. Key
//! paths address leaves with dot-separated segments; arrays are addressed by
//! element index (`features.items.0.title`).

use std::collections::BTreeMap;

use serde_json::Value;

use super::error::CatalogLoadError;
use super::locale::Locale;

/// Separator between key path segments.
pub const KEY_SEPARATOR: char = '.';

/// One node of a message tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    /// A translated string.
    Leaf(String),
    /// A nested group of messages, keyed by segment.
    Branch(BTreeMap<String, CatalogNode>),
}

impl CatalogNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            CatalogNode::Leaf(text) => Some(text),
            CatalogNode::Branch(_) => None,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, CatalogNode::Branch(_))
    }
}

/// All messages for a single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locale: Locale,
    /// Where the messages came from (file path or a loader label).
    source: String,
    root: CatalogNode,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json_str(
        locale: &str,
        source: impl Into<String>,
        content: &str,
    ) -> Result<Self, CatalogLoadError> {
        let json: Value =
            serde_json::from_str(content).map_err(|e| CatalogLoadError::Malformed {
                locale: locale.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_json(locale, source, &json)
    }

    /// Build a catalog from an already parsed JSON document.
    ///
    /// The document root must be an object. Keys must be non-empty and must
    /// not contain the key separator, since such keys could never be addressed.
    pub fn from_json(
        locale: &str,
        source: impl Into<String>,
        json: &Value,
    ) -> Result<Self, CatalogLoadError> {
        if !json.is_object() {
            return Err(CatalogLoadError::Malformed {
                locale: locale.to_string(),
                reason: "root must be a JSON object".to_string(),
            });
        }

        let root = convert(json, "", locale)?.unwrap_or(CatalogNode::Branch(BTreeMap::new()));
        Ok(Self {
            locale: locale.to_string(),
            source: source.into(),
            root,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Find the node at `path`. Empty paths and empty segments never match.
    pub fn node(&self, path: &str) -> Option<&CatalogNode> {
        if path.is_empty() {
            return None;
        }

        let mut node = &self.root;
        for segment in path.split(KEY_SEPARATOR) {
            if segment.is_empty() {
                return None;
            }
            match node {
                CatalogNode::Branch(children) => node = children.get(segment)?,
                CatalogNode::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    /// Find the leaf string at `path`. Branches are not leaves.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.node(path).and_then(CatalogNode::as_leaf)
    }

    /// Number of leaf strings in the catalog.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &CatalogNode) -> usize {
            match node {
                CatalogNode::Leaf(_) => 1,
                CatalogNode::Branch(children) => children.values().map(count).sum(),
            }
        }
        count(&self.root)
    }

    /// Every leaf key path, sorted.
    pub fn leaf_paths(&self) -> Vec<String> {
        fn collect(node: &CatalogNode, prefix: &str, out: &mut Vec<String>) {
            match node {
                CatalogNode::Leaf(_) => out.push(prefix.to_string()),
                CatalogNode::Branch(children) => {
                    for (key, child) in children {
                        collect(child, &join_key_path(prefix, key), out);
                    }
                }
            }
        }

        let mut paths = Vec::new();
        collect(&self.root, "", &mut paths);
        paths.sort();
        paths
    }
}

/// Join a prefix and a key with the separator, skipping an empty prefix.
pub fn join_key_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, KEY_SEPARATOR, key)
    }
}

/// True when every segment of `path` is non-empty.
pub fn is_valid_key_path(path: &str) -> bool {
    !path.is_empty() && path.split(KEY_SEPARATOR).all(|s| !s.is_empty())
}

fn convert(value: &Value, prefix: &str, locale: &str) -> Result<Option<CatalogNode>, CatalogLoadError> {
    let node = match value {
        Value::Object(map) => {
            let mut children = BTreeMap::new();
            for (key, val) in map {
                if key.is_empty() || key.contains(KEY_SEPARATOR) {
                    return Err(CatalogLoadError::Malformed {
                        locale: locale.to_string(),
                        reason: format!(
                            "key \"{}\" under \"{}\" is empty or contains '{}'",
                            key, prefix, KEY_SEPARATOR
                        ),
                    });
                }
                if let Some(child) = convert(val, &join_key_path(prefix, key), locale)? {
                    children.insert(key.clone(), child);
                }
            }
            CatalogNode::Branch(children)
        }
        // Arrays are addressed by index: items.0.title, items.1.title
        Value::Array(items) => {
            let mut children = BTreeMap::new();
            for (index, val) in items.iter().enumerate() {
                let key = index.to_string();
                if let Some(child) = convert(val, &join_key_path(prefix, &key), locale)? {
                    children.insert(key, child);
                }
            }
            CatalogNode::Branch(children)
        }
        Value::String(s) => CatalogNode::Leaf(s.clone()),
        Value::Number(n) => CatalogNode::Leaf(n.to_string()),
        Value::Bool(b) => CatalogNode::Leaf(b.to_string()),
        Value::Null => return Ok(None),
    };
    Ok(Some(node))
}
