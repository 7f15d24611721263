//! Recursive representation of one locale's translation data.
//!
//! A tree is built once from a parsed JSON document and never mutated. Objects
//! become [`TreeValue::Node`] with their keys kept in document order; every
//! other JSON value (strings, numbers, booleans, null, arrays) is a terminal
//! [`TreeValue::Leaf`].

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A node of a translation tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeValue {
    /// Terminal value, rendered to text on resolution.
    Leaf(Value),

    /// Ordered mapping from key to child.
    Node(Vec<(String, TreeValue)>),
}

impl TreeValue {
    /// Look up a direct child by key.
    ///
    /// Returns `None` for leaves and for nodes without that key. If a document
    /// repeats a key, the parser has already kept only the last occurrence.
    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        match self {
            TreeValue::Node(children) => children
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, child)| child),
            TreeValue::Leaf(_) => None,
        }
    }

    /// Walk a sequence of keys from this node.
    ///
    /// # Arguments
    /// * `keys` - Path segments, applied left to right
    ///
    /// # Returns
    /// * `Some(&TreeValue)` for the value at the end of the path
    /// * `None` if any segment is missing or a leaf is reached early
    pub fn lookup<I, S>(&self, keys: I) -> Option<&TreeValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self;
        for key in keys {
            current = current.get(key.as_ref())?;
        }
        Some(current)
    }

    /// Check if this is a nested mapping rather than a terminal value.
    pub fn is_node(&self) -> bool {
        matches!(self, TreeValue::Node(_))
    }

    /// Keys of a node in document order; empty for leaves.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let children: &[(String, TreeValue)] = match self {
            TreeValue::Node(children) => children,
            TreeValue::Leaf(_) => &[],
        };
        children.iter().map(|(name, _)| name.as_str())
    }

    /// Render to text.
    ///
    /// Strings render without quotes; everything else uses compact JSON text.
    pub fn render(&self) -> String {
        match self {
            TreeValue::Leaf(value) => render_value(value),
            TreeValue::Node(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

/// Textual rendering shared by leaves and substitution values.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl From<Value> for TreeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => TreeValue::Node(
                map.into_iter()
                    .map(|(key, child)| (key, TreeValue::from(child)))
                    .collect(),
            ),
            other => TreeValue::Leaf(other),
        }
    }
}

impl Serialize for TreeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeValue::Leaf(value) => value.serialize(serializer),
            TreeValue::Node(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, child) in children {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}
