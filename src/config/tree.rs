//! Typed view of the decoded configuration file.
//!
//! The TOML decoder yields loosely typed [`toml::Value`]s. They are converted
//! exactly once into a [`ConfigTree`], whose nodes can only be string leaves
//! or nested tables, so resolution never has to inspect runtime types.
use std::collections::BTreeMap;

use crate::error::ConfigError;

/// A single value in the configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNode {
    /// A terminal value assignable to an environment variable.
    Leaf(String),
    /// A nested scope addressed by one profile segment.
    Table(ConfigTree),
}

/// A table of named [`ConfigNode`]s.
///
/// Keys are kept sorted so iteration (and therefore output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigTree {
    entries: BTreeMap<String, ConfigNode>,
}

impl ConfigTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any previous node under `key`.
    pub fn insert(&mut self, key: impl Into<String>, node: ConfigNode) {
        self.entries.insert(key.into(), node);
    }

    /// Look up a direct child by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.entries.get(key)
    }

    /// Look up a direct child table by key. Leaves never match.
    #[must_use]
    pub fn table(&self, key: &str) -> Option<&Self> {
        match self.get(key) {
            Some(ConfigNode::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// Iterate over the string leaves at this level.
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, node)| match node {
            ConfigNode::Leaf(value) => Some((key.as_str(), value.as_str())),
            ConfigNode::Table(_) => None,
        })
    }

    /// Iterate over the nested tables at this level.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.entries.iter().filter_map(|(key, node)| match node {
            ConfigNode::Table(table) => Some((key.as_str(), table)),
            ConfigNode::Leaf(_) => None,
        })
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dotted path of every nested table, depth-first in key order.
    ///
    /// Each returned path is a valid profile name.
    #[must_use]
    pub fn table_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_table_paths(self, None, &mut paths);
        paths
    }

    /// Convert a decoded TOML table, rejecting any value that is neither a
    /// string nor a table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValueType`] for the first offending key,
    /// identified by its dotted path.
    pub fn from_toml(table: toml::Table) -> Result<Self, ConfigError> {
        convert_table(table, None)
    }
}

fn join_key(prefix: Option<&str>, key: &str) -> String {
    prefix.map_or_else(|| key.to_string(), |p| format!("{p}.{key}"))
}

fn convert_table(table: toml::Table, prefix: Option<&str>) -> Result<ConfigTree, ConfigError> {
    let mut tree = ConfigTree::new();
    for (key, value) in table {
        let node = match value {
            toml::Value::String(s) => ConfigNode::Leaf(s),
            toml::Value::Table(inner) => {
                let path = join_key(prefix, &key);
                ConfigNode::Table(convert_table(inner, Some(&path))?)
            }
            other => {
                return Err(ConfigError::InvalidValueType {
                    key: join_key(prefix, &key),
                    kind: other.type_str(),
                });
            }
        };
        tree.insert(key, node);
    }
    Ok(tree)
}

fn collect_table_paths(tree: &ConfigTree, prefix: Option<&str>, out: &mut Vec<String>) {
    for (key, table) in tree.tables() {
        let path = join_key(prefix, key);
        out.push(path.clone());
        collect_table_paths(table, Some(&path), out);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<ConfigTree, ConfigError> {
        ConfigTree::from_toml(toml::from_str(src).expect("valid toml"))
    }

    #[test]
    fn strings_become_leaves() {
        let tree = parse("key1 = \"value1\"\n").unwrap();
        assert_eq!(
            tree.get("key1"),
            Some(&ConfigNode::Leaf("value1".to_string()))
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn nested_tables_are_converted_recursively() {
        let tree = parse(
            "[profile1]\nkey5 = \"value5\"\n\n[profile1.subprofile]\nkey7 = \"value7\"\n",
        )
        .unwrap();
        let sub = tree
            .table("profile1")
            .and_then(|t| t.table("subprofile"))
            .expect("subprofile table");
        assert_eq!(sub.leaves().collect::<Vec<_>>(), vec![("key7", "value7")]);
    }

    #[test]
    fn leaves_and_tables_mix_freely() {
        let tree = parse("a = \"1\"\nb = \"2\"\n[c]\nd = \"3\"\n").unwrap();
        assert_eq!(tree.leaves().count(), 2);
        assert_eq!(tree.tables().map(|(k, _)| k).collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn table_lookup_ignores_leaves() {
        let tree = parse("default = \"not a table\"\n").unwrap();
        assert!(tree.get("default").is_some());
        assert!(tree.table("default").is_none());
    }

    #[test]
    fn integer_is_rejected_with_key() {
        let err = parse("port = 8080\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValueType { ref key, kind: "integer" } if key == "port"
        ));
    }

    #[test]
    fn nested_boolean_is_rejected_with_dotted_key() {
        let err = parse("[profile1.subprofile]\ndebug = true\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValueType { ref key, kind: "boolean" }
                if key == "profile1.subprofile.debug"
        ));
    }

    #[test]
    fn array_is_rejected() {
        let err = parse("paths = [\"a\", \"b\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValueType { kind: "array", .. }));
    }

    #[test]
    fn float_is_rejected() {
        let err = parse("ratio = 0.95\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValueType { kind: "float", .. }));
    }

    #[test]
    fn table_paths_are_depth_first_and_sorted() {
        let tree = parse(
            "root = \"r\"\n[zeta]\n[alpha]\n[alpha.inner]\n[alpha.inner.deep]\n[beta]\n",
        )
        .unwrap();
        assert_eq!(
            tree.table_paths(),
            vec![
                "alpha",
                "alpha.inner",
                "alpha.inner.deep",
                "beta",
                "zeta"
            ]
        );
    }

    #[test]
    fn empty_document_is_empty_tree() {
        let tree = parse("").unwrap();
        assert!(tree.is_empty());
        assert!(tree.table_paths().is_empty());
    }
}
