//! Profile resolution: merge leaves along a dotted path through the tree.
use std::collections::BTreeMap;
use std::fmt;

use super::tree::ConfigTree;
use crate::error::ResolveError;

/// Profile loaded when none is given on the command line.
pub const DEFAULT_PROFILE: &str = "default";

/// Resolved environment: variable name to value, sorted by name.
pub type ResolvedEnv = BTreeMap<String, String>;

/// A profile name split into its dotted segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePath {
    segments: Vec<String>,
}

impl ProfilePath {
    /// Split `name` on `.`. Empty segments are kept; they never match a table.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self {
            segments: name.split('.').map(str::to_string).collect(),
        }
    }

    /// The empty path, which resolves only the root-level leaves.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// The path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Dotted form of the segments up to and including `depth`.
    fn prefix(&self, depth: usize) -> String {
        self.segments
            .iter()
            .take(depth + 1)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Whether the path has no segments.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ProfilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Resolve `path` against `tree`.
///
/// Leaves of every table along the path are merged, deeper tables
/// overriding shallower ones. Tables off the path contribute nothing.
///
/// # Errors
///
/// Returns [`ResolveError::ProfileNotFound`] if any segment fails to match a
/// table at its level.
pub fn resolve(tree: &ConfigTree, path: &ProfilePath) -> Result<ResolvedEnv, ResolveError> {
    resolve_level(tree, path, 0)
}

/// Merge every table in `tree` into one environment.
///
/// Tables are applied depth-first in key order, the same order as
/// [`ConfigTree::table_paths`]: a nested table overrides its parent and a
/// later sibling overrides an earlier one.
#[must_use]
pub fn resolve_all(tree: &ConfigTree) -> ResolvedEnv {
    let mut env = leaf_env(tree);
    for (key, table) in tree.tables() {
        let child = resolve_all(table);
        tracing::debug!("merging {} variable(s) from [{key}]", child.len());
        env.extend(child);
    }
    env
}

fn leaf_env(tree: &ConfigTree) -> ResolvedEnv {
    tree.leaves()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn resolve_level(
    tree: &ConfigTree,
    path: &ProfilePath,
    depth: usize,
) -> Result<ResolvedEnv, ResolveError> {
    let mut env = leaf_env(tree);

    let Some(segment) = path.segments().get(depth) else {
        return Ok(env);
    };

    let matches: Vec<&ConfigTree> = tree
        .tables()
        .filter(|(key, _)| *key == segment.as_str())
        .map(|(_, table)| table)
        .collect();

    if matches.is_empty() {
        return Err(ResolveError::ProfileNotFound {
            profile: path.to_string(),
            unmatched: path.prefix(depth),
            available: tree.tables().map(|(key, _)| key.to_string()).collect(),
        });
    }

    for table in matches {
        let child = resolve_level(table, path, depth + 1)?;
        tracing::debug!(
            "merging {} variable(s) from [{}]",
            child.len(),
            path.prefix(depth)
        );
        // Keys in the subtable take precedence over the ones in this table.
        env.extend(child);
    }

    Ok(env)
}
