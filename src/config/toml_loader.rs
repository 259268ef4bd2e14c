//! TOML configuration file loading.
use std::path::Path;

use super::tree::ConfigTree;
use crate::error::ConfigError;

/// Read, decode and type-check the configuration file at `path`.
///
/// The file is read in a single scoped call, so the handle is released on
/// every exit path including decode failures.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read,
/// [`ConfigError::Parse`] if it is not valid TOML, and
/// [`ConfigError::InvalidValueType`] if any value is not a string or table.
pub fn load_tree(path: &Path) -> Result<ConfigTree, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", content.len(), path.display());
    parse_tree(&content, path)
}

/// Decode TOML `content` into a [`ConfigTree`]. `origin` is only used for
/// error messages.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] or [`ConfigError::InvalidValueType`].
pub fn parse_tree(content: &str, origin: &Path) -> Result<ConfigTree, ConfigError> {
    let table: toml::Table = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.display().to_string(),
        source,
    })?;
    ConfigTree::from_toml(table)
}
