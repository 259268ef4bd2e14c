//! Config file path discovery.
//!
//! Precedence: explicit `--config` value, then `./dotem.toml` in the current
//! working directory if it exists, then `dotem.toml` in the home directory.
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// File name looked up in the working and home directories.
pub const CONFIG_FILE_NAME: &str = "dotem.toml";

/// Pick the config file path from the given candidates.
///
/// The home-directory fallback is returned even when the file does not
/// exist there; reading it then reports the missing file.
///
/// # Errors
///
/// Returns [`ConfigError::HomeNotFound`] if no explicit path was given,
/// `cwd` has no config file and `home` is `None`.
pub fn discover(
    explicit: Option<&Path>,
    cwd: &Path,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(local);
    }

    home.map(|h| h.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::HomeNotFound)
}

/// Resolve the config file path for the running process.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the working directory cannot be
/// determined, or [`ConfigError::HomeNotFound`] as for [`discover`].
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| ConfigError::Read {
        path: ".".to_string(),
        source,
    })?;
    let path = discover(None, &cwd, home_dir().as_deref())?;
    tracing::debug!("using config file {}", path.display());
    Ok(path)
}

/// Return the user's home directory from `HOME` (or `USERPROFILE` on Windows).
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
