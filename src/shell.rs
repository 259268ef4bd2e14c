//! Shell-facing output: `export` rendering and the integration hook.
use std::io::{self, Write};

use crate::config::ResolvedEnv;
use crate::error::ResolveError;

/// Shell function that evaluates `dotem load` output in the calling shell.
pub const HOOK_SCRIPT: &str = include_str!("hook.sh");

/// Whether `name` is usable as a shell variable name
/// (`[A-Za-z_][A-Za-z0-9_]*`).
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render `env` as a single `export K="V" ...` line, keys in sorted order.
///
/// Values are wrapped in double quotes without further escaping. An empty
/// environment renders as an empty string, since a bare `export` would list
/// the caller's whole environment.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidVariableName`] for the first key that is
/// not a valid shell variable name.
pub fn format_exports(env: &ResolvedEnv) -> Result<String, ResolveError> {
    if let Some(key) = env.keys().find(|k| !is_valid_name(k)) {
        return Err(ResolveError::InvalidVariableName { key: key.clone() });
    }
    if env.is_empty() {
        return Ok(String::new());
    }

    let assignments = env
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ");
    Ok(format!("export {assignments}"))
}

/// Write the `export` line for `env` to `out`, followed by a newline.
/// Nothing is written for an empty environment.
///
/// # Errors
///
/// Returns an error if a key is invalid or writing fails. Validation happens
/// before anything is written.
pub fn write_exports(env: &ResolvedEnv, out: &mut impl Write) -> anyhow::Result<()> {
    let line = format_exports(env)?;
    if !line.is_empty() {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Write the hook script to `out`. The script ends with its own newline.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_hook(out: &mut impl Write) -> io::Result<()> {
    out.write_all(HOOK_SCRIPT.as_bytes())?;
    out.flush()
}
