//! Command: print version information.
use anyhow::Result;
use std::io::{self, Write};

/// Version string: `DOTEM_VERSION` at build time, else the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("DOTEM_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the dotem version to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run() -> Result<()> {
    writeln!(io::stdout().lock(), "dotem {}", version())?;
    Ok(())
}
