//! Command: print the shell integration function.
use anyhow::{Context as _, Result};
use std::io;

use crate::shell;

/// Print the hook script to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run() -> Result<()> {
    shell::write_hook(&mut io::stdout().lock()).context("writing hook script")
}
