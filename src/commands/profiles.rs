//! Command: list the profiles defined in the config file.
use anyhow::{Context as _, Result};
use std::io::{self, Write};

use crate::cli::ProfilesOpts;
use crate::config;
use crate::logging::Logger;

/// Print every dotted table path, one per line.
///
/// # Errors
///
/// Returns an error if the config file cannot be located, read or decoded.
pub fn run(opts: &ProfilesOpts, log: &Logger) -> Result<()> {
    let mut stdout = io::stdout().lock();
    run_with_output(opts, log, &mut stdout)
}

/// Run the profiles command against an arbitrary writer.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output(opts: &ProfilesOpts, log: &Logger, out: &mut impl Write) -> Result<()> {
    let path = config::resolve_config_path(opts.config.config.as_deref())?;
    log.debug(&format!("config: {}", path.display()));

    let tree = config::load_tree(&path)
        .with_context(|| format!("listing profiles in {}", path.display()))?;
    let profiles = tree.table_paths();
    if profiles.is_empty() {
        log.warn(&format!("no profiles defined in {}", path.display()));
    }

    for profile in &profiles {
        writeln!(out, "{profile}")?;
    }
    out.flush()?;
    Ok(())
}
