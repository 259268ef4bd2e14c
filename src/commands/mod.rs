//! Top-level subcommand orchestration.
pub mod hook;
pub mod load;
pub mod profiles;
pub mod version;

use anyhow::Result;

use crate::cli::Command;
use crate::logging::Logger;

/// Dispatch a parsed subcommand to its handler.
///
/// # Errors
///
/// Returns whatever error the selected command reports.
pub fn dispatch(command: &Command, log: &Logger) -> Result<()> {
    match command {
        Command::Load(opts) => load::run(opts, log),
        Command::Hook => hook::run(),
        Command::Profiles(opts) => profiles::run(opts, log),
        Command::Version => version::run(),
    }
}
