//! Profile-based environment variable manager.
//!
//! Reads a hierarchical `dotem.toml`, resolves a dotted profile path by
//! merging string values from the root table and every table along the path
//! (deeper tables win), and prints the result as a shell `export` line for a
//! wrapping shell function to `eval`.
//!
//! The public API is organised into these layers:
//!
//! - **[`config`]** — locate, decode and type-check the TOML file; resolve profiles
//! - **[`shell`]** — render `export` lines and the shell hook
//! - **[`commands`]** — top-level subcommand orchestration (`load`, `hook`, `profiles`, `version`)
//! - **[`error`]** — typed errors converted to [`anyhow::Error`] at the CLI boundary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;
