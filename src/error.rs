//! Domain-specific error types for dotem.
//!
//! Internal modules return typed errors ([`ConfigError`], [`ResolveError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! DotemError
//! ├── Config(ConfigError)   — reading, decoding and typing the TOML file
//! └── Resolve(ResolveError) — profile lookup and variable naming
//! ```

use thiserror::Error;

/// Top-level error type for dotem.
#[derive(Error, Debug)]
pub enum DotemError {
    /// Configuration file could not be located, read, decoded or typed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The requested profile could not be resolved into variables.
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Errors that arise while locating and loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    #[error("Error reading config file {path}: {source}")]
    Read {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML.
    #[error("Error parsing TOML file {path}: {source}")]
    Parse {
        /// Path to the file that failed to decode.
        path: String,
        /// Underlying decoder error.
        source: toml::de::Error,
    },

    /// A value is neither a string nor a table.
    #[error("Value for key '{key}' is {kind}, expected a string or a table")]
    InvalidValueType {
        /// Dotted path of the offending key (e.g. `profile1.port`).
        key: String,
        /// TOML type name of the rejected value.
        kind: &'static str,
    },

    /// No `--config` was given, `./dotem.toml` does not exist, and the home
    /// directory could not be determined.
    #[error("Unable to determine home directory to locate dotem.toml")]
    HomeNotFound,
}

/// Errors that arise while resolving a profile into environment variables.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// A path segment did not match any table at its level.
    #[error("Profile '{profile}' not found: no table '{unmatched}' (available: {})", display_available(.available))]
    ProfileNotFound {
        /// The full profile the user asked for.
        profile: String,
        /// Path prefix up to and including the first segment that matched nothing.
        unmatched: String,
        /// Table names that exist at the level where matching failed.
        available: Vec<String>,
    },

    /// A key cannot be used as a shell variable name.
    #[error("Invalid environment variable name: '{key}'")]
    InvalidVariableName {
        /// The rejected key.
        key: String,
    },
}

fn display_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}
