//! Load command implementation.
use anyhow::{Context as _, Result};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::LoadOpts;
use crate::config::{self, ConfigTree, DEFAULT_PROFILE, ProfilePath, ResolvedEnv};
use crate::error::DotemError;
use crate::logging::Logger;
use crate::shell;

/// What a `load` invocation resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// A dotted profile, or the implicit default when `None`.
    Profile(Option<&'a str>),
    /// Every table in the file (`--all`).
    All,
}

impl<'a> Target<'a> {
    /// Build the target from parsed `load` options.
    #[must_use]
    pub fn from_opts(opts: &'a LoadOpts) -> Self {
        if opts.all {
            Self::All
        } else {
            Self::Profile(opts.profile.as_deref())
        }
    }
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(name) => write!(f, "profile '{}'", name.unwrap_or(DEFAULT_PROFILE)),
            Self::All => write!(f, "all profiles"),
        }
    }
}

/// Pick the profile path to resolve.
///
/// An explicit profile is always used as given. Without one, the `default`
/// table is used when it exists; otherwise only the root-level variables are
/// loaded.
#[must_use]
pub fn select_profile(requested: Option<&str>, tree: &ConfigTree) -> ProfilePath {
    match requested {
        Some(name) => ProfilePath::parse(name),
        None if tree.table(DEFAULT_PROFILE).is_some() => ProfilePath::parse(DEFAULT_PROFILE),
        None => ProfilePath::root(),
    }
}

/// Load the config file at `path` and resolve `target` against it.
///
/// # Errors
///
/// Returns [`DotemError::Config`] if the file cannot be read, decoded or
/// typed, and [`DotemError::Resolve`] if the profile does not exist.
pub fn load_env(path: &Path, target: Target<'_>) -> Result<ResolvedEnv, DotemError> {
    let tree = config::load_tree(path)?;
    match target {
        Target::All => Ok(config::resolve_all(&tree)),
        Target::Profile(requested) => {
            let profile = select_profile(requested, &tree);
            if profile.is_root() {
                tracing::debug!("no [{DEFAULT_PROFILE}] table, loading root variables only");
            }
            Ok(config::resolve(&tree, &profile)?)
        }
    }
}

/// Run the load command, writing the `export` line to stdout.
///
/// # Errors
///
/// Returns an error if the config file cannot be located or loaded, the
/// profile cannot be resolved, or a variable name is invalid. Nothing is
/// written to stdout in that case.
pub fn run(opts: &LoadOpts, log: &Logger) -> Result<()> {
    let mut stdout = io::stdout().lock();
    run_with_output(opts, log, &mut stdout)
}

/// Run the load command against an arbitrary writer.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output(opts: &LoadOpts, log: &Logger, out: &mut impl Write) -> Result<()> {
    let path = config::resolve_config_path(opts.config.config.as_deref())?;
    let target = Target::from_opts(opts);

    log.stage(&format!("Loading {target}"));
    log.debug(&format!("config: {}", path.display()));

    let env = load_env(&path, target).with_context(|| format!("resolving {target}"))?;
    log.info(&format!("resolved {} variable(s)", env.len()));

    shell::write_exports(&env, out).with_context(|| format!("exporting {target}"))
}
