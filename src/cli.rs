//! Command-line interface definition (clap derive).
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::version::version;

/// Top-level CLI entry point for dotem.
#[derive(Parser, Debug)]
#[command(
    name = "dotem",
    about = "Load environment variable profiles from a TOML file into your shell",
    version = version()
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options for locating the configuration file.
#[derive(Parser, Debug, Clone, Default)]
pub struct ConfigOpts {
    /// Path to the TOML configuration file (default: ./dotem.toml, then ~/dotem.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print `export` statements for a profile (or default)
    Load(LoadOpts),
    /// Print a shell function that evaluates `dotem load` in the current shell
    Hook,
    /// List the profiles defined in the configuration file
    Profiles(ProfilesOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Short name used for the log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Hook => "hook",
            Self::Profiles(_) => "profiles",
            Self::Version => "version",
        }
    }
}

/// Options for the `load` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct LoadOpts {
    /// Dotted profile path, e.g. `work.staging` [default: default]
    pub profile: Option<String>,

    /// Merge every table in the file instead of a single profile
    #[arg(long, conflicts_with = "profile")]
    pub all: bool,

    /// Config file location.
    #[command(flatten)]
    pub config: ConfigOpts,
}

/// Options for the `profiles` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ProfilesOpts {
    /// Config file location.
    #[command(flatten)]
    pub config: ConfigOpts,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_load_without_profile() {
        let cli = Cli::parse_from(["dotem", "load"]);
        assert!(
            matches!(&cli.command, Command::Load(_)),
            "Expected Load command"
        );
        if let Command::Load(opts) = cli.command {
            assert_eq!(opts.profile, None);
            assert!(!opts.all);
            assert_eq!(opts.config.config, None);
        }
    }

    #[test]
    fn parse_load_with_dotted_profile() {
        let cli = Cli::parse_from(["dotem", "load", "profile1.subprofile"]);
        if let Command::Load(opts) = cli.command {
            assert_eq!(opts.profile.as_deref(), Some("profile1.subprofile"));
        } else {
            panic!("Expected Load command");
        }
    }

    #[test]
    fn parse_load_with_config_short() {
        let cli = Cli::parse_from(["dotem", "load", "-c", "/tmp/dotem.toml", "work"]);
        if let Command::Load(opts) = cli.command {
            assert_eq!(opts.config.config, Some(PathBuf::from("/tmp/dotem.toml")));
            assert_eq!(opts.profile.as_deref(), Some("work"));
        } else {
            panic!("Expected Load command");
        }
    }

    #[test]
    fn parse_load_with_config_long() {
        let cli = Cli::parse_from(["dotem", "load", "--config", "custom.toml"]);
        if let Command::Load(opts) = cli.command {
            assert_eq!(opts.config.config, Some(PathBuf::from("custom.toml")));
        } else {
            panic!("Expected Load command");
        }
    }

    #[test]
    fn parse_load_all() {
        let cli = Cli::parse_from(["dotem", "load", "--all"]);
        if let Command::Load(opts) = cli.command {
            assert!(opts.all);
            assert_eq!(opts.profile, None);
        } else {
            panic!("Expected Load command");
        }
    }

    #[test]
    fn load_all_conflicts_with_profile() {
        assert!(Cli::try_parse_from(["dotem", "load", "--all", "work"]).is_err());
    }

    #[test]
    fn load_rejects_two_profiles() {
        assert!(Cli::try_parse_from(["dotem", "load", "a", "b"]).is_err());
    }

    #[test]
    fn parse_hook() {
        let cli = Cli::parse_from(["dotem", "hook"]);
        assert!(matches!(cli.command, Command::Hook));
    }

    #[test]
    fn parse_profiles_with_config() {
        let cli = Cli::parse_from(["dotem", "profiles", "-c", "x.toml"]);
        if let Command::Profiles(opts) = cli.command {
            assert_eq!(opts.config.config, Some(PathBuf::from("x.toml")));
        } else {
            panic!("Expected Profiles command");
        }
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["dotem", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose_after_subcommand() {
        let cli = Cli::parse_from(["dotem", "load", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn command_names() {
        assert_eq!(Cli::parse_from(["dotem", "load"]).command.name(), "load");
        assert_eq!(Cli::parse_from(["dotem", "hook"]).command.name(), "hook");
        assert_eq!(
            Cli::parse_from(["dotem", "profiles"]).command.name(),
            "profiles"
        );
    }

    #[test]
    fn version_flag_uses_build_version() {
        assert_eq!(Cli::command().get_version(), Some(version()));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["dotem"]).is_err());
    }
}
