// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace holding a `dotem.toml`
// and a fluent builder so each integration test can set up an isolated
// environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use dotem::config::{self, ConfigTree};

/// The configuration used throughout the test suite.
pub const SAMPLE_CONFIG: &str = r#"
key1 = "value1"
key2 = "value2"

[default]
key3 = "value3"
key4 = "value4"

[profile1]
key5 = "value5"
key6 = "value6"

[profile1.subprofile]
key6 = "VALUE6"
key7 = "value7"

[profile2]
key8 = "value8"
"#;

/// An isolated workspace backed by a [`tempfile::TempDir`].
///
/// Contains a `work/` directory (used as the working directory), a `home/`
/// directory (used as `$HOME`) and a `cache/` directory (used as
/// `$XDG_CACHE_HOME` so log files stay inside the sandbox).
pub struct IntegrationTestContext {
    /// Temporary directory holding the whole workspace.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create an empty workspace.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        for dir in ["work", "home", "cache"] {
            std::fs::create_dir_all(root.path().join(dir)).expect("create workspace dir");
        }
        Self { root }
    }

    /// Directory used as the current working directory.
    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Directory used as the home directory.
    pub fn home_dir(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Directory used as `$XDG_CACHE_HOME`.
    pub fn cache_dir(&self) -> PathBuf {
        self.root.path().join("cache")
    }

    /// Path of `dotem.toml` in the working directory.
    pub fn local_config(&self) -> PathBuf {
        self.work_dir().join("dotem.toml")
    }

    /// Load the working-directory config as a typed tree.
    pub fn load_tree(&self) -> ConfigTree {
        config::load_tree(&self.local_config()).expect("load config tree")
    }

    /// Run the `dotem` binary inside the workspace.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dotem"))
            .args(args)
            .current_dir(self.work_dir())
            .env("HOME", self.home_dir())
            .env("XDG_CACHE_HOME", self.cache_dir())
            .env_remove("USERPROFILE")
            .output()
            .expect("run dotem binary")
    }

    /// Run `script` in `/bin/sh` after defining the hook function.
    ///
    /// `PATH` is set to `path` alone, so a test decides whether the `dotem`
    /// binary is reachable.
    pub fn run_with_hook(&self, script: &str, path: &Path) -> Output {
        Command::new("/bin/sh")
            .arg("-c")
            .arg(format!("{}\n{script}\n", dotem::shell::HOOK_SCRIPT))
            .current_dir(self.work_dir())
            .env("PATH", path)
            .env("HOME", self.home_dir())
            .env("XDG_CACHE_HOME", self.cache_dir())
            .env_remove("USERPROFILE")
            .output()
            .expect("run /bin/sh")
    }
}

/// Directory holding the compiled `dotem` binary.
pub fn bin_dir() -> PathBuf {
    Path::new(env!("CARGO_BIN_EXE_dotem"))
        .parent()
        .expect("binary has a parent directory")
        .to_path_buf()
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new, empty workspace.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `content` to `dotem.toml` in the working directory.
    pub fn with_local_config(self, content: &str) -> Self {
        write(&self.ctx.local_config(), content);
        self
    }

    /// Write `content` to `dotem.toml` in the home directory.
    pub fn with_home_config(self, content: &str) -> Self {
        write(&self.ctx.home_dir().join("dotem.toml"), content);
        self
    }

    /// Write `content` to an arbitrary file relative to the workspace root.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        write(&self.ctx.root.path().join(relative), content);
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}

/// Convert process output to a `String`.
pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

/// Convert process error output to a `String`.
pub fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf-8 stderr")
}
