//! Command-facing logger on top of [`tracing`].
use std::path::{Path, PathBuf};

use super::subscriber::STAGE_TARGET;
use super::utils::log_file_path;

/// Structured logger used by command handlers.
///
/// Every message goes through [`tracing`]; the subscriber installed by
/// [`init_subscriber`](super::init_subscriber) routes it to stderr and to the
/// log file at `$XDG_CACHE_HOME/dotem/<command>.log`.
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a logger for `command`, remembering where its log file lives.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path, if the cache directory is available.
    #[must_use]
    pub fn log_path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Log an error message.
    #[allow(clippy::unused_self)]
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    #[allow(clippy::unused_self)]
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major step of a command).
    #[allow(clippy::unused_self)]
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    #[allow(clippy::unused_self)]
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (console only with `--verbose`; always in the log file).
    #[allow(clippy::unused_self)]
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::subscriber::FileLayer;
    use std::fs;
    use tracing_subscriber::{Layer as _, filter::LevelFilter, layer::SubscriberExt as _};

    /// Logger plus a thread-local subscriber writing to a temp log file.
    fn isolated_logger() -> (Logger, tempfile::TempDir, tracing::dispatcher::DefaultGuard) {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("test.log");
        let layer = FileLayer::at(&path).expect("failed to create file layer");
        let subscriber =
            tracing_subscriber::registry().with(layer.with_filter(LevelFilter::DEBUG));
        let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(subscriber));
        (Logger { log_file: Some(path) }, tmp, guard)
    }

    fn contents(log: &Logger) -> String {
        fs::read_to_string(log.log_path().expect("log path")).unwrap()
    }

    #[test]
    fn debug_always_written_to_file() {
        let (log, _tmp, _guard) = isolated_logger();
        let marker = format!("debug-marker-{}", std::process::id());
        log.debug(&marker);
        assert!(contents(&log).contains(&marker));
    }

    #[test]
    fn warn_written_to_file() {
        let (log, _tmp, _guard) = isolated_logger();
        log.warn("warn-marker");
        let text = contents(&log);
        assert!(text.contains("[warn]"), "warn tag should appear in log file");
        assert!(text.contains("warn-marker"));
    }

    #[test]
    fn error_written_to_file() {
        let (log, _tmp, _guard) = isolated_logger();
        log.error("error-marker");
        assert!(contents(&log).contains("[error] error-marker"));
    }

    #[test]
    fn stage_written_to_file_with_arrow() {
        let (log, _tmp, _guard) = isolated_logger();
        log.stage("Resolving profile");
        assert!(contents(&log).contains("==> Resolving profile"));
    }

    #[test]
    fn info_written_to_file() {
        let (log, _tmp, _guard) = isolated_logger();
        log.info("info-marker");
        assert!(contents(&log).contains("info-marker"));
    }

    #[test]
    fn new_logger_points_into_cache_dir() {
        let log = Logger::new("load");
        if let Some(path) = log.log_path() {
            assert!(path.ends_with("dotem/load.log"));
        }
    }
}
