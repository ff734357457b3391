//! # TUI Logging
//!
//! While the alternate screen is active anything written to stderr lands on
//! top of the frame, so the TUI logs to a file instead.

use anyhow::{anyhow, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Log file used when `REMEX_TUI_LOG` is unset
pub const DEFAULT_LOG_PATH: &str = "remex-tui.log";

/// Resolve the log file path from `REMEX_TUI_LOG`
pub fn log_path_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup("REMEX_TUI_LOG")
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
}

/// Open the log file for appending, creating it if needed
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("Failed to open log file {}: {}", path.display(), e))
}

/// Install env_logger writing to `path` (default filter `warn`)
pub fn init(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("remex-{}-{}.log", name, std::process::id()))
    }

    #[test]
    fn test_log_path_default_and_override() {
        assert_eq!(log_path_from(|_| None), PathBuf::from(DEFAULT_LOG_PATH));
        assert_eq!(log_path_from(|_| Some("  ".to_string())), PathBuf::from(DEFAULT_LOG_PATH));
        assert_eq!(
            log_path_from(|_| Some("/var/log/remex.log".to_string())),
            PathBuf::from("/var/log/remex.log")
        );
    }

    #[test]
    fn test_log_file_appends() {
        let path = scratch_path("append");
        let _ = std::fs::remove_file(&path);

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let path = scratch_path("missing-dir").join("nested.log");
        let err = open_log_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
