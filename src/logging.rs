//! Tracing setup
//!
//! The terminal is owned by ratatui while the app runs, so events go to a log
//! file instead of stderr.

use anyhow::Result;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Log file name inside the data directory
const LOG_FILE: &str = "signup-tui.log";

/// Default log file location
pub fn log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "signup", "signup-tui")
        .map(|dirs| dirs.data_dir().join(LOG_FILE))
}

/// Open a log file for appending, creating its directory if needed
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Writer for the fmt layer: the log file, or nowhere if it cannot be opened
fn make_writer(path: Option<&Path>) -> (BoxMakeWriter, Option<String>) {
    let Some(path) = path else {
        return (BoxMakeWriter::new(std::io::sink), None);
    };
    match open_log_file(path) {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), None),
        Err(e) => (
            BoxMakeWriter::new(std::io::sink),
            Some(format!("cannot open log file {}: {e:#}", path.display())),
        ),
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Returns a message when the log file could not be opened; events are then
/// discarded.
pub fn init(default_filter: &str, path: Option<&Path>) -> Option<String> {
    let (writer, open_error) = make_writer(path);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    open_error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("signup-tui-{name}-{}", std::process::id()))
            .join("nested")
            .join(LOG_FILE)
    }

    #[test]
    fn test_log_path_is_a_log_file() {
        if let Some(path) = log_path() {
            assert!(path.ends_with(LOG_FILE));
        }
    }

    #[test]
    fn test_events_are_written_to_file() {
        let path = temp_log("events");
        let (writer, open_error) = make_writer(Some(&path));
        assert!(open_error.is_none());

        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("signup submitted");
        });

        let content = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
        assert!(content.contains("signup submitted"));
        assert!(content.contains("INFO"));
    }

    #[test]
    fn test_log_file_is_appended() {
        let path = temp_log("append");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "earlier\n").unwrap();

        let (writer, _) = make_writer(Some(&path));
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || tracing::warn!("later"));

        let content = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
        assert!(content.starts_with("earlier\n"));
        assert!(content.contains("later"));
    }

    #[test]
    fn test_unopenable_path_reports_error() {
        // A directory cannot be opened as a log file
        let dir = std::env::temp_dir().join(format!("signup-tui-dir-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let (_, open_error) = make_writer(Some(&dir));
        let _ = fs::remove_dir_all(&dir);
        assert!(open_error.unwrap().contains("cannot open log file"));
    }

    #[test]
    fn test_no_path_discards_output() {
        let (_, open_error) = make_writer(None);
        assert!(open_error.is_none());
    }
}
