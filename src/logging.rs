//! Opt-in file logging. The TUI owns the terminal, so diagnostics go to a
//! file given on the command line and nowhere otherwise.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::{Level, Subscriber};

/// Build a plain-text subscriber that appends to `path`.
pub fn file_subscriber(path: &Path, level: Level) -> Result<impl Subscriber + Send + Sync> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

    Ok(tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .finish())
}

/// Install the file subscriber as the process-wide default.
pub fn init(path: &Path, level: Level) -> Result<()> {
    let subscriber = file_subscriber(path, level)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("Failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_events_at_or_above_level() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let subscriber = file_subscriber(tmp.path(), Level::INFO).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(agents = 3, "roster loaded");
            tracing::debug!("too chatty");
        });

        let written = std::fs::read_to_string(tmp.path()).unwrap();
        assert!(written.contains("roster loaded"));
        assert!(written.contains("agents=3"));
        assert!(!written.contains("too chatty"));
    }
}
