//! File-backed logging.
//!
//! The terminal belongs to the UI while the app runs, so records are piped
//! to a file instead of stderr. `RUST_LOG` selects the level (default
//! `info`).

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use env_logger::{Env, Target};

/// Install the global logger writing to `path`, appending if it exists.
pub fn init<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;

    let installed = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    if installed.is_err() {
        log::warn!("Logger already installed, keeping the existing one");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.log");

        init(&path).unwrap();
        init(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_init_fails_for_missing_directory() {
        assert!(init("/no/such/dir/quiz.log").is_err());
    }
}
