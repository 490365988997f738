//! High-score persistence: a single-line text file `Final Score: <integer>`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name, created next to wherever the game is launched.
pub const DEFAULT_SCORE_FILE: &str = "high_score.txt";

const SCORE_PREFIX: &str = "Final Score:";

/// Reads and conditionally overwrites the persisted high score.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The previously persisted score. An absent or malformed file reads as
    /// `None` (first run).
    pub fn load(&self) -> Result<Option<u32>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        Ok(parse_score_line(&contents))
    }

    /// Persist `score` if it strictly beats the stored one (or on first
    /// run). Returns whether a new record was written.
    pub fn record(&self, score: u32) -> Result<bool> {
        let prior = self.load()?;
        let improved = prior.map_or(true, |best| score > best);
        if improved {
            fs::write(&self.path, format!("{SCORE_PREFIX} {score}\n"))
                .with_context(|| format!("failed to write {}", self.path.display()))?;
        }
        Ok(improved)
    }
}

fn parse_score_line(contents: &str) -> Option<u32> {
    contents
        .lines()
        .next()?
        .strip_prefix(SCORE_PREFIX)?
        .trim()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HighScoreStore {
        HighScoreStore::new(dir.path().join(DEFAULT_SCORE_FILE))
    }

    #[test]
    fn absent_file_is_a_first_run() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn first_run_records_any_score() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.record(0).unwrap());
        assert_eq!(store.load().unwrap(), Some(0));
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Final Score: 0\n"
        );
    }

    #[test]
    fn only_strict_improvements_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.record(7).unwrap());
        assert!(!store.record(7).unwrap());
        assert!(!store.record(3).unwrap());
        assert_eq!(store.load().unwrap(), Some(7));

        assert!(store.record(12).unwrap());
        assert_eq!(store.load().unwrap(), Some(12));
    }

    #[test]
    fn malformed_file_reads_as_first_run() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not a score\n").unwrap();

        assert_eq!(store.load().unwrap(), None);
        assert!(store.record(1).unwrap());
        assert_eq!(store.load().unwrap(), Some(1));
    }
}
