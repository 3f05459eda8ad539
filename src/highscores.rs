//! Persisted high score record
//!
//! A single integer in a human-readable JSON file. Loading is infallible from
//! the caller's point of view: a missing or malformed file yields the default
//! of zero. Saving is best effort.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default file name, resolved relative to the working directory
pub const HIGH_SCORE_FILE: &str = "high_score.json";

/// The persisted record: `{"high_score": N}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub high_score: u64,
}

impl HighScore {
    pub fn new(high_score: u64) -> Self {
        Self { high_score }
    }

    /// Load from the default file
    pub fn load() -> Self {
        Self::load_from(Path::new(HIGH_SCORE_FILE))
    }

    /// Load from `path`; any failure falls back to zero
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(record) => {
                    log::info!("loaded high score from {}", path.display());
                    record
                }
                Err(err) => {
                    log::warn!("malformed high score file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting fresh", path.display());
                Self::default()
            }
        }
    }

    /// Save to the default file
    pub fn save(&self) {
        self.save_to(Path::new(HIGH_SCORE_FILE));
    }

    /// Save to `path`, swallowing failures
    pub fn save_to(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string(self) {
            match fs::write(path, json) {
                Ok(()) => log::info!("high score saved ({})", self.high_score),
                Err(err) => log::warn!("failed to save high score: {err}"),
            }
        }
    }
}
