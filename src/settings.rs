//! Game settings and preferences
//!
//! Presentation toggles persisted next to the high score file, with the same
//! recovery policy: any load failure falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default file name, resolved relative to the working directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Presentation preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen shake on damage
    pub screen_shake: bool,
    /// Particle bursts on collisions and pickups
    pub particles: bool,
    /// Show the FPS counter
    pub show_fps: bool,
    /// Reduced motion (suppresses shake regardless of the toggle)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            particles: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Load from the default file
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load from `path`; any failure falls back to defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save to `path`, swallowing failures
    pub fn save_to(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if let Err(err) = fs::write(path, json) {
                log::warn!("failed to save settings: {err}");
            }
        }
    }
}
