//! Runtime settings
//!
//! Loaded from a JSON file next to the binary; defaults are used when the
//! file is missing or unreadable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory scene files are written to and read from.
    pub scene_dir: PathBuf,
    /// Scene loaded on startup.
    pub startup_scene: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scene_dir: PathBuf::from("scenes"),
            startup_scene: "Main".to_owned(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("settings file {} is invalid: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
