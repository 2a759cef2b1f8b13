//! Runner settings
//!
//! Persisted as a JSON file next to the binary (or wherever `--settings`
//! points). Missing or malformed files fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::Field;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield size handed to the simulation
    pub field: Field,

    // === Headless runner ===
    /// Simulated host frame interval (ms) fed to the clock
    pub frame_ms: f64,
    /// Frames to run when no count is given on the command line
    pub frames: u64,
    /// Let the demo controller play instead of scripted idle input
    pub autopilot: bool,
    /// Log a snapshot every N frames (0 = only the final one)
    pub snapshot_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field: Field::default(),
            frame_ms: 16.0,
            frames: 3600,
            autopilot: true,
            snapshot_every: 600,
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings: {err}");
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&json).map_err(|e| Error::json(path, e))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::json(path, e))?;
        fs::write(path, json).map_err(|e| Error::io(path, e))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings::load(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "frames": 120, "autopilot": false }"#).expect("write");
        let settings = Settings::load(&path);
        assert_eq!(settings.frames, 120);
        assert!(!settings.autopilot);
        assert_eq!(settings.field, Field::default());
        assert_eq!(settings.frame_ms, 16.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        let settings = Settings {
            field: Field {
                width: 800.0,
                height: 900.0,
            },
            snapshot_every: 0,
            ..Settings::default()
        };
        settings.save(&path).expect("save");
        assert_eq!(Settings::try_load(&path).expect("load"), settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2").expect("write");
        assert!(matches!(Settings::try_load(&path), Err(Error::Json { .. })));
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
