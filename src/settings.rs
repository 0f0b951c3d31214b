//! Runtime settings
//!
//! World size, RNG seed, and the headless run length. Physics constants are
//! fixed and live in [`crate::consts`]. Stored as JSON; missing keys fall back
//! to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// World and runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// World width in units (the canvas width)
    pub width: f32,
    /// World height in units; also the length of every lane
    pub height: f32,
    /// Spawner seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Spawn new actors on the interval
    pub spawning: bool,

    // === Headless runner ===
    /// Ticks between frames
    pub frame_ms: u64,
    /// Frames to simulate
    pub frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            seed: None,
            spawning: true,

            frame_ms: 16,
            frames: 600,
        }
    }
}

impl Settings {
    /// Check that a world can be built from these values
    pub fn validate(&self) -> SettingsResult<()> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        if self.frame_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "frame_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from `path`, or use defaults when there is none or it is unusable
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "seed": 9, "frames": 10 }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.frames, 10);
        assert_eq!(settings.width, 400.0);
        assert!(settings.spawning);
    }

    fn rejected_field(json: &str) -> Option<&'static str> {
        match Settings::from_json(json) {
            Err(SettingsError::Invalid { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(rejected_field(r#"{ "width": 0 }"#), Some("width"));
        assert_eq!(rejected_field(r#"{ "height": -5.0 }"#), Some("height"));
        assert_eq!(rejected_field(r#"{ "frame_ms": 0 }"#), Some("frame_ms"));
        assert_eq!(rejected_field(r#"{ "width": 1.5 }"#), None);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        let message = err.to_string();
        assert!(message.starts_with("settings file is not valid JSON"));
    }

    #[test]
    fn test_save_then_load_file() {
        let name = format!("track-drop-settings-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let settings = Settings {
            seed: Some(31),
            frames: 42,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_falls_back_on_missing_file() {
        let name = "track-drop-settings-does-not-exist.json";
        let path = std::env::temp_dir().join(name);
        let loaded = Settings::load_from(&path);
        assert!(matches!(loaded, Err(SettingsError::Io(_))));
        assert_eq!(Settings::load(Some(&path)), Settings::default());
        assert_eq!(Settings::load(None), Settings::default());
    }
}
