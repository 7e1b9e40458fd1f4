//! Game settings and preferences
//!
//! Presentation and session options only; physics constants live in
//! [`crate::consts`] and are not configurable. Stored as JSON, every field
//! optional.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::renderer::Palette;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terminal window title
    pub title: String,
    /// Element colors
    pub palette: Palette,
    /// Seed for serve directions; random when absent
    pub seed: Option<u64>,
    /// AI plays the bottom paddle as well
    pub demo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Pong Game".to_string(),
            palette: Palette::default(),
            seed: None,
            demo: false,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Pretty JSON, suitable as a starting config file
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Seed to use for this run, falling back to `fallback` when none is configured
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Color, colors};

    #[test]
    fn test_defaults_match_classic_look() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Pong Game");
        assert_eq!(settings.palette.background, colors::BLACK);
        assert_eq!(settings.palette.paddle, Color(195, 195, 195));
        assert_eq!(settings.palette.ball, colors::WHITE);
        assert_eq!(settings.palette.score, Color(50, 50, 50));
        assert_eq!(settings.seed, None);
        assert!(!settings.demo);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"seed": 42, "palette": {"paddle": [0, 255, 0]}}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.palette.paddle, Color(0, 255, 0));
        assert_eq!(settings.palette.ball, colors::WHITE);
        assert_eq!(settings.title, "Pong Game");
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            demo: true,
            seed: Some(7),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("term-pong-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{"demo": true}"#).unwrap();
        let settings = Settings::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(settings.demo);
    }

    #[test]
    fn test_load_errors() {
        let missing = Settings::load_from_file("/nonexistent/term-pong.json").unwrap_err();
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);

        let path = std::env::temp_dir().join(format!("term-pong-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let bad = Settings::load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(bad.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_seed_or() {
        assert_eq!(Settings::default().seed_or(9), 9);
        let seeded = Settings {
            seed: Some(1),
            ..Default::default()
        };
        assert_eq!(seeded.seed_or(9), 1);
    }
}
