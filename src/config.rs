//! Runtime configuration
//!
//! Everything tunable lives here and is passed into the demos at construction.
//! The clip window in particular is explicit configuration, never global state.

use crate::clip::ClipRect;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Clip window for the line clipping demo, in normalized [-1, 1] space
    pub clip_window: ClipRect,
    /// Number of random segments the line clipping demo populates
    pub segment_count: usize,
    /// RNG seed for segment generation
    pub seed: u64,
    /// Ball radius in normalized units
    pub ball_radius: f32,
    /// Ball velocity in normalized units per second
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            vsync: true,
            clip_window: ClipRect::new(-0.5, -0.5, 0.5, 0.5),
            segment_count: 10,
            seed: 0x5EED_C11F,
            ball_radius: 0.1,
            ball_speed_x: 1.2,
            ball_speed_y: 0.9,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Check the values a frame loop cannot recover from
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "window dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if !self.clip_window.is_valid() {
            return Err(format!(
                "clip window bounds must be strictly ordered: {:?}",
                self.clip_window
            ));
        }
        if self.segment_count == 0 {
            return Err("segment count must be positive".to_string());
        }
        if self.ball_radius <= 0.0 || self.ball_radius >= 1.0 {
            return Err(format!(
                "ball radius must be in (0, 1), got {}",
                self.ball_radius
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_degenerate_clip_window_rejected() {
        let mut config = Config::default();
        config.clip_window.xmin = 0.5;
        config.clip_window.xmax = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_segments_rejected() {
        let config = Config {
            segment_count: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_ball_rejected() {
        let config = Config {
            ball_radius: 1.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_load_cycle() {
        let config = Config {
            segment_count: 25,
            seed: 99,
            ..Config::default()
        };
        let path = std::env::temp_dir().join("clipdemo_config_test.json");
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.segment_count, 25);
        assert_eq!(loaded.seed, 99);
        assert_eq!(loaded.clip_window, config.clip_window);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"segment_count": 3}"#).unwrap();
        assert_eq!(config.segment_count, 3);
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
    }
}
