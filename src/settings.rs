//! Game settings
//!
//! Loaded from a JSON file next to the binary. Every field has a default, so a
//! partial file (or none at all) is fine.

use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, GameResult};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Window title
    pub title: String,
    /// Window position; centered when either coordinate is missing
    pub window_x: Option<i32>,
    pub window_y: Option<i32>,
    /// Logical screen size (also the window size)
    pub screen_width: i32,
    pub screen_height: i32,
    pub fullscreen: bool,
    /// Background color (RGBA) used to clear each frame
    pub clear_color: [u8; 4],

    // === Loop ===
    /// Frame rate cap
    pub target_fps: u32,
    /// Apply every pending input event each frame instead of just one
    pub drain_events: bool,
    /// Stop the loop once the finish line is crossed
    pub exit_on_win: bool,

    // === Assets ===
    pub player_texture: PathBuf,
    pub enemy_texture: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Game".to_string(),
            window_x: None,
            window_y: None,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fullscreen: false,
            clear_color: [255, 255, 255, 255],

            target_fps: TARGET_FPS,
            drain_events: false,
            exit_on_win: false,

            player_texture: PathBuf::from("assets/player.bmp"),
            enemy_texture: PathBuf::from("assets/enemy.bmp"),
        }
    }
}

impl Settings {
    /// Environment variable that overrides the settings file location
    pub const PATH_ENV: &'static str = "CAR_HOP_SETTINGS";
    /// Settings file looked up in the working directory
    pub const DEFAULT_PATH: &'static str = "car-hop.json";

    /// Screen size as a vector
    pub fn screen(&self) -> IVec2 {
        IVec2::new(self.screen_width, self.screen_height)
    }

    /// Per-frame time budget in milliseconds
    pub fn frame_budget_ms(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }

    /// Window position, if one was configured
    pub fn window_position(&self) -> Option<(i32, i32)> {
        self.window_x.zip(self.window_y)
    }

    /// Reject settings the loop cannot run with
    pub fn validate(&self) -> GameResult<()> {
        if self.target_fps == 0 {
            return Err(GameError::Config("target_fps must be at least 1".into()));
        }
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(GameError::Config(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        Ok(())
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> GameResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Where to look for the settings file
    pub fn resolve_path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load settings from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> GameResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
