//! Car Hop - drive right, jump the block, cross the finish line
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, input, update step, game state)
//! - `game`: Fixed-rate loop driver (input → update → render → pacing)
//! - `platform`: Window/renderer/input/clock collaborators (SDL2 or headless)
//! - `settings`: JSON-backed configuration
//! - `error`: Error taxonomy shared by all of the above

pub mod error;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{GameError, GameResult};
pub use game::{Game, Sprites};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default window size
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Target frame rate for the loop driver
    pub const TARGET_FPS: u32 = 60;

    /// Player car is a fixed square
    pub const PLAYER_SIZE: i32 = 100;
    /// Horizontal step per "right" key press
    pub const RIGHT_STEP: i32 = 5;
    /// Height gained by a jump
    pub const JUMP_RISE: i32 = 150;
    /// Forward nudge applied when a jump starts
    pub const JUMP_FORWARD: i32 = 3;

    /// Enemy block is a fixed square
    pub const ENEMY_SIZE: i32 = 45;
    /// Enemy vertical placement: (screen_height - size) / this
    pub const ENEMY_HEIGHT_DIVISOR: f64 = 1.6;

    /// Finish line sits at screen_width / this
    pub const FINISH_LINE_DIVISOR: f64 = 1.88;
}
