//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update step per frame, driven only by that frame's input events
//! - Integer pixel positions
//! - No rendering or platform dependencies

pub mod geom;
pub mod input;
pub mod state;
pub mod tick;

pub use geom::{Rect, overlaps};
pub use input::{InputEvent, Key, apply_input};
pub use state::{
    GameEvent, GamePhase, GameState, PhaseTrigger, Player, enemy_rect, finish_line,
};
pub use tick::{check_finish, tick};
