//! Game state and core simulation types

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;

/// Outcome of the match so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Driving toward the finish line
    #[default]
    Playing,
    /// Finish line crossed without touching the block
    Won,
    /// Car hit the block
    Lost,
}

/// Things that can change the match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTrigger {
    Collision,
    FinishLineCrossed,
}

impl GamePhase {
    /// Phase transition function. A collision always ends the match, even
    /// after the finish line was crossed; `Lost` is final.
    pub fn transition(self, trigger: PhaseTrigger) -> GamePhase {
        match (self, trigger) {
            (GamePhase::Playing | GamePhase::Won, PhaseTrigger::Collision) => GamePhase::Lost,
            (GamePhase::Playing, PhaseTrigger::FinishLineCrossed) => GamePhase::Won,
            (phase, _) => phase,
        }
    }

    pub fn is_decided(self) -> bool {
        self != GamePhase::Playing
    }
}

/// Notable things that happened during a frame, drained by the loop driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player asked to close the game
    QuitRequested,
    /// Car hit the block: game over
    Collided,
    /// Car crossed the finish line: win
    FinishLineCrossed,
}

/// The player's car
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Jump key is held
    pub airborne: bool,
}

impl Player {
    /// Height of the car while on the ground
    pub fn baseline(screen: IVec2) -> i32 {
        screen.y / 2
    }

    /// Where the car sits vertically given the current jump state
    pub fn resting_y(&self, screen: IVec2) -> i32 {
        let ground = Self::baseline(screen);
        if self.airborne { ground - JUMP_RISE } else { ground }
    }

    /// Per-frame reset of size and height
    pub fn reset_frame(&mut self, screen: IVec2) {
        self.rect.w = PLAYER_SIZE;
        self.rect.h = PLAYER_SIZE;
        self.rect.y = self.resting_y(screen);
    }

    pub fn drive(&mut self) {
        self.rect.translate(IVec2::new(RIGHT_STEP, 0));
    }

    pub fn jump(&mut self, screen: IVec2) {
        self.airborne = true;
        self.rect.y = self.resting_y(screen);
        self.rect.translate(IVec2::new(JUMP_FORWARD, 0));
    }

    pub fn land(&mut self, screen: IVec2) {
        self.airborne = false;
        self.rect.y = self.resting_y(screen);
    }
}

/// The block's rectangle for a given screen size.
///
/// Centered horizontally, placed at `(height - size) / 1.6`, truncated toward
/// zero. 800x600 gives `{377, 346, 45, 45}`.
pub fn enemy_rect(screen: IVec2) -> Rect {
    let size = ENEMY_SIZE as f64;
    let x = screen.x as f64 / 2.0 - size / 2.0;
    let y = screen.y as f64 / ENEMY_HEIGHT_DIVISOR - size / ENEMY_HEIGHT_DIVISOR;
    Rect::new(x as i32, y as i32, ENEMY_SIZE, ENEMY_SIZE)
}

/// Horizontal position the car must reach to win
pub fn finish_line(screen: IVec2) -> f64 {
    screen.x as f64 / FINISH_LINE_DIVISOR
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Screen size the layout is computed against
    pub screen: IVec2,
    pub player: Player,
    pub enemy: Rect,
    pub phase: GamePhase,
    /// Set by a quit event; ends the loop
    pub quit_requested: bool,
    /// Update steps run so far
    pub frame: u64,
    /// Events raised since the driver last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state with zeroed rectangles
    pub fn new(screen: IVec2) -> Self {
        Self {
            screen,
            player: Player::default(),
            enemy: Rect::default(),
            phase: GamePhase::Playing,
            quit_requested: false,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Apply a phase trigger, returning whether the phase changed
    pub fn advance(&mut self, trigger: PhaseTrigger) -> bool {
        let next = self.phase.transition(trigger);
        if next == self.phase {
            return false;
        }
        log::debug!("Phase {:?} -> {:?} ({:?})", self.phase, next, trigger);
        self.phase = next;
        true
    }

    /// The loop keeps going until a quit or a loss
    pub fn is_running(&self) -> bool {
        !self.quit_requested && self.phase != GamePhase::Lost
    }

    pub fn request_quit(&mut self) {
        if !self.quit_requested {
            self.quit_requested = true;
            self.events.push(GameEvent::QuitRequested);
        }
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}
