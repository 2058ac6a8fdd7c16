//! Per-frame update step
//!
//! Advances the simulation deterministically: same state and same events in,
//! same state out.

use super::geom::overlaps;
use super::input::{InputEvent, apply_input};
use super::state::{GameEvent, GamePhase, GameState, PhaseTrigger, enemy_rect, finish_line};

/// Advance the game state by one frame using this frame's input events
pub fn tick(state: &mut GameState, events: &[InputEvent]) {
    // Nothing moves after a crash
    if state.phase == GamePhase::Lost {
        return;
    }
    state.frame += 1;

    state.player.reset_frame(state.screen);
    for event in events {
        apply_input(state, event);
    }

    // The block never moves relative to the screen
    state.enemy = enemy_rect(state.screen);

    if overlaps(&state.player.rect, &state.enemy) && state.advance(PhaseTrigger::Collision) {
        log::info!(
            "Collision on frame {} at player {:?}",
            state.frame,
            state.player.rect
        );
        state.events.push(GameEvent::Collided);
    }
}

/// Check the finish line; the win is raised only on the first crossing
pub fn check_finish(state: &mut GameState) {
    if f64::from(state.player.rect.x) >= finish_line(state.screen)
        && state.advance(PhaseTrigger::FinishLineCrossed)
    {
        log::info!("Finish line crossed on frame {}", state.frame);
        state.events.push(GameEvent::FinishLineCrossed);
    }
}
