//! Fixed-rate loop driver
//!
//! Each frame: poll input, run the update step, render, sleep off the rest of
//! the frame budget, then check the finish line.

use crate::platform::{Clock, EventSource, RenderSink, TextureLoader};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, InputEvent, check_finish, tick};

/// The two sprite textures. A texture that failed to load is `None` and is
/// simply not drawn.
#[derive(Debug)]
pub struct Sprites<T> {
    pub player: Option<T>,
    pub enemy: Option<T>,
}

impl<T> Sprites<T> {
    /// Load both sprites, logging (not propagating) failures
    pub fn load<L>(loader: &L, settings: &Settings) -> Self
    where
        L: TextureLoader<Texture = T>,
    {
        let load = |path: &std::path::Path| match loader.load_texture(path) {
            Ok(texture) => {
                log::debug!("Loaded texture {}", path.display());
                Some(texture)
            }
            Err(e) => {
                log::error!("{e}");
                None
            }
        };
        Self {
            player: load(settings.player_texture.as_path()),
            enemy: load(settings.enemy_texture.as_path()),
        }
    }
}

/// Game instance holding all state and the platform collaborators
pub struct Game<E, R: RenderSink, C> {
    pub state: GameState,
    events: E,
    renderer: R,
    clock: C,
    sprites: Sprites<R::Texture>,
    frame_budget_ms: u64,
    drain_events: bool,
    exit_on_win: bool,
    /// Every event announced to the player, in order
    announced: Vec<GameEvent>,
    /// Reused per-frame input buffer
    input: Vec<InputEvent>,
}

impl<E, R, C> Game<E, R, C>
where
    E: EventSource,
    R: RenderSink,
    C: Clock,
{
    pub fn new(
        settings: &Settings,
        events: E,
        renderer: R,
        clock: C,
        sprites: Sprites<R::Texture>,
    ) -> Self {
        Self {
            state: GameState::new(settings.screen()),
            events,
            renderer,
            clock,
            sprites,
            frame_budget_ms: settings.frame_budget_ms(),
            drain_events: settings.drain_events,
            exit_on_win: settings.exit_on_win,
            announced: Vec::new(),
            input: Vec::new(),
        }
    }

    /// Should another frame run?
    pub fn is_running(&self) -> bool {
        self.state.is_running() && !(self.exit_on_win && self.state.phase == GamePhase::Won)
    }

    /// Run frames until the game ends; returns the final phase
    pub fn run(&mut self) -> GamePhase {
        log::info!("Game loop started ({} ms per frame)", self.frame_budget_ms);
        while self.is_running() {
            self.frame();
        }
        log::info!(
            "Game loop finished after {} frames: {:?}",
            self.state.frame,
            self.state.phase
        );
        self.state.phase
    }

    /// One iteration of the loop
    pub fn frame(&mut self) {
        let frame_start = self.clock.now_millis();

        self.poll_input();
        tick(&mut self.state, &self.input);
        self.announce_events();

        self.render();

        let frame_time = self.clock.now_millis().saturating_sub(frame_start);
        if frame_time < self.frame_budget_ms {
            self.clock.sleep_millis(self.frame_budget_ms - frame_time);
        }

        check_finish(&mut self.state);
        self.announce_events();
    }

    /// One event per frame, or everything pending in drain mode
    fn poll_input(&mut self) {
        self.input.clear();
        if self.drain_events {
            while let Some(event) = self.events.poll_event() {
                self.input.push(event);
            }
        } else if let Some(event) = self.events.poll_event() {
            self.input.push(event);
        }
    }

    /// Render the current frame
    fn render(&mut self) {
        self.renderer.clear();
        let draws = [
            (self.sprites.player.as_ref(), self.state.player.rect),
            (self.sprites.enemy.as_ref(), self.state.enemy),
        ];
        for (texture, dest) in draws {
            if let Some(texture) = texture {
                if let Err(e) = self.renderer.copy(texture, dest) {
                    log::warn!("Render error: {e}");
                }
            }
        }
        self.renderer.present();
    }

    fn announce_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Collided => {
                    println!("\n\t*Collision Detected!*\n\t*Game Over!*\n");
                    log::info!("Game over");
                }
                GameEvent::FinishLineCrossed => {
                    println!("\n\t*No Collision Detected!*\n\t*You Won!*\n");
                    log::info!("Player won");
                }
                GameEvent::QuitRequested => log::info!("Quit requested"),
            }
            self.announced.push(event);
        }
    }

    /// Every event announced so far
    pub fn announced(&self) -> &[GameEvent] {
        &self.announced
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Hand back the collaborators for teardown
    pub fn into_parts(self) -> (E, R, C) {
        (self.events, self.renderer, self.clock)
    }
}
