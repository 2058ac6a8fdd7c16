//! Platform abstraction layer
//!
//! The loop driver only talks to these traits:
//! - Input events (`EventSource`)
//! - Drawing (`RenderSink`) and texture loading (`TextureLoader`)
//! - Time (`Clock`)
//!
//! `sdl` backs them with a real window; `headless` backs them with scripts
//! and recorders for demos and tests.

pub mod headless;
#[cfg(feature = "sdl")]
pub mod sdl;

use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::GameResult;
use crate::sim::{InputEvent, Rect};

/// Source of input events, polled by the loop driver
pub trait EventSource {
    /// Next pending event, or `None` if the queue is empty
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Where frames are drawn
pub trait RenderSink {
    type Texture;

    fn clear(&mut self);
    /// Draw a whole texture stretched into `dest`
    fn copy(&mut self, texture: &Self::Texture, dest: Rect) -> GameResult<()>;
    fn present(&mut self);
}

/// Loads image files into textures a `RenderSink` can draw
pub trait TextureLoader {
    type Texture;

    fn load_texture(&self, path: &Path) -> GameResult<Self::Texture>;
}

/// Millisecond clock used for frame pacing
pub trait Clock {
    fn now_millis(&self) -> u64;
    fn sleep_millis(&mut self, millis: u64);
}

/// Wall clock: milliseconds since creation, real sleeps
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_millis(&mut self, millis: u64) {
        std::thread::sleep(Duration::from_millis(millis));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_advances_after_sleep() {
        let mut clock = SystemClock::new();
        let before = clock.now_millis();
        clock.sleep_millis(5);
        assert!(clock.now_millis() >= before + 5);
    }
}
