//! Headless platform: scripted input, recorded frames, simulated time
//!
//! Used by the binary when built without the `sdl` feature and by the
//! integration tests.

use std::cell::Cell;
use std::collections::VecDeque;
use std::path::Path;

use super::{Clock, EventSource, RenderSink, TextureLoader};
use crate::error::{GameError, GameResult};
use crate::sim::{InputEvent, Key, Rect};

/// Replays a fixed list of input events, one per poll
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}

/// A decoded image header standing in for a GPU texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessTexture {
    /// File stem, e.g. "player"
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Checks that files are readable BMPs and reads their dimensions
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpLoader;

impl BmpLoader {
    /// BITMAPFILEHEADER (14 bytes) + start of BITMAPINFOHEADER
    const MIN_HEADER_LEN: usize = 26;

    pub fn decode(name: &str, bytes: &[u8]) -> Result<HeadlessTexture, String> {
        if bytes.len() < Self::MIN_HEADER_LEN {
            return Err(format!("file too short ({} bytes)", bytes.len()));
        }
        if &bytes[0..2] != b"BM" {
            return Err("not a BMP file".to_string());
        }
        let read_i32 = |at: usize| {
            i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        let width = read_i32(18);
        // Negative height means a top-down bitmap
        let height = read_i32(22).unsigned_abs();
        if width <= 0 || height == 0 {
            return Err(format!("bad dimensions {width}x{height}"));
        }
        Ok(HeadlessTexture {
            name: name.to_string(),
            width: width as u32,
            height,
        })
    }
}

impl TextureLoader for BmpLoader {
    type Texture = HeadlessTexture;

    fn load_texture(&self, path: &Path) -> GameResult<HeadlessTexture> {
        let bytes = std::fs::read(path).map_err(|e| GameError::asset(path, e))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::decode(&name, &bytes).map_err(|reason| GameError::asset(path, reason))
    }
}

/// One presented frame: the draw calls issued between clear and present
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedFrame {
    pub draws: Vec<(String, Rect)>,
}

impl RecordedFrame {
    /// Destination of the first draw of the named texture
    pub fn find(&self, name: &str) -> Option<Rect> {
        self.draws.iter().find(|(n, _)| n == name).map(|(_, r)| *r)
    }
}

/// Renderer that remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pending: RecordedFrame,
    pub frames: Vec<RecordedFrame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl RenderSink for RecordingRenderer {
    type Texture = HeadlessTexture;

    fn clear(&mut self) {
        self.pending.draws.clear();
    }

    fn copy(&mut self, texture: &HeadlessTexture, dest: Rect) -> GameResult<()> {
        log::trace!("draw {} at {:?}", texture.name, dest);
        self.pending.draws.push((texture.name.clone(), dest));
        Ok(())
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.pending));
    }
}

/// Simulated clock: every reading costs `work_per_read` ms, sleeps are instant
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    work_per_read: u64,
    pub sleeps: Vec<u64>,
}

impl ManualClock {
    pub fn new(work_per_read: u64) -> Self {
        Self {
            now: Cell::new(0),
            work_per_read,
            sleeps: Vec::new(),
        }
    }

    /// Total simulated milliseconds
    pub fn elapsed(&self) -> u64 {
        self.now.get()
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        let now = self.now.get() + self.work_per_read;
        self.now.set(now);
        now
    }

    fn sleep_millis(&mut self, millis: u64) {
        self.sleeps.push(millis);
        self.now.set(self.now.get() + millis);
    }
}

/// Input for the demo run: drive up to the block, jump it, cross the line,
/// land, quit. Assumes the default 800x600 screen.
pub fn demo_script() -> Vec<InputEvent> {
    let mut script = Vec::new();
    let tap = |script: &mut Vec<InputEvent>, key: Key, times: usize| {
        for _ in 0..times {
            script.push(InputEvent::press(key));
            script.push(InputEvent::release(key));
        }
    };

    // x = 275, just short of the block
    tap(&mut script, Key::Right, 55);
    // x = 278, airborne
    script.push(InputEvent::press(Key::Up));
    for _ in 0..30 {
        script.push(InputEvent::press(Key::Right));
    }
    // x = 428, past the block and the finish line
    script.push(InputEvent::release(Key::Up));
    script.extend(std::iter::repeat_n(InputEvent::Other, 30));
    script.push(InputEvent::Quit);
    script
}
