//! SDL2 platform: window, accelerated canvas, BMP textures, keyboard events

use std::marker::PhantomData;
use std::path::Path;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl};

use super::{EventSource, RenderSink, TextureLoader};
use crate::error::{GameError, GameResult};
use crate::settings::Settings;
use crate::sim::{InputEvent, Key, Rect};

/// Everything SDL hands back from a successful init
pub struct SdlPlatform {
    /// Keeps the SDL context alive for as long as the platform is in use
    pub context: Sdl,
    pub canvas: Canvas<Window>,
    pub events: SdlEvents,
}

/// Bring up SDL, the window and the renderer
///
/// # Errors
///
/// Returns `GameError::Init` if any subsystem fails to start.
pub fn init(settings: &Settings) -> GameResult<SdlPlatform> {
    let context = sdl2::init().map_err(GameError::Init)?;
    let video = context.video().map_err(GameError::Init)?;
    log::info!("SDL initialized");

    let mut builder = video.window(
        &settings.title,
        settings.screen_width as u32,
        settings.screen_height as u32,
    );
    match settings.window_position() {
        Some((x, y)) => builder.position(x, y),
        None => builder.position_centered(),
    };
    if settings.fullscreen {
        builder.fullscreen();
    }
    let window = builder
        .build()
        .map_err(|e| GameError::Init(e.to_string()))?;
    log::info!("Window created");

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| GameError::Init(e.to_string()))?;
    let [r, g, b, a] = settings.clear_color;
    canvas.set_draw_color(Color::RGBA(r, g, b, a));
    log::info!("Renderer created");

    let pump = context.event_pump().map_err(GameError::Init)?;

    Ok(SdlPlatform {
        context,
        canvas,
        events: SdlEvents { pump },
    })
}

/// Keyboard/window events from SDL's queue
pub struct SdlEvents {
    pump: EventPump,
}

impl SdlEvents {
    fn translate(event: Event) -> InputEvent {
        match event {
            Event::Quit { .. } => InputEvent::Quit,
            Event::KeyDown {
                keycode, repeat, ..
            } => InputEvent::KeyDown {
                key: map_key(keycode),
                repeat,
            },
            Event::KeyUp {
                keycode, repeat, ..
            } => InputEvent::KeyUp {
                key: map_key(keycode),
                repeat,
            },
            _ => InputEvent::Other,
        }
    }
}

fn map_key(keycode: Option<Keycode>) -> Key {
    match keycode {
        Some(Keycode::Right) => Key::Right,
        Some(Keycode::Up) => Key::Up,
        _ => Key::Other,
    }
}

impl EventSource for SdlEvents {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pump.poll_event().map(Self::translate)
    }
}

/// Canvas wrapper; `'t` ties drawn textures to their `TextureCreator`
pub struct SdlRenderer<'t> {
    canvas: Canvas<Window>,
    _textures: PhantomData<&'t TextureCreator<WindowContext>>,
}

impl SdlRenderer<'_> {
    pub fn new(canvas: Canvas<Window>) -> Self {
        Self {
            canvas,
            _textures: PhantomData,
        }
    }
}

impl<'t> RenderSink for SdlRenderer<'t> {
    type Texture = Texture<'t>;

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn copy(&mut self, texture: &Texture<'t>, dest: Rect) -> GameResult<()> {
        let dest = sdl2::rect::Rect::new(dest.x, dest.y, dest.w as u32, dest.h as u32);
        self.canvas
            .copy(texture, None, Some(dest))
            .map_err(GameError::Render)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

/// Loads BMP files through SDL surfaces
pub struct SdlTextureLoader<'t> {
    creator: &'t TextureCreator<WindowContext>,
}

impl<'t> SdlTextureLoader<'t> {
    pub fn new(creator: &'t TextureCreator<WindowContext>) -> Self {
        Self { creator }
    }
}

impl<'t> TextureLoader for SdlTextureLoader<'t> {
    type Texture = Texture<'t>;

    fn load_texture(&self, path: &Path) -> GameResult<Texture<'t>> {
        let surface = Surface::load_bmp(path).map_err(|e| GameError::asset(path, e))?;
        self.creator
            .create_texture_from_surface(&surface)
            .map_err(|e| GameError::asset(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Option<Keycode>, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode,
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    fn key_up(keycode: Option<Keycode>, repeat: bool) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode,
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn test_translate_fresh_right_press() {
        assert_eq!(
            SdlEvents::translate(key_down(Some(Keycode::Right), false)),
            InputEvent::press(Key::Right)
        );
    }

    #[test]
    fn test_translate_keeps_repeat_flag() {
        assert_eq!(
            SdlEvents::translate(key_down(Some(Keycode::Up), true)),
            InputEvent::KeyDown { key: Key::Up, repeat: true }
        );
    }

    #[test]
    fn test_translate_up_release() {
        assert_eq!(
            SdlEvents::translate(key_up(Some(Keycode::Up), false)),
            InputEvent::release(Key::Up)
        );
    }

    #[test]
    fn test_translate_quit() {
        assert_eq!(SdlEvents::translate(Event::Quit { timestamp: 0 }), InputEvent::Quit);
    }

    #[test]
    fn test_unmapped_keys_are_other() {
        assert_eq!(
            SdlEvents::translate(key_down(Some(Keycode::A), false)),
            InputEvent::press(Key::Other)
        );
        assert_eq!(
            SdlEvents::translate(key_up(None, false)),
            InputEvent::release(Key::Other)
        );
    }

    #[test]
    fn test_non_keyboard_events_are_other() {
        let event = Event::AppTerminating { timestamp: 0 };
        assert_eq!(SdlEvents::translate(event), InputEvent::Other);
    }
}
