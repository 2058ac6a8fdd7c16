//! Car Hop entry point
//!
//! Loads settings, brings up the platform and runs the game loop.
//!
//! A plain `cargo run` has no window: it plays a scripted demo headless and
//! prints the outcome. To drive the car yourself, build with SDL2:
//!
//! ```text
//! cargo run --features sdl
//! ```
//!
//! Settings are read from `car-hop.json` (or the file named by
//! `CAR_HOP_SETTINGS`); `RUST_LOG=info` shows startup diagnostics.

use std::process::ExitCode;

use car_hop::{GameResult, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Car Hop starting...");

    let settings = match Settings::load(&Settings::resolve_path()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&settings) {
        Ok(()) => {
            log::info!("Game cleaned up");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "sdl")]
fn run(settings: &Settings) -> GameResult<()> {
    use car_hop::platform::SystemClock;
    use car_hop::platform::sdl::{self, SdlRenderer, SdlTextureLoader};
    use car_hop::{Game, Sprites};

    let sdl::SdlPlatform {
        context,
        canvas,
        events,
    } = sdl::init(settings)?;

    let texture_creator = canvas.texture_creator();
    let sprites = Sprites::load(&SdlTextureLoader::new(&texture_creator), settings);

    let mut game = Game::new(
        settings,
        events,
        SdlRenderer::new(canvas),
        SystemClock::new(),
        sprites,
    );
    game.run();

    // Renderer and window go before the SDL context
    drop(game);
    drop(context);
    Ok(())
}

#[cfg(not(feature = "sdl"))]
fn run(settings: &Settings) -> GameResult<()> {
    use car_hop::platform::SystemClock;
    use car_hop::platform::headless::{BmpLoader, RecordingRenderer, ScriptedEvents, demo_script};
    use car_hop::{Game, Sprites};

    log::info!("Built without the `sdl` feature - playing the demo script headless");

    let sprites = Sprites::load(&BmpLoader, settings);
    let mut game = Game::new(
        settings,
        ScriptedEvents::new(demo_script()),
        RecordingRenderer::new(),
        SystemClock::new(),
        sprites,
    );
    let phase = game.run();
    println!(
        "Demo finished on frame {} with outcome {:?}",
        game.state.frame, phase
    );
    Ok(())
}
