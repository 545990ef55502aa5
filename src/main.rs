//! Coin Getter: a touch-driven arcade game
//!
//! Steer the square toward your finger, grab the coins, stay away from the
//! patrolling enemy. Every hit costs health; the run ends at zero.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod game;
mod game_over;
mod hud;
mod input;
mod render;

use macroquad::logging::{info, warn};
use macroquad::prelude::*;
use app::AppState;
use config::{GameConfig, CONFIG_FILE};
use game::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use game::{GameError, Viewport};
use render::SpriteAtlas;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Coin Getter v{}", VERSION),
        window_width: DEFAULT_WIDTH,
        window_height: DEFAULT_HEIGHT,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Seed from the wall clock (works on wasm, unlike OS entropy here)
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

/// Viewport for the current window size
fn window_viewport(config: &GameConfig) -> Result<Viewport, GameError> {
    let density = config.density.unwrap_or_else(screen_dpi_scale);
    Viewport::new(screen_width(), screen_height(), density)
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config_path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_FILE.to_string());
    let config = GameConfig::load_or_default(&config_path);

    let atlas = SpriteAtlas::load().await;

    let seed = config.seed.unwrap_or_else(clock_seed);
    let viewport = window_viewport(&config).unwrap_or_else(|e| {
        warn!("{}, using {}x{}", e, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        Viewport {
            width: DEFAULT_WIDTH as f32,
            height: DEFAULT_HEIGHT as f32,
            density: 1.0,
        }
    });
    let mut app = AppState::new(config, viewport, seed);

    info!("=== COIN GETTER v{} ===", VERSION);

    loop {
        let frame_input = input::poll();

        // New runs pick up the window size at the time they start
        if let Ok(viewport) = window_viewport(&app.config) {
            app.set_viewport(viewport);
        }

        let list = app.frame(&frame_input);
        atlas.execute(list);

        next_frame().await;
    }
}
