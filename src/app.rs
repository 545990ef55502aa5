//! Application state and screen switching
//!
//! One screen is live at a time. The game screen hands off to the game
//! over screen when health runs out; the game over screen starts a fresh
//! run on tap. Dropping a screen releases everything it owns.

use macroquad::logging::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::config::GameConfig;
use crate::game::{GameScreen, ScreenTransition, Viewport};
use crate::game_over::GameOverScreen;
use crate::input::FrameInput;
use crate::render::DrawList;

/// The live screen
pub enum Screen {
    Playing(GameScreen<StdRng>),
    GameOver(GameOverScreen),
}

/// Main application state
pub struct AppState {
    pub config: GameConfig,
    pub screen: Screen,
    /// Screen size and density used for new runs
    viewport: Viewport,
    /// Base seed; run N uses `seed + N`
    seed: u64,
    runs: u64,
    /// Best coin count this session
    best: u32,
    draw_list: DrawList,
}

impl AppState {
    pub fn new(config: GameConfig, viewport: Viewport, seed: u64) -> Self {
        let screen = Screen::Playing(GameScreen::new(&config, viewport, StdRng::seed_from_u64(seed)));
        info!("Run 1 (seed {})", seed);
        Self {
            config,
            screen,
            viewport,
            seed,
            runs: 1,
            best: 0,
            draw_list: DrawList::new(),
        }
    }

    /// Use a new screen size for the next run
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    fn start_run(&mut self) {
        let seed = self.seed.wrapping_add(self.runs);
        self.runs += 1;
        info!("Run {} (seed {})", self.runs, seed);
        self.screen = Screen::Playing(GameScreen::new(
            &self.config,
            self.viewport,
            StdRng::seed_from_u64(seed),
        ));
    }

    /// Update the live screen, switch screens if needed, and return the
    /// frame's draw list.
    pub fn frame(&mut self, input: &FrameInput) -> &DrawList {
        match &mut self.screen {
            Screen::Playing(game) => {
                let transition = game.update(input);
                log_events(game);
                if let ScreenTransition::GameOver(summary) = transition {
                    self.best = self.best.max(summary.coins_collected);
                    let density = game.viewport().density;
                    // Replacing the screen drops the finished run
                    self.screen = Screen::GameOver(GameOverScreen::new(summary, self.best, density));
                }
            }
            Screen::GameOver(over) => {
                if over.update(input) {
                    self.start_run();
                }
            }
        }

        self.draw_list.reset();
        match &self.screen {
            Screen::Playing(game) => game.draw(&mut self.draw_list),
            Screen::GameOver(over) => over.draw(&mut self.draw_list),
        }
        &self.draw_list
    }
}

fn log_events(game: &GameScreen<StdRng>) {
    let events = game.events();
    for spawn in events.coins_spawned.iter() {
        info!("Coin batch {}: {} coins", spawn.batch, spawn.count);
    }
    for hit in events.player_hit.iter() {
        info!(
            "Enemy hit at ({:.0}, {:.0}), health {}",
            hit.position.x, hit.position.y, hit.health_left
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(health: i32) -> AppState {
        let config = GameConfig { initial_health: health, ..Default::default() };
        AppState::new(config, Viewport::new(480.0, 800.0, 1.0).unwrap(), 77)
    }

    fn force_enemy_hit(app: &mut AppState) {
        if let Screen::Playing(game) = &mut app.screen {
            let pos = game.player().position;
            game.enemy_mut().position = pos;
        }
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut app = app(10);
        assert!(matches!(app.screen, Screen::Playing(_)));

        force_enemy_hit(&mut app);
        let list = app.frame(&FrameInput::default());
        assert!(list.label_texts().any(|t| t == "GAME OVER"));
        match &app.screen {
            Screen::GameOver(over) => assert_eq!(app.best(), over.summary().coins_collected),
            Screen::Playing(_) => panic!("expected game over screen"),
        }

        // Touch must lift before a new run starts
        app.frame(&FrameInput::default());
        app.frame(&FrameInput::touch_at(100.0, 100.0));
        assert!(matches!(app.screen, Screen::Playing(_)));
        assert_eq!(app.runs(), 2);
    }

    #[test]
    fn test_playing_frame_draws_hud() {
        let mut app = app(100);
        let list = app.frame(&FrameInput::default());
        assert!(list.label_texts().any(|t| t == "Health: 100"));
        assert!(matches!(app.screen, Screen::Playing(_)));
    }
}
