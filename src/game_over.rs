//! Game over screen
//!
//! Shown after health runs out. Displays the run's coin count and the best
//! count this session, and starts a new run on the next tap. The finger
//! that was steering the player has to lift first, otherwise the held touch
//! would restart the game immediately.

use macroquad::prelude::{Color, Vec2, WHITE};
use crate::game::constants::{BACKGROUND, HUD_FONT_SIZE, PAUSE_FONT_SIZE};
use crate::game::RunSummary;
use crate::input::FrameInput;
use crate::render::{Anchor, DrawList};

pub struct GameOverScreen {
    summary: RunSummary,
    best: u32,
    /// Set once no touch is held
    armed: bool,
    density: f32,
}

impl GameOverScreen {
    pub fn new(summary: RunSummary, best: u32, density: f32) -> Self {
        Self { summary, best, armed: false, density }
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Returns true when the player asked for a new run
    pub fn update(&mut self, input: &FrameInput) -> bool {
        match input.touch {
            None => {
                self.armed = true;
                false
            }
            Some(_) => self.armed,
        }
    }

    pub fn draw(&self, list: &mut DrawList) {
        let [r, g, b, a] = BACKGROUND;
        list.clear(Color::new(r, g, b, a));

        let title = PAUSE_FONT_SIZE * self.density;
        let body = HUD_FONT_SIZE * self.density;
        list.label("GAME OVER", Anchor::Center, Vec2::new(0.0, -title), title, WHITE);
        list.label(
            format!("Coins: {}", self.summary.coins_collected),
            Anchor::Center,
            Vec2::ZERO,
            body,
            WHITE,
        );
        list.label(format!("Best: {}", self.best), Anchor::Center, Vec2::new(0.0, body * 1.5), body, WHITE);
        list.label("Tap to play again", Anchor::Center, Vec2::new(0.0, body * 4.0), body, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary { coins_collected: 12, frames: 900 }
    }

    #[test]
    fn test_held_touch_does_not_restart() {
        let mut screen = GameOverScreen::new(summary(), 12, 1.0);
        assert!(!screen.update(&FrameInput::touch_at(10.0, 10.0)));
        assert!(!screen.update(&FrameInput::touch_at(10.0, 10.0)));

        assert!(!screen.update(&FrameInput::default()));
        assert!(screen.update(&FrameInput::touch_at(10.0, 10.0)));
    }

    #[test]
    fn test_labels() {
        let screen = GameOverScreen::new(summary(), 20, 1.0);
        let mut list = DrawList::new();
        screen.draw(&mut list);
        assert_eq!(
            list.label_texts().collect::<Vec<_>>(),
            vec!["GAME OVER", "Coins: 12", "Best: 20", "Tap to play again"]
        );
    }
}
