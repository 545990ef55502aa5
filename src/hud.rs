//! HUD and pause overlay
//!
//! The HUD shows the coin count in the top-left corner and health in the
//! top-right. The pause overlay is a centered "[PAUSE]" label that changes
//! to a random color every frame while the game is paused.

use macroquad::prelude::{Color, Vec2, WHITE};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use crate::game::constants::{HUD_FONT_SIZE, PAUSE_FONT_SIZE};
use crate::render::{Anchor, DrawList};

/// Coin and health labels
#[derive(Debug, Clone)]
pub struct Hud {
    coin_label: String,
    health_label: String,
    font_size: f32,
}

impl Hud {
    pub fn new(health: i32, density: f32) -> Self {
        let mut hud = Self {
            coin_label: String::new(),
            health_label: String::new(),
            font_size: HUD_FONT_SIZE * density,
        };
        hud.set_coin_label(0);
        hud.set_health(health);
        hud
    }

    pub fn set_coin_label(&mut self, count: u32) {
        self.coin_label = format!("Coins: {}", count);
    }

    pub fn set_health(&mut self, value: i32) {
        self.health_label = format!("Health: {}", value);
    }

    pub fn coin_label(&self) -> &str {
        &self.coin_label
    }

    pub fn health_label(&self) -> &str {
        &self.health_label
    }

    pub fn draw(&self, list: &mut DrawList) {
        list.label(self.coin_label.as_str(), Anchor::TopLeft, Vec2::ZERO, self.font_size, WHITE);
        list.label(self.health_label.as_str(), Anchor::TopRight, Vec2::ZERO, self.font_size, WHITE);
    }
}

/// Centered pause label with a color that flickers each frame
#[derive(Debug, Clone)]
pub struct PauseMenu {
    color: Color,
    font_size: f32,
    rng: SmallRng,
}

impl PauseMenu {
    pub fn new(density: f32, seed: u64) -> Self {
        Self {
            color: WHITE,
            font_size: PAUSE_FONT_SIZE * density,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Pick a new random opaque color
    pub fn change_color(&mut self) {
        self.color = Color::new(self.rng.gen(), self.rng.gen(), self.rng.gen(), 1.0);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn draw(&self, list: &mut DrawList) {
        list.label("[PAUSE]", Anchor::Center, Vec2::ZERO, self.font_size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_labels() {
        let mut hud = Hud::new(100, 1.0);
        assert_eq!(hud.coin_label(), "Coins: 0");
        assert_eq!(hud.health_label(), "Health: 100");

        hud.set_coin_label(7);
        hud.set_health(40);
        let mut list = DrawList::new();
        hud.draw(&mut list);
        assert_eq!(list.label_texts().collect::<Vec<_>>(), vec!["Coins: 7", "Health: 40"]);
    }

    #[test]
    fn test_pause_color_changes_and_stays_opaque() {
        let mut menu = PauseMenu::new(1.0, 5);
        menu.change_color();
        let first = menu.color();
        menu.change_color();
        assert_ne!(first, menu.color());
        assert_eq!(menu.color().a, 1.0);
    }
}
