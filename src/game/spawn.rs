//! Coin Spawning
//!
//! Coins come in random batches. A new batch is generated when the screen is
//! built and whenever the last coin has been collected.

use macroquad::math::Vec2;
use rand::Rng;
use super::camera::Viewport;
use super::entity::Coin;

/// Generates coin batches and counts how many it has produced
#[derive(Debug, Clone)]
pub struct CoinSpawner {
    /// Exclusive upper bound on the batch size
    pub max_batch: u32,
    /// Exclusive upper bound on the raw speed draw
    pub max_speed: u32,
    batches: u32,
}

impl CoinSpawner {
    pub fn new(max_batch: u32, max_speed: u32) -> Self {
        Self { max_batch, max_speed, batches: 0 }
    }

    /// Number of batches generated so far (including empty ones)
    pub fn batches(&self) -> u32 {
        self.batches
    }

    /// Generate a batch of `[0, max_batch)` coins placed fully inside the viewport.
    ///
    /// Positions are whole pixels in `[0, width - coin) x [0, height - coin)`.
    /// Each velocity axis is `trunc(rand[0, max_speed) * density) + 1`.
    pub fn generate_coins<R: Rng>(&mut self, rng: &mut R, viewport: &Viewport) -> Vec<Coin> {
        self.batches += 1;

        let count = if self.max_batch == 0 { 0 } else { rng.gen_range(0..self.max_batch) };
        let size = viewport.coin_size();
        let range_x = viewport.coin_range_x();
        let range_y = viewport.coin_range_y();

        (0..count)
            .map(|_| {
                let position = Vec2::new(
                    rng.gen_range(0..range_x) as f32,
                    rng.gen_range(0..range_y) as f32,
                );
                let velocity = Vec2::new(
                    self.random_speed(rng, viewport.density),
                    self.random_speed(rng, viewport.density),
                );
                Coin::new(position, velocity, size)
            })
            .collect()
    }

    fn random_speed<R: Rng>(&self, rng: &mut R, density: f32) -> f32 {
        let raw = if self.max_speed == 0 { 0 } else { rng.gen_range(0..self.max_speed) };
        ((raw as f32 * density) as i32 + 1) as f32
    }
}
