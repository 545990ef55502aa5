//! Viewport and Screen Camera
//!
//! The world is y-up with the origin at the bottom-left corner of the
//! viewport. Screen space (touch input, macroquad drawing) is y-down with the
//! origin at the top-left. `ScreenCamera` converts between the two.

use macroquad::math::{Rect, Vec2};
use super::constants::{COIN_SIZE_DIVISOR, ENEMY_SIZE_DIVISOR, PLAYER_SIZE_DIVISOR};
use super::error::GameError;

/// Visible screen area in pixels plus the display density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Display scale factor (1.0 on a standard-density screen)
    pub density: f32,
}

impl Viewport {
    /// Validate and build a viewport.
    ///
    /// Rejects non-finite or non-positive values, and viewports too small to
    /// place a single coin fully on screen.
    pub fn new(width: f32, height: f32, density: f32) -> Result<Self, GameError> {
        for (name, value) in [("width", width), ("height", height), ("density", density)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidViewport(format!("{} = {}", name, value)));
            }
        }

        let viewport = Self { width, height, density };
        let coin_size = viewport.coin_size();
        if viewport.coin_range_x() < 1 || viewport.coin_range_y() < 1 {
            return Err(GameError::ViewportTooSmall { width, height, coin_size });
        }
        Ok(viewport)
    }

    /// Player is a square, width/15 on a side
    pub fn player_size(&self) -> f32 {
        self.width / PLAYER_SIZE_DIVISOR
    }

    /// Coins are squares, width/20 on a side
    pub fn coin_size(&self) -> f32 {
        self.width / COIN_SIZE_DIVISOR
    }

    pub fn enemy_size(&self) -> f32 {
        self.width / ENEMY_SIZE_DIVISOR
    }

    /// Exclusive upper bound for a coin's integer x position
    pub fn coin_range_x(&self) -> i32 {
        (self.width - self.coin_size()) as i32
    }

    /// Exclusive upper bound for a coin's integer y position
    pub fn coin_range_y(&self) -> i32 {
        (self.height - self.coin_size()) as i32
    }

    /// Where the player starts a run
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where the player is sent after touching the enemy
    pub fn respawn_point(&self) -> Vec2 {
        self.center() - Vec2::splat(self.player_size())
    }
}

/// Orthographic camera covering exactly the viewport
#[derive(Debug, Clone, Copy)]
pub struct ScreenCamera {
    viewport: Viewport,
}

impl ScreenCamera {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Nothing to recompute for a fixed ortho camera; kept so the frame
    /// sequence reads the same as a scrolling camera would.
    pub fn update(&mut self) {}

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Screen (y-down) to world (y-up)
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x, self.viewport.height - screen.y)
    }

    /// World-space box (bottom-left origin) to a screen-space rect (top-left origin)
    pub fn project_rect(&self, position: Vec2, size: Vec2) -> Rect {
        Rect::new(
            position.x,
            self.viewport.height - position.y - size.y,
            size.x,
            size.y,
        )
    }
}
