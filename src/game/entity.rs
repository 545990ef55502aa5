//! Game Entities
//!
//! The three things on screen: the player, the coins and the enemy.
//! Each is plain data plus a per-frame `update`. Positions are the
//! bottom-left corner of the entity's box in world space.
//!
//! `update` is keyed by frame number: an entity integrates at most once per
//! frame, so a second call within the same frame is a no-op.

use macroquad::math::{Rect, Vec2};
use super::camera::Viewport;

/// Which sprite to draw for an entity. The renderer owns the textures;
/// entities only carry the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Coin,
    Enemy,
}

/// Hit points. Not clamped at zero so the loss per hit stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
}

impl Health {
    pub fn new(initial: i32) -> Self {
        Self { current: initial }
    }

    /// Apply damage. Returns true if this hit was fatal.
    pub fn damage(&mut self, amount: i32) -> bool {
        self.current -= amount;
        self.is_dead()
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// The touch-controlled player square
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    /// Step per frame on each axis
    pub velocity: Vec2,
    pub health: Health,
    pub coins_collected: u32,
    pub size: f32,
    last_frame: Option<u64>,
}

impl Player {
    pub fn new(position: Vec2, velocity: Vec2, health: i32, size: f32) -> Self {
        Self {
            position,
            velocity,
            health: Health::new(health),
            coins_collected: 0,
            size,
            last_frame: None,
        }
    }

    /// No intrinsic motion; the player only moves through touch input.
    pub fn update(&mut self, frame: u64) {
        if self.last_frame == Some(frame) {
            return;
        }
        self.last_frame = Some(frame);
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size, self.size)
    }

    pub fn sprite(&self) -> SpriteKind {
        SpriteKind::Player
    }
}

/// A collectible coin. Coins carry a velocity but stay where they spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub position: Vec2,
    pub velocity: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Coin {
    pub fn new(position: Vec2, velocity: Vec2, size: f32) -> Self {
        Self { position, velocity, width: size, height: size }
    }

    pub fn update(&mut self, _frame: u64) {}

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn sprite(&self) -> SpriteKind {
        SpriteKind::Coin
    }
}

/// The single patrolling enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    last_frame: Option<u64>,
}

impl Enemy {
    pub fn new(position: Vec2, velocity: Vec2, size: f32) -> Self {
        Self { position, velocity, size, last_frame: None }
    }

    /// Integrate velocity once for `frame`, reflecting off the viewport edges.
    pub fn update(&mut self, frame: u64, viewport: &Viewport) {
        if self.last_frame == Some(frame) {
            return;
        }
        self.last_frame = Some(frame);

        self.position += self.velocity;

        let max_x = (viewport.width - self.size).max(0.0);
        let max_y = (viewport.height - self.size).max(0.0);

        if self.position.x < 0.0 || self.position.x > max_x {
            self.velocity.x = -self.velocity.x;
            self.position.x = self.position.x.clamp(0.0, max_x);
        }
        if self.position.y < 0.0 || self.position.y > max_y {
            self.velocity.y = -self.velocity.y;
            self.position.y = self.position.y.clamp(0.0, max_y);
        }
    }

    /// Reverse direction on both axes
    pub fn bounce(&mut self) {
        self.velocity = -self.velocity;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size, self.size)
    }

    pub fn sprite(&self) -> SpriteKind {
        SpriteKind::Enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(480.0, 800.0, 1.0).unwrap()
    }

    #[test]
    fn test_health_damage_not_clamped() {
        let mut health = Health::new(15);
        assert!(!health.damage(10));
        assert_eq!(health.current, 5);
        assert!(health.damage(10));
        assert_eq!(health.current, -5);
    }

    #[test]
    fn test_enemy_integrates_once_per_frame() {
        let mut enemy = Enemy::new(Vec2::new(50.0, 50.0), Vec2::new(3.0, 2.0), 40.0);
        enemy.update(1, &viewport());
        enemy.update(1, &viewport());
        assert_eq!(enemy.position, Vec2::new(53.0, 52.0));

        enemy.update(2, &viewport());
        assert_eq!(enemy.position, Vec2::new(56.0, 54.0));
    }

    #[test]
    fn test_enemy_reflects_off_edges() {
        let mut enemy = Enemy::new(Vec2::new(1.0, 758.0), Vec2::new(-3.0, 3.0), 40.0);
        enemy.update(1, &viewport());
        assert_eq!(enemy.position, Vec2::new(0.0, 760.0));
        assert_eq!(enemy.velocity, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_enemy_bounce_negates_both_axes() {
        let mut enemy = Enemy::new(Vec2::ZERO, Vec2::new(3.0, -2.0), 40.0);
        enemy.bounce();
        assert_eq!(enemy.velocity, Vec2::new(-3.0, 2.0));
    }

    #[test]
    fn test_player_update_does_not_move() {
        let mut player = Player::new(Vec2::new(10.0, 20.0), Vec2::splat(5.0), 100, 32.0);
        player.update(1);
        player.update(1);
        assert_eq!(player.position, Vec2::new(10.0, 20.0));
    }
}
