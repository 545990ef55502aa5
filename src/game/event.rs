//! Frame Events
//!
//! What happened during the last update, for logging and the HUD.
//! Queues are cleared at the start of every frame.

use macroquad::math::Vec2;

/// A queue for events of a single type.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh coin batch was generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinsSpawnedEvent {
    /// Batch size (may be zero)
    pub count: u32,
    /// Total batches generated on this screen so far
    pub batch: u32,
}

/// The player picked up coins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinsCollectedEvent {
    pub count: u32,
    pub total: u32,
}

/// The enemy caught the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerHitEvent {
    /// Where the player was before the respawn
    pub position: Vec2,
    pub health_left: i32,
}

/// Container for all frame events
#[derive(Debug, Default)]
pub struct Events {
    pub coins_spawned: EventQueue<CoinsSpawnedEvent>,
    pub coins_collected: EventQueue<CoinsCollectedEvent>,
    pub player_hit: EventQueue<PlayerHitEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_all(&mut self) {
        self.coins_spawned.clear();
        self.coins_collected.clear();
        self.player_hit.clear();
    }
}
