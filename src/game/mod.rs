//! Game Module
//!
//! Everything that happens on the play field: the player chases the touch
//! point, picks up coins and gets knocked back by the patrolling enemy.
//!
//! Key pieces:
//! - Entity: player, coin and enemy state
//! - Collision: box overlap and its consequences
//! - Spawn: random coin batches
//! - Screen: the frame loop tying it together
//!
//! Nothing in here needs a window; macroquad is only used for its math types.

pub mod constants;
pub mod error;
pub mod camera;
pub mod entity;
pub mod movement;
pub mod spawn;
pub mod collision;
pub mod event;
pub mod screen;

// Re-export main types
pub use camera::{ScreenCamera, Viewport};
pub use entity::SpriteKind;
pub use error::GameError;
pub use screen::{GameScreen, RunSummary, ScreenState, ScreenTransition};
