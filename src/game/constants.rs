//! Gameplay constants
//!
//! Default tuning values and the viewport-relative sprite sizes.

/// Default window width (portrait phone-ish)
pub const DEFAULT_WIDTH: i32 = 480;

/// Default window height
pub const DEFAULT_HEIGHT: i32 = 800;

/// Player health at the start of a run
pub const INITIAL_HEALTH: i32 = 100;

/// Health lost per enemy hit
pub const ENEMY_DAMAGE: i32 = 10;

/// Exclusive upper bound on coins per batch (0..=9 coins)
pub const MAX_COIN_BATCH: u32 = 10;

/// Exclusive upper bound on the random coin speed draw, before density scaling
pub const MAX_COIN_SPEED: u32 = 5;

/// Player step per frame per axis, before density scaling
pub const PLAYER_SPEED: f32 = 5.0;

/// Enemy speed per frame per axis, before density scaling
pub const ENEMY_SPEED: f32 = 3.0;

/// Enemy spawn position (world space)
pub const ENEMY_START: (f32, f32) = (50.0, 50.0);

/// Player size is the viewport width divided by this
pub const PLAYER_SIZE_DIVISOR: f32 = 15.0;

/// Coin size is the viewport width divided by this
pub const COIN_SIZE_DIVISOR: f32 = 20.0;

/// Enemy size is the viewport width divided by this
pub const ENEMY_SIZE_DIVISOR: f32 = 12.0;

/// Clear color (deep blue), RGBA
pub const BACKGROUND: [f32; 4] = [0.008, 0.15, 0.38, 1.0];

/// HUD label font size, before density scaling
pub const HUD_FONT_SIZE: f32 = 28.0;

/// Pause label font size, before density scaling
pub const PAUSE_FONT_SIZE: f32 = 50.0;
