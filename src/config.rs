//! Game configuration
//!
//! Gameplay tuning lives in an optional RON file (`coin_getter.ron` next to
//! the executable by default). Every field has a default, so a partial file
//! only overrides what it names:
//!
//! ```ron
//! (
//!     initial_health: 50,
//!     seed: Some(1234),
//! )
//! ```

use std::fs;
use std::path::Path;
use macroquad::logging::{info, warn};
use serde::{Deserialize, Serialize};
use crate::game::constants;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "coin_getter.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player health at the start of a run
    pub initial_health: i32,
    /// Health lost per enemy hit
    pub enemy_damage: i32,
    /// Exclusive upper bound on coins per batch
    pub max_coin_batch: u32,
    /// Exclusive upper bound on the raw coin speed draw
    pub max_coin_speed: u32,
    /// Player step per frame per axis, scaled by density
    pub player_speed: f32,
    /// Enemy speed per frame per axis, scaled by density
    pub enemy_speed: f32,
    /// Enemy spawn position (world space, bottom-left origin)
    pub enemy_start: (f32, f32),
    /// Overrides the display's DPI scale when set
    pub density: Option<f32>,
    /// Fixed RNG seed for reproducible coin layouts
    pub seed: Option<u64>,
    /// Log every collision and refill
    pub debug_log: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_health: constants::INITIAL_HEALTH,
            enemy_damage: constants::ENEMY_DAMAGE,
            max_coin_batch: constants::MAX_COIN_BATCH,
            max_coin_speed: constants::MAX_COIN_SPEED,
            player_speed: constants::PLAYER_SPEED,
            enemy_speed: constants::ENEMY_SPEED,
            enemy_start: constants::ENEMY_START,
            density: None,
            seed: None,
            debug_log: false,
        }
    }
}

impl GameConfig {
    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: GameConfig = ron::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is missing or bad
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_health <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "initial_health must be positive (got {})", self.initial_health
            )));
        }
        if self.enemy_damage <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "enemy_damage must be positive (got {})", self.enemy_damage
            )));
        }
        for (name, speed) in [("player_speed", self.player_speed), ("enemy_speed", self.enemy_speed)] {
            if !speed.is_finite() || speed < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a non-negative number (got {})", name, speed
                )));
            }
        }
        if let Some(density) = self.density {
            if !density.is_finite() || density <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "density must be positive (got {})", density
                )));
            }
        }
        Ok(())
    }
}
