//! Game construction errors
//!
//! Gameplay itself never fails; only building a screen for a viewport that
//! cannot hold the sprites is rejected.

/// Error type for screen construction
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Width, height or density is zero, negative, NaN or infinite
    InvalidViewport(String),
    /// The viewport is valid but leaves no room to place a coin
    ViewportTooSmall { width: f32, height: f32, coin_size: f32 },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            GameError::ViewportTooSmall { width, height, coin_size } => write!(
                f,
                "Viewport {}x{} too small for {:.1}px coins",
                width, height, coin_size
            ),
        }
    }
}

impl std::error::Error for GameError {}
