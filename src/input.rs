//! Input sampling
//!
//! Polls macroquad once per frame into a plain `FrameInput` so the game
//! logic never touches the windowing layer. Touches win over the mouse;
//! a held left button counts as a touch on desktop and web.

use macroquad::prelude::*;

/// Everything the screens read from the player in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Screen-space (y-down) pointer position while a touch or click is held
    pub touch: Option<Vec2>,
    /// Pause key went down this frame
    pub pause_pressed: bool,
}

impl FrameInput {
    /// Input with a held touch at `(x, y)` in screen space
    pub fn touch_at(x: f32, y: f32) -> Self {
        Self { touch: Some(Vec2::new(x, y)), ..Default::default() }
    }

    pub fn pause() -> Self {
        Self { pause_pressed: true, ..Default::default() }
    }
}

/// Sample the current macroquad input state
pub fn poll() -> FrameInput {
    let touch = touches()
        .iter()
        .find(|t| t.phase != TouchPhase::Ended && t.phase != TouchPhase::Cancelled)
        .map(|t| t.position)
        .or_else(|| {
            if is_mouse_button_down(MouseButton::Left) {
                let (x, y) = mouse_position();
                Some(vec2(x, y))
            } else {
                None
            }
        });

    FrameInput {
        touch,
        pause_pressed: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::P),
    }
}
