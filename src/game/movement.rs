//! Touch-driven movement
//!
//! The player chases the touch point one velocity step per frame on each
//! axis independently. There is no normalization, so diagonal moves cover
//! more ground per frame than straight ones.

use macroquad::math::Vec2;

/// One frame of movement from `position` toward `target`.
///
/// Per axis: above the target steps down, below steps up, equal stays put.
/// A step may overshoot the target; the next frame steps back.
pub fn step_toward(position: Vec2, velocity: Vec2, target: Vec2) -> Vec2 {
    Vec2::new(
        step_axis(position.x, velocity.x, target.x),
        step_axis(position.y, velocity.y, target.y),
    )
}

fn step_axis(current: f32, speed: f32, target: f32) -> f32 {
    if current > target {
        current - speed
    } else if current < target {
        current + speed
    } else {
        current
    }
}
