//! Player module - grid movement, input, and camera control.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{camera_transform, MotionSolver, DEFAULT_SPEED, DEFAULT_TURN_RATE};
pub use plugin::PlayerPlugin;
