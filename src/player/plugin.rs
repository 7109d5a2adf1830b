//! Player plugin - input latching and camera.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles keyboard intents and the first-person camera.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
    }
}
