//! Flat-colour materials for maze geometry.

use bevy::prelude::*;

use crate::world::MazeConfig;

/// Material handles used by the maze scene.
pub struct MaterialRegistry {
    pub wall: Handle<StandardMaterial>,
    pub door: Handle<StandardMaterial>,
    pub floor: Handle<StandardMaterial>,
}

impl MaterialRegistry {
    pub fn new(materials: &mut Assets<StandardMaterial>, config: &MazeConfig) -> Self {
        Self {
            wall: materials.add(flat(config.wall_color)),
            door: materials.add(flat(config.door_color)),
            floor: materials.add(flat(config.floor_color)),
        }
    }
}

/// Unlit and double-sided: wall faces are single quads seen from both sides.
fn flat(color: (f32, f32, f32)) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb(color.0, color.1, color.2),
        unlit: true,
        cull_mode: None,
        ..default()
    }
}
