//! Rendering plugin - clear colour and per-frame maze mesh rebuilds.
//!
//! Walls are reclassified and door slabs repositioned every frame, so the
//! meshes always reflect the grid as the last tick left it.

use bevy::prelude::*;

use crate::core::GameState;
use crate::world::{rebuild_maze_meshes, MazeConfig};

/// Rendering plugin - configures the flat-shaded maze view.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_clear_color)
            .add_systems(
                PostUpdate,
                rebuild_maze_meshes.run_if(in_state(GameState::InGame)),
            );
    }
}

fn apply_clear_color(mut commands: Commands, config: Res<MazeConfig>) {
    let (r, g, b) = config.clear_color;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));
}
