//! World plugin - config reporting, map loading, and scene setup.

use bevy::prelude::*;

use crate::core::{GameState, Simulation};
use crate::player::MotionSolver;

use super::builder::build_maze_scene;
use super::data::{report_config_status, MazeConfig};
use super::doors::DoorAnimator;
use super::error::DecodeError;
use super::grid::{load_image, TileGrid};

/// World plugin - handles map loading and world setup.
///
/// Expects `MazeConfig` and `ConfigStatus` to be inserted before the app
/// runs.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (report_config_status, load_maze).chain())
            .add_systems(OnEnter(GameState::InGame), build_maze_scene);
    }
}

/// Decode the configured map into a fresh simulation.
pub fn load_simulation(config: &MazeConfig) -> Result<Simulation, DecodeError> {
    let image = load_image(&config.map_path)?;
    let map = TileGrid::decode(&image)?;
    Ok(Simulation::new(
        map,
        DoorAnimator::new(config.auto_close_ms),
        MotionSolver::new(config.player_speed, config.turn_rate),
    ))
}

/// Load the map and enter the game, or exit if it cannot be read.
pub fn load_maze(
    mut commands: Commands,
    config: Res<MazeConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    match load_simulation(&config) {
        Ok(sim) => {
            info!(
                "Player spawns at ({}, {}) facing {}",
                sim.player.x, sim.player.z, sim.player.heading
            );
            commands.insert_resource(sim);
            next_state.set(GameState::InGame);
        }
        Err(e) => {
            error!("Cannot start: {}", e);
            exit.send(AppExit::error());
        }
    }
}
