//! Maze Crawler - a first-person walk through a bitmap-encoded maze.
//!
//! # Architecture
//!
//! The simulation core is plain Rust with no engine calls, so it can be
//! driven and tested tick by tick:
//!
//! - **World**: tile grid decoded from the map image, door animation,
//!   wall classification, face geometry
//! - **Player**: position/heading and the per-axis motion solver
//! - **Core**: the `Simulation` aggregate and its fixed-rate tick
//!
//! Bevy plugins wrap the core:
//!
//! - **Core**: game states, door events, the `FixedUpdate` tick
//! - **Player**: keyboard intents and the first-person camera
//! - **World**: config reporting, map loading, scene spawning
//! - **Rendering**: clear colour and per-frame mesh rebuilds

pub mod core;
pub mod player;
pub mod rendering;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct MazePlugin;

impl Plugin for MazePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin);
    }
}
