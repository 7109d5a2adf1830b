//! Maze Crawler - Entry Point
//!
//! Usage: `maze-crawler [MAP_IMAGE]`
//!
//! Controls:
//! - Up/Down arrows: Walk forward/back
//! - Left/Right arrows: Turn
//! - Space: Open nearby doors
//! - Escape: Quit

use std::path::Path;

use bevy::prelude::*;
use bevy::window::PresentMode;

use maze_crawler::world::{MazeConfig, DEFAULT_CONFIG_PATH};

fn main() {
    let (mut config, status) = MazeConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH));
    if let Some(map_path) = std::env::args().nth(1) {
        config.map_path = map_path.into();
    }

    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Maze Crawler".to_string(),
                resolution: (config.window_width, config.window_height).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))

        // Fixed simulation rate
        .insert_resource(Time::<Fixed>::from_hz(config.tick_rate_hz))
        .insert_resource(config)
        .insert_resource(status)

        // Our game plugin
        .add_plugins(maze_crawler::MazePlugin)

        .run();
}
