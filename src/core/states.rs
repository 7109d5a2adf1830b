//! Game state definitions that control the overall flow of the game.
//!
//! The tick loop and camera only run in `InGame`. If the map fails to load
//! the app never leaves `Loading`.

use bevy::prelude::*;

/// Main game states.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Reading config and decoding the map.
    #[default]
    Loading,
    /// Active walk simulation.
    InGame,
}
