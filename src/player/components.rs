//! Player state and per-tick intents.

use bevy::prelude::*;

use crate::world::SpawnPoint;

/// Marker for the first-person camera entity.
#[derive(Component)]
pub struct PlayerCamera;

/// Player position in grid space and heading in degrees.
///
/// Heading 0 looks towards -z ("north" on the map image), 90 towards +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub x: f32,
    pub z: f32,
    pub heading: f32,
}

impl PlayerState {
    /// The grid tile the player stands in.
    pub fn tile(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.z.floor() as i32)
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.z)
    }
}

impl From<SpawnPoint> for PlayerState {
    fn from(spawn: SpawnPoint) -> Self {
        Self {
            x: spawn.x,
            z: spawn.z,
            heading: spawn.heading,
        }
    }
}

/// Movement intents for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionIntent {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Input gathered between ticks.
///
/// Movement flags mirror the held keys. `interact` is a latch: set on key
/// press, cleared once a tick has consumed it.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputLatch {
    pub intent: MotionIntent,
    pub interact: bool,
}
