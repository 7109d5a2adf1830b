//! World module - tile grid, doors, wall classification, and scene building.

mod builder;
mod classifier;
mod data;
mod doors;
mod error;
mod geometry;
mod grid;
mod plugin;

pub use builder::{build_maze_scene, rebuild_maze_meshes, DoorMesh, MazeGeometry, WallMesh};
pub use classifier::{
    CornerMask, CornerRowLimit, DrawingMode, StubSide, WallClassifier, WallDescriptor, WallShape,
};
pub use data::{ConfigStatus, MazeConfig, DEFAULT_CONFIG_PATH};
pub use doors::{DoorAnimator, DoorTransition, Timestamp};
pub use error::{BoundsError, ConfigError, DecodeError};
pub use geometry::{door_segments, scene_door_segments, scene_wall_segments, wall_segments, Segment};
pub use grid::{load_image, CellKind, DecodedMap, Door, DoorState, PixelGrid, SpawnPoint, TileGrid};
pub use plugin::{load_simulation, WorldPlugin};
