//! Maze scene construction and per-frame mesh updates.

use bevy::prelude::*;

use super::classifier::WallClassifier;
use super::data::MazeConfig;
use super::geometry::{scene_door_segments, scene_wall_segments};
use crate::core::Simulation;
use crate::rendering::{extrude_segments, floor_mesh, MaterialRegistry};

/// Marker for all maze geometry.
#[derive(Component)]
pub struct MazeGeometry;

/// The entity holding the combined wall mesh.
#[derive(Component)]
pub struct WallMesh;

/// The entity holding the combined door mesh.
#[derive(Component)]
pub struct DoorMesh;

/// Spawn floor, wall and door meshes for the loaded maze.
pub fn build_maze_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<Simulation>,
    config: Res<MazeConfig>,
) {
    let mat_registry = MaterialRegistry::new(&mut materials, &config);
    let classifier = WallClassifier::new(config.corner_row_limit);
    let grid = &sim.grid;

    commands.spawn((
        Mesh3d(meshes.add(floor_mesh(grid.width(), grid.height()))),
        MeshMaterial3d(mat_registry.floor),
        Transform::default(),
        MazeGeometry,
    ));

    let walls = scene_wall_segments(grid, &classifier, config.wall_thickness);
    commands.spawn((
        Mesh3d(meshes.add(extrude_segments(&walls, config.wall_height))),
        MeshMaterial3d(mat_registry.wall),
        Transform::default(),
        WallMesh,
        MazeGeometry,
    ));

    let doors = scene_door_segments(grid, &classifier, config.door_thickness);
    commands.spawn((
        Mesh3d(meshes.add(extrude_segments(&doors, config.wall_height))),
        MeshMaterial3d(mat_registry.door),
        Transform::default(),
        DoorMesh,
        MazeGeometry,
    ));

    info!(
        "Built maze scene: {} wall face(s), {} door face(s)",
        walls.len(),
        doors.len()
    );
}

/// Regenerate wall and door meshes from the current grid.
pub fn rebuild_maze_meshes(
    sim: Res<Simulation>,
    config: Res<MazeConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    wall_query: Query<&Mesh3d, With<WallMesh>>,
    door_query: Query<&Mesh3d, (With<DoorMesh>, Without<WallMesh>)>,
) {
    let classifier = WallClassifier::new(config.corner_row_limit);

    for handle in wall_query.iter() {
        if let Some(mesh) = meshes.get_mut(&handle.0) {
            let walls = scene_wall_segments(&sim.grid, &classifier, config.wall_thickness);
            *mesh = extrude_segments(&walls, config.wall_height);
        }
    }

    for handle in door_query.iter() {
        if let Some(mesh) = meshes.get_mut(&handle.0) {
            let doors = scene_door_segments(&sim.grid, &classifier, config.door_thickness);
            *mesh = extrude_segments(&doors, config.wall_height);
        }
    }
}
