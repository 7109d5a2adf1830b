//! Grid-based player movement and camera control.
//!
//! Movement is resolved per axis against the tile under the candidate
//! position, so pushing diagonally into a wall slides along it.

use bevy::prelude::*;

use super::components::*;
use crate::core::{GameState, Simulation};
use crate::world::{MazeConfig, TileGrid};

/// Default distance moved per tick, in tiles.
pub const DEFAULT_SPEED: f32 = 0.08;
/// Default turn per tick, in degrees.
pub const DEFAULT_TURN_RATE: f32 = 2.0;

/// Resolves intents into heading and position changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSolver {
    pub speed: f32,
    pub turn_rate: f32,
}

impl Default for MotionSolver {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            turn_rate: DEFAULT_TURN_RATE,
        }
    }
}

impl MotionSolver {
    pub fn new(speed: f32, turn_rate: f32) -> Self {
        Self { speed, turn_rate }
    }

    /// Apply one tick of intents to `player`.
    pub fn step(&self, player: &mut PlayerState, intent: MotionIntent, grid: &TileGrid) {
        if intent.turn_left {
            player.heading -= self.turn_rate;
        }
        if intent.turn_right {
            player.heading += self.turn_rate;
        }

        let radians = player.heading.to_radians();
        let dx = radians.sin() * self.speed;
        let dz = radians.cos() * self.speed;

        // Backward is resolved before forward; each axis uses the other
        // axis's latest value.
        if intent.backward {
            self.try_move(player, -dx, dz, grid);
        }
        if intent.forward {
            self.try_move(player, dx, -dz, grid);
        }
    }

    fn try_move(&self, player: &mut PlayerState, dx: f32, dz: f32, grid: &TileGrid) {
        let next_x = player.x + dx;
        if passable(grid, next_x, player.z) {
            player.x = next_x;
        }
        let next_z = player.z + dz;
        if passable(grid, player.x, next_z) {
            player.z = next_z;
        }
    }
}

/// Off-grid positions are never passable.
fn passable(grid: &TileGrid, x: f32, z: f32) -> bool {
    grid.get(x.floor() as i32, z.floor() as i32)
        .is_some_and(|kind| kind.is_passable())
}

/// Set up input and camera systems.
pub fn setup_movement_systems(app: &mut App) {
    app.init_resource::<InputLatch>()
        .add_systems(OnEnter(GameState::InGame), spawn_player_camera)
        .add_systems(
            Update,
            (latch_input, sync_camera).run_if(in_state(GameState::InGame)),
        );
}

/// Sample the keyboard into the latch consumed by the next tick.
pub fn latch_input(keyboard: Res<ButtonInput<KeyCode>>, mut latch: ResMut<InputLatch>) {
    latch.intent = MotionIntent {
        forward: keyboard.pressed(KeyCode::ArrowUp),
        backward: keyboard.pressed(KeyCode::ArrowDown),
        turn_left: keyboard.pressed(KeyCode::ArrowLeft),
        turn_right: keyboard.pressed(KeyCode::ArrowRight),
    };
    if keyboard.just_pressed(KeyCode::Space) {
        latch.interact = true;
    }
}

/// Spawn the first-person camera at the player's position.
pub fn spawn_player_camera(mut commands: Commands, sim: Res<Simulation>, config: Res<MazeConfig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            ..default()
        }),
        camera_transform(&sim.player, config.eye_height),
        PlayerCamera,
    ));
}

/// Keep the camera on the player.
pub fn sync_camera(
    sim: Res<Simulation>,
    config: Res<MazeConfig>,
    mut camera_query: Query<&mut Transform, With<PlayerCamera>>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };
    *transform = camera_transform(&sim.player, config.eye_height);
}

/// Grid x/z maps to world x/z; heading turns clockwise seen from above.
pub fn camera_transform(player: &PlayerState, eye_height: f32) -> Transform {
    Transform::from_xyz(player.x, eye_height, player.z)
        .with_rotation(Quat::from_rotation_y(-player.heading.to_radians()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{CellKind, DoorState};

    fn player(x: f32, z: f32, heading: f32) -> PlayerState {
        PlayerState { x, z, heading }
    }

    const FORWARD: MotionIntent = MotionIntent {
        forward: true,
        backward: false,
        turn_left: false,
        turn_right: false,
    };

    #[test]
    fn turning() {
        let grid = TileGrid::from_rows(&["..."]);
        let solver = MotionSolver::default();
        let mut p = player(1.5, 0.5, 90.0);

        solver.step(&mut p, MotionIntent { turn_left: true, ..default() }, &grid);
        assert_eq!(p.heading, 88.0);
        solver.step(&mut p, MotionIntent { turn_right: true, ..default() }, &grid);
        assert_eq!(p.heading, 90.0);
        solver.step(&mut p, MotionIntent { turn_left: true, turn_right: true, ..default() }, &grid);
        assert_eq!(p.heading, 90.0);
        assert_eq!(p.position(), (1.5, 0.5));
    }

    #[test]
    fn forward_north_decreases_z() {
        let grid = TileGrid::from_rows(&["...", "...", "..."]);
        let mut p = player(1.5, 1.5, 0.0);
        MotionSolver::default().step(&mut p, FORWARD, &grid);
        assert!((p.x - 1.5).abs() < 1e-6);
        assert!((p.z - 1.42).abs() < 1e-6);
    }

    #[test]
    fn backward_reverses() {
        let grid = TileGrid::from_rows(&["...", "...", "..."]);
        let mut p = player(1.5, 1.5, 90.0);
        MotionSolver::default().step(&mut p, MotionIntent { backward: true, ..default() }, &grid);
        assert!((p.x - 1.42).abs() < 1e-5);
        assert!((p.z - 1.5).abs() < 1e-5);
    }

    #[test]
    fn blocked_axis_slides_along_wall() {
        // Wall only on the +x side of the player.
        let grid = TileGrid::from_rows(&[
            "....",
            ".#..",
            "..#.",
            "....",
        ]);
        // Heading 135: forward moves +x and +z.
        let mut p = player(1.95, 2.5, 135.0);
        MotionSolver::default().step(&mut p, FORWARD, &grid);

        assert_eq!(p.x, 1.95);
        assert!(p.z > 2.5);
    }

    #[test]
    fn walls_and_closed_doors_block() {
        let grid = TileGrid::from_rows(&["#D#", "#.#", "###"]);
        let solver = MotionSolver::default();
        let mut p = player(1.5, 1.05, 0.0);
        for _ in 0..20 {
            solver.step(&mut p, FORWARD, &grid);
        }
        assert_eq!(p.tile(), (1, 1));
        assert!(p.z >= 1.0);
    }

    #[test]
    fn open_door_is_passable_but_moving_ones_are_not() {
        let mut grid = TileGrid::from_rows(&["#D#", "#.#", "###"]);
        let solver = MotionSolver::default();

        for state in [DoorState::Opening, DoorState::Closing] {
            grid.set_kind(1, 0, CellKind::Door(state)).unwrap();
            let mut p = player(1.5, 1.05, 0.0);
            solver.step(&mut p, FORWARD, &grid);
            assert_eq!(p.z, 1.05, "{state:?}");
        }

        grid.set_kind(1, 0, CellKind::Door(DoorState::Open)).unwrap();
        let mut p = player(1.5, 1.05, 0.0);
        solver.step(&mut p, FORWARD, &grid);
        assert_eq!(p.tile(), (1, 0));
    }

    #[test]
    fn grid_edge_blocks() {
        let grid = TileGrid::from_rows(&["..", ".."]);
        let mut p = player(0.05, 0.5, 270.0);
        MotionSolver::default().step(&mut p, FORWARD, &grid);
        assert_eq!(p.x, 0.05);
    }

    #[test]
    fn camera_follows_heading() {
        let t = camera_transform(&player(2.0, 3.0, 90.0), 0.5);
        assert_eq!(t.translation, Vec3::new(2.0, 0.5, 3.0));
        let forward = t.forward();
        assert!((forward.x - 1.0).abs() < 1e-5);
        assert!(forward.z.abs() < 1e-5);
    }
}
