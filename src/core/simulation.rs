//! The walk simulation: grid, doors and player advanced one tick at a time.

use bevy::prelude::*;

use crate::player::{MotionIntent, MotionSolver, PlayerState};
use crate::world::{DecodedMap, DoorAnimator, DoorTransition, TileGrid, Timestamp};

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub intent: MotionIntent,
    pub interact: bool,
}

/// What changed during a tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub transitions: Vec<DoorTransition>,
    pub triggered: Vec<(i32, i32)>,
}

/// All mutable game state. Only the tick system writes to it.
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    pub grid: TileGrid,
    pub player: PlayerState,
    pub doors: DoorAnimator,
    pub motion: MotionSolver,
}

impl Simulation {
    pub fn new(map: DecodedMap, doors: DoorAnimator, motion: MotionSolver) -> Self {
        Self {
            grid: map.grid,
            player: map.spawn.into(),
            doors,
            motion,
        }
    }

    /// One tick: move the player, advance doors, then apply interaction.
    pub fn tick(&mut self, input: TickInput, now: Timestamp) -> TickReport {
        self.motion.step(&mut self.player, input.intent, &self.grid);

        let transitions = self.doors.advance(&mut self.grid, self.player.tile(), now);

        let triggered = if input.interact {
            self.doors.interact(&mut self.grid, self.player.position(), now)
        } else {
            Vec::new()
        };

        TickReport {
            transitions,
            triggered,
        }
    }
}
