//! Core plugin that sets up game states, events, and the fixed-rate tick.

use bevy::prelude::*;

use super::events::*;
use super::simulation::{Simulation, TickInput};
use super::states::*;
use crate::player::InputLatch;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame)
/// - Door events
/// - The simulation tick in `FixedUpdate`
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()

            .add_event::<DoorTransitionEvent>()
            .add_event::<DoorTriggeredEvent>()

            .add_systems(
                FixedUpdate,
                run_simulation_tick
                    .run_if(in_state(GameState::InGame))
                    .run_if(resource_exists::<Simulation>),
            )

            .add_systems(Update, (handle_quit_input, log_door_events));
    }
}

/// Advance the simulation by one tick using the latched input.
fn run_simulation_tick(
    time: Res<Time>,
    mut sim: ResMut<Simulation>,
    mut latch: ResMut<InputLatch>,
    mut transitions: EventWriter<DoorTransitionEvent>,
    mut triggered: EventWriter<DoorTriggeredEvent>,
) {
    let input = TickInput {
        intent: latch.intent,
        interact: latch.interact,
    };
    latch.interact = false;

    let now = time.elapsed().as_millis() as u64;
    let report = sim.tick(input, now);

    transitions.send_batch(report.transitions.into_iter().map(|t| DoorTransitionEvent {
        x: t.x,
        y: t.y,
        from: t.from,
        to: t.to,
    }));
    triggered.send_batch(
        report
            .triggered
            .into_iter()
            .map(|(x, y)| DoorTriggeredEvent { x, y }),
    );
}

/// Quit on Escape.
fn handle_quit_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.send(AppExit::Success);
    }
}

fn log_door_events(
    mut triggered: EventReader<DoorTriggeredEvent>,
    mut transitions: EventReader<DoorTransitionEvent>,
) {
    for event in triggered.read() {
        info!("Door at ({}, {}) opening", event.x, event.y);
    }
    for event in transitions.read() {
        debug!(
            "Door at ({}, {}): {:?} -> {:?}",
            event.x, event.y, event.from, event.to
        );
    }
}
