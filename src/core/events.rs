//! Events emitted by the simulation tick.

use bevy::prelude::*;

use crate::world::DoorState;

/// Sent when a door changes animation state during a tick.
#[derive(Event, Debug, Clone, Copy)]
pub struct DoorTransitionEvent {
    pub x: i32,
    pub y: i32,
    pub from: DoorState,
    pub to: DoorState,
}

/// Sent when the player's interaction starts a door opening.
#[derive(Event, Debug, Clone, Copy)]
pub struct DoorTriggeredEvent {
    pub x: i32,
    pub y: i32,
}
