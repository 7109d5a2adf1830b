//! Core game module - states, events, and the simulation tick.

mod events;
mod plugin;
mod simulation;
mod states;

pub use events::*;
pub use plugin::CorePlugin;
pub use simulation::{Simulation, TickInput, TickReport};
pub use states::*;
