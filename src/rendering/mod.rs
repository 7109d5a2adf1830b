//! Rendering module - materials, mesh assembly, and per-frame rebuilds.

mod materials;
mod mesh;
mod plugin;

pub use materials::MaterialRegistry;
pub use mesh::{extrude_segments, floor_mesh};
pub use plugin::RenderingPlugin;
