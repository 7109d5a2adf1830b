//! Wall and door outlines in grid space.
//!
//! Every wall or door face is a vertical quad standing on a line segment in
//! the x/z plane. These functions only produce the segments; the renderer
//! extrudes them into meshes.

use super::classifier::{DrawingMode, StubSide, WallClassifier, WallShape};
use super::grid::TileGrid;

/// A face footprint from `(x1, z1)` to `(x2, z2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub z1: f32,
    pub x2: f32,
    pub z2: f32,
}

impl Segment {
    pub fn new(x1: f32, z1: f32, x2: f32, z2: f32) -> Self {
        Self { x1, z1, x2, z2 }
    }

    /// Horizontal texture repeat for the face. Axis-aligned segments only.
    pub fn texture_width(&self) -> f32 {
        (self.x2 - self.x1) + (self.z2 - self.z1)
    }

    pub fn length(&self) -> f32 {
        ((self.x2 - self.x1).powi(2) + (self.z2 - self.z1).powi(2)).sqrt()
    }
}

/// Faces of the wall tile at `(x, y)` for a classified shape.
pub fn wall_segments(x: i32, y: i32, shape: WallShape, thickness: f32) -> Vec<Segment> {
    let (x, y) = (x as f32, y as f32);
    let t = thickness;
    let mut out = Vec::with_capacity(8);

    match shape {
        WallShape::Segment(mode) => double_wall(&mut out, x, y, mode, t),
        WallShape::Tee { base, stub } => {
            double_wall(&mut out, x, y, base, t);
            let s = |x1, z1, x2, z2| Segment::new(x1, z1, x2, z2);
            let stub_faces = match stub {
                StubSide::West => [
                    s(x, y + 0.5 - t, x + 0.5, y + 0.5 - t),
                    s(x, y + 0.5 + t, x + 0.5, y + 0.5 + t),
                    s(x, y + 0.5 - t, x, y + 0.5 + t),
                ],
                StubSide::South => [
                    s(x + 0.5 - t, y + 0.5, x + 0.5 - t, y + 1.0),
                    s(x + 0.5 + t, y + 0.5, x + 0.5 + t, y + 1.0),
                    s(x + 0.5 - t, y + 1.0, x + 0.5 + t, y + 1.0),
                ],
                StubSide::East => [
                    s(x + 0.5, y + 0.5 - t, x + 1.0, y + 0.5 - t),
                    s(x + 0.5, y + 0.5 + t, x + 1.0, y + 0.5 + t),
                    s(x + 1.0, y + 0.5 - t, x + 1.0, y + 0.5 + t),
                ],
                StubSide::North => [
                    s(x + 0.5 - t, y, x + 0.5 - t, y + 0.5),
                    s(x + 0.5 + t, y, x + 0.5 + t, y + 0.5),
                    s(x + 0.5 - t, y, x + 0.5 + t, y),
                ],
            };
            out.extend(stub_faces);
        }
        WallShape::Cross => {
            double_wall(&mut out, x, y, DrawingMode::NorthSouth, t);
            double_wall(&mut out, x, y, DrawingMode::EastWest, t);
        }
        WallShape::Skipped => {}
    }

    out
}

/// Two-sided slab for one drawing mode, including its end caps.
fn double_wall(out: &mut Vec<Segment>, x: f32, y: f32, mode: DrawingMode, t: f32) {
    let s = Segment::new;
    let (lo, hi) = (0.5 - t, 0.5 + t);
    match mode {
        DrawingMode::NorthSouth => out.extend([
            s(x + lo, y, x + lo, y + 1.0),
            s(x + hi, y, x + hi, y + 1.0),
            s(x + lo, y + 1.0, x + hi, y + 1.0),
            s(x + lo, y, x + hi, y),
        ]),
        DrawingMode::EastWest => out.extend([
            s(x, y + lo, x + 1.0, y + lo),
            s(x, y + hi, x + 1.0, y + hi),
            s(x + 1.0, y + lo, x + 1.0, y + hi),
            s(x, y + lo, x, y + hi),
        ]),
        DrawingMode::SouthWest => out.extend([
            s(x, y + lo, x + hi, y + lo),
            s(x, y + hi, x + lo, y + hi),
            s(x + lo, y + hi, x + lo, y + 1.0),
            s(x + hi, y + lo, x + hi, y + 1.0),
        ]),
        DrawingMode::SouthEast => out.extend([
            s(x + lo, y + lo, x + 1.0, y + lo),
            s(x + hi, y + hi, x + 1.0, y + hi),
            s(x + lo, y + lo, x + lo, y + 1.0),
            s(x + hi, y + hi, x + hi, y + 1.0),
        ]),
        DrawingMode::NorthEast => out.extend([
            s(x + hi, y + lo, x + 1.0, y + lo),
            s(x + lo, y + hi, x + 1.0, y + hi),
            s(x + lo, y, x + lo, y + hi),
            s(x + hi, y, x + hi, y + lo),
        ]),
        DrawingMode::NorthWest => out.extend([
            s(x + lo, y, x + lo, y + lo),
            s(x + hi, y, x + hi, y + hi),
            s(x, y + lo, x + lo, y + lo),
            s(x, y + hi, x + hi, y + hi),
        ]),
        DrawingMode::Post => out.extend([
            s(x + hi, y + lo, x + hi, y + hi),
            s(x + lo, y + lo, x + lo, y + hi),
            s(x + lo, y + hi, x + hi, y + hi),
            s(x + lo, y + lo, x + hi, y + lo),
        ]),
    }
}

/// Faces of a door slab. The slab slides along its run by `1 - openness`,
/// so a closed door fills the tile and an open one sits in the next tile.
pub fn door_segments(
    x: i32,
    y: i32,
    orientation: DrawingMode,
    openness: f32,
    thickness: f32,
) -> Vec<Segment> {
    let (x, y) = (x as f32, y as f32);
    let (lo, hi) = (0.5 - thickness, 0.5 + thickness);
    let slide = 1.0 - openness;
    let s = Segment::new;

    match orientation {
        DrawingMode::NorthSouth => {
            let (start, end) = (y + slide, y + 1.0 + slide);
            vec![
                s(x + lo, start, x + lo, end),
                s(x + hi, start, x + hi, end),
                s(x + lo, end, x + hi, end),
                s(x + lo, start, x + hi, start),
            ]
        }
        DrawingMode::EastWest => {
            let (start, end) = (x + slide, x + 1.0 + slide);
            vec![
                s(start, y + lo, end, y + lo),
                s(start, y + hi, end, y + hi),
                s(end, y + lo, end, y + hi),
                s(start, y + lo, start, y + hi),
            ]
        }
        _ => Vec::new(),
    }
}

/// Faces of every wall in the grid, classified fresh.
pub fn scene_wall_segments(grid: &TileGrid, classifier: &WallClassifier, thickness: f32) -> Vec<Segment> {
    grid.iter_cells()
        .filter_map(|((x, y), _)| {
            classifier
                .classify(grid, x, y)
                .map(|wall| wall_segments(x, y, wall.shape, thickness))
        })
        .flatten()
        .collect()
}

/// Faces of every door in the grid at its current openness.
pub fn scene_door_segments(grid: &TileGrid, classifier: &WallClassifier, thickness: f32) -> Vec<Segment> {
    grid.iter_cells()
        .filter_map(|((x, y), _)| {
            let orientation = classifier.door_orientation(grid, x, y)?;
            let openness = grid.door(x, y)?.openness;
            Some(door_segments(x, y, orientation, openness, thickness))
        })
        .flatten()
        .collect()
}
