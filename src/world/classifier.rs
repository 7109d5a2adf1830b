//! Wall neighbourhood classification.
//!
//! Each wall tile looks at its four orthogonal neighbours to decide which
//! slab layout to draw: a straight run, an L corner, a T junction, a cross,
//! or a lone post. Doors count as occupied neighbours, so walls connect into
//! door frames.

use serde::Deserialize;

use super::grid::{CellKind, TileGrid};

/// Wall geometry variant. Discriminants match the classic mode numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawingMode {
    /// Run along the z axis (neighbour north or south).
    NorthSouth = 0,
    /// Run along the x axis (neighbour west or east).
    EastWest = 1,
    SouthWest = 2,
    SouthEast = 3,
    NorthEast = 4,
    NorthWest = 5,
    /// No connected neighbour.
    Post = 6,
}

impl DrawingMode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Side of a T junction's half-length stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubSide {
    North,
    South,
    East,
    West,
}

/// Which diagonal corners have both adjacent orthogonal neighbours occupied.
/// Index order is SW, SE, NE, NW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerMask(pub [bool; 4]);

impl CornerMask {
    pub const SOUTH_WEST: usize = 0;
    pub const SOUTH_EAST: usize = 1;
    pub const NORTH_EAST: usize = 2;
    pub const NORTH_WEST: usize = 3;

    pub fn count(&self) -> usize {
        self.0.iter().filter(|c| **c).count()
    }

    pub fn has(&self, corner: usize) -> bool {
        self.0[corner]
    }
}

/// What the renderer should emit for a wall tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallShape {
    /// Straight run, L corner or post.
    Segment(DrawingMode),
    /// Full run plus a half-length stub.
    Tee { base: DrawingMode, stub: StubSide },
    /// Both full runs.
    Cross,
    /// Corner combination with no geometry; nothing is drawn.
    Skipped,
}

/// Derived per-frame description of a wall tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallDescriptor {
    pub drawing_mode: DrawingMode,
    pub corner_mask: CornerMask,
    pub shape: WallShape,
}

impl WallDescriptor {
    pub fn corner_count(&self) -> usize {
        self.corner_mask.count()
    }
}

/// Row limit used by the corner checks that look south.
///
/// The classic renderer compared the row against the map *width*; on
/// non-square maps that hides southern corners on the lower rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum CornerRowLimit {
    #[default]
    Width,
    Height,
}

/// Pure wall/door classification over a tile grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClassifier {
    pub corner_row_limit: CornerRowLimit,
}

impl WallClassifier {
    pub fn new(corner_row_limit: CornerRowLimit) -> Self {
        Self { corner_row_limit }
    }

    /// Classify the wall at `(x, y)`. `None` if the cell is not a wall.
    pub fn classify(&self, grid: &TileGrid, x: i32, y: i32) -> Option<WallDescriptor> {
        if grid.get(x, y)? != CellKind::Wall {
            return None;
        }

        let occupied = |dx: i32, dy: i32| grid.kind_or_empty(x + dx, y + dy).is_occupied();
        let north = occupied(0, -1);
        let south = occupied(0, 1);
        let west = occupied(-1, 0);
        let east = occupied(1, 0);

        let row_limit = match self.corner_row_limit {
            CornerRowLimit::Width => grid.width(),
            CornerRowLimit::Height => grid.height(),
        } as i64;
        let south_corner = south && i64::from(y) <= row_limit - 2;

        let mut mode = DrawingMode::Post;
        if north || south {
            mode = DrawingMode::NorthSouth;
        }
        if west || east {
            mode = DrawingMode::EastWest;
        }

        // Later matches overwrite the mode.
        let corners = [
            (west && south_corner, DrawingMode::SouthWest),
            (east && south_corner, DrawingMode::SouthEast),
            (east && north, DrawingMode::NorthEast),
            (west && north, DrawingMode::NorthWest),
        ];
        let mut mask = CornerMask::default();
        for (i, (hit, corner_mode)) in corners.into_iter().enumerate() {
            if hit {
                mode = corner_mode;
                mask.0[i] = true;
            }
        }

        Some(WallDescriptor {
            drawing_mode: mode,
            corner_mask: mask,
            shape: shape_for(mode, mask),
        })
    }

    /// Slab orientation of the door at `(x, y)`. `None` if the cell is not
    /// a door or has no occupied neighbour to hang in.
    pub fn door_orientation(&self, grid: &TileGrid, x: i32, y: i32) -> Option<DrawingMode> {
        if !grid.get(x, y)?.is_door() {
            return None;
        }
        let occupied = |dx: i32, dy: i32| grid.kind_or_empty(x + dx, y + dy).is_occupied();

        if occupied(0, -1) || occupied(0, 1) {
            Some(DrawingMode::NorthSouth)
        } else if occupied(-1, 0) || occupied(1, 0) {
            Some(DrawingMode::EastWest)
        } else {
            None
        }
    }
}

fn shape_for(mode: DrawingMode, mask: CornerMask) -> WallShape {
    let [sw, se, ne, nw] = mask.0;
    match mask.count() {
        0 | 1 => WallShape::Segment(mode),
        2 => {
            if sw && nw {
                WallShape::Tee { base: DrawingMode::NorthSouth, stub: StubSide::West }
            } else if sw && se {
                WallShape::Tee { base: DrawingMode::EastWest, stub: StubSide::South }
            } else if se && ne {
                WallShape::Tee { base: DrawingMode::NorthSouth, stub: StubSide::East }
            } else if ne && nw {
                WallShape::Tee { base: DrawingMode::EastWest, stub: StubSide::North }
            } else {
                WallShape::Skipped
            }
        }
        4 => WallShape::Cross,
        _ => WallShape::Skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(rows: &[&str], x: i32, y: i32) -> WallDescriptor {
        WallClassifier::default()
            .classify(&TileGrid::from_rows(rows), x, y)
            .expect("wall expected")
    }

    #[test]
    fn lone_post() {
        let d = classify(&["...", ".#.", "..."], 1, 1);
        assert_eq!(d.drawing_mode, DrawingMode::Post);
        assert_eq!(d.corner_count(), 0);
        assert_eq!(d.shape, WallShape::Segment(DrawingMode::Post));
    }

    #[test]
    fn straight_runs() {
        let ns = classify(&[".#.", ".#.", "..."], 1, 1);
        assert_eq!(ns.shape, WallShape::Segment(DrawingMode::NorthSouth));

        let ew = classify(&["...", "##.", "..."], 1, 1);
        assert_eq!(ew.shape, WallShape::Segment(DrawingMode::EastWest));
    }

    #[test]
    fn single_corners_pick_their_mode() {
        let cases: [(&[&str], DrawingMode, usize); 4] = [
            (&["...", "##.", ".#."], DrawingMode::SouthWest, CornerMask::SOUTH_WEST),
            (&["...", ".##", ".#."], DrawingMode::SouthEast, CornerMask::SOUTH_EAST),
            (&[".#.", ".##", "..."], DrawingMode::NorthEast, CornerMask::NORTH_EAST),
            (&[".#.", "##.", "..."], DrawingMode::NorthWest, CornerMask::NORTH_WEST),
        ];
        for (rows, mode, corner) in cases {
            let d = classify(rows, 1, 1);
            assert_eq!(d.corner_count(), 1, "{rows:?}");
            assert_eq!(d.drawing_mode, mode, "{rows:?}");
            assert!(d.corner_mask.has(corner));
            assert_eq!(d.shape, WallShape::Segment(mode));
        }
    }

    #[test]
    fn tee_junctions() {
        // West, north and south: SW + NW.
        let d = classify(&[".#.", "##.", ".#."], 1, 1);
        assert_eq!(d.shape, WallShape::Tee { base: DrawingMode::NorthSouth, stub: StubSide::West });
        // Last corner checked wins the drawing mode.
        assert_eq!(d.drawing_mode, DrawingMode::NorthWest);

        let d = classify(&["...", "###", ".#."], 1, 1);
        assert_eq!(d.shape, WallShape::Tee { base: DrawingMode::EastWest, stub: StubSide::South });
        assert_eq!(d.drawing_mode, DrawingMode::SouthEast);

        let d = classify(&[".#.", ".##", ".#."], 1, 1);
        assert_eq!(d.shape, WallShape::Tee { base: DrawingMode::NorthSouth, stub: StubSide::East });

        let d = classify(&[".#.", "###", "..."], 1, 1);
        assert_eq!(d.shape, WallShape::Tee { base: DrawingMode::EastWest, stub: StubSide::North });
    }

    #[test]
    fn cross() {
        let d = classify(&[".#.", "###", ".#."], 1, 1);
        assert_eq!(d.corner_count(), 4);
        assert_eq!(d.drawing_mode, DrawingMode::NorthWest);
        assert_eq!(d.shape, WallShape::Cross);
    }

    #[test]
    fn doors_connect_walls() {
        let d = classify(&["...", "#D.", "..."], 0, 1);
        assert_eq!(d.drawing_mode, DrawingMode::EastWest);
    }

    #[test]
    fn grid_edges_count_as_empty() {
        let d = classify(&["#"], 0, 0);
        assert_eq!(d.shape, WallShape::Segment(DrawingMode::Post));

        let d = classify(&["##", "#."], 0, 0);
        assert_eq!(d.drawing_mode, DrawingMode::SouthEast);
    }

    #[test]
    fn non_walls_are_not_classified() {
        let grid = TileGrid::from_rows(&["#D."]);
        let classifier = WallClassifier::default();
        assert!(classifier.classify(&grid, 1, 0).is_none());
        assert!(classifier.classify(&grid, 2, 0).is_none());
        assert!(classifier.classify(&grid, 7, 0).is_none());
    }

    #[test]
    fn width_row_limit_hides_south_corners_on_tall_maps() {
        // 2 wide, 4 tall: rows past width - 2 never see a southern corner.
        let grid = TileGrid::from_rows(&["..", "..", "##", "#."]);

        let legacy = WallClassifier::new(CornerRowLimit::Width).classify(&grid, 0, 2).unwrap();
        assert_eq!(legacy.corner_count(), 0);
        assert_eq!(legacy.drawing_mode, DrawingMode::EastWest);

        let fixed = WallClassifier::new(CornerRowLimit::Height).classify(&grid, 0, 2).unwrap();
        assert_eq!(fixed.corner_count(), 1);
        assert_eq!(fixed.drawing_mode, DrawingMode::SouthEast);
    }

    #[test]
    fn width_row_limit_is_safe_on_wide_maps() {
        // 4 wide, 2 tall: the limit lets row 1 look south, off the grid.
        let grid = TileGrid::from_rows(&["....", "##.."]);
        let d = WallClassifier::new(CornerRowLimit::Width).classify(&grid, 0, 1).unwrap();
        assert_eq!(d.corner_count(), 0);
    }

    #[test]
    fn door_orientation() {
        let classifier = WallClassifier::default();
        let grid = TileGrid::from_rows(&[".#.", ".D.", ".#."]);
        assert_eq!(classifier.door_orientation(&grid, 1, 1), Some(DrawingMode::NorthSouth));

        let grid = TileGrid::from_rows(&["...", "#D#", "..."]);
        assert_eq!(classifier.door_orientation(&grid, 1, 1), Some(DrawingMode::EastWest));

        let grid = TileGrid::from_rows(&["...", ".D.", "..."]);
        assert_eq!(classifier.door_orientation(&grid, 1, 1), None);
        assert_eq!(classifier.door_orientation(&grid, 0, 0), None);
    }
}
