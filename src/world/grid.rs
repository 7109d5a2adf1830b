//! Tile grid decoded from a bitmap map.
//!
//! Every pixel of the map image becomes one cell. Colours are matched
//! exactly:
//!
//! | colour          | meaning                                   |
//! |-----------------|-------------------------------------------|
//! | white `FFFFFF`  | wall                                      |
//! | red `FF0000`    | door (starts closed)                      |
//! | blue `0000FF`   | player spawn (cell itself is empty)       |
//! | yellow `FFFF00` | facing marker next to the spawn pixel     |
//! | anything else   | empty floor                               |

use std::io::ErrorKind;
use std::path::Path;

use bevy::log::{info, warn};
use image::{ImageReader, RgbImage};

use super::error::{BoundsError, DecodeError};

/// Map colours as RGB triples.
pub type Rgb = [u8; 3];

pub const WALL_COLOR: Rgb = [255, 255, 255];
pub const DOOR_COLOR: Rgb = [255, 0, 0];
pub const SPAWN_COLOR: Rgb = [0, 0, 255];
pub const FACING_COLOR: Rgb = [255, 255, 0];

/// Animation state of a door cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorState {
    /// Shut and idle.
    Closed,
    /// Sliding open after an interaction.
    Opening,
    /// Fully open, waiting for its auto-close deadline. Passable.
    Open,
    /// Sliding shut.
    Closing,
}

/// The semantic type of a grid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Door(DoorState),
}

impl CellKind {
    /// Whether the cell holds anything (wall or any door). Used for
    /// neighbour connectivity.
    pub fn is_occupied(&self) -> bool {
        !matches!(self, CellKind::Empty)
    }

    /// Whether the player may step into this cell.
    pub fn is_passable(&self) -> bool {
        matches!(self, CellKind::Empty | CellKind::Door(DoorState::Open))
    }

    pub fn is_door(&self) -> bool {
        matches!(self, CellKind::Door(_))
    }

    pub fn door_state(&self) -> Option<DoorState> {
        match self {
            CellKind::Door(state) => Some(*state),
            _ => None,
        }
    }

    /// Numeric code of the classic map encoding (0 empty, 1 wall, 2 closed
    /// or opening door, 3 open door, 4 closing door).
    pub fn legacy_code(&self) -> u8 {
        match self {
            CellKind::Empty => 0,
            CellKind::Wall => 1,
            CellKind::Door(DoorState::Closed | DoorState::Opening) => 2,
            CellKind::Door(DoorState::Open) => 3,
            CellKind::Door(DoorState::Closing) => 4,
        }
    }
}

/// Per-cell door record. Only meaningful for door cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Door {
    /// 1.0 = fully closed, 0.0 = fully open.
    pub openness: f32,
    /// Milliseconds timestamp after which an open door starts closing.
    pub auto_close_deadline: Option<u64>,
}

impl Door {
    pub fn closed() -> Self {
        Self {
            openness: 1.0,
            auto_close_deadline: None,
        }
    }
}

/// Where and which way the player starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub x: f32,
    pub z: f32,
    /// Degrees, 0 = north (towards -z), 90 = east.
    pub heading: f32,
}

impl Default for SpawnPoint {
    fn default() -> Self {
        Self {
            x: 2.5,
            z: 2.5,
            heading: 0.0,
        }
    }
}

/// Source of map pixels.
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Colour at a pixel, `None` outside the image.
    fn color_at(&self, x: i64, y: i64) -> Option<Rgb>;
}

impl PixelGrid for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn color_at(&self, x: i64, y: i64) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= i64::from(PixelGrid::width(self)) || y >= i64::from(PixelGrid::height(self)) {
            return None;
        }
        Some(self.get_pixel(x as u32, y as u32).0)
    }
}

/// Read a map image from disk.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbImage, DecodeError> {
    let path = path.as_ref();
    let reader = ImageReader::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DecodeError::FileNotFound(path.to_path_buf())
        } else {
            DecodeError::Image {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(e),
            }
        }
    })?;
    let reader = reader.with_guessed_format().map_err(|e| DecodeError::Image {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    })?;
    let decoded = reader.decode().map_err(|source| DecodeError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgb8())
}

/// A decoded map: the grid plus the spawn seed for the player.
#[derive(Debug, Clone)]
pub struct DecodedMap {
    pub grid: TileGrid,
    pub spawn: SpawnPoint,
}

/// Row-major grid of cell kinds with a parallel door table.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
    doors: Vec<Door>,
}

impl TileGrid {
    /// An all-empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellKind::Empty; width * height],
            doors: vec![Door::default(); width * height],
        }
    }

    /// Build a grid from rows of characters: `#` wall, `D` closed door,
    /// anything else empty. Handy for tests and debug maps.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                match c {
                    '#' => grid.set_kind_at(x, y, CellKind::Wall),
                    'D' => grid.place_door(x, y),
                    _ => {}
                }
            }
        }
        grid
    }

    /// Decode a map image into a grid and a spawn point.
    pub fn decode(image: &impl PixelGrid) -> Result<DecodedMap, DecodeError> {
        let (w, h) = (image.width(), image.height());
        if w == 0 || h == 0 {
            return Err(DecodeError::EmptyImage { width: w, height: h });
        }

        let mut grid = Self::new(w as usize, h as usize);
        let mut spawn: Option<SpawnPoint> = None;

        for y in 0..h as i64 {
            for x in 0..w as i64 {
                match image.color_at(x, y) {
                    Some(WALL_COLOR) => grid.set_kind_at(x as usize, y as usize, CellKind::Wall),
                    Some(DOOR_COLOR) => grid.place_door(x as usize, y as usize),
                    Some(SPAWN_COLOR) => {
                        if spawn.is_some() {
                            warn!("Multiple spawn pixels, using the one at ({}, {})", x, y);
                        }
                        spawn = Some(SpawnPoint {
                            x: x as f32 + 0.5,
                            z: y as f32 + 0.5,
                            heading: spawn_heading(image, x, y),
                        });
                    }
                    _ => {}
                }
            }
        }

        let spawn = spawn.unwrap_or_else(|| {
            let fallback = SpawnPoint::default();
            warn!(
                "Map has no spawn pixel, starting at ({}, {})",
                fallback.x, fallback.z
            );
            fallback
        });

        info!(
            "Decoded {}x{} map: {} wall(s), {} door(s)",
            grid.width,
            grid.height,
            grid.cells.iter().filter(|c| **c == CellKind::Wall).count(),
            grid.door_count()
        );

        Ok(DecodedMap { grid, spawn })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Bounds-checked read.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<CellKind, BoundsError> {
        self.get(x, y).ok_or(BoundsError {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn get(&self, x: i32, y: i32) -> Option<CellKind> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Cell kind, with off-grid reads treated as empty.
    pub fn kind_or_empty(&self, x: i32, y: i32) -> CellKind {
        self.get(x, y).unwrap_or_default()
    }

    pub fn set_kind(&mut self, x: i32, y: i32, kind: CellKind) -> Result<(), BoundsError> {
        let i = self.index(x, y).ok_or(BoundsError {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[i] = kind;
        Ok(())
    }

    fn set_kind_at(&mut self, x: usize, y: usize, kind: CellKind) {
        let i = y * self.width + x;
        self.cells[i] = kind;
    }

    fn place_door(&mut self, x: usize, y: usize) {
        let i = y * self.width + x;
        self.cells[i] = CellKind::Door(DoorState::Closed);
        self.doors[i] = Door::closed();
    }

    pub fn door(&self, x: i32, y: i32) -> Option<&Door> {
        let i = self.index(x, y)?;
        self.cells[i].is_door().then(|| &self.doors[i])
    }

    pub fn door_mut(&mut self, x: i32, y: i32) -> Option<&mut Door> {
        let i = self.index(x, y)?;
        if self.cells[i].is_door() {
            Some(&mut self.doors[i])
        } else {
            None
        }
    }

    /// Door cells with their state and record, row-major.
    pub fn doors_mut(&mut self) -> impl Iterator<Item = ((i32, i32), &mut CellKind, &mut Door)> {
        let width = self.width;
        self.cells
            .iter_mut()
            .zip(self.doors.iter_mut())
            .enumerate()
            .filter(|(_, (kind, _))| kind.is_door())
            .map(move |(i, (kind, door))| (((i % width) as i32, (i / width) as i32), kind, door))
    }

    /// All cells with their coordinates, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = ((i32, i32), CellKind)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, kind)| (((i % width) as i32, (i / width) as i32), *kind))
    }

    pub fn door_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_door()).count()
    }
}

/// Heading from the first yellow cardinal neighbour: west, north, east, south.
fn spawn_heading(image: &impl PixelGrid, x: i64, y: i64) -> f32 {
    let markers = [
        ((x - 1, y), 270.0),
        ((x, y - 1), 0.0),
        ((x + 1, y), 90.0),
        ((x, y + 1), 180.0),
    ];
    markers
        .into_iter()
        .find(|((mx, my), _)| image.color_at(*mx, *my) == Some(FACING_COLOR))
        .map(|(_, heading)| heading)
        .unwrap_or(0.0)
}
