//! Maze configuration and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::classifier::CornerRowLimit;
use super::doors::DEFAULT_AUTO_CLOSE_MS;
use super::error::ConfigError;

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "assets/data/maze.ron";

fn default_map_path() -> PathBuf {
    PathBuf::from("assets/maps/map.bmp")
}

fn default_tick_rate() -> f64 {
    60.0
}

fn grey(level: f32) -> (f32, f32, f32) {
    (level, level, level)
}

/// Tunables for the simulation, camera and window. Every field is optional
/// in the RON file.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Map image to decode.
    pub map_path: PathBuf,
    /// Tiles moved per tick.
    pub player_speed: f32,
    /// Degrees turned per tick.
    pub turn_rate: f32,
    /// How long a door stays open before closing by itself.
    pub auto_close_ms: u64,
    /// Simulation ticks per second.
    pub tick_rate_hz: f64,
    pub wall_thickness: f32,
    pub door_thickness: f32,
    pub wall_height: f32,
    pub eye_height: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub clear_color: (f32, f32, f32),
    pub floor_color: (f32, f32, f32),
    pub wall_color: (f32, f32, f32),
    pub door_color: (f32, f32, f32),
    pub corner_row_limit: CornerRowLimit,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            map_path: default_map_path(),
            player_speed: crate::player::DEFAULT_SPEED,
            turn_rate: crate::player::DEFAULT_TURN_RATE,
            auto_close_ms: DEFAULT_AUTO_CLOSE_MS,
            tick_rate_hz: default_tick_rate(),
            wall_thickness: 0.20,
            door_thickness: 0.07,
            wall_height: 1.0,
            eye_height: 0.5,
            fov_degrees: 60.0,
            near: 0.05,
            far: 500.0,
            window_width: 1200.0,
            window_height: 800.0,
            clear_color: grey(42.0 / 255.0),
            floor_color: grey(93.0 / 255.0),
            wall_color: (0.55, 0.55, 0.6),
            door_color: (0.35, 0.45, 0.6),
            corner_row_limit: CornerRowLimit::Width,
        }
    }
}

/// Outcome of reading the config file, reported once logging is up.
#[derive(Resource, Debug)]
pub enum ConfigStatus {
    Loaded(PathBuf),
    Missing(PathBuf),
    Invalid(ConfigError),
}

impl MazeConfig {
    /// Parse a config from RON text.
    pub fn from_ron(contents: &str, path: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// Read a config file. `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let display = path.display().to_string();
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_ron(&contents, &display).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::Read {
                path: display,
                details: e.to_string(),
            }),
        }
    }

    /// Read a config file, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> (Self, ConfigStatus) {
        match Self::load(path) {
            Ok(Some(config)) => (config, ConfigStatus::Loaded(path.to_path_buf())),
            Ok(None) => (Self::default(), ConfigStatus::Missing(path.to_path_buf())),
            Err(e) => (Self::default(), ConfigStatus::Invalid(e)),
        }
    }
}

/// Log how the config was obtained.
pub fn report_config_status(status: Res<ConfigStatus>, config: Res<MazeConfig>) {
    match status.as_ref() {
        ConfigStatus::Loaded(path) => info!("Loaded config: {}", path.display()),
        ConfigStatus::Missing(path) => {
            info!("Config {} not found, using defaults", path.display())
        }
        ConfigStatus::Invalid(e) => warn!("{}, using defaults", e),
    }
    info!(
        "Map: {}, {} ticks/s, doors close after {} ms",
        config.map_path.display(),
        config.tick_rate_hz,
        config.auto_close_ms
    );
}
