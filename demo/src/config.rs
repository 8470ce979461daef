//! Scene settings, loadable from JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The sample map: start bottom-left of a wall, goal top-left behind it.
pub const DEMO_MAP: &str = "\
G-----
XXXXX-
S-X-X-
--X-X-
--X-X-
------";

/// Demo settings
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Text map (`-` free, `X` blocked, `S` start, `G` goal)
    pub map: String,
    /// Side length of a tile in world units
    pub tile_size: f32,
    /// Mover speed, world units per second
    pub speed: f32,
    /// Distance at which a waypoint counts as reached
    pub epsilon: f32,
    /// Simulation time step, seconds
    pub dt: f32,
    /// Give up after this many simulation steps
    pub max_steps: usize,
    /// Optional bound on A* node expansions
    pub max_expansions: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            map: DEMO_MAP.to_string(),
            tile_size: 1.0,
            speed: 0.8,
            epsilon: 0.1,
            dt: 1.0 / 60.0,
            max_steps: 100_000,
            max_expansions: None,
        }
    }
}

/// A setting outside its usable range.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The named field must be a finite number greater than zero.
    NotPositive { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "config: {field} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl DemoConfig {
    /// Read settings from a JSON file; missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that sizes, speeds and tolerances are usable.
    ///
    /// A non-positive `epsilon` would leave the mover short of every
    /// waypoint, and a non-positive `tile_size` would make every click miss.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("tile_size", self.tile_size),
            ("speed", self.speed),
            ("epsilon", self.epsilon),
            ("dt", self.dt),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
