//! Click-to-move glue: a grid, a search engine and one mover.

use std::fmt;

use gridnav_core::{MalformedGridError, NavGrid, Point, TileMap, WorldPos};
use gridnav_paths::{
    LocateError, Locator, Path, PathError, PathFinder, SearchConfig, TileBoundsQuery,
};
use log::{debug, info};

use crate::config::{ConfigError, DemoConfig};
use crate::follower::PathFollower;

/// Errors surfaced by [`Scene`].
#[derive(Debug)]
pub enum SceneError {
    Config(ConfigError),
    Map(MalformedGridError),
    /// The map has no `S` marker to place the mover on.
    MissingStart,
    Locate(LocateError),
    Path(PathError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "scene: {e}"),
            Self::Map(e) => write!(f, "scene: {e}"),
            Self::MissingStart => write!(f, "scene: map has no start marker"),
            Self::Locate(e) => write!(f, "scene: {e}"),
            Self::Path(e) => write!(f, "scene: {e}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Map(e) => Some(e),
            Self::Locate(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::MissingStart => None,
        }
    }
}

impl From<ConfigError> for SceneError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<MalformedGridError> for SceneError {
    fn from(e: MalformedGridError) -> Self {
        Self::Map(e)
    }
}

impl From<LocateError> for SceneError {
    fn from(e: LocateError) -> Self {
        Self::Locate(e)
    }
}

impl From<PathError> for SceneError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

/// A single mover on a tile map, steered by clicks.
pub struct Scene {
    grid: NavGrid,
    finder: PathFinder,
    query: TileBoundsQuery,
    mover: PathFollower,
    goal: Option<Point>,
}

impl Scene {
    /// Parse the configured map and put the mover on its start marker.
    pub fn from_config(cfg: &DemoConfig) -> Result<Self, SceneError> {
        cfg.validate()?;
        let map = TileMap::parse(&cfg.map)?.with_tile_size(cfg.tile_size);
        let grid = NavGrid::build(&map)?;
        let start = map.start().ok_or(SceneError::MissingStart)?;
        let start_pos = grid.world_pos(start).ok_or(SceneError::MissingStart)?;

        let search = match cfg.max_expansions {
            Some(limit) => SearchConfig::default().with_max_expansions(limit),
            None => SearchConfig::default(),
        };

        Ok(Self {
            grid,
            finder: PathFinder::new(search),
            query: TileBoundsQuery::new(map.tile_size()),
            mover: PathFollower::new(start_pos, cfg.speed, cfg.epsilon),
            goal: map.goal(),
        })
    }

    pub fn grid(&self) -> &NavGrid {
        &self.grid
    }

    pub fn mover(&self) -> &PathFollower {
        &self.mover
    }

    /// The map's `G` marker, if it has one.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Send the mover to the tile under `pos`.
    ///
    /// On success the mover starts walking the returned path. An unreachable
    /// tile yields `Ok(None)` and the mover stops where it is.
    pub fn click(&mut self, pos: WorldPos) -> Result<Option<Path>, SceneError> {
        let locator = Locator::new(&self.grid, self.query);
        let from = locator.locate(self.mover.position())?;
        let to = locator.locate(pos)?;
        debug!("scene: click at {pos} -> cell {to} (mover at {from})");

        match self.finder.find_path(&self.grid, from, to)? {
            Some(path) => {
                info!("scene: walking {} steps from {from} to {to}", path.steps());
                self.mover.follow(&self.grid, &path);
                Ok(Some(path))
            }
            None => {
                info!("scene: {to} is unreachable from {from}");
                self.mover.stop();
                Ok(None)
            }
        }
    }

    /// Advance the mover by `dt` seconds. Returns the world position of a
    /// waypoint reached during this step.
    pub fn update(&mut self, dt: f32) -> Option<WorldPos> {
        self.mover.update(dt)
    }

    /// Step until the mover is idle or `max_steps` is reached. Returns the
    /// number of steps taken.
    pub fn run_until_idle(&mut self, dt: f32, max_steps: usize) -> usize {
        let mut steps = 0;
        while !self.mover.is_idle() && steps < max_steps {
            if let Some(w) = self.update(dt) {
                debug!("scene: reached {w}");
            }
            steps += 1;
        }
        steps
    }
}
