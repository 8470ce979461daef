//! Shortest-path search on navigation grids.
//!
//! This crate finds minimum-step 4-directional paths with A\* and maps world
//! positions back onto grid cells:
//!
//! - **A\*** search ([`PathFinder::find_path`]) with a Manhattan heuristic
//! - swappable open sets ([`HeapFrontier`], [`ScanFrontier`]) behind the
//!   [`Frontier`] trait
//! - world → cell lookup ([`Locator`]) over an injected [`SpatialQuery`]
//!
//! [`PathFinder`] owns and reuses its node arena so that repeated queries
//! incur no allocations after warm-up, and never see state left over from a
//! previous search.
//!
//! ```
//! use gridnav_core::{NavGrid, Point, TileMap};
//! use gridnav_paths::PathFinder;
//!
//! let map = TileMap::parse("-X-\n-X-\n---").unwrap();
//! let grid = NavGrid::build(&map).unwrap();
//! let mut finder = PathFinder::default();
//! let path = finder
//!     .find_path(&grid, Point::new(0, 0), Point::new(2, 0))
//!     .unwrap()
//!     .expect("route exists");
//! assert_eq!(path.steps(), 6);
//! ```

mod astar;
mod config;
mod distance;
mod error;
mod finder;
mod frontier;
mod locate;
mod path;
mod reconstruct;
mod traits;

pub use config::SearchConfig;
pub use distance::manhattan;
pub use error::{LocateError, PathError};
pub use finder::{NodeState, PathFinder, SearchStats, UNREACHABLE};
pub use frontier::{Frontier, FrontierKey, HeapFrontier, ScanFrontier};
pub use locate::{Locator, SpatialQuery, TileBoundsQuery};
pub use path::Path;
pub use traits::Pather;
