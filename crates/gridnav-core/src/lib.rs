//! **gridnav-core**: navigation grid model for tile-based pathfinding.
//!
//! This crate provides the geometry primitives shared by the *gridnav*
//! crates, the [`TileProvider`] contract for external tile sources, and the
//! immutable [`NavGrid`] that searches run over.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tiles;

pub use error::MalformedGridError;
pub use geom::{Point, Range, WorldPos};
pub use grid::{Cell, NavGrid};
pub use tiles::{Tile, TileMap, TileProvider};
