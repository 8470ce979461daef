//! World position → grid cell lookup.
//!
//! The geometry of "which tile is under this position" belongs to whoever
//! owns the scene (a physics overlap query, a picking pass, ...). It is
//! injected as a [`SpatialQuery`]; [`Locator`] only applies the selection
//! policy on top of the candidates it reports.

use gridnav_core::{NavGrid, Point, WorldPos};

use crate::error::LocateError;

/// Proximity query supplied by the scene.
pub trait SpatialQuery {
    /// Append the cells whose tiles contain or overlap `pos` into `out`.
    fn query(&self, grid: &NavGrid, pos: WorldPos, out: &mut Vec<Point>);
}

impl<F> SpatialQuery for F
where
    F: Fn(&NavGrid, WorldPos, &mut Vec<Point>),
{
    fn query(&self, grid: &NavGrid, pos: WorldPos, out: &mut Vec<Point>) {
        self(grid, pos, out)
    }
}

/// Overlap test against square tiles centred on each cell's world position.
///
/// Edges are inclusive, so a position on a shared edge reports every tile
/// touching it, in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct TileBoundsQuery {
    half: f32,
}

impl TileBoundsQuery {
    pub fn new(tile_size: f32) -> Self {
        Self {
            half: tile_size * 0.5,
        }
    }
}

impl SpatialQuery for TileBoundsQuery {
    fn query(&self, grid: &NavGrid, pos: WorldPos, out: &mut Vec<Point>) {
        for cell in grid {
            if (pos.x - cell.world.x).abs() <= self.half && (pos.y - cell.world.y).abs() <= self.half
            {
                out.push(cell.pos);
            }
        }
    }
}

/// Maps world positions onto cells of a grid.
pub struct Locator<'a, Q> {
    grid: &'a NavGrid,
    query: Q,
}

impl<'a, Q: SpatialQuery> Locator<'a, Q> {
    pub fn new(grid: &'a NavGrid, query: Q) -> Self {
        Self { grid, query }
    }

    /// The cell under `pos`.
    ///
    /// Candidates outside the grid are ignored. The first navigable candidate
    /// wins; failing that, the first in-bounds one. With no candidates left the
    /// lookup fails with [`LocateError::NotFound`].
    pub fn locate(&self, pos: WorldPos) -> Result<Point, LocateError> {
        let mut hits = Vec::new();
        self.query.query(self.grid, pos, &mut hits);
        hits.retain(|&p| self.grid.contains(p));

        hits.iter()
            .copied()
            .find(|&p| self.grid.is_navigable(p))
            .or_else(|| hits.first().copied())
            .ok_or(LocateError::NotFound(pos))
    }
}
