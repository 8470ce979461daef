//! The navigation grid: a dense, immutable table of [`Cell`]s built from a
//! [`TileProvider`].

use log::debug;

use crate::error::MalformedGridError;
use crate::tiles::TileProvider;
use crate::{Point, Range, WorldPos};

/// One grid cell as captured at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub pos: Point,
    pub navigable: bool,
    /// World-space centre of the tile, for movers and lookups.
    pub world: WorldPos,
}

/// A rectangular grid of navigable and blocked cells.
///
/// The grid never changes after [`build`](Self::build); rebuild it when the
/// underlying tiles change.
#[derive(Debug, Clone)]
pub struct NavGrid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl NavGrid {
    /// Snapshot `provider` into a new grid.
    ///
    /// Fails if either dimension is not positive or if any row's length
    /// differs from the provider's width.
    pub fn build<T: TileProvider + ?Sized>(provider: &T) -> Result<Self, MalformedGridError> {
        let width = provider.width();
        let height = provider.height();
        if width <= 0 || height <= 0 {
            return Err(MalformedGridError::NonPositiveSize { width, height });
        }
        for row in 0..height {
            let found = provider.row_len(row);
            if found != width {
                return Err(MalformedGridError::InconsistentRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        let bounds = Range::new(0, 0, width, height);
        let cells: Vec<Cell> = bounds
            .iter()
            .map(|pos| Cell {
                pos,
                navigable: provider.is_navigable(pos),
                world: provider.world_pos(pos),
            })
            .collect();

        let grid = Self { cells, bounds };
        debug!(
            "grid: built {}x{} ({} navigable)",
            width,
            height,
            grid.navigable_count()
        );
        Ok(grid)
    }

    /// The rectangle covered by the grid, always anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a built grid; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_navigable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| c.navigable)
    }

    /// World-space centre of the cell at `p`.
    pub fn world_pos(&self, p: Point) -> Option<WorldPos> {
        self.cell(p).map(|c| c.world)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn navigable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.navigable).count()
    }
}

impl<'a> IntoIterator for &'a NavGrid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
