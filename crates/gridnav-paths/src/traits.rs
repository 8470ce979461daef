use gridnav_core::{NavGrid, Point, Range};

use crate::distance::manhattan;

/// Grid interface the search runs over.
///
/// Steps always cost 1; only navigability varies between cells.
pub trait Pather {
    /// Rectangle of valid positions.
    fn bounds(&self) -> Range;

    /// Whether `p` may be stood on. Only called for points in bounds.
    fn passable(&self, p: Point) -> bool;

    /// Append the walkable cardinal neighbours of `p` into `buf`, in the order
    /// up, right, down, left. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let bounds = self.bounds();
        for n in p.neighbors_4() {
            if bounds.contains(n) && self.passable(n) {
                buf.push(n);
            }
        }
    }

    /// Heuristic estimate of the remaining steps from `from` to `to`.
    /// Must never overestimate and must change by at most 1 per step.
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

impl Pather for NavGrid {
    fn bounds(&self) -> Range {
        NavGrid::bounds(self)
    }

    fn passable(&self, p: Point) -> bool {
        self.is_navigable(p)
    }
}
