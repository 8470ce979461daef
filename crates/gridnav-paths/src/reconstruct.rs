use gridnav_core::Point;

use crate::finder::{NO_PARENT, SearchNode};

/// Walk parent links back from `goal` and return the cells in start→goal order.
///
/// `point` maps arena indices to grid positions.
pub(crate) fn reconstruct(
    nodes: &[SearchNode],
    goal: usize,
    point: impl Fn(usize) -> Point,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut i = goal;
    while i != NO_PARENT {
        path.push(point(i));
        i = nodes[i].parent;
    }
    path.reverse();
    debug_assert!(path.windows(2).all(|w| w[0].is_adjacent_4(w[1])));
    path
}
