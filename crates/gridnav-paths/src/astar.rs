use gridnav_core::Point;
use log::{debug, trace};

use crate::error::PathError;
use crate::finder::{NO_PARENT, NodeState, PathFinder, SearchNode, UNREACHABLE};
use crate::frontier::{Frontier, FrontierKey};
use crate::path::Path;
use crate::reconstruct::reconstruct;
use crate::traits::Pather;

enum Outcome {
    Found,
    Exhausted,
    Limit(usize),
}

impl<F: Frontier> PathFinder<F> {
    /// Compute a shortest 4-directional path from `start` to `goal` using A*.
    ///
    /// Returns `Ok(None)` when no route exists. Fails if either endpoint is
    /// out of bounds or not navigable, or if the configured expansion limit
    /// is hit.
    ///
    /// Among open nodes with equal `f`, the one whose cost was set first is
    /// expanded first.
    pub fn find_path<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, PathError> {
        trace!("[astar] find_path: start={start} goal={goal}");

        // Stale records from earlier searches become unseen here, also when
        // the request is rejected below.
        let bounds = pather.bounds();
        self.reset(bounds);

        for pos in [start, goal] {
            if !bounds.contains(pos) {
                debug!("[astar] rejected: {pos} outside {bounds}");
                return Err(PathError::OutOfBounds { pos });
            }
            if !pather.passable(pos) {
                debug!("[astar] rejected: {pos} is blocked");
                return Err(PathError::Blocked { pos });
            }
        }

        let cur_gen = self.generation;
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return Err(PathError::OutOfBounds { pos: start });
        };

        if start == goal {
            self.nodes[start_idx] = SearchNode {
                g: 0,
                f: 0,
                parent: NO_PARENT,
                generation: cur_gen,
                state: NodeState::Closed,
            };
            return Ok(Some(Path::new(vec![start], 0)));
        }

        let h = pather.estimate(start, goal);
        self.nodes[start_idx] = SearchNode {
            g: 0,
            f: h,
            parent: NO_PARENT,
            generation: cur_gen,
            state: NodeState::Open,
        };
        self.frontier.insert(start_idx, FrontierKey { f: h, seq: 0 });
        self.seq = 1;
        self.stats.peak_open = 1;

        let limit = self.config.max_expansions;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = loop {
            let Some(ci) = self.frontier.extract_min() else {
                break Outcome::Exhausted;
            };

            if ci == goal_idx {
                break Outcome::Found;
            }

            if let Some(limit) = limit.filter(|&l| self.stats.expanded >= l) {
                break Outcome::Limit(limit);
            }

            self.nodes[ci].state = NodeState::Closed;
            self.stats.expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation != cur_gen {
                    *n = SearchNode {
                        generation: cur_gen,
                        ..SearchNode::default()
                    };
                }
                if n.state == NodeState::Closed || tentative_g >= n.g {
                    continue;
                }

                let was_open = n.state == NodeState::Open;
                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, goal);
                n.parent = ci;
                n.state = NodeState::Open;

                let key = FrontierKey {
                    f: n.f,
                    seq: self.seq,
                };
                self.seq += 1;
                if was_open {
                    self.frontier.decrease_key(ni, key);
                } else {
                    self.frontier.insert(ni, key);
                }
            }

            self.stats.peak_open = self.stats.peak_open.max(self.frontier.len());
        };

        self.nbuf = nbuf;

        match outcome {
            Outcome::Found => {
                let cells = reconstruct(&self.nodes, goal_idx, |i| self.point(i));
                let cost = self.nodes[goal_idx].g;
                debug_assert!(cost != UNREACHABLE);
                debug!(
                    "[astar] found: {} steps, expanded={} peak_open={}",
                    cost, self.stats.expanded, self.stats.peak_open
                );
                Ok(Some(Path::new(cells, cost)))
            }
            Outcome::Exhausted => {
                debug!(
                    "[astar] no path from {start} to {goal} (expanded={})",
                    self.stats.expanded
                );
                Ok(None)
            }
            Outcome::Limit(limit) => {
                debug!("[astar] FAILED: expansion limit {limit} reached");
                Err(PathError::ExpansionLimit { limit })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use gridnav_core::{NavGrid, Range, TileMap};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::config::SearchConfig;
    use crate::distance::manhattan;
    use crate::finder::SearchStats;
    use crate::frontier::ScanFrontier;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// 3x3 grid with (1,0) and (1,1) blocked.
    fn detour_grid() -> NavGrid {
        let map = TileMap::parse("-X-\n-X-\n---").unwrap();
        NavGrid::build(&map).unwrap()
    }

    fn random_grid(rng: &mut StdRng, w: usize, h: usize) -> NavGrid {
        let rows: Vec<Vec<bool>> = (0..h)
            .map(|_| (0..w).map(|_| rng.random_range(0..100u32) >= 30).collect())
            .collect();
        NavGrid::build(&rows).unwrap()
    }

    /// Independent breadth-first distances from `from`.
    fn bfs(grid: &NavGrid, from: Point) -> Vec<Option<i32>> {
        let mut dist = vec![None; grid.len()];
        let mut queue = VecDeque::new();
        dist[grid.index(from).unwrap()] = Some(0);
        queue.push_back(from);
        while let Some(p) = queue.pop_front() {
            let d = dist[grid.index(p).unwrap()].unwrap();
            for n in p.neighbors_4() {
                if !grid.is_navigable(n) {
                    continue;
                }
                let ni = grid.index(n).unwrap();
                if dist[ni].is_none() {
                    dist[ni] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    fn assert_valid(grid: &NavGrid, path: &Path, start: Point, goal: Point) {
        assert_eq!(path.start(), start);
        assert_eq!(path.goal(), goal);
        assert_eq!(path.cost() as usize, path.steps());
        for p in path {
            assert!(grid.is_navigable(*p), "{p} is blocked");
        }
        for w in path.cells().windows(2) {
            assert!(w[0].is_adjacent_4(w[1]), "{} -> {} is not a step", w[0], w[1]);
        }
    }

    #[test]
    fn detour_around_wall() {
        let grid = detour_grid();
        let mut pf = PathFinder::default();
        let path = pf
            .find_path(&grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap()
            .unwrap();
        assert_eq!(
            path.cells(),
            pts(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)]).as_slice()
        );
        assert_eq!(path.steps(), 6);
        assert_eq!(pf.g_cost(Point::new(2, 0)), Some(6));
        assert_eq!(pf.state(Point::new(0, 0)), NodeState::Closed);
        assert_eq!(pf.state(Point::new(1, 0)), NodeState::Unseen);
    }

    #[test]
    fn blocked_goal_is_rejected() {
        let grid = detour_grid();
        let mut pf = PathFinder::default();
        assert_eq!(
            pf.find_path(&grid, Point::new(0, 0), Point::new(1, 1)),
            Err(PathError::Blocked {
                pos: Point::new(1, 1)
            })
        );
        assert_eq!(
            pf.find_path(&grid, Point::new(1, 0), Point::new(2, 2)),
            Err(PathError::Blocked {
                pos: Point::new(1, 0)
            })
        );
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let grid = detour_grid();
        let mut pf = PathFinder::default();
        assert_eq!(
            pf.find_path(&grid, Point::new(-1, 0), Point::new(2, 2)),
            Err(PathError::OutOfBounds {
                pos: Point::new(-1, 0)
            })
        );
        assert_eq!(
            pf.find_path(&grid, Point::new(0, 0), Point::new(0, 3)),
            Err(PathError::OutOfBounds {
                pos: Point::new(0, 3)
            })
        );
    }

    #[test]
    fn start_equals_goal() {
        let grid = detour_grid();
        let mut pf = PathFinder::default();
        let path = pf
            .find_path(&grid, Point::new(2, 2), Point::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.cells(), &[Point::new(2, 2)]);
        assert_eq!(path.cost(), 0);
        assert_eq!(pf.last_stats().expanded, 0);
        assert_eq!(pf.g_cost(Point::new(2, 2)), Some(0));
        assert_eq!(pf.state(Point::new(2, 2)), NodeState::Closed);
        assert_eq!(pf.state(Point::new(2, 1)), NodeState::Unseen);
    }

    #[test]
    fn rejected_request_clears_previous_search() {
        let grid = detour_grid();
        let mut pf = PathFinder::default();
        pf.find_path(&grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap()
            .unwrap();
        assert_eq!(pf.g_cost(Point::new(2, 0)), Some(6));
        assert_eq!(pf.last_stats().expanded, 6);

        assert_eq!(
            pf.find_path(&grid, Point::new(0, 0), Point::new(1, 1)),
            Err(PathError::Blocked {
                pos: Point::new(1, 1)
            })
        );
        assert_eq!(pf.g_cost(Point::new(2, 0)), None);
        assert_eq!(pf.state(Point::new(0, 0)), NodeState::Unseen);
        assert_eq!(pf.last_stats(), SearchStats::default());

        pf.find_path(&grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap()
            .unwrap();
        assert!(pf.find_path(&grid, Point::new(5, 5), Point::new(0, 0)).is_err());
        assert_eq!(pf.g_cost(Point::new(2, 0)), None);
        assert_eq!(pf.last_stats(), SearchStats::default());
    }

    #[test]
    fn walled_off_goal_has_no_path() {
        let map = TileMap::parse("-X-\n-X-\n-X-").unwrap();
        let grid = NavGrid::build(&map).unwrap();
        let mut pf = PathFinder::default();
        let res = pf.find_path(&grid, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(res, Ok(None));
        assert_eq!(pf.last_stats().expanded, 3);
        assert_eq!(pf.g_cost(Point::new(2, 2)), None);
    }

    #[test]
    fn demo_map_route() {
        let map = TileMap::parse(
            "G-----\nXXXXX-\nS-X-X-\n--X-X-\n--X-X-\n------",
        )
        .unwrap();
        let grid = NavGrid::build(&map).unwrap();
        let (start, goal) = (map.start().unwrap(), map.goal().unwrap());
        let mut pf = PathFinder::default();
        let path = pf.find_path(&grid, start, goal).unwrap().unwrap();
        assert_eq!(path.cost(), 18);
        assert_valid(&grid, &path, start, goal);
        assert!(path.cells().contains(&Point::new(5, 1)));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let grid = detour_grid();
        let mut pf = PathFinder::default();
        let a = pf.find_path(&grid, Point::new(0, 0), Point::new(2, 0));
        let stats = pf.last_stats();
        let b = pf.find_path(&grid, Point::new(0, 0), Point::new(2, 0));
        assert_eq!(a, b);
        assert_eq!(stats, pf.last_stats());

        // Interleave a different request, then repeat the first.
        let other = pf.find_path(&grid, Point::new(2, 2), Point::new(0, 0));
        assert!(matches!(other, Ok(Some(_))));
        assert_eq!(pf.find_path(&grid, Point::new(0, 0), Point::new(2, 0)), a);
    }

    #[test]
    fn finder_is_reusable_across_grids() {
        let mut pf = PathFinder::default();
        let small = detour_grid();
        let big = NavGrid::build(&vec![vec![true; 8]; 5]).unwrap();

        let p1 = pf.find_path(&big, Point::new(0, 0), Point::new(7, 4)).unwrap();
        assert_eq!(p1.map(|p| p.cost()), Some(11));
        let p2 = pf.find_path(&small, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(p2.map(|p| p.cost()), Some(6));
        let p3 = pf.find_path(&big, Point::new(7, 0), Point::new(0, 4)).unwrap();
        assert_eq!(p3.map(|p| p.cost()), Some(11));
    }

    #[test]
    fn survives_generation_wrap() {
        let grid = detour_grid();
        let mut pf = PathFinder::default();
        let expected = pf.find_path(&grid, Point::new(0, 0), Point::new(2, 0));
        pf.generation = u32::MAX;
        assert_eq!(pf.find_path(&grid, Point::new(0, 0), Point::new(2, 0)), expected);
        assert_eq!(pf.generation, 1);
    }

    #[test]
    fn expansion_limit() {
        let grid = NavGrid::build(&vec![vec![true; 10]; 10]).unwrap();
        let mut pf = PathFinder::new(SearchConfig::default().with_max_expansions(3));
        assert_eq!(
            pf.find_path(&grid, Point::new(0, 0), Point::new(9, 9)),
            Err(PathError::ExpansionLimit { limit: 3 })
        );
        assert_eq!(pf.last_stats().expanded, 3);

        // Close enough to finish within the budget.
        let path = pf.find_path(&grid, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(path.map(|p| p.cost()), Some(2));

        assert_eq!(pf.config().max_expansions, Some(3));
        pf.set_config(SearchConfig::default());
        let path = pf.find_path(&grid, Point::new(0, 0), Point::new(9, 9)).unwrap();
        assert_eq!(path.map(|p| p.cost()), Some(18));
    }

    #[test]
    fn matches_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pf = PathFinder::default();
        for _ in 0..40 {
            let grid = random_grid(&mut rng, 12, 9);
            let open: Vec<Point> = grid.iter().filter(|c| c.navigable).map(|c| c.pos).collect();
            if open.len() < 2 {
                continue;
            }
            let start = open[rng.random_range(0..open.len())];
            let dist = bfs(&grid, start);
            for _ in 0..10 {
                let goal = open[rng.random_range(0..open.len())];
                let res = pf.find_path(&grid, start, goal).unwrap();
                match dist[grid.index(goal).unwrap()] {
                    Some(d) => {
                        let path = res.expect("reachable goal must have a path");
                        assert_eq!(path.cost(), d);
                        assert_valid(&grid, &path, start, goal);
                    }
                    None => assert!(res.is_none()),
                }
            }
        }
    }

    #[test]
    fn heuristic_never_overestimates() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let grid = random_grid(&mut rng, 8, 8);
            for a in grid.iter().filter(|c| c.navigable) {
                let dist = bfs(&grid, a.pos);
                for b in grid.iter() {
                    if let Some(d) = dist[grid.index(b.pos).unwrap()] {
                        assert!(manhattan(a.pos, b.pos) <= d);
                    }
                }
            }
        }
    }

    #[test]
    fn scan_and_heap_frontiers_agree() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut heap = PathFinder::default();
        let mut scan = PathFinder::with_frontier(SearchConfig::default(), ScanFrontier::new());
        for _ in 0..30 {
            let grid = random_grid(&mut rng, 10, 10);
            let open: Vec<Point> = grid.iter().filter(|c| c.navigable).map(|c| c.pos).collect();
            if open.is_empty() {
                continue;
            }
            for _ in 0..8 {
                let s = open[rng.random_range(0..open.len())];
                let g = open[rng.random_range(0..open.len())];
                assert_eq!(heap.find_path(&grid, s, g), scan.find_path(&grid, s, g));
                assert_eq!(heap.last_stats(), scan.last_stats());
            }
        }
    }

    #[test]
    fn open_field_prefers_first_discovered() {
        // Equal-f ties go to the earliest key; neighbours are discovered
        // up, right, down, left, so the walk heads right before going down.
        let grid = NavGrid::build(&vec![vec![true; 3]; 3]).unwrap();
        let mut pf = PathFinder::default();
        let path = pf
            .find_path(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(
            path.cells(),
            pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]).as_slice()
        );
    }

    #[test]
    fn custom_pather_with_offset_bounds() {
        struct Strip;
        impl Pather for Strip {
            fn bounds(&self) -> Range {
                Range::new(-5, 10, 5, 11)
            }
            fn passable(&self, p: Point) -> bool {
                p.x != 0 || p.y == 10
            }
        }
        let mut pf = PathFinder::default();
        let path = pf
            .find_path(&Strip, Point::new(-5, 10), Point::new(4, 10))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 9);
        assert_eq!(path.len(), 10);
    }
}
