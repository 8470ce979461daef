use gridnav_core::{Point, Range};

use crate::config::SearchConfig;
use crate::frontier::{Frontier, HeapFrontier};

/// Sentinel meaning "no finite cost yet".
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Membership of a cell in the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeState {
    /// Not discovered (or left over from an earlier search).
    #[default]
    Unseen,
    /// Discovered, cost not final yet.
    Open,
    /// Cost final.
    Closed,
}

// ---------------------------------------------------------------------------
// Per-search node record
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) state: NodeState,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: NO_PARENT,
            generation: 0,
            state: NodeState::Unseen,
        }
    }
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved to the closed set.
    pub expanded: usize,
    /// Largest frontier size observed.
    pub peak_open: usize,
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable A* search state.
///
/// A `PathFinder` owns the node arena, the frontier and scratch buffers, so
/// repeated searches on grids of the same size do not allocate. Node records
/// carry a generation stamp: every search bumps the generation, which turns
/// all records from earlier searches back into unseen nodes without touching
/// them.
pub struct PathFinder<F: Frontier = HeapFrontier> {
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    pub(crate) bounds: Range,
    pub(crate) frontier: F,
    pub(crate) seq: u64,
    pub(crate) stats: SearchStats,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder<HeapFrontier> {
    /// Create a finder backed by a binary-heap frontier.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_frontier(config, HeapFrontier::new())
    }
}

impl Default for PathFinder<HeapFrontier> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<F: Frontier> PathFinder<F> {
    /// Create a finder with a specific frontier implementation.
    pub fn with_frontier(config: SearchConfig, frontier: F) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            generation: 0,
            bounds: Range::default(),
            frontier,
            seq: 0,
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Settings applied to every search.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the settings; takes effect on the next search.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters from the most recent search.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// State of `p` in the most recent search.
    pub fn state(&self, p: Point) -> NodeState {
        match self.live(p) {
            Some(n) => n.state,
            None => NodeState::Unseen,
        }
    }

    /// Best known cost from the start to `p` in the most recent search, or
    /// `None` if the search never reached it.
    pub fn g_cost(&self, p: Point) -> Option<i32> {
        self.live(p).map(|n| n.g).filter(|&g| g != UNREACHABLE)
    }

    fn live(&self, p: Point) -> Option<&SearchNode> {
        let n = &self.nodes[self.idx(p)?];
        (n.generation == self.generation && n.state != NodeState::Unseen).then_some(n)
    }

    /// Invalidate every node record and size the arena for `bounds`.
    pub(crate) fn reset(&mut self, bounds: Range) {
        if bounds.len() != self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(bounds.len(), SearchNode::default());
            self.generation = 0;
        }
        self.bounds = bounds;
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps have wrapped: old records could look current again.
            self.nodes.fill(SearchNode::default());
            self.generation = 1;
        }
        self.frontier.clear();
        self.seq = 0;
        self.stats = SearchStats::default();
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to an arena index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// Convert an arena index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.bounds.width() as usize;
        Point::new(
            (idx % w) as i32 + self.bounds.min.x,
            (idx / w) as i32 + self.bounds.min.y,
        )
    }
}
