//! Open-set implementations for the A* driver.
//!
//! Entries are ordered by [`FrontierKey`]: lowest `f` first, and among equal
//! `f` the lowest `seq`. The search hands out a fresh, increasing `seq` every
//! time it inserts a node or lowers its key, so ties go to the node whose key
//! was set first. Every frontier therefore pops nodes in exactly the same
//! order, and results do not depend on which one is used.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Priority of an open node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: i32,
    pub seq: u64,
}

/// Priority set of open nodes, addressed by arena index.
///
/// Membership queries are answered by the node's own open state, so the
/// frontier only needs to order what it holds.
pub trait Frontier {
    /// Drop every entry.
    fn clear(&mut self);

    /// Add a node that is not currently held.
    fn insert(&mut self, idx: usize, key: FrontierKey);

    /// Lower the key of a node that is currently held.
    fn decrease_key(&mut self, idx: usize, key: FrontierKey);

    /// Remove and return the node with the smallest key.
    fn extract_min(&mut self) -> Option<usize>;

    /// Number of nodes held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: FrontierKey,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap frontier, O(log n) per operation.
///
/// `decrease_key` pushes a second entry; the superseded one is discarded when
/// it surfaces.
#[derive(Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
    live: HashMap<usize, FrontierKey>,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
    }

    fn insert(&mut self, idx: usize, key: FrontierKey) {
        self.live.insert(idx, key);
        self.heap.push(Reverse(Entry { key, idx }));
    }

    fn decrease_key(&mut self, idx: usize, key: FrontierKey) {
        self.insert(idx, key);
    }

    fn extract_min(&mut self) -> Option<usize> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            // Skip entries superseded by a later decrease_key.
            if self.live.get(&entry.idx) == Some(&entry.key) {
                self.live.remove(&entry.idx);
                return Some(entry.idx);
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.live.len()
    }
}

// ---------------------------------------------------------------------------
// ScanFrontier
// ---------------------------------------------------------------------------

/// Unordered list with a linear minimum scan, O(n) per extraction.
/// Fine for small grids.
#[derive(Default)]
pub struct ScanFrontier {
    open: Vec<(usize, FrontierKey)>,
}

impl ScanFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for ScanFrontier {
    fn clear(&mut self) {
        self.open.clear();
    }

    fn insert(&mut self, idx: usize, key: FrontierKey) {
        self.open.push((idx, key));
    }

    fn decrease_key(&mut self, idx: usize, key: FrontierKey) {
        match self.open.iter_mut().find(|(i, _)| *i == idx) {
            Some(entry) => entry.1 = key,
            None => self.open.push((idx, key)),
        }
    }

    fn extract_min(&mut self) -> Option<usize> {
        let (pos, _) = self
            .open
            .iter()
            .enumerate()
            .min_by_key(|(_, (_, key))| *key)?;
        Some(self.open.swap_remove(pos).0)
    }

    fn len(&self) -> usize {
        self.open.len()
    }
}
