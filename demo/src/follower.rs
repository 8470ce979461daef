//! Moves an entity along a path in world space.

use std::collections::VecDeque;

use gridnav_core::{NavGrid, WorldPos};
use gridnav_paths::Path;

/// Walks a mover through the world positions of a path's cells, one after
/// the other, at constant speed.
#[derive(Debug, Clone)]
pub struct PathFollower {
    pos: WorldPos,
    speed: f32,
    epsilon: f32,
    queue: VecDeque<WorldPos>,
    target: Option<WorldPos>,
}

impl PathFollower {
    /// `speed` is in world units per second; a waypoint counts as reached
    /// once the mover is closer than `epsilon`.
    pub fn new(pos: WorldPos, speed: f32, epsilon: f32) -> Self {
        Self {
            pos,
            speed,
            epsilon,
            queue: VecDeque::new(),
            target: None,
        }
    }

    #[inline]
    pub fn position(&self) -> WorldPos {
        self.pos
    }

    /// Replace the current route with `path`.
    pub fn follow(&mut self, grid: &NavGrid, path: &Path) {
        self.stop();
        self.queue
            .extend(path.iter().filter_map(|&p| grid.world_pos(p)));
    }

    /// Drop the current route. The mover stays where it is.
    pub fn stop(&mut self) {
        self.queue.clear();
        self.target = None;
    }

    /// Whether there is nothing left to walk to.
    pub fn is_idle(&self) -> bool {
        self.target.is_none() && self.queue.is_empty()
    }

    /// Waypoints not reached yet, the current one included.
    pub fn remaining(&self) -> usize {
        self.queue.len() + usize::from(self.target.is_some())
    }

    /// Advance by `dt` seconds. Returns the waypoint reached during this
    /// step, if any.
    pub fn update(&mut self, dt: f32) -> Option<WorldPos> {
        if self.target.is_none() {
            self.target = self.queue.pop_front();
        }
        let target = self.target?;

        let delta = target - self.pos;
        let dist = delta.length();
        if dist > 0.0 {
            let step = (self.speed * dt).min(dist);
            self.pos = self.pos + delta.scale(step / dist);
        }

        if self.pos.distance(target) < self.epsilon {
            self.target = None;
            return Some(target);
        }
        None
    }
}
