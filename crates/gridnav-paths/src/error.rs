use std::fmt;

use gridnav_core::{Point, WorldPos};

/// Reasons a search request is rejected or abandoned.
///
/// An exhausted search is not an error: it returns `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Start or goal lies outside the grid.
    OutOfBounds { pos: Point },
    /// Start or goal is not navigable.
    Blocked { pos: Point },
    /// The configured expansion limit was reached before the goal.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos } => write!(f, "path: position {pos} is outside the grid"),
            Self::Blocked { pos } => write!(f, "path: position {pos} is not navigable"),
            Self::ExpansionLimit { limit } => {
                write!(f, "path: gave up after expanding {limit} nodes")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Failure to map a world position onto the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateError {
    /// No cell overlaps the position.
    NotFound(WorldPos),
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(pos) => write!(f, "locate: no cell at {pos}"),
        }
    }
}

impl std::error::Error for LocateError {}
