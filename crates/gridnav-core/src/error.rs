use std::fmt;

use crate::Point;

/// Errors raised while parsing a tile map or building a [`NavGrid`](crate::NavGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedGridError {
    /// Width or height is zero or negative.
    NonPositiveSize { width: i32, height: i32 },
    /// A row's length differs from the grid width.
    InconsistentRow {
        row: i32,
        expected: i32,
        found: i32,
    },
    /// A character with no tile meaning was found.
    InvalidTile { ch: char, pos: Point },
    /// A start or goal marker appears more than once.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for MalformedGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { width, height } => {
                write!(f, "grid: non-positive size {width}x{height}")
            }
            Self::InconsistentRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has length {found}, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "grid: invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "grid: duplicate \u{201c}{ch}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for MalformedGridError {}
