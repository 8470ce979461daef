//! Tile providers: the external source a [`NavGrid`](crate::NavGrid) is built from.
//!
//! A provider reports its dimensions, the length of every row (so that ragged
//! input can be rejected), per-cell navigability and the world position of
//! each cell. Two providers ship with the crate: [`TileMap`], parsed from the
//! text map format, and `Vec<Vec<bool>>`.

use crate::error::MalformedGridError;
use crate::{Point, WorldPos};

/// Source of tiles for building a navigation grid.
///
/// A cell's identity is its [`Point`]; providers must answer consistently for
/// the same point.
pub trait TileProvider {
    /// Number of columns.
    fn width(&self) -> i32;

    /// Number of rows.
    fn height(&self) -> i32;

    /// Actual length of row `y`. Defaults to [`width`](Self::width).
    fn row_len(&self, _y: i32) -> i32 {
        self.width()
    }

    /// Whether the tile at `p` can be walked on.
    fn is_navigable(&self, p: Point) -> bool;

    /// World-space centre of the tile at `p`.
    fn world_pos(&self, p: Point) -> WorldPos;
}

/// Kind of a single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Free,
    Blocked,
}

impl Tile {
    #[inline]
    pub fn is_navigable(self) -> bool {
        self == Tile::Free
    }
}

pub const FREE: char = '-';
pub const BLOCKED: char = 'X';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// A tile map parsed from text.
///
/// One line per row: `-` is free, `X` is blocked, `S` and `G` mark the start
/// and goal (both free). Tiles are squares of side `tile_size` laid out from
/// `origin`, with Y growing down like grid rows.
#[derive(Debug, Clone)]
pub struct TileMap {
    rows: Vec<Vec<Tile>>,
    start: Option<Point>,
    goal: Option<Point>,
    origin: WorldPos,
    tile_size: f32,
}

impl TileMap {
    /// Parse a text map. Leading and trailing blank lines are ignored; rows
    /// are not required to have equal length here (see
    /// [`NavGrid::build`](crate::NavGrid::build)).
    pub fn parse(s: &str) -> Result<Self, MalformedGridError> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (y, line) in s.trim().lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = match ch {
                    FREE => Tile::Free,
                    BLOCKED => Tile::Blocked,
                    START | GOAL => {
                        let slot = if ch == START { &mut start } else { &mut goal };
                        if slot.is_some() {
                            return Err(MalformedGridError::DuplicateMarker { ch, pos });
                        }
                        *slot = Some(pos);
                        Tile::Free
                    }
                    _ => return Err(MalformedGridError::InvalidTile { ch, pos }),
                };
                row.push(tile);
            }
            rows.push(row);
        }

        Ok(Self {
            rows,
            start,
            goal,
            origin: WorldPos::ZERO,
            tile_size: 1.0,
        })
    }

    /// Set the world position of the top-left corner of tile (0, 0).
    pub fn with_origin(mut self, origin: WorldPos) -> Self {
        self.origin = origin;
        self
    }

    /// Set the side length of a tile in world units.
    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Position of the `S` marker, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `G` marker, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Tile at `p`, or `None` past the end of its row.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.rows.get(p.y as usize)?.get(p.x as usize).copied()
    }
}

impl TileProvider for TileMap {
    fn width(&self) -> i32 {
        self.rows.first().map_or(0, |r| r.len() as i32)
    }

    fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    fn row_len(&self, y: i32) -> i32 {
        self.rows.get(y as usize).map_or(0, |r| r.len() as i32)
    }

    fn is_navigable(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_navigable)
    }

    fn world_pos(&self, p: Point) -> WorldPos {
        WorldPos::new(
            self.origin.x + (p.x as f32 + 0.5) * self.tile_size,
            self.origin.y + (p.y as f32 + 0.5) * self.tile_size,
        )
    }
}

/// Row-major navigability table with unit tiles; `true` is navigable.
impl TileProvider for Vec<Vec<bool>> {
    fn width(&self) -> i32 {
        self.first().map_or(0, |r| r.len() as i32)
    }

    fn height(&self) -> i32 {
        self.len() as i32
    }

    fn row_len(&self, y: i32) -> i32 {
        self.get(y as usize).map_or(0, |r| r.len() as i32)
    }

    fn is_navigable(&self, p: Point) -> bool {
        if p.x < 0 || p.y < 0 {
            return false;
        }
        self.get(p.y as usize)
            .and_then(|r| r.get(p.x as usize))
            .copied()
            .unwrap_or(false)
    }

    fn world_pos(&self, p: Point) -> WorldPos {
        WorldPos::new(p.x as f32 + 0.5, p.y as f32 + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The demo map the mover walks in the sample scene.
    const DEMO: &str = "\
G-----
XXXXX-
S-X-X-
--X-X-
--X-X-
------";

    #[test]
    fn parse_markers_and_size() {
        let m = TileMap::parse(DEMO).unwrap();
        assert_eq!(m.width(), 6);
        assert_eq!(m.height(), 6);
        assert_eq!(m.start(), Some(Point::new(0, 2)));
        assert_eq!(m.goal(), Some(Point::new(0, 0)));
        assert!(m.is_navigable(Point::new(0, 0)));
        assert!(!m.is_navigable(Point::new(0, 1)));
        assert!(!m.is_navigable(Point::new(6, 0)));
        assert!(!m.is_navigable(Point::new(-1, 0)));
    }

    #[test]
    fn parse_rejects_unknown_char() {
        let err = TileMap::parse("--\n-?").unwrap_err();
        assert_eq!(
            err,
            MalformedGridError::InvalidTile {
                ch: '?',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_second_start() {
        let err = TileMap::parse("S-\n-S").unwrap_err();
        assert!(matches!(
            err,
            MalformedGridError::DuplicateMarker { ch: 'S', .. }
        ));
    }

    #[test]
    fn parse_keeps_ragged_rows() {
        let m = TileMap::parse("---\n--").unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.row_len(1), 2);
    }

    #[test]
    fn world_pos_uses_origin_and_tile_size() {
        let m = TileMap::parse("--\n--")
            .unwrap()
            .with_origin(WorldPos::new(10.0, -4.0))
            .with_tile_size(2.0);
        assert_eq!(m.world_pos(Point::new(0, 0)), WorldPos::new(11.0, -3.0));
        assert_eq!(m.world_pos(Point::new(1, 1)), WorldPos::new(13.0, -1.0));
        assert_eq!(m.tile_size(), 2.0);
    }

    #[test]
    fn bool_rows_provider() {
        let rows = vec![vec![true, false], vec![true, true]];
        assert_eq!(rows.width(), 2);
        assert_eq!(rows.height(), 2);
        assert!(!rows.is_navigable(Point::new(1, 0)));
        assert!(rows.is_navigable(Point::new(1, 1)));
        assert_eq!(rows.world_pos(Point::new(1, 0)), WorldPos::new(1.5, 0.5));
    }
}
