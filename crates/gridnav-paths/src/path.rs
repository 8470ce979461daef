use gridnav_core::Point;

/// A shortest path, start and goal included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath"))]
pub struct Path {
    cells: Vec<Point>,
    cost: i32,
}

/// Unchecked wire form of [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    cells: Vec<Point>,
    cost: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = String;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        if raw.cells.is_empty() {
            return Err("path has no cells".to_string());
        }
        let steps = raw.cells.len() - 1;
        if usize::try_from(raw.cost).ok() != Some(steps) {
            return Err(format!(
                "path cost {} does not match its {steps} steps",
                raw.cost
            ));
        }
        Ok(Self::new(raw.cells, raw.cost))
    }
}

impl Path {
    pub(crate) fn new(cells: Vec<Point>, cost: i32) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// Cells in walking order.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Total cost, the g-cost of the goal. Equals [`steps`](Self::steps).
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of moves between cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// Number of cells, endpoints included. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
