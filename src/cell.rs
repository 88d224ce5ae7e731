//! Cell states and grid coordinates

use std::fmt;

/// Location on the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// State of a single grid cell
///
/// A cell moves `Empty -> Frontier -> (Territory | Wall)`, and territory
/// cells turn into `Path` when the maze is finalized.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Cell {
    /// Not visited yet
    #[default]
    Empty,
    /// Next to a territory, waiting in the queue
    Frontier,
    /// Claimed by the territory with this id
    Territory(usize),
    Wall,
    Path,
}

impl Cell {
    const S_EMPTY: &'static str = "░░";
    const S_FRONTIER: &'static str = "▒▒";
    const S_PATH: &'static str = "  ";
    const S_WALL: &'static str = "██";

    /// Territory id, if the cell belongs to one
    pub fn territory(&self) -> Option<usize> {
        match self {
            Cell::Territory(id) => Some(*id),
            _ => None,
        }
    }

    /// Passable in the finished maze (territories count as paths)
    pub fn is_open(&self) -> bool {
        matches!(self, Cell::Territory(_) | Cell::Path)
    }

    /// Two-character text representation
    pub fn glyph(&self) -> &'static str {
        match self {
            Cell::Empty => Self::S_EMPTY,
            Cell::Frontier => Self::S_FRONTIER,
            Cell::Territory(_) | Cell::Path => Self::S_PATH,
            Cell::Wall => Self::S_WALL,
        }
    }

    /// Glyph of the implied border around the grid
    pub fn border_glyph() -> &'static str {
        Self::S_WALL
    }
}
