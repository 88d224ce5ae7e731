//! Cell grid and read-only views of it

use std::fmt;

use itertools::Itertools;

use crate::cell::{Cell, Point};
use crate::error::{MazeError, Result};

/// Read access to cell states, as consumed by renderers
pub trait CellView {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Cell state at an in-bounds location
    ///
    /// Panics if `point` lies outside the grid.
    fn cell_at(&self, point: Point) -> Cell;

    /// Whether the coordinates lie within the grid
    fn contains(&self, point: Point) -> bool {
        point.x < self.width() && point.y < self.height()
    }

    /// Checked cell query
    ///
    /// Returns [MazeError::OutOfBounds] for coordinates outside the grid.
    fn cell_kind(&self, x: usize, y: usize) -> Result<Cell> {
        let point = Point { x, y };
        if self.contains(point) {
            Ok(self.cell_at(point))
        } else {
            Err(MazeError::OutOfBounds {
                point,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Count paths and walls inside the grid
    ///
    /// Territory cells count as paths. The implied outer border is not
    /// part of the grid and is not counted.
    fn stats(&self) -> (usize, usize) {
        let mut paths = 0;
        let mut walls = 0;
        for y in 0..self.height() {
            for x in 0..self.width() {
                match self.cell_at(Point { x, y }) {
                    Cell::Territory(_) | Cell::Path => paths += 1,
                    Cell::Wall => walls += 1,
                    Cell::Empty | Cell::Frontier => (),
                }
            }
        }
        (paths, walls)
    }

    /// Text rendering surrounded by a border of walls
    fn render_text(&self) -> String {
        let border = Cell::border_glyph().repeat(self.width() + 2);
        let rows = (0..self.height()).map(|y| {
            let cells = (0..self.width())
                .map(|x| self.cell_at(Point { x, y }).glyph())
                .join("");
            format!("{0}{1}{0}", Cell::border_glyph(), cells)
        });
        std::iter::once(border.clone())
            .chain(rows)
            .chain(std::iter::once(border))
            .join("\n")
    }
}

/// Rectangular grid of cells, indexed `cells[y][x]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Neighbour offsets: south, east, north, west
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

    /// Create an all-empty grid
    ///
    /// Returns error, if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: (0..height)
                .map(|_| (0..width).map(|_| Cell::Empty).collect())
                .collect(),
        })
    }

    /// Set every cell back to [Cell::Empty]
    pub fn clear(&mut self) {
        self.cells
            .iter_mut()
            .flatten()
            .for_each(|cell| *cell = Cell::Empty);
    }

    pub fn set(&mut self, point: Point, cell: Cell) {
        self.cells[point.y][point.x] = cell;
    }

    /// In-bounds 4-connected neighbours, in south, east, north, west order
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Self::DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
            let neighbour = Point {
                x: point.x.checked_add_signed(dx)?,
                y: point.y.checked_add_signed(dy)?,
            };
            self.contains(neighbour).then_some(neighbour)
        })
    }

    /// Replace every occurrence of `from` with `to`
    pub fn replace(&mut self, from: Cell, to: Cell) {
        self.cells
            .iter_mut()
            .flatten()
            .filter(|cell| **cell == from)
            .for_each(|cell| *cell = to);
    }

    /// Apply `f` to every cell
    pub fn map_cells(&mut self, f: impl Fn(Cell) -> Cell) {
        self.cells
            .iter_mut()
            .flatten()
            .for_each(|cell| *cell = f(*cell));
    }

    /// Iterate rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl CellView for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell_at(&self, point: Point) -> Cell {
        self.cells[point.y][point.x]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_text())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, CellView, Grid, MazeError, Point};

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 3),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn neighbours_in_fixed_order() {
        let grid = Grid::new(3, 3).unwrap();
        let neighbours: Vec<_> = grid.neighbours(Point::new(1, 1)).collect();
        assert_eq!(
            neighbours,
            vec![
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn neighbours_exclude_outside() {
        let grid = Grid::new(3, 2).unwrap();
        let corner: Vec<_> = grid.neighbours(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);

        let other: Vec<_> = grid.neighbours(Point::new(2, 1)).collect();
        assert_eq!(other, vec![Point::new(2, 0), Point::new(1, 1)]);

        let single = Grid::new(1, 1).unwrap();
        assert_eq!(single.neighbours(Point::new(0, 0)).count(), 0);
    }

    #[test]
    fn cell_kind_checks_bounds() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(Point::new(1, 2), Cell::Wall);
        assert_eq!(grid.cell_kind(1, 2), Ok(Cell::Wall));
        assert_eq!(grid.cell_kind(0, 0), Ok(Cell::Empty));
        assert_eq!(
            grid.cell_kind(2, 0),
            Err(MazeError::OutOfBounds {
                point: Point::new(2, 0),
                width: 2,
                height: 3
            })
        );
        assert!(grid.cell_kind(0, 3).is_err());
    }

    #[test]
    fn replace_relabels_whole_territory() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.set(Point::new(0, 0), Cell::Territory(1));
        grid.set(Point::new(1, 0), Cell::Territory(2));
        grid.set(Point::new(2, 0), Cell::Territory(1));
        grid.replace(Cell::Territory(1), Cell::Territory(2));
        assert!(grid.rows().flatten().all(|c| *c == Cell::Territory(2)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(Point::new(0, 1), Cell::Frontier);
        grid.set(Point::new(1, 1), Cell::Wall);
        grid.clear();
        assert_eq!(grid, Grid::new(2, 2).unwrap());
    }

    #[test]
    fn stats_count_territories_as_paths() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(Point::new(0, 0), Cell::Territory(4));
        grid.set(Point::new(1, 0), Cell::Path);
        grid.set(Point::new(0, 1), Cell::Wall);
        grid.set(Point::new(1, 1), Cell::Frontier);
        assert_eq!(grid.stats(), (2, 1));
    }

    #[test]
    fn text_has_wall_border() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set(Point::new(0, 0), Cell::Path);
        grid.set(Point::new(1, 0), Cell::Frontier);
        assert_eq!(grid.to_string(), "████████\n██  ▒▒██\n████████");
    }
}
