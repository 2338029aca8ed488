use std::fmt;

use super::cell::GridCell;

/// A physical grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub const fn new(row: usize, column: usize) -> Self {
        Point { row, column }
    }

    /// The point one step away in `direction`, or `None` when that would leave the
    /// non-negative quadrant. Upper bounds are checked by the grid.
    pub fn step(self, direction: Direction) -> Option<Point> {
        let Point { row, column } = self;
        match direction {
            Direction::North => row.checked_sub(1).map(|row| Point::new(row, column)),
            Direction::East => column.checked_add(1).map(|column| Point::new(row, column)),
            Direction::South => row.checked_add(1).map(|row| Point::new(row, column)),
            Direction::West => column.checked_sub(1).map(|column| Point::new(row, column)),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row = {}, column = {}", self.row, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Order in which the solver tries neighbors.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

/// Dense row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[GridCell]>,
    height: usize,
    width: usize,
}

impl Grid {
    pub fn new(height: usize, width: usize, cell: GridCell) -> Self {
        let data = vec![cell; height * width].into_boxed_slice();
        Grid {
            data,
            height,
            width,
        }
    }

    /// Builds a grid from rows of cells. Returns `None` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<GridCell>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let data = rows.into_iter().flatten().collect::<Vec<_>>().into_boxed_slice();
        Some(Grid {
            data,
            height,
            width,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.height && point.column < self.width
    }

    fn ravel_index(&self, point: Point) -> usize {
        point.row * self.width + point.column
    }

    pub fn get(&self, point: Point) -> Option<GridCell> {
        self.contains(point).then(|| self.data[self.ravel_index(point)])
    }

    /// The in-bounds neighbor of `point` in `direction`.
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        point.step(direction).filter(|&p| self.contains(p))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        // chunks panics on zero, and an empty grid has no rows anyway
        self.data.chunks(self.width.max(1))
    }

    pub fn count(&self, cell: GridCell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }
}

impl std::ops::Index<Point> for Grid {
    type Output = GridCell;

    fn index(&self, index: Point) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Point> for Grid {
    fn index_mut(&mut self, index: Point) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
