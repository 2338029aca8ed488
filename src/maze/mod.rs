pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::GridCell;
pub use grid::{Direction, Grid, Point};

use crate::error::{MazeError, Result};

/// Boundary edge of the grid holding an opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A validated maze size request.
///
/// The physical grid is `requested × requested`. The logical grid is
/// `inner × inner` where `inner = n / 2` for odd `n` and `n / 2 - 1` for even `n`,
/// so an even request leaves one extra wall line on the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeSize {
    requested: usize,
    inner: usize,
}

impl MazeSize {
    pub const MIN: usize = 5;
    pub const MAX: usize = u8::MAX as usize;

    pub fn new(requested: usize) -> Result<Self> {
        if requested < Self::MIN {
            return Err(MazeError::SizeTooSmall {
                requested,
                minimum: Self::MIN,
            });
        }
        if requested > Self::MAX {
            return Err(MazeError::SizeTooLarge {
                requested,
                maximum: Self::MAX,
            });
        }
        let inner = if requested % 2 == 1 {
            requested / 2
        } else {
            requested / 2 - 1
        };
        Ok(MazeSize { requested, inner })
    }

    pub fn height(&self) -> usize {
        self.requested
    }

    pub fn width(&self) -> usize {
        self.requested
    }

    pub fn inner_height(&self) -> usize {
        self.inner
    }

    pub fn inner_width(&self) -> usize {
        self.inner
    }
}

/// A finished maze: the carved grid plus its entrance and exit.
///
/// Solving mutates the grid in place. Once solved, the escape marks and dead ends
/// stay in the grid, so a maze must be regenerated or reloaded before it can be
/// solved again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    entry: Point,
    exit: Point,
    solved: bool,
}

impl Maze {
    pub fn new(grid: Grid, entry: Point, exit: Point) -> Self {
        Maze {
            grid,
            entry,
            exit,
            solved: false,
        }
    }

    /// Rebuilds a maze from a stored grid, treating it as solved if it carries
    /// any solver marks.
    pub fn restore(grid: Grid, entry: Point, exit: Point) -> Self {
        let solved = grid.rows().flatten().any(|cell| cell.is_solver_mark());
        Maze {
            grid,
            entry,
            exit,
            solved,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entry(&self) -> Point {
        self.entry
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Whether a solve attempt has already annotated the grid.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_below_minimum_is_rejected() {
        assert!(matches!(
            MazeSize::new(4),
            Err(MazeError::SizeTooSmall {
                requested: 4,
                minimum: 5
            })
        ));
    }

    #[test]
    fn test_size_above_maximum_is_rejected() {
        assert!(MazeSize::new(MazeSize::MAX).is_ok());
        assert!(matches!(
            MazeSize::new(MazeSize::MAX + 1),
            Err(MazeError::SizeTooLarge { maximum: 255, .. })
        ));
    }

    #[test]
    fn test_inner_size_for_odd_and_even_requests() {
        let odd = MazeSize::new(5).unwrap();
        assert_eq!((odd.inner_height(), odd.inner_width()), (2, 2));
        assert_eq!((odd.height(), odd.width()), (5, 5));

        let even = MazeSize::new(6).unwrap();
        assert_eq!((even.inner_height(), even.inner_width()), (2, 2));
        assert_eq!((even.height(), even.width()), (6, 6));

        assert_eq!(MazeSize::new(11).unwrap().inner_height(), 5);
        assert_eq!(MazeSize::new(12).unwrap().inner_height(), 5);
    }
}
