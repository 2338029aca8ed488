use crate::error::{MazeError, Result};
use crate::maze::{Grid, GridCell, Point, Side};

/// Opens an entrance on the left edge and an exit on the right edge.
///
/// The entrance is the first row, scanning down, whose first interior cell is a
/// path; the exit is the first row, scanning up, whose last interior cell is a
/// path. With an even width the grid carries an extra wall column, so the
/// interior cell is two columns in and both boundary cells are opened.
pub fn place_entrance_and_exit(grid: &mut Grid) -> Result<(Point, Point)> {
    let (height, width) = (grid.height(), grid.width());
    let depth = if width % 2 == 1 { 1 } else { 2 };
    if height < 2 || width <= depth * 2 {
        return Err(MazeError::OpeningNotFound { side: Side::Left });
    }

    let entry_row = (0..height)
        .find(|&row| grid[Point::new(row, depth)] == GridCell::Path)
        .ok_or(MazeError::OpeningNotFound { side: Side::Left })?;
    (0..depth).for_each(|column| grid[Point::new(entry_row, column)] = GridCell::Path);

    let inner_column = width - 1 - depth;
    let exit_row = (0..height - 1)
        .map(|offset| height - offset - 2)
        .find(|&row| grid[Point::new(row, inner_column)] == GridCell::Path)
        .ok_or(MazeError::OpeningNotFound { side: Side::Right })?;
    (inner_column + 1..width)
        .for_each(|column| grid[Point::new(exit_row, column)] = GridCell::Path);

    let (entry, exit) = (Point::new(entry_row, 0), Point::new(exit_row, width - 1));
    tracing::debug!(%entry, %exit, "placed entrance and exit");
    Ok((entry, exit))
}

/// Recovers the entrance and exit of an existing grid: the first open cell, top
/// down, in the leftmost and in the rightmost column. Solver marks count as open
/// so that a saved solution can be loaded back.
pub fn find_openings(grid: &Grid) -> Result<(Point, Point)> {
    let last = grid
        .width()
        .checked_sub(1)
        .ok_or(MazeError::OpeningNotFound { side: Side::Left })?;
    let first_path_in = |column: usize, side: Side| {
        (0..grid.height())
            .map(|row| Point::new(row, column))
            .find(|&p| grid[p].is_open())
            .ok_or(MazeError::OpeningNotFound { side })
    };
    Ok((first_path_in(0, Side::Left)?, first_path_in(last, Side::Right)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{
        carve::carve_grid, graph::build_weighted_graph, spanning_tree::build_spanning_tree,
    };
    use crate::maze::MazeSize;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn scenario_grid(size: usize) -> Grid {
        let mut tree = crate::generators::graph::Graph::new();
        tree.connect(0, 1, 0);
        tree.connect(0, 2, 1);
        tree.connect(2, 3, 0);
        carve_grid(&tree, size, size, 2).unwrap()
    }

    #[test]
    fn test_scenario_openings() {
        let mut grid = scenario_grid(5);
        let (entry, exit) = place_entrance_and_exit(&mut grid).unwrap();
        assert_eq!(entry, Point::new(1, 0));
        assert_eq!(exit, Point::new(3, 4));
        assert_eq!(grid[entry], GridCell::Path);
        assert_eq!(grid[exit], GridCell::Path);
        assert_eq!(find_openings(&grid).unwrap(), (entry, exit));
    }

    #[test]
    fn test_even_width_opens_two_cells() {
        let mut grid = scenario_grid(6);
        let (entry, exit) = place_entrance_and_exit(&mut grid).unwrap();
        // first row whose node has an east corridor
        assert_eq!(entry, Point::new(1, 0));
        assert_eq!(grid[Point::new(1, 1)], GridCell::Path);
        assert_eq!(exit, Point::new(3, 5));
        assert_eq!(grid[Point::new(3, 4)], GridCell::Path);
    }

    #[test]
    fn test_solid_grid_has_no_opening() {
        let mut grid = Grid::new(5, 5, GridCell::Wall);
        assert!(matches!(
            place_entrance_and_exit(&mut grid),
            Err(MazeError::OpeningNotFound { side: Side::Left })
        ));
        assert!(matches!(
            find_openings(&grid),
            Err(MazeError::OpeningNotFound { side: Side::Left })
        ));
    }

    #[test]
    fn test_missing_exit_is_reported() {
        let mut grid = Grid::new(5, 5, GridCell::Wall);
        grid[Point::new(1, 0)] = GridCell::Path;
        assert!(matches!(
            find_openings(&grid),
            Err(MazeError::OpeningNotFound { side: Side::Right })
        ));
    }

    proptest! {
        #[test]
        fn prop_pipeline_always_places_openings(seed: u64, n in 5usize..30) {
            let size = MazeSize::new(n).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = build_weighted_graph(size.inner_height(), size.inner_width(), &mut rng);
            let tree = build_spanning_tree(&graph).unwrap();
            let mut grid =
                carve_grid(&tree, size.height(), size.width(), size.inner_width()).unwrap();
            let (entry, exit) = place_entrance_and_exit(&mut grid).unwrap();
            prop_assert_eq!(entry.column, 0);
            prop_assert_eq!(exit.column, size.width() - 1);
            prop_assert_eq!(grid[entry], GridCell::Path);
            prop_assert_eq!(grid[exit], GridCell::Path);
        }
    }
}
