use crate::maze::{Direction, Grid, GridCell, Point};

/// A cell on the current route and the index of the next direction to try from it.
struct Frame {
    point: Point,
    next: usize,
}

/// Depth-first backtracking search from `entry` to `exit`, trying neighbors
/// north, east, south, then west.
///
/// Cells on the route being tried are marked [`GridCell::EscapeMark`]; a cell
/// whose four directions all fail becomes [`GridCell::DeadEnd`]. Only plain
/// [`GridCell::Path`] cells are entered, so no cell is visited twice. On success
/// the marks are left in place, exit included, and form the solution route.
pub fn solve_dfs(grid: &mut Grid, entry: Point, exit: Point) -> bool {
    if grid.get(entry) != Some(GridCell::Path) {
        return false;
    }
    grid[entry] = GridCell::EscapeMark;
    if entry == exit {
        return true;
    }

    let mut stack = vec![Frame {
        point: entry,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = Direction::CLOCKWISE.get(frame.next) else {
            grid[frame.point] = GridCell::DeadEnd;
            stack.pop();
            continue;
        };
        frame.next += 1;
        let point = frame.point;

        let Some(neighbor) = grid.neighbor(point, direction) else {
            continue;
        };
        if grid[neighbor] != GridCell::Path {
            continue;
        }
        grid[neighbor] = GridCell::EscapeMark;
        if neighbor == exit {
            tracing::debug!(depth = stack.len(), "reached the exit");
            return true;
        }
        stack.push(Frame {
            point: neighbor,
            next: 0,
        });
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{carve::carve_grid, entrance::place_entrance_and_exit, graph::Graph};

    fn scenario() -> (Grid, Point, Point) {
        let mut tree = Graph::new();
        tree.connect(0, 1, 0);
        tree.connect(0, 2, 1);
        tree.connect(2, 3, 0);
        let mut grid = carve_grid(&tree, 5, 5, 2).unwrap();
        let (entry, exit) = place_entrance_and_exit(&mut grid).unwrap();
        (grid, entry, exit)
    }

    fn marked(grid: &Grid) -> Vec<Point> {
        (0..grid.height())
            .flat_map(|row| (0..grid.width()).map(move |column| Point::new(row, column)))
            .filter(|&p| grid[p] == GridCell::EscapeMark)
            .collect()
    }

    #[test]
    fn test_scenario_route() {
        let (mut grid, entry, exit) = scenario();
        assert!(solve_dfs(&mut grid, entry, exit));
        let mut expected = vec![
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 1),
            Point::new(3, 2),
            Point::new(3, 3),
            Point::new(3, 4),
        ];
        expected.sort();
        assert_eq!(marked(&grid), expected);
        // east is tried before south, so the top corridor is walked and abandoned first
        assert_eq!(grid[Point::new(1, 2)], GridCell::DeadEnd);
        assert_eq!(grid[Point::new(1, 3)], GridCell::DeadEnd);
        assert_eq!(grid.count(GridCell::DeadEnd), 2);
    }

    #[test]
    fn test_dead_ends_are_marked() {
        // the entrance leads into a branch point; north is tried first and is a dead end
        let mut grid = Grid::new(5, 5, GridCell::Wall);
        for (row, column) in [(2, 0), (2, 1), (1, 1), (2, 2), (2, 3), (2, 4)] {
            grid[Point::new(row, column)] = GridCell::Path;
        }
        let (entry, exit) = (Point::new(2, 0), Point::new(2, 4));
        assert!(solve_dfs(&mut grid, entry, exit));
        assert_eq!(grid[Point::new(1, 1)], GridCell::DeadEnd);
        assert_eq!(marked(&grid).len(), 5);
    }

    #[test]
    fn test_unreachable_exit() {
        let mut grid = Grid::new(3, 5, GridCell::Wall);
        for (row, column) in [(1, 0), (1, 1), (1, 3), (1, 4)] {
            grid[Point::new(row, column)] = GridCell::Path;
        }
        assert!(!solve_dfs(&mut grid, Point::new(1, 0), Point::new(1, 4)));
        assert_eq!(grid[Point::new(1, 0)], GridCell::DeadEnd);
        assert_eq!(grid[Point::new(1, 1)], GridCell::DeadEnd);
        assert_eq!(grid.count(GridCell::EscapeMark), 0);
    }

    #[test]
    fn test_second_solve_fails() {
        let (mut grid, entry, exit) = scenario();
        assert!(solve_dfs(&mut grid, entry, exit));
        assert!(!solve_dfs(&mut grid, entry, exit));
    }

    #[test]
    fn test_entry_outside_grid() {
        let (mut grid, _, exit) = scenario();
        assert!(!solve_dfs(&mut grid, Point::new(9, 9), exit));
    }
}
