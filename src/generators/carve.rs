use super::graph::{Graph, NodeId};
use crate::error::{MazeError, Result};
use crate::maze::{Grid, GridCell, Point};

/// Physical coordinates of logical node `id`: every logical cell sits on odd
/// rows and columns, leaving one cell between neighbors for a corridor or a wall.
pub fn node_point(id: NodeId, inner_width: usize) -> Point {
    Point::new((id / inner_width) * 2 + 1, (id % inner_width) * 2 + 1)
}

/// Rasterizes a spanning tree into a `height × width` grid of walls and paths.
///
/// Only east and south edges are carved from each node. The north and west
/// corridors are carved from the neighbor's side, so each corridor is opened once.
pub fn carve_grid(tree: &Graph, height: usize, width: usize, inner_width: usize) -> Result<Grid> {
    if tree.is_empty() {
        return Err(MazeError::EmptyTree);
    }

    let mut grid = Grid::new(height, width, GridCell::Wall);

    for node in tree.nodes() {
        let id = node.id();
        let cell = node_point(id, inner_width);
        grid[cell] = GridCell::Path;

        for connection in node.connections() {
            if connection.to == id + 1 {
                grid[Point::new(cell.row, cell.column + 1)] = GridCell::Path;
            } else if connection.to == id + inner_width {
                grid[Point::new(cell.row + 1, cell.column)] = GridCell::Path;
            }
        }
    }

    tracing::debug!(height, width, paths = grid.count(GridCell::Path), "carved grid");
    Ok(grid)
}
