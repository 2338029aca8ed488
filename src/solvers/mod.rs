mod dfs;

pub use dfs::solve_dfs;

use crate::maze::Maze;

/// Finds a route from the maze's entry to its exit, annotating the grid in place.
///
/// The maze is marked as solved whatever the outcome, since the escape marks and
/// dead ends left in the grid would spoil a second attempt.
pub fn solve_maze(maze: &mut Maze) -> bool {
    let (entry, exit) = (maze.entry(), maze.exit());
    let found = solve_dfs(maze.grid_mut(), entry, exit);
    maze.mark_solved();
    tracing::info!(found, %entry, %exit, "solved maze");
    found
}
