use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod carve;
pub mod entrance;
pub mod graph;
pub mod spanning_tree;

use carve::carve_grid;
use entrance::place_entrance_and_exit;
use graph::build_weighted_graph;
use spanning_tree::build_spanning_tree;

use crate::error::Result;
use crate::maze::{Maze, MazeSize};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of the requested size.
pub fn generate_maze(size: MazeSize, seed: Option<u64>) -> Result<Maze> {
    generate_maze_with(size, &mut get_rng(seed))
}

/// Runs the whole pipeline with the given randomness: weighted graph, spanning
/// tree, carving, then entrance and exit.
pub fn generate_maze_with<R: Rng>(size: MazeSize, rng: &mut R) -> Result<Maze> {
    let graph = build_weighted_graph(size.inner_height(), size.inner_width(), rng);
    let tree = build_spanning_tree(&graph)?;
    let mut grid = carve_grid(&tree, size.height(), size.width(), size.inner_width())?;
    let (entry, exit) = place_entrance_and_exit(&mut grid)?;

    tracing::info!(
        height = size.height(),
        width = size.width(),
        %entry,
        %exit,
        "generated maze"
    );
    Ok(Maze::new(grid, entry, exit))
}
