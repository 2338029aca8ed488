use mazecarve::{MazeSize, generators::generate_maze, solvers::solve_maze};

fn main() -> mazecarve::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);
    let size = MazeSize::new(255)?;

    for seed in 0..num_iters as u64 {
        let mut maze = generate_maze(size, Some(seed))?;
        if !solve_maze(&mut maze) {
            eprintln!("seed {seed}: no escape found");
        }
    }
    Ok(())
}
