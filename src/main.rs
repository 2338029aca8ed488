use clap::Parser;

use mazecarve::{
    MazeSize, app::App, config::AppConfig, generators::generate_maze, logging::init_logging,
    render::print_grid, solvers::solve_maze,
};

/// Prints one maze, and its solution if asked, without entering the menu.
fn print_once(config: &AppConfig, requested: usize) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    let result = MazeSize::new(requested).and_then(|size| generate_maze(size, config.seed));
    let mut maze = match result {
        Ok(maze) => maze,
        Err(e) => {
            tracing::warn!(requested, "maze generation failed: {e}");
            eprintln!("{e}");
            return Ok(());
        }
    };
    print_grid(&mut stdout, maze.grid())?;
    if config.solve {
        println!();
        if !solve_maze(&mut maze) {
            eprintln!("No escape found");
        }
        print_grid(&mut stdout, maze.grid())?;
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let config = AppConfig::parse();
    let _guard = init_logging(&config)?;
    tracing::debug!(?config, "starting");

    if let Some(requested) = config.size {
        return print_once(&config, requested);
    }

    let mut app = App::new(config.seed);
    app.run(&mut std::io::stdin().lock(), &mut std::io::stdout())
}
