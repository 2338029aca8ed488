use std::io::{BufRead, Write};

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};
use rand::rngs::StdRng;

use crate::{
    error::Result,
    generators::{generate_maze_with, get_rng},
    maze::{Maze, MazeSize},
    render::print_grid,
    solvers::solve_maze,
    store::{load_maze, save_grid},
};

const INVALID_MESSAGE: &str = "Incorrect option. Please try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Exit,
    Generate,
    Load,
    Save,
    Display,
    FindEscape,
}

impl MenuChoice {
    /// Parses a menu line. Options 3 to 5 only exist while a maze is in memory.
    fn parse(line: &str, maze_in_memory: bool) -> Option<Self> {
        let choice = match line.trim().parse::<u8>().ok()? {
            0 => MenuChoice::Exit,
            1 => MenuChoice::Generate,
            2 => MenuChoice::Load,
            3 => MenuChoice::Save,
            4 => MenuChoice::Display,
            5 => MenuChoice::FindEscape,
            _ => return None,
        };
        match choice {
            MenuChoice::Save | MenuChoice::Display | MenuChoice::FindEscape if !maze_in_memory => {
                None
            }
            _ => Some(choice),
        }
    }
}

/// Console session: owns the maze currently in memory and drives the menu.
pub struct App {
    rng: StdRng,
    maze: Option<Maze>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}

impl App {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: get_rng(seed),
            maze: None,
        }
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Main menu loop. Returns when the user picks exit or the input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> std::io::Result<()> {
        tracing::info!("Started main app loop");
        loop {
            self.display_menu(out)?;
            let Some(line) = App::read_line(input)? else {
                break;
            };
            let Some(choice) = MenuChoice::parse(&line, self.maze.is_some()) else {
                App::print_warning(out, INVALID_MESSAGE)?;
                continue;
            };
            match choice {
                MenuChoice::Exit => break,
                MenuChoice::Generate => self.generate(input, out)?,
                MenuChoice::Load => self.load(input, out)?,
                MenuChoice::Save => self.save(input, out)?,
                MenuChoice::Display => self.display(out)?,
                MenuChoice::FindEscape => self.find_escape(out)?,
            }
        }
        writeln!(out, "Bye!")?;
        tracing::info!("Exiting main app loop");
        Ok(())
    }

    fn display_menu<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        queue!(
            out,
            style::PrintStyledContent(
                "=== Menu ===\n"
                    .with(Color::Green)
                    .attribute(Attribute::Bold)
            )
        )?;
        writeln!(out, "1. Generate a new maze")?;
        writeln!(out, "2. Load a maze")?;
        if self.maze.is_some() {
            writeln!(out, "3. Save the maze")?;
            writeln!(out, "4. Display the maze")?;
            writeln!(out, "5. Find the escape")?;
        }
        writeln!(out, "0. Exit")?;
        out.flush()
    }

    fn generate<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> std::io::Result<()> {
        writeln!(out, "An odd height and width will give you a better looking maze")?;
        writeln!(out, "Enter height of a new maze")?;
        out.flush()?;
        let Some(line) = App::read_line(input)? else {
            return Ok(());
        };
        let Ok(requested) = line.trim().parse::<usize>() else {
            return App::print_warning(out, INVALID_MESSAGE);
        };

        match self.build_maze(requested) {
            Ok(maze) => {
                print_grid(out, maze.grid())?;
                self.maze = Some(maze);
            }
            Err(e) => {
                tracing::warn!(requested, "maze generation failed: {e}");
                App::print_warning(out, &e.to_string())?;
            }
        }
        Ok(())
    }

    fn build_maze(&mut self, requested: usize) -> Result<Maze> {
        let size = MazeSize::new(requested)?;
        generate_maze_with(size, &mut self.rng)
    }

    fn load<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> std::io::Result<()> {
        let Some(path) = App::read_line(input)? else {
            return Ok(());
        };
        let path = path.trim();
        match load_maze(path) {
            Ok(maze) => self.maze = Some(maze),
            Err(e) => {
                tracing::warn!(path, "loading maze failed: {e}");
                App::print_warning(out, &format!("Cannot load the maze from {path}: {e}"))?;
            }
        }
        Ok(())
    }

    fn save<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> std::io::Result<()> {
        let Some(maze) = &self.maze else {
            return App::print_warning(out, "No maze has been generated or loaded");
        };
        let Some(path) = App::read_line(input)? else {
            return Ok(());
        };
        let path = path.trim();
        if let Err(e) = save_grid(path, maze.grid()) {
            tracing::warn!(path, "saving maze failed: {e}");
            App::print_warning(out, &format!("Cannot save the maze to {path}: {e}"))?;
        }
        Ok(())
    }

    fn display<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match &self.maze {
            Some(maze) => print_grid(out, maze.grid()),
            None => App::print_warning(out, "No maze has been generated or loaded"),
        }
    }

    fn find_escape<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let Some(maze) = &mut self.maze else {
            return App::print_warning(out, "No maze has been generated or loaded");
        };
        if maze.is_solved() {
            return App::print_warning(
                out,
                "The escape has already been marked. Generate or load a maze first",
            );
        }
        if !solve_maze(maze) {
            App::print_warning(out, "No escape found")?;
        }
        print_grid(out, maze.grid())
    }

    /// Reads one line, or `None` at end of input.
    fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        match input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    fn print_warning<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
        queue!(
            out,
            style::PrintStyledContent(
                format!("{message}\n")
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
            )
        )?;
        out.flush()
    }
}
