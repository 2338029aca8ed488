pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;
pub mod store;

pub use error::{MazeError, Result};
pub use maze::{GridCell, Maze, MazeSize};
