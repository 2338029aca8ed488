use thiserror::Error;

use crate::maze::Side;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Maze size cannot be less than {minimum} (requested {requested})")]
    SizeTooSmall { requested: usize, minimum: usize },

    #[error("Maze size cannot be more than {maximum} (requested {requested})")]
    SizeTooLarge { requested: usize, maximum: usize },

    #[error("Graph cannot be empty")]
    EmptyGraph,

    #[error("Tree cannot be empty")]
    EmptyTree,

    #[error("Didn't find an opening on the {side} edge")]
    OpeningNotFound { side: Side },

    #[error("Maze file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Maze file has an invalid format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Invalid maze data: {reason}")]
    InvalidGrid { reason: String },
}

pub type Result<T> = std::result::Result<T, MazeError>;
