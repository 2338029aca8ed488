//! Saving and loading grids as a JSON array of rows of cell codes
//! (`0` path, `1` wall, `2` escape mark, `3` dead end).

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::generators::entrance::find_openings;
use crate::maze::{Grid, GridCell, Maze};

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct GridFile {
    rows: Vec<Vec<u8>>,
}

impl From<&Grid> for GridFile {
    fn from(grid: &Grid) -> Self {
        GridFile {
            rows: grid
                .rows()
                .map(|row| row.iter().map(|cell| cell.code()).collect())
                .collect(),
        }
    }
}

impl TryFrom<GridFile> for Grid {
    type Error = MazeError;

    fn try_from(file: GridFile) -> Result<Self> {
        if file.rows.is_empty() {
            return Err(MazeError::InvalidGrid {
                reason: "maze is empty".to_string(),
            });
        }
        let rows = file
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|code| {
                        GridCell::from_code(code).ok_or_else(|| MazeError::InvalidGrid {
                            reason: format!("unknown cell code {code}"),
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Grid::from_rows(rows).ok_or_else(|| MazeError::InvalidGrid {
            reason: "rows have different lengths".to_string(),
        })
    }
}

pub fn save_grid(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &GridFile::from(grid))?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "saved maze");
    Ok(())
}

/// Loads a grid and recovers its entrance and exit.
///
/// Dimensions come from the stored rows. The entrance and exit are the first
/// open cells in the leftmost and rightmost columns; a grid without them is
/// rejected. A grid that already carries solver marks loads as solved.
pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let file: GridFile = serde_json::from_reader(reader)?;
    let grid = Grid::try_from(file)?;
    let (entry, exit) = find_openings(&grid)?;
    tracing::info!(
        path = %path.display(),
        height = grid.height(),
        width = grid.width(),
        "loaded maze"
    );
    Ok(Maze::restore(grid, entry, exit))
}
