use std::fmt;

/// State of one physical cell of the maze grid.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    /// An open cell that has not been touched by the solver.
    #[default]
    Path,
    Wall,
    /// A cell on the route the solver is currently committed to.
    EscapeMark,
    /// A cell the solver backtracked from. Drawn like a path, but never retried.
    DeadEnd,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Code used by the persisted grid format.
    pub fn code(self) -> u8 {
        match self {
            GridCell::Path => 0,
            GridCell::Wall => 1,
            GridCell::EscapeMark => 2,
            GridCell::DeadEnd => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GridCell::Path),
            1 => Some(GridCell::Wall),
            2 => Some(GridCell::EscapeMark),
            3 => Some(GridCell::DeadEnd),
            _ => None,
        }
    }

    /// Whether the cell is not a wall.
    pub fn is_open(self) -> bool {
        self != GridCell::Wall
    }

    /// Whether the cell carries a solver annotation.
    pub fn is_solver_mark(self) -> bool {
        matches!(self, GridCell::EscapeMark | GridCell::DeadEnd)
    }

    /// Plain two-column glyph for the cell.
    pub fn glyph(self) -> &'static str {
        match self {
            GridCell::Path | GridCell::DeadEnd => "  ",
            GridCell::Wall => "\u{2588}\u{2588}",
            GridCell::EscapeMark => "//",
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = self.glyph();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                glyph.width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        f.write_str(glyph)
    }
}
