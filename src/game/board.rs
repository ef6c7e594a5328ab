use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellState};
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The ordered cells of one board row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Row { cells }
    }
}

/// A rectangular grid of cells. Row 0 is the top.
///
/// Every constructor validates the shape, so a `Board` value is always
/// rectangular and each cell sits at the position it records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: Vec<Row>,
    #[serde(skip_serializing)]
    cols: usize,
}

#[derive(Deserialize)]
struct RawBoard {
    rows: Vec<Row>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_rows(raw.rows)
    }
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = (0..rows)
            .map(|r| Row::from((0..cols).map(|c| Cell::new(r, c)).collect::<Vec<_>>()))
            .collect();
        Board { rows, cols }
    }

    /// Create an empty 6x7 board
    pub fn standard() -> Self {
        Board::new(ROWS, COLS)
    }

    /// Build a board from plain states, assigning each cell its position.
    pub fn from_states(states: Vec<Vec<CellState>>) -> Result<Self, BoardError> {
        let cols = check_shape(states.iter().map(Vec::len))?;
        let rows = states
            .into_iter()
            .enumerate()
            .map(|(r, row)| {
                Row::from(
                    row.into_iter()
                        .enumerate()
                        .map(|(c, state)| Cell::with_state(r, c, state))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        Ok(Board { rows, cols })
    }

    /// Build a board from caller-constructed rows. Fails on ragged rows or
    /// when a cell's recorded position disagrees with where it sits.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self, BoardError> {
        let cols = check_shape(rows.iter().map(Row::len))?;
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.cells().iter().enumerate() {
                if cell.row() != r || cell.col() != c {
                    return Err(BoardError::MisplacedCell {
                        row: r,
                        col: c,
                        found_row: cell.row(),
                        found_col: cell.col(),
                    });
                }
            }
        }
        Ok(Board { rows, cols })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }

    pub fn state(&self, row: usize, col: usize) -> Option<CellState> {
        self.get(row, col).map(Cell::state)
    }

    pub fn set_state(&mut self, row: usize, col: usize, state: CellState) -> Result<(), BoardError> {
        let (rows, cols) = (self.num_rows(), self.num_cols());
        let cell = self
            .get_mut(row, col)
            .ok_or(BoardError::OutOfBounds { row, col, rows, cols })?;
        cell.set_state(state);
        Ok(())
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.state().is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Returns the common row length, or the first row that differs from row 0.
fn check_shape(lengths: impl Iterator<Item = usize>) -> Result<usize, BoardError> {
    let mut expected = None;
    for (row, found) in lengths.enumerate() {
        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(BoardError::InvalidBoardShape {
                    row,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
    }
    Ok(expected.unwrap_or(0))
}

/// One line per row, top row first: `.` empty, `R` red, `Y` yellow.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.cells.iter().map(|cell| cell.state().symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let states = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|ch| !ch.is_ascii_whitespace())
                    .enumerate()
                    .map(|(col, symbol)| {
                        CellState::from_symbol(symbol)
                            .ok_or(BoardError::UnknownSymbol { row, col, symbol })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_states(states)
    }
}
