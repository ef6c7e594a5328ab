use serde::{Deserialize, Serialize};

use super::Player;

/// What occupies a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl CellState {
    /// The player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Red => Some(Player::Red),
            CellState::Yellow => Some(Player::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    pub fn color(self) -> Color {
        color_for(self)
    }

    /// Single-character form used by the text board format.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Red => 'R',
            CellState::Yellow => 'Y',
        }
    }

    /// Inverse of [`CellState::symbol`], case-insensitive.
    pub fn from_symbol(symbol: char) -> Option<CellState> {
        match symbol.to_ascii_uppercase() {
            '.' => Some(CellState::Empty),
            'R' => Some(CellState::Red),
            'Y' => Some(CellState::Yellow),
            _ => None,
        }
    }
}

/// Fill color used when rendering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Red,
    Yellow,
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a cell state to its rendering color.
pub fn color_for(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::White,
        CellState::Red => Color::Red,
        CellState::Yellow => Color::Yellow,
    }
}

/// One board position. `row` and `col` are fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
    state: CellState,
    #[serde(default)]
    goal_state: CellState,
}

impl Cell {
    /// Create an empty cell at the given position
    pub fn new(row: usize, col: usize) -> Self {
        Cell::with_state(row, col, CellState::Empty)
    }

    pub fn with_state(row: usize, col: usize, state: CellState) -> Self {
        Cell {
            row,
            col,
            state,
            goal_state: CellState::Empty,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Target state assigned by the owning component. Carried, never
    /// interpreted by win detection.
    pub fn goal_state(&self) -> CellState {
        self.goal_state
    }

    pub fn set_goal_state(&mut self, goal_state: CellState) {
        self.goal_state = goal_state;
    }
}
