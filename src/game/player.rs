use std::fmt;

use super::cell::{CellState, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// The mark this player leaves on the board
    pub fn to_state(self) -> CellState {
        match self {
            Player::Red => CellState::Red,
            Player::Yellow => CellState::Yellow,
        }
    }

    pub fn color(self) -> Color {
        self.to_state().color()
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
