//! Connect Four board model and win detection: cell states and colors, the
//! rectangular board snapshot, and the directional run scan.

mod board;
mod cell;
mod player;
mod winner;

pub use board::{Board, Row, COLS, ROWS};
pub use cell::{color_for, Cell, CellState, Color};
pub use player::Player;
pub use winner::{
    find_winner, find_winning_run, outcome, winning_run_at, Direction, GameOutcome, Run,
    RUN_LENGTH,
};
