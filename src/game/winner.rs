//! Win detection over a board snapshot.
//!
//! Every start cell is visited in row-major order and probed along
//! [`Direction::ALL`] in order; the first run found decides the result.

use super::{Board, CellState, Player};

/// Number of consecutive marks needed to win.
pub const RUN_LENGTH: usize = 4;

/// A scan direction, as a (row, col) step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right, \
    DiagonalDown,
    /// Top-right to bottom-left, /
    DiagonalUp,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// Four same-colored marks in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    state: CellState,
    start: (usize, usize),
    direction: Direction,
}

impl Run {
    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Board positions covered by the run, starting at [`Run::start`].
    pub fn positions(&self) -> [(usize, usize); RUN_LENGTH] {
        let mut out = [self.start; RUN_LENGTH];
        for (k, pos) in out.iter_mut().enumerate() {
            // Construction guarantees every step stays on the board.
            *pos = step(self.start, self.direction, k).unwrap_or(self.start);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Position `k` steps from `start` along `direction`, if non-negative.
fn step(start: (usize, usize), direction: Direction, k: usize) -> Option<(usize, usize)> {
    let (dr, dc) = direction.delta();
    let k = k as isize;
    let row = start.0.checked_add_signed(dr * k)?;
    let col = start.1.checked_add_signed(dc * k)?;
    Some((row, col))
}

/// Check for a run starting at `(row, col)` and extending along `direction`.
/// Runs that would leave the board never match.
pub fn winning_run_at(board: &Board, row: usize, col: usize, direction: Direction) -> Option<Run> {
    let state = board.state(row, col)?;
    if state.is_empty() {
        return None;
    }
    for k in 1..RUN_LENGTH {
        let (r, c) = step((row, col), direction, k)?;
        if board.state(r, c)? != state {
            return None;
        }
    }
    Some(Run {
        state,
        start: (row, col),
        direction,
    })
}

/// First run in scan order, if any.
pub fn find_winning_run(board: &Board) -> Option<Run> {
    for row in 0..board.num_rows() {
        for col in 0..board.num_cols() {
            for direction in Direction::ALL {
                if let Some(run) = winning_run_at(board, row, col, direction) {
                    return Some(run);
                }
            }
        }
    }
    None
}

/// Color of the winning player, or `Empty` when nobody has four in a row.
pub fn find_winner(board: &Board) -> CellState {
    find_winning_run(board).map_or(CellState::Empty, |run| run.state())
}

/// `None` while the game can continue.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if let Some(player) = find_winner(board).player() {
        Some(GameOutcome::Winner(player))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_with(rows: usize, cols: usize, marks: &[(usize, usize)], state: CellState) -> Board {
        let mut board = Board::new(rows, cols);
        for &(r, c) in marks {
            board.set_state(r, c, state).unwrap();
        }
        board
    }

    /// Brute-force reference: any line of RUN_LENGTH equal marks.
    fn reference_has_run(board: &Board) -> bool {
        let (rows, cols) = (board.num_rows() as isize, board.num_cols() as isize);
        let n = RUN_LENGTH as isize;
        for r in 0..rows {
            for c in 0..cols {
                for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                    let end_r = r + dr * (n - 1);
                    let end_c = c + dc * (n - 1);
                    if end_r < 0 || end_r >= rows || end_c < 0 || end_c >= cols {
                        continue;
                    }
                    let first = board.state(r as usize, c as usize).unwrap();
                    if first.is_empty() {
                        continue;
                    }
                    if (1..n).all(|k| {
                        board.state((r + dr * k) as usize, (c + dc * k) as usize) == Some(first)
                    }) {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(find_winner(&Board::standard()), CellState::Empty);
        assert_eq!(find_winner(&Board::new(0, 0)), CellState::Empty);
        assert_eq!(find_winner(&Board::new(1, 1)), CellState::Empty);
    }

    #[test]
    fn test_bottom_row_red() {
        let board = board_with(6, 7, &[(5, 0), (5, 1), (5, 2), (5, 3)], CellState::Red);
        assert_eq!(find_winner(&board), CellState::Red);
    }

    #[test]
    fn test_column_yellow() {
        let board = board_with(6, 7, &[(0, 3), (1, 3), (2, 3), (3, 3)], CellState::Yellow);
        assert_eq!(find_winner(&board), CellState::Yellow);
    }

    #[test]
    fn test_diagonal_down_red() {
        let board = board_with(6, 7, &[(2, 0), (3, 1), (4, 2), (5, 3)], CellState::Red);
        assert_eq!(find_winner(&board), CellState::Red);
        let run = find_winning_run(&board).unwrap();
        assert_eq!(run.direction(), Direction::DiagonalDown);
        assert_eq!(run.positions(), [(2, 0), (3, 1), (4, 2), (5, 3)]);
    }

    #[test]
    fn test_diagonal_up_yellow() {
        let board = board_with(6, 7, &[(5, 2), (4, 3), (3, 4), (2, 5)], CellState::Yellow);
        assert_eq!(find_winner(&board), CellState::Yellow);
        let run = find_winning_run(&board).unwrap();
        assert_eq!(run.start(), (2, 5));
        assert_eq!(run.direction(), Direction::DiagonalUp);
        assert_eq!(run.positions(), [(2, 5), (3, 4), (4, 3), (5, 2)]);
    }

    #[test]
    fn test_every_orientation_and_color() {
        let lines: [&[(usize, usize)]; 4] = [
            &[(1, 2), (1, 3), (1, 4), (1, 5)],
            &[(1, 6), (2, 6), (3, 6), (4, 6)],
            &[(0, 3), (1, 4), (2, 5), (3, 6)],
            &[(0, 3), (1, 2), (2, 1), (3, 0)],
        ];
        for state in [CellState::Red, CellState::Yellow] {
            for marks in lines {
                let board = board_with(6, 7, marks, state);
                assert_eq!(find_winner(&board), state, "line {marks:?}");
            }
        }
    }

    #[test]
    fn test_three_is_not_enough() {
        let lines: [&[(usize, usize)]; 4] = [
            &[(5, 0), (5, 1), (5, 2)],
            &[(3, 3), (4, 3), (5, 3)],
            &[(3, 0), (4, 1), (5, 2)],
            &[(5, 3), (4, 4), (3, 5)],
        ];
        for marks in lines {
            let board = board_with(6, 7, marks, CellState::Red);
            assert_eq!(find_winner(&board), CellState::Empty);
        }
    }

    #[test]
    fn test_mixed_colors_break_a_run() {
        let mut board = board_with(6, 7, &[(5, 0), (5, 1), (5, 3)], CellState::Red);
        board.set_state(5, 2, CellState::Yellow).unwrap();
        assert_eq!(find_winner(&board), CellState::Empty);
    }

    #[test]
    fn test_no_wraparound_across_rows() {
        // Row-major neighbours: end of row 0 and start of row 1
        let board = board_with(6, 7, &[(0, 5), (0, 6), (1, 0), (1, 1)], CellState::Red);
        assert_eq!(find_winner(&board), CellState::Empty);
    }

    #[test]
    fn test_no_wraparound_on_diagonal_up_edge() {
        // Flat indices 1, 7, 13, 19 step by cols - 1 but leave the board at column 0
        let board = board_with(6, 7, &[(0, 1), (1, 0), (1, 6), (2, 5)], CellState::Yellow);
        assert_eq!(find_winner(&board), CellState::Empty);
    }

    #[test]
    fn test_small_boards_only_match_fitting_directions() {
        let board = board_with(1, 4, &[(0, 0), (0, 1), (0, 2), (0, 3)], CellState::Red);
        assert_eq!(find_winner(&board), CellState::Red);
        let board = board_with(3, 3, &[(0, 0), (1, 1), (2, 2)], CellState::Red);
        assert_eq!(find_winner(&board), CellState::Empty);
    }

    #[test]
    fn test_first_run_in_scan_order_wins() {
        // Yellow's run starts on row 1, Red's on row 4
        let mut board = board_with(6, 7, &[(4, 0), (4, 1), (4, 2), (4, 3)], CellState::Red);
        for c in 3..7 {
            board.set_state(1, c, CellState::Yellow).unwrap();
        }
        assert_eq!(find_winner(&board), CellState::Yellow);

        // Same start cell: horizontal is probed before vertical
        let mut board = board_with(6, 7, &[(0, 0), (0, 1), (0, 2), (0, 3)], CellState::Red);
        for r in 1..4 {
            board.set_state(r, 0, CellState::Red).unwrap();
        }
        assert_eq!(find_winning_run(&board).unwrap().direction(), Direction::Horizontal);
    }

    #[test]
    fn test_longer_line_reports_leftmost_start() {
        let board = board_with(6, 7, &[(5, 1), (5, 2), (5, 3), (5, 4), (5, 5)], CellState::Red);
        assert_eq!(find_winning_run(&board).unwrap().start(), (5, 1));
    }

    #[test]
    fn test_goal_state_is_ignored() {
        let mut board = Board::standard();
        for c in 0..4 {
            board.get_mut(5, c).unwrap().set_goal_state(CellState::Red);
        }
        assert_eq!(find_winner(&board), CellState::Empty);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(&Board::standard()), None);

        let board = board_with(6, 7, &[(0, 3), (1, 3), (2, 3), (3, 3)], CellState::Yellow);
        assert_eq!(outcome(&board), Some(GameOutcome::Winner(Player::Yellow)));

        // Column pairs alternate colors; no four in a row anywhere
        let draw: Board = "
            RRYYRRY
            YYRRYYR
            RRYYRRY
            YYRRYYR
            RRYYRRY
            YYRRYYR
        "
        .parse()
        .unwrap();
        assert_eq!(find_winner(&draw), CellState::Empty);
        assert_eq!(outcome(&draw), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_winner_is_idempotent() {
        let board = board_with(6, 7, &[(2, 0), (3, 1), (4, 2), (5, 3)], CellState::Red);
        assert_eq!(find_winner(&board), find_winner(&board));
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (0usize..8, 0usize..9).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(
                proptest::collection::vec(
                    prop_oneof![
                        Just(CellState::Empty),
                        Just(CellState::Red),
                        Just(CellState::Yellow)
                    ],
                    cols,
                ),
                rows,
            )
            .prop_map(|states| Board::from_states(states).unwrap())
        })
    }

    proptest! {
        #[test]
        fn test_empty_board_any_size(rows in 0usize..12, cols in 0usize..12) {
            prop_assert_eq!(find_winner(&Board::new(rows, cols)), CellState::Empty);
        }

        #[test]
        fn test_matches_reference(board in arb_board()) {
            let winner = find_winner(&board);
            prop_assert_eq!(winner != CellState::Empty, reference_has_run(&board));
            prop_assert_eq!(find_winner(&board), winner);
        }

        #[test]
        fn test_reported_run_is_on_board(board in arb_board()) {
            if let Some(run) = find_winning_run(&board) {
                for (r, c) in run.positions() {
                    prop_assert_eq!(board.state(r, c), Some(run.state()));
                }
            }
        }
    }
}
