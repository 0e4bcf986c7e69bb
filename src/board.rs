use crate::types::{Cell, GameOutcome, Player};

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;
/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe board, row-major (row = index / 3, col = index % 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_LEN],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_LEN]) -> Self {
        Self { cells }
    }

    /// Returns `None` when `index` is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_LEN] {
        &self.cells
    }

    /// Writes `cell` at `index`. Off-board indices are ignored.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }
}

/// True iff some winning line holds three of `player`'s marks.
pub fn has_won(player: Player, board: &Board) -> bool {
    let mark = Cell::from(player);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.cells[idx] == mark))
}

/// True iff no cell is empty.
pub fn is_full(board: &Board) -> bool {
    board.cells.iter().all(|&cell| cell != Cell::Empty)
}

/// X-win beats O-win beats draw when several hold at once.
pub fn outcome(board: &Board) -> GameOutcome {
    if has_won(Player::X, board) {
        GameOutcome::XWins
    } else if has_won(Player::O, board) {
        GameOutcome::OWins
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
