use tracing::debug;

use crate::board::{self, BOARD_LEN, Board};
use crate::types::{Cell, GameOutcome, GameSnapshot, Player};
use crate::view;

/// Number of squares; valid move indices are `0..SQUARE_COUNT`.
pub const SQUARE_COUNT: usize = BOARD_LEN;

/// Board, side to move and move history.
///
/// Every transition is total: a move or undo that does not apply leaves the
/// state untouched and reports nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInstance {
    board: Board,
    current_player: Player,
    history: Vec<usize>,
}

impl GameInstance {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Most recent move first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn outcome(&self) -> GameOutcome {
        board::outcome(&self.board)
    }

    /// Places the current player's mark at `index`.
    /// Ignored when the game is over, the index is off the board, or the
    /// square is taken.
    pub fn make_move(&mut self, index: usize) {
        if self.outcome() != GameOutcome::InProgress {
            return;
        }
        if self.board.get(index) != Some(Cell::Empty) {
            return;
        }

        let player = self.current_player;
        self.board.set(index, Cell::from(player));
        self.history.insert(0, index);
        self.current_player = player.opponent();

        debug!(index, player = player.symbol(), "move accepted");
    }

    /// Clears the most recent move. The side to move is left as it is.
    pub fn undo_move(&mut self) {
        if self.history.is_empty() {
            return;
        }

        let index = self.history.remove(0);
        self.board.set(index, Cell::Empty);

        debug!(index, "move undone");
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.cells().to_vec(),
            current_player: self.current_player,
            history: self.history.iter().map(|&idx| idx as u8).collect(),
            outcome: self.outcome(),
            prompt: view::prompt_text(&self.board, self.current_player),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.history.clear();
    }
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new()
    }
}
