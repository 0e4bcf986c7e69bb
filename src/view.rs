//! Pure projection of the game state onto a UI tree.
//!
//! Nothing here touches the DOM. `dom` turns the tree into elements and
//! routes each [`Action`] back to the root.

use serde::Serialize;

use crate::board::{self, Board};
use crate::game::GameInstance;
use crate::types::{Cell, Player};

/// What a click on an element asks the root to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Move(usize),
    Undo,
    Reset,
}

/// One element of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            class: None,
            text: String::new(),
            action: None,
            children: Vec::new(),
        }
    }

    fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    fn children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Depth-first search by element id.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

pub fn square(index: usize, cell: Cell) -> Node {
    let class = match cell {
        Cell::Empty => "square",
        Cell::X => "square square-x",
        Cell::O => "square square-o",
    };
    Node::new("button")
        .class(class)
        .text(cell.label())
        .on_click(Action::Move(index))
}

pub fn board(board: &Board) -> Node {
    let squares = board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, &cell)| square(index, cell))
        .collect();
    Node::new("div").id("board").children(squares)
}

/// Status line. A full board reads as a draw before any win is checked.
pub fn prompt_text(board: &Board, current_player: Player) -> String {
    if board::is_full(board) {
        "Draw.".to_string()
    } else if board::has_won(Player::X, board) {
        "X wins.".to_string()
    } else if board::has_won(Player::O, board) {
        "O wins.".to_string()
    } else {
        format!("It is {}'s turn.", current_player.symbol())
    }
}

pub fn prompt(board: &Board, current_player: Player) -> Node {
    Node::new("h1")
        .id("prompt")
        .text(prompt_text(board, current_player))
}

pub fn undo_control() -> Node {
    Node::new("button")
        .id("undo")
        .text("Undo")
        .on_click(Action::Undo)
}

pub fn reset_control() -> Node {
    Node::new("button")
        .id("reset")
        .text("Reset")
        .on_click(Action::Reset)
}

/// Whole page: board, undo, status line, reset.
pub fn render(game: &GameInstance) -> Node {
    Node::new("div").id("tictactoe").children(vec![
        board(game.board()),
        undo_control(),
        prompt(game.board(), game.current_player()),
        reset_control(),
    ])
}
