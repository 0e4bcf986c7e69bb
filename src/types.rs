use serde::Serialize;

/// The side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    #[default]
    #[serde(rename = "")]
    Empty,
    X,
    O,
}

impl Cell {
    /// Text shown on the square. An empty square shows a single space.
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => " ",
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Self::X,
            Player::O => Self::O,
        }
    }
}

/// Derived from the board on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    InProgress,
    Draw,
    XWins,
    OWins,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Vec<Cell>,
    pub current_player: Player,
    /// Contract:
    /// - Most recent move first.
    /// - Every listed index holds a mark; no index appears twice.
    pub history: Vec<u8>,
    pub outcome: GameOutcome,
    pub prompt: String,
}
