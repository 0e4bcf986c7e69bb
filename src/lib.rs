use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
mod dom;
pub mod error;
pub mod game;
pub mod root;
pub mod types;
pub mod view;

pub use config::MountOptions;
pub use error::MountError;
pub use game::GameInstance;
pub use root::TicTacToe;
pub use types::{Cell, GameOutcome, GameSnapshot, Player};

/// Page entry point: one game, drawn into `document.body`.
/// The returned handle keeps the game alive.
#[wasm_bindgen]
pub fn start() -> Result<TicTacToe, JsValue> {
    let app = TicTacToe::new();
    app.mount_with(&MountOptions::default())?;
    Ok(app)
}
