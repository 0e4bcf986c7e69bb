use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use tracing::{error, info};
use wasm_bindgen::prelude::*;

use crate::config::MountOptions;
use crate::dom::Surface;
use crate::error::{MountError, Result};
use crate::game::GameInstance;
use crate::view::{self, Action, Node};

/// Composition root: owns the one game for the lifetime of the page and
/// redraws the whole tree after every transition.
#[wasm_bindgen]
pub struct TicTacToe {
    shared: Rc<Shared>,
}

struct Shared {
    game: RefCell<GameInstance>,
    surface: RefCell<Option<Surface>>,
}

impl Shared {
    fn dispatch(&self, action: Action) {
        {
            let mut game = self.game.borrow_mut();
            match action {
                Action::Move(index) => game.make_move(index),
                Action::Undo => game.undo_move(),
                Action::Reset => game.reset(),
            }
        }
        if let Err(err) = self.redraw() {
            error!(%err, ?action, "redraw failed");
        }
    }

    fn redraw(&self) -> Result<()> {
        let mut surface = self.surface.borrow_mut();
        let Some(surface) = surface.as_mut() else {
            return Ok(());
        };
        let tree = view::render(&self.game.borrow());
        surface.draw(&tree)
    }
}

#[wasm_bindgen]
impl TicTacToe {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            shared: Rc::new(Shared {
                game: RefCell::new(GameInstance::new()),
                surface: RefCell::new(None),
            }),
        }
    }

    /// Out-of-range indices are ignored like any other illegal move.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&self, index: u32) {
        self.dispatch(Action::Move(index as usize));
    }

    #[wasm_bindgen(js_name = undoMove)]
    pub fn undo_move(&self) {
        self.dispatch(Action::Undo);
    }

    pub fn reset(&self) {
        self.dispatch(Action::Reset);
    }

    /// Current `GameSnapshot` as a plain JS object.
    pub fn snapshot(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.game().to_snapshot()).map_err(JsValue::from)
    }

    /// Current UI tree as a plain JS object.
    pub fn view(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.render()).map_err(JsValue::from)
    }

    /// Draws into the page and keeps redrawing after every click.
    /// `options` is a `MountOptions` object, or `undefined`.
    pub fn mount(&self, options: JsValue) -> std::result::Result<(), JsValue> {
        let options = MountOptions::from_js(options)?;
        self.mount_with(&options)?;
        Ok(())
    }
}

impl TicTacToe {
    /// Applies one action, then redraws if mounted.
    pub fn dispatch(&self, action: Action) {
        self.shared.dispatch(action);
    }

    pub fn game(&self) -> Ref<'_, GameInstance> {
        self.shared.game.borrow()
    }

    pub fn render(&self) -> Node {
        view::render(&self.game())
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.surface.borrow().is_some()
    }

    pub fn mount_with(&self, options: &MountOptions) -> Result<()> {
        if self.is_mounted() {
            return Err(MountError::AlreadyMounted);
        }

        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        let surface = Surface::attach(options.container_id.as_deref(), move |action| {
            if let Some(shared) = shared.upgrade() {
                shared.dispatch(action);
            }
        })?;
        install(&self.shared.surface, surface, |surface| surface.draw(&self.render()))?;

        info!(container = ?options.container_id, "mounted");
        Ok(())
    }
}

/// Keeps `surface` only if its first draw succeeds; otherwise it is dropped,
/// which detaches it, and the root stays unmounted.
fn install<S>(
    slot: &RefCell<Option<S>>,
    mut surface: S,
    first_draw: impl FnOnce(&mut S) -> Result<()>,
) -> Result<()> {
    first_draw(&mut surface)?;
    *slot.borrow_mut() = Some(surface);
    Ok(())
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}
