#![cfg(target_arch = "wasm32")]

use tictactoe::{MountError, MountOptions, TicTacToe};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fresh_container(id: &str) -> Element {
    let document = document();
    if let Some(stale) = document.get_element_by_id(id) {
        stale.remove();
    }
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn mount(id: &str) -> (TicTacToe, Element) {
    let container = fresh_container(id);
    let app = TicTacToe::new();
    app.mount_with(&MountOptions {
        container_id: Some(id.to_string()),
    })
    .unwrap();
    (app, container)
}

fn click(container: &Element, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn click_square(container: &Element, index: usize) {
    click(container, &format!("#board > button:nth-child({})", index + 1));
}

fn prompt_text(container: &Element) -> String {
    container
        .query_selector("#prompt")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn field(value: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn mount_draws_initial_layout() {
    let (_app, container) = mount("t-layout");

    let root = container.query_selector("#tictactoe").unwrap().unwrap();
    assert_eq!(root.child_element_count(), 4);
    assert_eq!(
        container.query_selector_all("#board > button").unwrap().length(),
        9
    );
    assert_eq!(prompt_text(&container), "It is X's turn.");
}

#[wasm_bindgen_test]
fn clicking_squares_plays_until_a_win() {
    let (app, container) = mount("t-win");
    for index in [0, 1, 3, 4, 6] {
        click_square(&container, index);
    }

    assert_eq!(prompt_text(&container), "X wins.");
    let first = container.query_selector("#board > button").unwrap().unwrap();
    assert_eq!(first.class_name(), "square square-x");

    click_square(&container, 8);
    let snapshot = app.snapshot().unwrap();
    assert_eq!(field(&snapshot, "outcome").as_string().as_deref(), Some("XWins"));
    assert_eq!(
        js_sys::Array::from(&field(&snapshot, "history")).length(),
        5
    );
}

#[wasm_bindgen_test]
fn undo_and_reset_buttons_redraw() {
    let (app, container) = mount("t-controls");
    click_square(&container, 4);
    click(&container, "#undo");

    assert_eq!(prompt_text(&container), "It is O's turn.");
    assert!(app.game().history().is_empty());

    click_square(&container, 0);
    click(&container, "#reset");
    assert_eq!(prompt_text(&container), "It is X's turn.");
    assert_eq!(
        field(&app.snapshot().unwrap(), "currentPlayer").as_string().as_deref(),
        Some("X")
    );
}

#[wasm_bindgen_test]
fn calls_from_js_redraw_the_page() {
    let (app, container) = mount("t-js");
    app.make_move(4);

    assert_eq!(prompt_text(&container), "It is O's turn.");
}

#[wasm_bindgen_test]
fn mounting_twice_is_rejected() {
    let (app, _container) = mount("t-twice");

    assert_eq!(
        app.mount_with(&MountOptions::default()),
        Err(MountError::AlreadyMounted)
    );
}

#[wasm_bindgen_test]
fn missing_container_is_reported() {
    let app = TicTacToe::new();
    let err = app
        .mount_with(&MountOptions {
            container_id: Some("t-nowhere".to_string()),
        })
        .unwrap_err();

    assert_eq!(err, MountError::ContainerNotFound("t-nowhere".to_string()));
    assert!(!app.is_mounted());
}

#[wasm_bindgen_test]
fn invalid_options_object_is_rejected() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"colour".into(), &"red".into()).unwrap();

    let app = TicTacToe::new();
    assert!(app.mount(options.into()).is_err());
    assert!(!app.is_mounted());
}
