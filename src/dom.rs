//! Renders a [`Node`] tree into the page.
//!
//! Each render replaces the previous tree wholesale. Clicks are caught by a
//! single listener on the container and mapped back to an [`Action`] through
//! the `data-action` attribute, so re-rendering never creates closures.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::error::{MountError, Result};
use crate::view::{Action, Node};

const ACTION_ATTR: &str = "data-action";
const MOVE_PREFIX: &str = "move:";

pub(crate) struct Surface {
    document: Document,
    container: Element,
    rendered: Option<Element>,
    listener: Closure<dyn FnMut(Event)>,
}

impl Surface {
    /// Finds the container and starts listening for clicks inside it.
    pub(crate) fn attach(
        container_id: Option<&str>,
        mut on_action: impl FnMut(Action) + 'static,
    ) -> Result<Self> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let container = match container_id {
            Some(id) => document
                .get_element_by_id(id)
                .ok_or_else(|| MountError::ContainerNotFound(id.to_string()))?,
            None => Element::from(document.body().ok_or(MountError::NoBody)?),
        };

        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(action) = clicked_action(&event) {
                on_action(action);
            }
        });
        container.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

        Ok(Self {
            document,
            container,
            rendered: None,
            listener,
        })
    }

    /// Replaces whatever was drawn before with `tree`.
    pub(crate) fn draw(&mut self, tree: &Node) -> Result<()> {
        let element = self.build(tree)?;
        match self.rendered.take() {
            Some(previous) => {
                self.container.replace_child(&element, &previous)?;
            }
            None => {
                self.container.append_child(&element)?;
            }
        }
        self.rendered = Some(element);
        Ok(())
    }

    fn build(&self, node: &Node) -> Result<Element> {
        let element = self.document.create_element(node.tag)?;
        if let Some(id) = node.id {
            element.set_id(id);
        }
        if let Some(class) = &node.class {
            element.set_class_name(class);
        }
        if let Some(action) = node.action {
            element.set_attribute(ACTION_ATTR, &encode_action(action))?;
        }
        if node.children.is_empty() {
            element.set_text_content(Some(&node.text));
        }
        for child in &node.children {
            let child = self.build(child)?;
            element.append_child(&child)?;
        }
        Ok(element)
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        if let Some(previous) = self.rendered.take() {
            previous.remove();
        }
        let _ = self
            .container
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
    }
}

fn clicked_action(event: &Event) -> Option<Action> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let bound = target.closest(&format!("[{ACTION_ATTR}]")).ok()??;
    decode_action(&bound.get_attribute(ACTION_ATTR)?)
}

fn encode_action(action: Action) -> String {
    match action {
        Action::Move(index) => format!("{MOVE_PREFIX}{index}"),
        Action::Undo => "undo".to_string(),
        Action::Reset => "reset".to_string(),
    }
}

fn decode_action(raw: &str) -> Option<Action> {
    match raw {
        "undo" => Some(Action::Undo),
        "reset" => Some(Action::Reset),
        _ => raw.strip_prefix(MOVE_PREFIX)?.parse().ok().map(Action::Move),
    }
}
