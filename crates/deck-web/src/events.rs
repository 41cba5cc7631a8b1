use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, TouchEvent};

use deck_engine::bridge::protocol::{attributes, ids, selectors};
use deck_engine::{hover_style, CardKind, InputEvent, Key, Presentation};

use crate::dom;
use crate::runner::DeckRunner;

/// Register `handler` for `kind` events on `target` for the page's lifetime.
pub fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn player_name(card: &Element) -> Option<String> {
    let heading = card.query_selector(selectors::PLAYER_NAME).ok()??;
    Some(heading.text_content()?.trim().to_string())
}

fn touch_x(event: &Event) -> Option<f32> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(touch.screen_x() as f32)
}

fn bind_hover(card: &Element, kind: CardKind) -> Result<(), JsValue> {
    for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
        let target = card.clone();
        listen(card, event, move |_| {
            if let Err(e) = dom::apply_style_rules(&target, hover_style(kind, hovered)) {
                log::warn!("hover style failed: {:?}", e);
            }
        })?;
    }
    Ok(())
}

/// Bind every page control to the runner: nav buttons, dots, cards,
/// keyboard, touch and resize.
pub fn bind<P: Presentation + 'static>(runner: &Rc<RefCell<DeckRunner<P>>>) -> Result<(), JsValue> {
    let (window, document) = {
        let r = runner.borrow();
        (r.window().clone(), r.document().clone())
    };

    // Navigation buttons
    for (id, event) in [
        (ids::PREV_BUTTON, InputEvent::PrevClicked),
        (ids::NEXT_BUTTON, InputEvent::NextClicked),
    ] {
        if let Some(button) = document.get_element_by_id(id) {
            let runner = runner.clone();
            listen(&button, "click", move |_| DeckRunner::dispatch(&runner, event.clone()))?;
        }
    }

    // Slide indicators
    for (index, dot) in dom::query_all(&document, selectors::SLIDE_DOT)?.into_iter().enumerate() {
        let runner = runner.clone();
        listen(&dot, "click", move |e| {
            e.prevent_default();
            DeckRunner::dispatch(&runner, InputEvent::DotClicked(index));
        })?;
        dom::set_style(&dot, "cursor", "pointer")?;
    }

    for card in dom::query_all(&document, selectors::PLAYER_CARD)? {
        let runner = runner.clone();
        let target = card.clone();
        listen(&card, "click", move |e| {
            e.prevent_default();
            e.stop_propagation();
            if let Some(name) = player_name(&target) {
                DeckRunner::dispatch(&runner, InputEvent::PlayerCardClicked(name));
            }
        })?;
        dom::set_style(&card, "cursor", "pointer")?;
        bind_hover(&card, CardKind::Player)?;
    }

    for card in dom::query_all(&document, selectors::CHANNEL_CARD)? {
        bind_hover(&card, CardKind::Channel)?;
    }

    for card in dom::query_all(&document, selectors::PHASE_CARD)? {
        let runner = runner.clone();
        let target = card.clone();
        listen(&card, "click", move |_| {
            if let Some(key) = target.get_attribute(attributes::PHASE) {
                DeckRunner::dispatch(&runner, InputEvent::PhaseCardClicked(key));
            }
        })?;
    }

    {
        let runner = runner.clone();
        listen(&window, "resize", move |_| DeckRunner::dispatch(&runner, InputEvent::Resized))?;
    }

    // Swipe on the slides container
    if let Some(container) = document.get_element_by_id(ids::SLIDES_CONTAINER) {
        let start = runner.clone();
        listen(&container, "touchstart", move |e| {
            if let Some(screen_x) = touch_x(&e) {
                DeckRunner::dispatch(&start, InputEvent::TouchStart { screen_x });
            }
        })?;
        let end = runner.clone();
        listen(&container, "touchend", move |e| {
            if let Some(screen_x) = touch_x(&e) {
                DeckRunner::dispatch(&end, InputEvent::TouchEnd { screen_x });
            }
        })?;
    }

    {
        let runner = runner.clone();
        listen(&document, "keydown", move |e| {
            let Some(key) = e
                .dyn_ref::<KeyboardEvent>()
                .and_then(|k| Key::from_dom(&k.key()))
            else {
                return;
            };
            if key.prevents_default() {
                e.prevent_default();
            }
            DeckRunner::dispatch(&runner, InputEvent::KeyDown(key));
        })?;
    }

    Ok(())
}
