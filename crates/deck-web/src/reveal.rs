use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use deck_engine::bridge::protocol::{classes, selectors};

use crate::dom;

/// Add `animate-in` to each card the first time it scrolls into view.
pub fn watch_cards(document: &Document, threshold: f64, root_margin: &str) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(classes::ANIMATE_IN);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for card in dom::query_all(document, selectors::REVEAL_CARDS)? {
        observer.observe(&card);
    }
    callback.forget();
    Ok(())
}
