use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use deck_engine::bridge::protocol::selectors;
use deck_engine::systems::styles::STYLESHEETS;
use deck_engine::{confidence_tooltip, importance_tooltip};
use deck_engine::{Deck, DomCommand, InputEvent, Millis, Presentation};

use crate::{dom, events, reveal};

/// Drives a [`Deck`] from browser events and wall-clock time.
///
/// One runner exists per page. It is shared as `Rc<RefCell<_>>` with the
/// event closures bound in [`DeckRunner::start`], which keep it alive for the
/// page's lifetime. Every entry point syncs the deck clock to
/// `performance.now()` first, then applies whatever commands the deck emitted.
pub struct DeckRunner<P: Presentation> {
    deck: Deck<P>,
    window: Window,
    document: Document,
    /// `performance.now()` at the last clock sync.
    last_sync: Millis,
    /// Absolute time the pending wake-up timeout fires, if any.
    wakeup_at: Option<Millis>,
    this: Weak<RefCell<Self>>,
}

fn now(window: &Window) -> Millis {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

impl<P: Presentation + 'static> DeckRunner<P> {
    /// Create the runner and mount it now, or on `DOMContentLoaded` if the
    /// document is still loading.
    pub fn start(deck: Deck<P>) -> Result<Rc<RefCell<Self>>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let last_sync = now(&window);

        let runner = Rc::new_cyclic(|this| {
            RefCell::new(Self {
                deck,
                window,
                document: document.clone(),
                last_sync,
                wakeup_at: None,
                this: this.clone(),
            })
        });

        if document.ready_state() == "loading" {
            let pending = runner.clone();
            events::listen(&document, "DOMContentLoaded", move |_| {
                if let Err(e) = Self::mount(&pending) {
                    log::error!("deck mount failed: {:?}", e);
                }
            })?;
        } else {
            Self::mount(&runner)?;
        }
        Ok(runner)
    }

    fn mount(runner: &Rc<RefCell<Self>>) -> Result<(), JsValue> {
        let (document, config) = {
            let mut r = runner.borrow_mut();
            for (id, css) in STYLESHEETS {
                dom::ensure_stylesheet(&r.document, id, css)?;
            }
            dom::apply_tooltips(&r.document, selectors::CONFIDENCE_BADGE, confidence_tooltip)?;
            dom::apply_tooltips(&r.document, selectors::IMPORTANCE_BADGE, importance_tooltip)?;
            r.deck.init();
            r.flush();
            (r.document.clone(), r.deck.config().clone())
        };

        events::bind(runner)?;

        if let Err(e) = reveal::watch_cards(&document, config.reveal_threshold, &config.reveal_root_margin) {
            log::warn!("card reveal unavailable: {:?}", e);
        }

        Self::schedule_wakeup(runner);
        Ok(())
    }

    /// Feed one input event to the deck and apply the result.
    pub fn dispatch(runner: &Rc<RefCell<Self>>, event: InputEvent) {
        {
            let mut r = runner.borrow_mut();
            r.sync_clock();
            r.deck.handle(event);
            r.flush();
        }
        Self::schedule_wakeup(runner);
    }

    fn wake(runner: &Rc<RefCell<Self>>) {
        {
            let mut r = runner.borrow_mut();
            r.wakeup_at = None;
            r.sync_clock();
            r.flush();
        }
        Self::schedule_wakeup(runner);
    }

    /// Arm a timeout for the deck's next pending step, unless an earlier one is armed.
    fn schedule_wakeup(runner: &Rc<RefCell<Self>>) {
        let mut r = runner.borrow_mut();
        let Some(delay) = r.deck.next_wakeup() else {
            return;
        };
        let due = r.last_sync + delay;
        if matches!(r.wakeup_at, Some(armed) if armed <= due) {
            return;
        }

        let pending = runner.clone();
        let callback = Closure::once_into_js(move || Self::wake(&pending));
        let armed = r.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay.ceil() as i32,
        );
        match armed {
            Ok(_) => r.wakeup_at = Some(due),
            Err(e) => log::error!("failed to arm deck timer: {:?}", e),
        }
    }

    fn sync_clock(&mut self) {
        let now = now(&self.window);
        self.deck.advance(now - self.last_sync);
        self.last_sync = now;
    }

    /// Apply every pending command. A command that fails is logged and skipped.
    fn flush(&mut self) {
        for command in self.deck.drain_commands() {
            let result = match &command {
                DomCommand::MountModal => self.mount_modal(),
                other => dom::apply_command(&self.document, other),
            };
            if let Err(e) = result {
                log::error!("failed to apply {:?}: {:?}", command, e);
            }
        }
    }

    fn mount_modal(&self) -> Result<(), JsValue> {
        let Some(modal) = dom::create_modal(&self.document)? else {
            return Ok(());
        };
        let Some(runner) = self.this.upgrade() else {
            return Ok(());
        };
        for selector in [selectors::MODAL_CLOSE, selectors::MODAL_OVERLAY] {
            if let Some(control) = modal.query_selector(selector)? {
                let runner = runner.clone();
                events::listen(&control, "click", move |_| {
                    Self::dispatch(&runner, InputEvent::ModalDismissed)
                })?;
            }
        }
        Ok(())
    }

    pub fn deck(&self) -> &Deck<P> {
        &self.deck
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}
