#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use deck_engine::bridge::protocol::ids;
use deck_engine::{Deck, PhaseRecord, PlayerRecord, Presentation};
use deck_web::DeckRunner;

wasm_bindgen_test_configure!(run_in_browser);

static ACME: PlayerRecord = PlayerRecord {
    position: "Market leader",
    strengths: &["Reach"],
    strategic_value: "High",
    partnership_approach: "Direct",
    ..PlayerRecord::EMPTY
};

struct Fixture;

impl Presentation for Fixture {
    fn player(&self, name: &str) -> Option<&PlayerRecord> {
        (name == "Acme").then_some(&ACME)
    }

    fn phase(&self, _key: &str) -> Option<&PhaseRecord> {
        None
    }
}

const MARKUP: &str = r#"
<div id="slidesContainer">
  <div class="slide active">
    <div class="player-card"><h3>Acme</h3><span class="confidence-badge">High</span></div>
    <div class="player-card"><h3>Nobody</h3></div>
  </div>
  <div class="slide"></div>
  <div class="slide"></div>
</div>
<button id="prevBtn">Prev</button>
<button id="nextBtn">Next</button>
<span id="currentSlide"></span>/<span id="totalSlides"></span>
<span class="slide-dot active"></span><span class="slide-dot"></span><span class="slide-dot"></span>
<div id="progressFill"></div>
"#;

fn setup() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(modal) = document.get_element_by_id(ids::MODAL) {
        modal.remove();
    }
    document.body().unwrap().set_inner_html(MARKUP);
    document
}

fn click(document: &Document, selector: &str, nth: usize) {
    let list = document.query_selector_all(selector).unwrap();
    list.item(nth as u32)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
fn init_syncs_counter_buttons_and_tooltips() {
    let document = setup();
    DeckRunner::start(Deck::new(Fixture)).unwrap();

    let text = |id: &str| document.get_element_by_id(id).unwrap().text_content().unwrap();
    assert_eq!(text(ids::CURRENT_SLIDE), "1");
    assert_eq!(text(ids::TOTAL_SLIDES), "3");

    let prev: HtmlButtonElement = document
        .get_element_by_id(ids::PREV_BUTTON)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(prev.disabled());

    let badge = document.query_selector(".confidence-badge").unwrap().unwrap();
    assert!(badge.get_attribute("title").unwrap().starts_with("High confidence"));
}

#[wasm_bindgen_test]
fn next_click_clears_active_slide() {
    let document = setup();
    let runner = DeckRunner::start(Deck::new(Fixture)).unwrap();

    click(&document, "#nextBtn", 0);

    assert!(runner.borrow().deck().is_transitioning());
    assert!(document.query_selector(".slide.active").unwrap().is_none());
}

#[wasm_bindgen_test]
fn player_click_mounts_modal() {
    let document = setup();
    DeckRunner::start(Deck::new(Fixture)).unwrap();

    click(&document, ".player-card", 0);

    let modal = document.get_element_by_id(ids::MODAL).unwrap();
    let title = modal.query_selector(".modal-title").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "Acme");
    assert!(modal.inner_html().contains("Market leader"));
}

#[wasm_bindgen_test]
fn unknown_player_leaves_page_untouched() {
    let document = setup();
    let runner = DeckRunner::start(Deck::new(Fixture)).unwrap();

    click(&document, ".player-card", 1);

    assert!(document.get_element_by_id(ids::MODAL).is_none());
    assert!(!runner.borrow().deck().modal().is_mounted());
}
