pub mod dom;
pub mod events;
pub mod reveal;
pub mod runner;

pub use runner::DeckRunner;

/// Generate the `#[wasm_bindgen]` entry point for a deck.
///
/// The generated `deck_init(config_json?)` installs the panic hook and the
/// console logger, builds the deck (with an optional JSON config override),
/// and starts a [`DeckRunner`] bound to the current page. The generated
/// `deck_player_json(name)` and `deck_phase_json(key)` return a record as JSON.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod deck;
/// use deck::MyDeck;
///
/// deck_web::export_deck!(MyDeck, "my-deck");
/// ```
///
/// # Arguments
///
/// - `$deck_type`: A type implementing `deck_engine::Presentation` with a `new()` constructor
/// - `$deck_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_deck {
    ($deck_type:ty, $deck_name:literal) => {
        #[wasm_bindgen]
        pub fn deck_init(config_json: Option<String>) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let presentation = <$deck_type>::new();
            let deck = match config_json {
                Some(json) => {
                    let config = deck_engine::DeckConfig::from_json(&json)
                        .map_err(|e| JsValue::from_str(&e.to_string()))?;
                    deck_engine::Deck::with_config(presentation, config)
                }
                None => deck_engine::Deck::new(presentation),
            };

            $crate::DeckRunner::start(deck)?;
            log::info!("{}: initialized", $deck_name);
            Ok(())
        }

        /// A player's record as JSON, or `undefined` for an unknown name.
        #[wasm_bindgen]
        pub fn deck_player_json(name: &str) -> Result<Option<String>, JsValue> {
            use deck_engine::Presentation;
            <$deck_type>::new()
                .player_json(name)
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }

        /// A phase's record as JSON, or `undefined` for an unknown key.
        #[wasm_bindgen]
        pub fn deck_phase_json(key: &str) -> Result<Option<String>, JsValue> {
            use deck_engine::Presentation;
            <$deck_type>::new()
                .phase_json(key)
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }
    };
}
