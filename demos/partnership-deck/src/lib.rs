use wasm_bindgen::prelude::*;

mod deck;
pub mod phases;
pub mod players;
pub use deck::PartnershipDeck;

deck_web::export_deck!(PartnershipDeck, "partnership-deck");
