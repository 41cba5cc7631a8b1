pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export key types at crate root for convenience
pub use api::config::DeckConfig;
pub use api::deck::Deck;
pub use api::presentation::Presentation;
pub use api::types::{PlayerRecord, PlayerField, PhaseRecord};
pub use core::time::{Millis, TimerQueue};
pub use core::navigator::{SlideNavigator, TransitionPhase};
pub use components::slide::{DeckView, SlideClasses};
pub use components::modal::{Modal, ModalPhase};
pub use bridge::protocol::DomCommand;
pub use input::event::{InputEvent, Key};
pub use input::swipe::{SwipeDirection, SwipeTracker};
pub use systems::details::{player_details_html, phase_details_html, phase_title, escape_html};
pub use systems::effects::{CardKind, StyleRule, StyleTarget, hover_style, confidence_tooltip, importance_tooltip, progress_width};
pub use error::DeckError;
