//! Host protocol: the element ids, selectors and classes the deck drives, and
//! the commands it emits. The page markup must use these names.
//!
//! The deck never touches the DOM itself. It pushes [`DomCommand`]s, and the
//! host applies them in order after every input or timer step.

/// Element ids.
pub mod ids {
    pub const PREV_BUTTON: &str = "prevBtn";
    pub const NEXT_BUTTON: &str = "nextBtn";
    pub const SLIDES_CONTAINER: &str = "slidesContainer";
    pub const CURRENT_SLIDE: &str = "currentSlide";
    pub const TOTAL_SLIDES: &str = "totalSlides";
    pub const PROGRESS_FILL: &str = "progressFill";
    pub const MODAL: &str = "presentationModal";
}

/// CSS selectors.
pub mod selectors {
    pub const SLIDE: &str = ".slide";
    pub const ACTIVE_SLIDE: &str = ".slide.active";
    pub const SLIDE_DOT: &str = ".slide-dot";
    pub const PLAYER_CARD: &str = ".player-card";
    pub const CHANNEL_CARD: &str = ".channel-card";
    pub const PHASE_CARD: &str = ".phase-card";
    pub const CONFIDENCE_BADGE: &str = ".confidence-badge";
    pub const IMPORTANCE_BADGE: &str = ".importance-badge";
    pub const VALUE_BARS: &str = ".value-fill, .coverage-fill";
    /// Cards watched by the reveal observer.
    pub const REVEAL_CARDS: &str = ".player-card, .channel-card, .phase-card";
    /// Element inside a player card holding the player's display name.
    pub const PLAYER_NAME: &str = "h3";
    pub const MODAL_TITLE: &str = ".modal-title";
    pub const MODAL_BODY: &str = ".modal-body";
    pub const MODAL_CLOSE: &str = ".modal-close";
    pub const MODAL_OVERLAY: &str = ".modal-overlay";
}

/// Class names.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const PREV: &str = "prev";
    pub const ANIMATE_IN: &str = "animate-in";
    pub const MODAL: &str = "presentation-modal";
}

/// Attributes.
pub mod attributes {
    /// Phase key on a `.phase-card`.
    pub const PHASE: &str = "data-phase";
    /// Remembered target width of a value bar while it is collapsed.
    pub const BAR_WIDTH: &str = "data-target-width";
}

/// Inner markup of the modal node created on first open.
pub const MODAL_MARKUP: &str = r#"<div class="modal-overlay"></div><div class="modal-content"><div class="modal-header"><h3 class="modal-title"></h3><button class="modal-close" aria-label="Close">&times;</button></div><div class="modal-body"></div></div>"#;

/// A DOM change requested by the deck.
#[derive(Debug, Clone, PartialEq)]
pub enum DomCommand {
    /// Remove `active` and `prev` from every slide, then add `prev` to slides before `target`.
    ClearSlides { target: usize },
    /// Add `active` to the slide at `index`.
    ActivateSlide { index: usize },
    /// Set the `currentSlide` (1-based) and `totalSlides` counters.
    UpdateCounter { current: usize, total: usize },
    /// Set the `disabled` state of the previous/next buttons.
    SetNavDisabled { prev: bool, next: bool },
    /// Toggle `active` so only the dot at `index` carries it.
    SetActiveDot { index: usize },
    /// Set the `progressFill` width.
    SetProgress { percent: f64 },
    /// Shrink the active slide's value bars to zero, remembering their width.
    CollapseValueBars,
    /// Grow collapsed value bars back to their remembered width.
    ExpandValueBars,
    /// Create the modal node and bind its close controls. Sent once.
    MountModal,
    /// Replace modal title and body and display it (`display: flex`).
    ShowModal { title: String, body: String },
    /// Add or remove the modal's `active` class.
    SetModalActive(bool),
    /// Hide the modal node (`display: none`).
    HideModal,
}
