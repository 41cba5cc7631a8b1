/// Keys the deck responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Unhandled keys map to `None`.
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Home" => Some(Key::Home),
            "End" => Some(Key::End),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }

    /// Whether the browser's default action (scrolling) should be suppressed.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Key::Escape)
    }
}

/// Input events the deck understands, already resolved from raw DOM events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PrevClicked,
    NextClicked,
    /// A `.slide-dot` was clicked.
    DotClicked(usize),
    KeyDown(Key),
    /// Touch began on the slides container at this `screenX`.
    TouchStart { screen_x: f32 },
    /// Touch ended on the slides container at this `screenX`.
    TouchEnd { screen_x: f32 },
    /// A `.player-card` was clicked; carries the name from its heading.
    PlayerCardClicked(String),
    /// A `.phase-card` was clicked; carries its `data-phase` key.
    PhaseCardClicked(String),
    /// The modal overlay or close button was clicked.
    ModalDismissed,
    /// The window was resized.
    Resized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_dom("End"), Some(Key::End));
        assert_eq!(Key::from_dom("Enter"), None);
        assert_eq!(Key::from_dom("arrowleft"), None);
    }

    #[test]
    fn escape_keeps_default_action() {
        assert!(!Key::Escape.prevents_default());
        assert!(Key::Home.prevents_default());
    }
}
