// systems/effects.rs
//
// Cosmetic values: card hover styles, badge tooltips, progress bar width.
// Pure functions; the host applies the results to the DOM.

/// Cards that react to hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Player,
    Channel,
}

/// Which element a [`StyleRule`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    /// The hovered card itself.
    Card,
    /// The card's `.importance-badge`, if it has one.
    ImportanceBadge,
}

/// One inline style assignment. An empty value clears the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub target: StyleTarget,
    pub property: &'static str,
    pub value: &'static str,
}

impl StyleRule {
    const fn card(property: &'static str, value: &'static str) -> Self {
        Self { target: StyleTarget::Card, property, value }
    }

    const fn badge(property: &'static str, value: &'static str) -> Self {
        Self { target: StyleTarget::ImportanceBadge, property, value }
    }
}

const PLAYER_ENTER: [StyleRule; 2] = [
    StyleRule::card("transform", "translateY(-4px)"),
    StyleRule::card("box-shadow", "var(--shadow-lg)"),
];
const PLAYER_LEAVE: [StyleRule; 2] = [
    StyleRule::card("transform", ""),
    StyleRule::card("box-shadow", ""),
];
const CHANNEL_ENTER: [StyleRule; 2] = [
    StyleRule::card("transform", "translateY(-4px) scale(1.02)"),
    StyleRule::badge("box-shadow", "0 0 10px rgba(33, 128, 141, 0.3)"),
];
const CHANNEL_LEAVE: [StyleRule; 2] = [
    StyleRule::card("transform", ""),
    StyleRule::badge("box-shadow", ""),
];

/// Inline styles to apply when a card is entered (`hovered`) or left.
pub fn hover_style(kind: CardKind, hovered: bool) -> &'static [StyleRule] {
    match (kind, hovered) {
        (CardKind::Player, true) => &PLAYER_ENTER,
        (CardKind::Player, false) => &PLAYER_LEAVE,
        (CardKind::Channel, true) => &CHANNEL_ENTER,
        (CardKind::Channel, false) => &CHANNEL_LEAVE,
    }
}

/// Tooltip for a `.confidence-badge`, keyed by its text (case-insensitive).
pub fn confidence_tooltip(text: &str) -> Option<&'static str> {
    match text.trim().to_lowercase().as_str() {
        "high" => Some("High confidence: Validated through multiple sources and direct contact"),
        "medium" => Some("Medium confidence: Good evidence but requires validation"),
        "low" => Some("Low confidence: Limited information, needs further research"),
        _ => None,
    }
}

/// Tooltip for an `.importance-badge`, keyed by its text (case-insensitive).
pub fn importance_tooltip(text: &str) -> Option<&'static str> {
    match text.trim().to_lowercase().as_str() {
        "critical" => Some("Critical: Essential for project success"),
        "high" => Some("High: Very important for achieving objectives"),
        "medium" => Some("Medium: Valuable but not essential"),
        "limited" => Some("Limited: Nice to have but low priority"),
        _ => None,
    }
}

/// CSS width for the progress bar.
pub fn progress_width(percent: f64) -> String {
    format!("{}%", percent)
}
