// systems/styles.rs
//
// Stylesheets the host injects into <head>, each once, keyed by element id.

/// Element id of the modal stylesheet.
pub const MODAL_STYLES_ID: &str = "modal-styles";

/// Element id of the card reveal stylesheet.
pub const CARD_REVEAL_STYLES_ID: &str = "card-reveal-styles";

/// Modal overlay, detail layouts and the narrow-screen media query.
pub const MODAL_STYLES: &str = r#"
.presentation-modal {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    z-index: 2000;
    display: none;
    align-items: center;
    justify-content: center;
    opacity: 0;
    transition: opacity var(--duration-normal) var(--ease-standard);
}

.presentation-modal.active {
    opacity: 1;
}

.modal-overlay {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background-color: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(4px);
}

.modal-content {
    position: relative;
    background-color: var(--color-surface);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
    max-width: 800px;
    max-height: 80vh;
    width: 90%;
    overflow: hidden;
    transform: scale(0.9);
    transition: transform var(--duration-normal) var(--ease-standard);
}

.presentation-modal.active .modal-content {
    transform: scale(1);
}

.modal-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: var(--space-20);
    border-bottom: 1px solid var(--color-border);
    background: linear-gradient(135deg, var(--color-primary) 0%, var(--color-primary-hover) 100%);
    color: var(--color-btn-primary-text);
}

.modal-title {
    margin: 0;
    font-size: var(--font-size-xl);
    font-weight: var(--font-weight-semibold);
}

.modal-close {
    background: none;
    border: none;
    color: var(--color-btn-primary-text);
    font-size: 24px;
    cursor: pointer;
    padding: var(--space-4);
    border-radius: var(--radius-sm);
    transition: background-color var(--duration-fast) var(--ease-standard);
}

.modal-close:hover {
    background-color: rgba(255, 255, 255, 0.1);
}

.modal-body {
    padding: var(--space-20);
    max-height: 60vh;
    overflow-y: auto;
}

.player-details-modal, .phase-details-modal {
    display: flex;
    flex-direction: column;
    gap: var(--space-20);
}

.player-overview, .player-strengths, .player-partnerships, .strategic-assessment,
.phase-overview, .phase-objectives, .phase-risks, .phase-metrics {
    padding: var(--space-16);
    background-color: var(--color-background);
    border-radius: var(--radius-base);
    border-left: 4px solid var(--color-primary);
}

.player-details-modal h4, .phase-details-modal h4 {
    color: var(--color-primary);
    margin-bottom: var(--space-8);
    font-size: var(--font-size-lg);
}

.player-details-modal ul, .phase-details-modal ul {
    list-style: none;
    padding: 0;
    margin: var(--space-8) 0 0 0;
}

.player-details-modal li, .phase-details-modal li {
    position: relative;
    padding-left: var(--space-20);
    margin-bottom: var(--space-6);
    color: var(--color-text);
}

.player-details-modal li::before, .phase-details-modal li::before {
    content: "→";
    position: absolute;
    left: 0;
    color: var(--color-primary);
    font-weight: var(--font-weight-bold);
}

.phase-meta {
    display: flex;
    gap: var(--space-16);
    margin-bottom: var(--space-12);
}

.phase-timeline, .phase-investment {
    background-color: var(--color-secondary);
    padding: var(--space-4) var(--space-8);
    border-radius: var(--radius-sm);
    font-size: var(--font-size-sm);
    font-weight: var(--font-weight-medium);
}

.phase-description {
    color: var(--color-text-secondary);
    font-style: italic;
    margin: 0;
}

@media (max-width: 768px) {
    .modal-content {
        width: 95%;
        max-height: 90vh;
    }

    .modal-header, .modal-body {
        padding: var(--space-16);
    }

    .phase-meta {
        flex-direction: column;
        gap: var(--space-8);
    }
}
"#;

/// Cards start hidden and slide in once they gain `animate-in`.
pub const CARD_REVEAL_STYLES: &str = r#"
.player-card, .channel-card, .phase-card {
    opacity: 0;
    transform: translateY(20px);
    transition: all var(--duration-normal) var(--ease-standard);
}

.player-card.animate-in, .channel-card.animate-in, .phase-card.animate-in {
    opacity: 1;
    transform: translateY(0);
}

.slide {
    will-change: transform, opacity;
}

.value-fill, .coverage-fill {
    will-change: width;
}
"#;

/// Every stylesheet, as `(id, css)` pairs in injection order.
pub const STYLESHEETS: [(&str, &str); 2] = [
    (MODAL_STYLES_ID, MODAL_STYLES),
    (CARD_REVEAL_STYLES_ID, CARD_REVEAL_STYLES),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_styles_cover_modal_classes() {
        for class in [".presentation-modal", ".presentation-modal.active", ".modal-overlay", ".modal-close", ".modal-body", ".phase-meta"] {
            assert!(MODAL_STYLES.contains(class), "missing {}", class);
        }
        assert!(MODAL_STYLES.contains("@media (max-width: 768px)"));
    }

    #[test]
    fn reveal_styles_cover_every_card() {
        for class in [".player-card.animate-in", ".channel-card.animate-in", ".phase-card.animate-in"] {
            assert!(CARD_REVEAL_STYLES.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn stylesheet_ids_are_distinct() {
        assert_ne!(STYLESHEETS[0].0, STYLESHEETS[1].0);
    }
}
