use serde::Deserialize;
use crate::core::time::Millis;
use crate::error::DeckError;

/// Configuration for a deck, provided by the presentation or loaded from JSON.
///
/// Every field has a default, so a JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Number of slides in the deck (default: 3).
    pub total_slides: usize,
    /// Delay before the target slide becomes active (default: 50ms).
    pub enter_delay_ms: Millis,
    /// Delay after activation before the transition lock is released (default: 250ms).
    pub settle_delay_ms: Millis,
    /// Delay between showing the modal node and adding its `active` class (default: 10ms).
    pub modal_reveal_delay_ms: Millis,
    /// Delay between removing `active` and hiding the modal node (default: 250ms).
    pub modal_hide_delay_ms: Millis,
    /// Delay before collapsed value bars grow back to their width (default: 300ms).
    pub value_bar_delay_ms: Millis,
    /// Minimum horizontal travel, in pixels, for a touch to count as a swipe (default: 50).
    pub swipe_threshold_px: f32,
    /// Visible fraction at which a card is revealed (default: 0.1).
    pub reveal_threshold: f64,
    /// Root margin for the card reveal watcher.
    pub reveal_root_margin: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            total_slides: 3,
            enter_delay_ms: 50.0,
            settle_delay_ms: 250.0,
            modal_reveal_delay_ms: 10.0,
            modal_hide_delay_ms: 250.0,
            value_bar_delay_ms: 300.0,
            swipe_threshold_px: 50.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl DeckConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a config the deck cannot run with: no slides, negative or
    /// non-finite delays and thresholds, or a reveal threshold outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.total_slides == 0 {
            return Err(DeckError::NoSlides);
        }
        let non_negative = [
            ("enter_delay_ms", self.enter_delay_ms),
            ("settle_delay_ms", self.settle_delay_ms),
            ("modal_reveal_delay_ms", self.modal_reveal_delay_ms),
            ("modal_hide_delay_ms", self.modal_hide_delay_ms),
            ("value_bar_delay_ms", self.value_bar_delay_ms),
            ("swipe_threshold_px", f64::from(self.swipe_threshold_px)),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(DeckError::OutOfRange {
                    field,
                    value,
                    expected: "a finite value >= 0",
                });
            }
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(DeckError::OutOfRange {
                field: "reveal_threshold",
                value: self.reveal_threshold,
                expected: "a value in [0, 1]",
            });
        }
        Ok(())
    }

    /// Index of the final slide.
    pub fn last_slide(&self) -> usize {
        self.total_slides.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_three_slide_deck() {
        let config = DeckConfig::default();
        assert_eq!(config.total_slides, 3);
        assert_eq!(config.last_slide(), 2);
        assert_eq!(config.enter_delay_ms, 50.0);
        assert_eq!(config.settle_delay_ms, 250.0);
        assert_eq!(config.modal_hide_delay_ms, 250.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DeckConfig::from_json(r#"{ "total_slides": 5, "swipe_threshold_px": 80 }"#).unwrap();
        assert_eq!(config.total_slides, 5);
        assert_eq!(config.swipe_threshold_px, 80.0);
        assert_eq!(config.enter_delay_ms, 50.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn rejects_empty_deck() {
        let err = DeckConfig::from_json(r#"{ "total_slides": 0 }"#).unwrap_err();
        assert!(matches!(err, DeckError::NoSlides));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = DeckConfig::from_json("{ total_slides: ").unwrap_err();
        assert!(matches!(err, DeckError::Json(_)));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = DeckConfig::from_json(r#"{ "reveal_threshold": 5.0 }"#).unwrap_err();
        assert!(matches!(err, DeckError::OutOfRange { field: "reveal_threshold", .. }));

        let err = DeckConfig::from_json(r#"{ "swipe_threshold_px": -10 }"#).unwrap_err();
        assert!(matches!(err, DeckError::OutOfRange { field: "swipe_threshold_px", .. }));

        let err = DeckConfig::from_json(r#"{ "settle_delay_ms": -1 }"#).unwrap_err();
        assert!(matches!(err, DeckError::OutOfRange { field: "settle_delay_ms", .. }));
    }

    #[test]
    fn accepts_range_bounds() {
        let config = DeckConfig::from_json(
            r#"{ "reveal_threshold": 1.0, "swipe_threshold_px": 0, "enter_delay_ms": 0 }"#,
        )
        .unwrap();
        assert_eq!(config.reveal_threshold, 1.0);
        assert!(DeckConfig { reveal_threshold: 0.0, ..DeckConfig::default() }.validate().is_ok());
    }
}
