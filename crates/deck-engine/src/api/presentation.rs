use crate::api::config::DeckConfig;
use crate::api::types::{PhaseRecord, PlayerRecord};
use crate::error::DeckError;

/// The contract every concrete deck fulfills: its config and its static content.
pub trait Presentation {
    /// Return deck configuration. Called once when the deck is built.
    fn config(&self) -> DeckConfig {
        DeckConfig::default()
    }

    /// Look up a player by the display name shown on its card.
    fn player(&self, name: &str) -> Option<&PlayerRecord>;

    /// Look up a phase by the key in its card's `data-phase` attribute.
    fn phase(&self, key: &str) -> Option<&PhaseRecord>;

    /// A player's record as JSON, or `None` for an unknown name.
    fn player_json(&self, name: &str) -> Result<Option<String>, DeckError> {
        Ok(self.player(name.trim()).map(serde_json::to_string).transpose()?)
    }

    /// A phase's record as JSON, or `None` for an unknown key.
    fn phase_json(&self, key: &str) -> Result<Option<String>, DeckError> {
        Ok(self.phase(key.trim()).map(serde_json::to_string).transpose()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SOLO: PlayerRecord = PlayerRecord {
        position: "Niche",
        funding: Some("$5M"),
        strengths: &["Focus"],
        strategic_value: "Data",
        partnership_approach: "Pilot",
        ..PlayerRecord::EMPTY
    };

    struct Single;

    impl Presentation for Single {
        fn player(&self, name: &str) -> Option<&PlayerRecord> {
            (name == "Solo").then_some(&SOLO)
        }

        fn phase(&self, _key: &str) -> Option<&PhaseRecord> {
            None
        }
    }

    #[test]
    fn player_json_exports_present_fields() {
        let json = Single.player_json(" Solo ").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["position"], "Niche");
        assert_eq!(value["funding"], "$5M");
        assert!(value.get("revenue").is_none());
    }

    #[test]
    fn unknown_records_export_nothing() {
        assert!(Single.player_json("Other").unwrap().is_none());
        assert!(Single.phase_json("1").unwrap().is_none());
    }
}
