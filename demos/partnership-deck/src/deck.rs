use deck_engine::{PhaseRecord, PlayerRecord, Presentation};
use crate::{phases, players};

/// The partnership strategy deck: three slides, seven players, four phases.
#[derive(Debug, Default)]
pub struct PartnershipDeck;

impl PartnershipDeck {
    pub fn new() -> Self {
        Self
    }
}

impl Presentation for PartnershipDeck {
    fn player(&self, name: &str) -> Option<&PlayerRecord> {
        players::player(name)
    }

    fn phase(&self, key: &str) -> Option<&PhaseRecord> {
        phases::phase(key)
    }
}
