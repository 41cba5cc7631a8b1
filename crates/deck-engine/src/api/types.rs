use serde::Serialize;

/// Static descriptive record for a named market participant.
///
/// Only `position`, `strengths`, `strategic_value` and `partnership_approach`
/// are always present; the remaining details vary per player and are read
/// through [`PlayerField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub position: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systems: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement: Option<&'static str>,
    pub strengths: &'static [&'static str],
    pub partnerships: &'static [&'static str],
    pub strategic_value: &'static str,
    pub partnership_approach: &'static str,
}

impl PlayerRecord {
    /// A record with every optional detail absent, for struct-update syntax in static tables.
    pub const EMPTY: PlayerRecord = PlayerRecord {
        position: "",
        revenue: None,
        systems: None,
        products: None,
        ecosystem: None,
        presence: None,
        specialization: None,
        experience: None,
        support: None,
        opportunity: None,
        focus: None,
        funding: None,
        achievement: None,
        strengths: &[],
        partnerships: &[],
        strategic_value: "",
        partnership_approach: "",
    };

    /// Read one optional detail.
    pub fn field(&self, field: PlayerField) -> Option<&'static str> {
        match field {
            PlayerField::Revenue => self.revenue,
            PlayerField::Systems => self.systems,
            PlayerField::Products => self.products,
            PlayerField::Ecosystem => self.ecosystem,
            PlayerField::Presence => self.presence,
            PlayerField::Specialization => self.specialization,
            PlayerField::Experience => self.experience,
            PlayerField::Support => self.support,
            PlayerField::Opportunity => self.opportunity,
            PlayerField::Focus => self.focus,
            PlayerField::Funding => self.funding,
            PlayerField::Achievement => self.achievement,
        }
    }

    /// Iterate the optional details that are present, in display order.
    pub fn present_fields(&self) -> impl Iterator<Item = (PlayerField, &'static str)> + '_ {
        PlayerField::ALL
            .iter()
            .filter_map(move |&f| self.field(f).map(|value| (f, value)))
    }
}

/// The optional details a [`PlayerRecord`] may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    Revenue,
    Systems,
    Products,
    Ecosystem,
    Presence,
    Specialization,
    Experience,
    Support,
    Opportunity,
    Focus,
    Funding,
    Achievement,
}

impl PlayerField {
    /// Display order.
    pub const ALL: [PlayerField; 12] = [
        PlayerField::Revenue,
        PlayerField::Systems,
        PlayerField::Products,
        PlayerField::Ecosystem,
        PlayerField::Presence,
        PlayerField::Specialization,
        PlayerField::Experience,
        PlayerField::Support,
        PlayerField::Opportunity,
        PlayerField::Focus,
        PlayerField::Funding,
        PlayerField::Achievement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerField::Revenue => "Revenue",
            PlayerField::Systems => "Systems",
            PlayerField::Products => "Products",
            PlayerField::Ecosystem => "Ecosystem",
            PlayerField::Presence => "Presence",
            PlayerField::Specialization => "Specialization",
            PlayerField::Experience => "Experience",
            PlayerField::Support => "Support",
            PlayerField::Opportunity => "Opportunity",
            PlayerField::Focus => "Focus",
            PlayerField::Funding => "Funding",
            PlayerField::Achievement => "Achievement",
        }
    }
}

/// Static descriptive record for one project timeline phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseRecord {
    pub title: &'static str,
    pub timeline: &'static str,
    pub investment: &'static str,
    pub description: &'static str,
    pub objectives: &'static [&'static str],
    pub risks: &'static [&'static str],
    pub success_metrics: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: PlayerRecord = PlayerRecord {
        position: "Challenger",
        funding: Some("$10M"),
        revenue: Some("$1M"),
        strengths: &["Speed"],
        strategic_value: "Fast follower",
        partnership_approach: "Pilot",
        ..PlayerRecord::EMPTY
    };

    #[test]
    fn present_fields_skip_missing_and_keep_order() {
        let fields: Vec<_> = SAMPLE.present_fields().collect();
        assert_eq!(
            fields,
            vec![(PlayerField::Revenue, "$1M"), (PlayerField::Funding, "$10M")]
        );
    }

    #[test]
    fn empty_record_has_no_details() {
        assert_eq!(PlayerRecord::EMPTY.present_fields().count(), 0);
    }

    #[test]
    fn serializes_only_present_details() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(json["funding"], "$10M");
        assert!(json.get("ecosystem").is_none());
        assert_eq!(json["strengths"][0], "Speed");
    }
}
