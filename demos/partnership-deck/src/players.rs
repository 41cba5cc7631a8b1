use deck_engine::PlayerRecord;

/// Market players, keyed by the name shown on their card.
static PLAYERS: [(&str, PlayerRecord); 7] = [
    (
        "Align Technology",
        PlayerRecord {
            position: "Global market leader",
            revenue: Some("$4.0B total revenue (2024)"),
            systems: Some("$768.9M Systems & Services"),
            products: Some("iTero scanners, Invisalign ecosystem"),
            strengths: &[
                "Established distribution network",
                "Strong brand recognition",
                "Integrated treatment workflow",
            ],
            partnerships: &["Henry Schein distribution", "Global KOL network"],
            strategic_value: "High market access potential, established channels",
            partnership_approach: "Direct sales partnership, European market entry support",
            ..PlayerRecord::EMPTY
        },
    ),
    (
        "3Shape",
        PlayerRecord {
            position: "Open platform ecosystem leader",
            products: Some("TRIOS scanners, Unite platform"),
            ecosystem: Some("1000+ labs, 100+ world-class partners"),
            strengths: &[
                "Open architecture",
                "Strong R&D capabilities",
                "Developer-friendly platform",
            ],
            partnerships: &["Unite Platform partners", "Academic collaborations"],
            strategic_value: "Excellent integration opportunities, proven open ecosystem",
            partnership_approach: "App marketplace integration, API collaboration, standards development",
            ..PlayerRecord::EMPTY
        },
    ),
    (
        "Dentsply Sirona",
        PlayerRecord {
            position: "Traditional industry leader",
            products: Some("Primescan (CEREC), exocad software"),
            presence: Some("Strong German presence (Bensheim headquarters)"),
            strengths: &[
                "Large installed base",
                "Comprehensive CAD/CAM solutions",
                "Educational programs",
            ],
            partnerships: &["Academic partnerships", "Dental schools"],
            strategic_value: "Large user base, conservative but stable approach",
            partnership_approach: "Academic partnerships, interface development, gradual integration",
            ..PlayerRecord::EMPTY
        },
    ),
    (
        "Acteon Group",
        PlayerRecord {
            position: "French dental imaging specialist",
            opportunity: Some("No current IOS offering - strategic gap"),
            strengths: &[
                "Hardware expertise",
                "European distribution network",
                "Imaging technology leadership",
            ],
            partnerships: &["European distributors", "Research institutions"],
            strategic_value: "Hardware co-development potential, European market access",
            partnership_approach: "Joint R&D for open-source scanner modules, co-engineering partnership",
            ..PlayerRecord::EMPTY
        },
    ),
    (
        "orangedental GmbH",
        PlayerRecord {
            position: "German distributor and system integrator",
            specialization: Some("DACH market specialist, Biberach-based"),
            experience: Some("Fussen S6500 distribution and localization"),
            support: Some("365-day hotline, local training programs"),
            strengths: &[
                "Regional expertise",
                "Technical support capabilities",
                "Localization experience",
            ],
            strategic_value: "Critical DACH market access, proven support model",
            partnership_approach: "Exclusive DACH distribution rights, value-added services",
            ..PlayerRecord::EMPTY
        },
    ),
    (
        "DentalTwin",
        PlayerRecord {
            position: "Munich-based AI prosthodontics startup",
            focus: Some("AI-powered prosthodontic workflow automation"),
            funding: Some("€20M+ funding, growing rapidly"),
            strengths: &["AI/ML expertise", "German market knowledge", "Innovation focus"],
            partnerships: &["German dental practices", "Research collaborations"],
            strategic_value: "Complementary AI technology, workflow optimization",
            partnership_approach: "Software integration, joint AI development, workflow enhancement",
            ..PlayerRecord::EMPTY
        },
    ),
    (
        "Pearl Inc.",
        PlayerRecord {
            position: "US AI diagnostics leader",
            achievement: Some("First FDA-cleared 2D+3D dental AI system"),
            funding: Some("$58M (largest dental AI funding round)"),
            strengths: &["Regulatory expertise", "Proven AI technology", "Clinical validation"],
            partnerships: &["US dental networks", "Insurance partners"],
            strategic_value: "Proven diagnostic AI, regulatory pathway knowledge",
            partnership_approach: "European market entry via open platform, AI module integration",
            ..PlayerRecord::EMPTY
        },
    ),
];

/// Look up a player by card name. Names match exactly.
pub fn player(name: &str) -> Option<&'static PlayerRecord> {
    PLAYERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, record)| record)
}

/// All player names in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PLAYERS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_engine::PlayerField;

    #[test]
    fn every_player_has_core_fields() {
        for name in names() {
            let p = player(name).unwrap();
            assert!(!p.position.is_empty(), "{}", name);
            assert_eq!(p.strengths.len(), 3, "{}", name);
            assert!(!p.strategic_value.is_empty(), "{}", name);
            assert!(!p.partnership_approach.is_empty(), "{}", name);
        }
        assert_eq!(names().count(), 7);
    }

    #[test]
    fn optional_details_vary_per_player() {
        let orange = player("orangedental GmbH").unwrap();
        let fields: Vec<_> = orange.present_fields().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![PlayerField::Specialization, PlayerField::Experience, PlayerField::Support]
        );
        assert!(orange.partnerships.is_empty());
        assert_eq!(player("Pearl Inc.").unwrap().funding, Some("$58M (largest dental AI funding round)"));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(player("3Shape").is_some());
        assert!(player("3shape").is_none());
        assert!(player("").is_none());
    }
}
