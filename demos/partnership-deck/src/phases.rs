use deck_engine::PhaseRecord;

/// Project phases, keyed by the `data-phase` value on their card.
static PHASES: [(&str, PhaseRecord); 4] = [
    (
        "1",
        PhaseRecord {
            title: "Foundation Building",
            timeline: "Months 1-6",
            investment: "€0.5M",
            description: "Establish core partnerships and validate market approach",
            objectives: &[
                "Validate partnerships with Acteon, orangedental, Lexmann",
                "Establish Academic Advisory Board (Prof. Wöstmann, Fraunhofer IGD)",
                "Conference presence at IDS 2025, DGDOA meetings",
                "Apply for EU Horizon Europe, German ZIM funding",
            ],
            risks: &[
                "Partnership negotiations may take longer",
                "Funding competition is intense",
            ],
            success_metrics: &[
                "Signed LOIs with key partners",
                "Advisory board established",
                "Funding applications submitted",
            ],
        },
    ),
    (
        "2",
        PhaseRecord {
            title: "MVP Development",
            timeline: "Months 6-12",
            investment: "€1.5M",
            description: "Co-develop MVP with partners and establish IP framework",
            objectives: &[
                "Co-engineering with Acteon (optics), Fraunhofer (algorithms)",
                "Beta program with Lexmann lab + 5 partner practices",
                "Establish IP framework and dual licensing model",
                "Launch community platform (GitHub, Discourse forum)",
            ],
            risks: &["Technical integration challenges", "IP negotiations complexity"],
            success_metrics: &[
                "Working prototype delivered",
                "Beta testing completed",
                "Community platform active",
            ],
        },
    ),
    (
        "3",
        PhaseRecord {
            title: "Market Launch",
            timeline: "Months 12-18",
            investment: "€1.5M",
            description: "Launch commercial operations and establish market presence",
            objectives: &[
                "orangedental exclusive DACH distribution rights",
                "Pearl diagnostic modules integration",
                "University pilots in Germany, Austria, Switzerland",
                "Press campaign via Dental Tribune, trade publications",
            ],
            risks: &["Market reception uncertainty", "Competition response"],
            success_metrics: &[
                "Distribution agreements signed",
                "AI modules integrated",
                "University pilots active",
            ],
        },
    ),
    (
        "4",
        PhaseRecord {
            title: "Scale & Expand",
            timeline: "Months 18-24+",
            investment: "€1M+",
            description: "Scale operations and explore expansion opportunities",
            objectives: &[
                "European expansion via ADEE network",
                "Commercial scanner based on open platform",
                "Self-sustaining community support",
                "Strategic exit opportunities",
            ],
            risks: &["Scaling challenges", "Increased competition"],
            success_metrics: &[
                "€5M+ revenue by Year 3",
                "European presence established",
                "Exit opportunities identified",
            ],
        },
    ),
];

/// Look up a phase by its card key ("1" to "4").
pub fn phase(key: &str) -> Option<&'static PhaseRecord> {
    PHASES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, record)| record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_complete_phases() {
        for key in ["1", "2", "3", "4"] {
            let p = phase(key).unwrap();
            assert_eq!(p.objectives.len(), 4, "phase {}", key);
            assert_eq!(p.risks.len(), 2, "phase {}", key);
            assert_eq!(p.success_metrics.len(), 3, "phase {}", key);
        }
    }

    #[test]
    fn unknown_keys_miss() {
        assert!(phase("0").is_none());
        assert!(phase("5").is_none());
        assert!(phase("").is_none());
    }
}
