// systems/details.rs
//
// HTML bodies for the detail modal, built from the static records.
// Output is inserted with innerHTML, so every record string is escaped.

use std::fmt::Write;
use crate::api::types::{PhaseRecord, PlayerRecord};

/// Escape text for use inside HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_list(out: &mut String, heading: &str, items: &[&str]) {
    let _ = write!(out, "<h4>{}</h4><ul>", escape_html(heading));
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>");
}

/// Modal body for a player: overview with every present detail, strengths,
/// partnerships (when any) and the strategic assessment.
pub fn player_details_html(player: &PlayerRecord) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(r#"<div class="player-details-modal">"#);

    out.push_str(r#"<div class="player-overview"><h4>Market Position</h4>"#);
    let _ = write!(out, "<p>{}</p>", escape_html(player.position));
    for (field, value) in player.present_fields() {
        let _ = write!(
            out,
            "<p><strong>{}:</strong> {}</p>",
            field.label(),
            escape_html(value)
        );
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="player-strengths">"#);
    push_list(&mut out, "Key Strengths", player.strengths);
    out.push_str("</div>");

    if !player.partnerships.is_empty() {
        out.push_str(r#"<div class="player-partnerships">"#);
        push_list(&mut out, "Partnerships", player.partnerships);
        out.push_str("</div>");
    }

    out.push_str(r#"<div class="strategic-assessment">"#);
    let _ = write!(
        out,
        "<h4>Strategic Value</h4><p>{}</p><h4>Partnership Approach</h4><p>{}</p>",
        escape_html(player.strategic_value),
        escape_html(player.partnership_approach)
    );
    out.push_str("</div></div>");
    out
}

/// Modal title for a phase card, e.g. `Phase 2: MVP Development`.
pub fn phase_title(key: &str, phase: &PhaseRecord) -> String {
    format!("Phase {}: {}", key, phase.title)
}

/// Modal body for a phase: timeline and investment, description, then
/// objectives, risks and success metrics.
pub fn phase_details_html(phase: &PhaseRecord) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(r#"<div class="phase-details-modal"><div class="phase-overview">"#);
    let _ = write!(
        out,
        r#"<div class="phase-meta"><span class="phase-timeline">{}</span><span class="phase-investment">{}</span></div>"#,
        escape_html(phase.timeline),
        escape_html(phase.investment)
    );
    let _ = write!(
        out,
        r#"<p class="phase-description">{}</p></div>"#,
        escape_html(phase.description)
    );

    out.push_str(r#"<div class="phase-objectives">"#);
    push_list(&mut out, "Key Objectives", phase.objectives);
    out.push_str(r#"</div><div class="phase-risks">"#);
    push_list(&mut out, "Key Risks", phase.risks);
    out.push_str(r#"</div><div class="phase-metrics">"#);
    push_list(&mut out, "Success Metrics", phase.success_metrics);
    out.push_str("</div></div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: PlayerRecord = PlayerRecord {
        position: "Open platform",
        products: Some("Scanner <X>"),
        strengths: &["R&D", "Reach"],
        strategic_value: "High",
        partnership_approach: "API",
        ..PlayerRecord::EMPTY
    };

    const PHASE: PhaseRecord = PhaseRecord {
        title: "Pilot",
        timeline: "Months 1-3",
        investment: "€0.1M",
        description: "Try it",
        objectives: &["One", "Two"],
        risks: &["Slip"],
        success_metrics: &["Done"],
    };

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<a href="x">R&D's</a>"#), "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;");
        assert_eq!(escape_html("€0.5M, 1000+ labs"), "€0.5M, 1000+ labs");
    }

    #[test]
    fn player_body_lists_present_details_only() {
        let html = player_details_html(&PLAYER);
        assert!(html.contains("<p><strong>Products:</strong> Scanner &lt;X&gt;</p>"));
        assert!(!html.contains("Revenue"));
        assert!(html.contains("<li>R&amp;D</li><li>Reach</li>"));
        assert!(!html.contains("player-partnerships"));
        assert!(html.contains("<h4>Partnership Approach</h4><p>API</p>"));
    }

    #[test]
    fn player_body_includes_partnerships_when_present() {
        let player = PlayerRecord {
            partnerships: &["Labs"],
            ..PLAYER
        };
        let html = player_details_html(&player);
        assert!(html.contains("<h4>Partnerships</h4><ul><li>Labs</li></ul>"));
    }

    #[test]
    fn phase_body_has_every_list() {
        let html = phase_details_html(&PHASE);
        assert!(html.contains(r#"<span class="phase-timeline">Months 1-3</span>"#));
        assert!(html.contains(r#"<span class="phase-investment">€0.1M</span>"#));
        assert!(html.contains("<li>One</li><li>Two</li>"));
        assert!(html.contains("<h4>Key Risks</h4><ul><li>Slip</li></ul>"));
        assert!(html.contains("<h4>Success Metrics</h4><ul><li>Done</li></ul>"));
        assert_eq!(phase_title("1", &PHASE), "Phase 1: Pilot");
    }
}
