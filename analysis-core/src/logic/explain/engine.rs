//! Explanation Engine
//!
//! Deterministic function of (input text, report, decision, history).
//! Section order is part of the observable contract; see the tests.

use std::fmt::Write;

use super::tips;
use crate::logic::memory::HistoryContext;
use crate::logic::threat::{AnalysisReport, Decision, Trigger};

/// Findings rendered into the evidence section, insertion order.
const MAX_FINDINGS_SHOWN: usize = 5;

/// Render the full narrative for an analysis.
pub fn explain(
    input_text: &str,
    report: &AnalysisReport,
    decision: Decision,
    history: Option<&HistoryContext>,
) -> String {
    let tip = tips::select(input_text);

    if decision == Decision::Allow {
        return format!(
            "As your PhishGuard agent, I have identified this input as **{}**. \
             Following a deep inspection of the content, no malicious heuristics, known phishing patterns, \
             or social engineering tactics were detected. The message structure and intent appear benign, \
             and it is safe for you to interact with this content.\n\n\
             **Security Awareness**: {}",
            report.persona, tip
        );
    }

    let mut out = format!(
        "As your PhishGuard agent, I have decided to **{}**.\n\n",
        decision
    );

    if let Some(history) = history.filter(|h| h.seen_before) {
        let _ = write!(
            out,
            "**Historical Context Alert**: {} This suggests a targeted or automated campaign may be active against your account.\n\n",
            history.message()
        );
    }

    out.push_str("### Why this was flagged\n");
    if decision == Decision::BlockAndAlert {
        let _ = write!(
            out,
            "This message has been classified as a **High-Risk Threat** from an attacker acting as a **{}**. \
             My analysis engine detected explicit markers and malicious intent designed to deceive you into disclosing sensitive information. \
             The combination of technical indicators and psychological pressure confirms this is an active phishing attempt.",
            report.persona
        );
    } else {
        out.push_str(
            "This message is considered **Suspicious**. While it may not contain a direct exploit, it uses highly manipulative tactics \
             consistent with social engineering attacks. It attempts to prime you for a follow-up action by creating an artificial context or emotional state.",
        );
    }

    out.push_str("\n\n### Technical Evidence & Threat Signals\n");
    out.push_str("I have identified the following patterns that form the basis of this assessment:\n");
    for finding in report.findings.iter().take(MAX_FINDINGS_SHOWN) {
        let _ = writeln!(
            out,
            "• **{}**: This is a known indicator used to establish false trust or urgency.",
            finding.render()
        );
    }

    let vuln = &report.vulnerability;
    let trigger_labels: Vec<&str> = vuln.triggers.iter().map(|t| t.label()).collect();
    let _ = write!(
        out,
        "\n### Psychological Vulnerability Assessment\n\
         This attack has a **{}** ({}%) likelihood of bypassing standard human defenses because it exploits: *{}*.\n\n",
        vuln.rating,
        vuln.score,
        trigger_labels.join(", ")
    );

    for trigger in &vuln.triggers {
        out.push_str(trigger_rationale(*trigger));
        out.push('\n');
    }

    let _ = write!(out, "\n### Proactive Security Tip\n{}", tip);

    out
}

/// One psychological-rationale sentence per trigger type.
fn trigger_rationale(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::ArtificialUrgency => {
            "**Urgency Exploitation**: The sender is imposing a strict time limit to force a 'system 1' emotional response, preventing you from performing rational verification."
        }
        Trigger::AuthorityBias => {
            "**Authority Impersonation**: By mimicking trusted institutional language or brands, the attacker attempts to inherit the trust you have in those organizations."
        }
        Trigger::EmotionalManipulation => {
            "**Reward Baiting**: The message dangles a prize or payout to trigger greed, trading your caution for the promise of an easy gain."
        }
        Trigger::FearInducedCompliance => {
            "**Fear Tactics**: The message uses threats (like account closure) to trigger a stress response, making you more likely to comply with instructions to avoid a negative outcome."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::signals::extract;
    use crate::logic::threat::{decision, persona, scorer, vulnerability, Persona};

    fn report_for(text: &str) -> (AnalysisReport, Decision) {
        let signals = extract(text);
        let risk_score = scorer::score(&signals);
        let report = AnalysisReport {
            risk_score,
            classification: scorer::classify(risk_score),
            persona: persona::infer(risk_score, &signals.counts),
            vulnerability: vulnerability::assess(risk_score, &signals.counts),
            findings: signals.findings,
        };
        let d = decision::decide(risk_score);
        (report, d)
    }

    #[test]
    fn benign_narrative_names_persona_and_tip_only() {
        let text = "Hi, let's meet for coffee tomorrow";
        let (report, d) = report_for(text);
        assert_eq!(d, Decision::Allow);

        let text_out = explain(text, &report, d, None);
        assert!(text_out.contains("**Benign**"));
        assert!(text_out.contains("**Security Awareness**: Tip:"));
        assert!(!text_out.contains("Why this was flagged"));
        assert!(!text_out.contains("Historical Context Alert"));
    }

    #[test]
    fn blocked_narrative_has_all_sections_in_order() {
        let text = "Please enter your password and ssn to verify identity immediately";
        let (report, d) = report_for(text);
        assert_eq!(d, Decision::BlockAndAlert);

        let out = explain(text, &report, d, None);
        let why = out.find("### Why this was flagged").unwrap();
        let evidence = out.find("### Technical Evidence & Threat Signals").unwrap();
        let vuln = out.find("### Psychological Vulnerability Assessment").unwrap();
        let tip = out.find("### Proactive Security Tip").unwrap();
        assert!(why < evidence && evidence < vuln && vuln < tip);

        assert!(out.contains("**Block and Alert**"));
        assert!(out.contains("High-Risk Threat"));
        assert!(out.contains("Critical pattern: password"));
        assert!(out.contains("Artificial Urgency"));
        assert!(out.contains("**Fear Tactics**"));
    }

    #[test]
    fn warned_narrative_uses_manipulative_wording() {
        let text = "Your account is suspended, click here to verify now";
        let (report, d) = report_for(text);
        assert_eq!(d, Decision::WarnUser);

        let out = explain(text, &report, d, None);
        assert!(out.contains("**Warn User**"));
        assert!(out.contains("highly manipulative tactics"));
        assert!(!out.contains("High-Risk Threat"));
    }

    #[test]
    fn history_sentence_appears_when_seen_before() {
        let text = "Please enter your password and ssn to verify identity immediately";
        let (report, d) = report_for(text);
        let history = HistoryContext {
            seen_before: true,
            count: 3,
            persona: Persona::CredentialHarvester,
        };

        let out = explain(text, &report, d, Some(&history));
        assert!(out.contains("**Historical Context Alert**"));
        assert!(out.contains("observed 3 times in the last 7 days"));

        let out = explain(text, &report, d, None);
        assert!(!out.contains("**Historical Context Alert**"));
    }

    #[test]
    fn at_most_five_findings_are_rendered() {
        // 2 critical + 2 suspicious + 1 brand + 2 authority = 7 findings
        let text = "urgent security alert: verify identity and password for paypal immediately";
        let (report, d) = report_for(text);
        assert!(report.findings.len() > MAX_FINDINGS_SHOWN);

        let out = explain(text, &report, d, None);
        let bullets = out.matches("• **").count();
        assert_eq!(bullets, MAX_FINDINGS_SHOWN);
    }

    #[test]
    fn narrative_is_deterministic() {
        let text = "Congratulations! Claim your Amazon reward immediately";
        let (report, d) = report_for(text);
        let a = explain(text, &report, d, None);
        let b = explain(text, &report, d, None);
        assert_eq!(a, b);
    }
}
