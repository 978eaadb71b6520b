//! Analysis Orchestrator
//!
//! Sequences the fixed pipeline Observe -> Analyze -> Correlate-History ->
//! Decide -> Explain -> Persist. Persist always follows Explain, so the
//! explanation reflects the store as it was before the current record was
//! appended. Any store failure aborts the whole request - history is never
//! silently treated as empty.

use chrono::Utc;
use serde::Serialize;

use crate::error::CoreResult;
use crate::logic::explain;
use crate::logic::memory::{HistoricalRecord, HistoryContext, MemoryStore, HISTORY_WINDOW_DAYS};
use crate::logic::signals;
use crate::logic::threat::{
    decision, persona, scorer, vulnerability, AnalysisReport, Classification, Decision, Persona,
    VulnerabilityAssessment,
};

/// Result of one completed analysis, shaped for the transport layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub risk_score: u32,
    pub classification: Classification,
    pub attacker_persona: Persona,
    pub vulnerability_assessment: VulnerabilityAssessment,
    pub agent_decision: Decision,
    pub explanation: String,
    /// RFC 3339 UTC timestamp of the analysis.
    pub timestamp: String,
}

/// Sole entry point the external transport calls. Holds no mutable state of
/// its own; the memory store serializes its own access, so one agent can be
/// shared across concurrent requests.
pub struct SecurityAgent {
    store: MemoryStore,
}

impl SecurityAgent {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Run the full pipeline over one piece of text.
    ///
    /// The only structural precondition is that the text is non-empty after
    /// trimming; length gating is the transport boundary's responsibility.
    pub fn analyze(&self, text: &str) -> CoreResult<AnalysisOutcome> {
        // Observe
        let observed = text.trim();

        // Analyze: extraction, scoring, persona, vulnerability
        let extracted = signals::extract(observed);
        let risk_score = scorer::score(&extracted);
        let classification = scorer::classify(risk_score);
        let attacker_persona = persona::infer(risk_score, &extracted.counts);
        let vulnerability_assessment = vulnerability::assess(risk_score, &extracted.counts);
        log::debug!(
            "Analyzed input: score={} class={} persona={}",
            risk_score,
            classification,
            attacker_persona
        );

        // Correlate-History: Benign is pointless to look up, skip the I/O
        let history = self.correlate(attacker_persona)?;

        // Decide
        let agent_decision = decision::decide(risk_score);

        // Explain
        let report = AnalysisReport {
            risk_score,
            classification,
            findings: extracted.findings,
            persona: attacker_persona,
            vulnerability: vulnerability_assessment,
        };
        let explanation = explain::explain(observed, &report, agent_decision, history.as_ref());

        // Persist - strictly after the explanation is rendered
        let timestamp = Utc::now().to_rfc3339();
        self.store.append(&HistoricalRecord {
            timestamp: timestamp.clone(),
            input_text: observed.to_string(),
            classification,
            persona: attacker_persona,
            risk_score,
        })?;

        if agent_decision != Decision::Allow {
            log::info!(
                "Flagged input: decision={} persona={} score={}",
                agent_decision,
                attacker_persona,
                risk_score
            );
        }

        Ok(AnalysisOutcome {
            risk_score,
            classification,
            attacker_persona,
            vulnerability_assessment: report.vulnerability,
            agent_decision,
            explanation,
            timestamp,
        })
    }

    fn correlate(&self, persona: Persona) -> CoreResult<Option<HistoryContext>> {
        if persona == Persona::Benign {
            return Ok(None);
        }
        let count = self.store.count_since(persona, HISTORY_WINDOW_DAYS)?;
        if count == 0 {
            return Ok(None);
        }
        Ok(Some(HistoryContext {
            seen_before: true,
            count,
            persona,
        }))
    }
}
