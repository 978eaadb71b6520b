//! Memory Types

use serde::{Deserialize, Serialize};

use crate::logic::threat::{Classification, Persona};

/// One persisted row of the `memory` table. Created exactly once per
/// completed analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
    pub input_text: String,
    pub classification: Classification,
    pub persona: Persona,
    pub risk_score: u32,
}

/// Derived answer to "how often has this persona been seen lately".
/// Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryContext {
    pub seen_before: bool,
    pub count: u32,
    pub persona: Persona,
}

impl HistoryContext {
    /// Sentence rendered into the explanation's historical-context section.
    pub fn message(&self) -> String {
        format!(
            "Note: A similar **{}** pattern has been observed {} times in the last 7 days.",
            self.persona, self.count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_message_cites_persona_and_count() {
        let ctx = HistoryContext {
            seen_before: true,
            count: 3,
            persona: Persona::CredentialHarvester,
        };
        assert_eq!(
            ctx.message(),
            "Note: A similar **Credential Harvester** pattern has been observed 3 times in the last 7 days."
        );
    }
}
