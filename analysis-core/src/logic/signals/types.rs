//! Signal Types
//!
//! Data structures produced by extraction. No matching logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// SIGNAL COUNTS
// ============================================================================

/// Per-category signal counts. Mutated only during extraction, immutable
/// afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCounts {
    pub credentials: u32,
    pub urgency: u32,
    pub brands: u32,
    pub financial: u32,
    pub authority: u32,
}

impl SignalCounts {
    pub fn is_empty(&self) -> bool {
        self.credentials == 0
            && self.urgency == 0
            && self.brands == 0
            && self.financial == 0
            && self.authority == 0
    }
}

// ============================================================================
// FINDINGS
// ============================================================================

/// Category tag of a recorded match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Critical,
    Suspicious,
    Brand,
    Authority,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Critical => "critical",
            FindingKind::Suspicious => "suspicious",
            FindingKind::Brand => "brand",
            FindingKind::Authority => "authority",
        }
    }
}

/// One recorded pattern or term match. Insertion order is part of the
/// observable contract: the explanation shows the first five findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub matched: String,
}

impl Finding {
    pub fn new(kind: FindingKind, matched: impl Into<String>) -> Self {
        Self {
            kind,
            matched: matched.into(),
        }
    }

    /// Render into the narrative form used by the explanation.
    pub fn render(&self) -> String {
        match self.kind {
            FindingKind::Critical => format!("Critical pattern: {}", self.matched),
            FindingKind::Suspicious => format!("Suspicious pattern: {}", self.matched),
            FindingKind::Brand => format!("Reference to brand: {}", self.matched),
            FindingKind::Authority => format!("Authority language: {}", self.matched),
        }
    }
}

// ============================================================================
// EXTRACTION RESULT
// ============================================================================

/// Output of signal extraction: counts plus the ordered finding sequence.
#[derive(Debug, Clone, Default)]
pub struct ExtractedSignals {
    pub counts: SignalCounts,
    pub findings: Vec<Finding>,
}

impl ExtractedSignals {
    /// Distinct critical patterns present.
    pub fn critical_matches(&self) -> u32 {
        self.count_kind(FindingKind::Critical)
    }

    /// Distinct suspicious patterns present.
    pub fn suspicious_matches(&self) -> u32 {
        self.count_kind(FindingKind::Suspicious)
    }

    fn count_kind(&self, kind: FindingKind) -> u32 {
        self.findings.iter().filter(|f| f.kind == kind).count() as u32
    }
}
