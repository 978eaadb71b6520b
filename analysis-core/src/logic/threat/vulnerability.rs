//! Vulnerability Assessor
//!
//! Estimates how likely a human target is to be psychologically manipulated
//! by the content. Triggers are evaluated in a fixed order; that order is
//! the narrative display order.

use super::types::{Trigger, VulnerabilityAssessment, VulnerabilityRating};
use crate::logic::signals::SignalCounts;

// ============================================================================
// WEIGHTS & BOUNDS
// ============================================================================

/// Score contribution per urgency signal.
pub const URGENCY_WEIGHT: u32 = 25;

/// Score contribution per authority signal.
pub const AUTHORITY_WEIGHT: u32 = 15;

/// Score contribution per financial signal.
pub const FINANCIAL_WEIGHT: u32 = 20;

/// Lower clamp for a flagged message.
pub const SCORE_FLOOR: u32 = 10;

/// Upper clamp.
pub const SCORE_CEILING: u32 = 95;

/// Constant score when the message carries no meaningful risk.
pub const BASELINE_SCORE: u32 = 5;

/// Risk score at or below which the baseline applies.
pub const RISK_GATE: u32 = 20;

// Rating tiers
const VERY_HIGH_MIN: u32 = 75;
const HIGH_MIN: u32 = 50;
const MODERATE_MIN: u32 = 25;

// ============================================================================
// ASSESSMENT
// ============================================================================

/// Assess manipulation likelihood. Pure function of (risk score, counts).
pub fn assess(risk_score: u32, counts: &SignalCounts) -> VulnerabilityAssessment {
    let mut triggers = Vec::new();
    if counts.urgency > 0 {
        triggers.push(Trigger::ArtificialUrgency);
    }
    if counts.authority > 0 || counts.brands > 0 {
        triggers.push(Trigger::AuthorityBias);
    }
    if counts.financial > 0 {
        triggers.push(Trigger::EmotionalManipulation);
    }
    if counts.credentials > 0 && counts.urgency > 0 {
        triggers.push(Trigger::FearInducedCompliance);
    }

    let raw = counts.urgency * URGENCY_WEIGHT
        + counts.authority * AUTHORITY_WEIGHT
        + counts.financial * FINANCIAL_WEIGHT;

    let score = if risk_score > RISK_GATE {
        raw.clamp(SCORE_FLOOR, SCORE_CEILING)
    } else {
        BASELINE_SCORE
    };

    VulnerabilityAssessment {
        score,
        rating: rate(score),
        triggers,
    }
}

fn rate(score: u32) -> VulnerabilityRating {
    if score >= VERY_HIGH_MIN {
        VulnerabilityRating::VeryHigh
    } else if score >= HIGH_MIN {
        VulnerabilityRating::High
    } else if score >= MODERATE_MIN {
        VulnerabilityRating::Moderate
    } else {
        VulnerabilityRating::Low
    }
}
