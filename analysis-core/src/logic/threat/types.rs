//! Threat Types
//!
//! Core data structures for the assessment stages. No logic here.

use serde::{Deserialize, Serialize};

use crate::logic::signals::Finding;

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Three-tier classification, a pure function of the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Safe,
    Suspicious,
    Phishing,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Safe => "Safe",
            Classification::Suspicious => "Suspicious",
            Classification::Phishing => "Phishing",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ATTACKER PERSONA
// ============================================================================

/// Inferred category of the presumed attacker / content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "Benign")]
    Benign,
    #[serde(rename = "Brand Impersonator")]
    BrandImpersonator,
    #[serde(rename = "Credential Harvester")]
    CredentialHarvester,
    #[serde(rename = "Social Engineer")]
    SocialEngineer,
    #[serde(rename = "Unknown Threat")]
    UnknownThreat,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Benign => "Benign",
            Persona::BrandImpersonator => "Brand Impersonator",
            Persona::CredentialHarvester => "Credential Harvester",
            Persona::SocialEngineer => "Social Engineer",
            Persona::UnknownThreat => "Unknown Threat",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DECISION
// ============================================================================

/// Recommended action, derived solely from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "Allow")]
    Allow,
    #[serde(rename = "Warn User")]
    WarnUser,
    #[serde(rename = "Block and Alert")]
    BlockAndAlert,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "Allow",
            Decision::WarnUser => "Warn User",
            Decision::BlockAndAlert => "Block and Alert",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VULNERABILITY ASSESSMENT
// ============================================================================

/// Named psychological manipulation tactic detected in the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    #[serde(rename = "Artificial Urgency")]
    ArtificialUrgency,
    #[serde(rename = "Authority Bias")]
    AuthorityBias,
    #[serde(rename = "Emotional Manipulation (Reward/Greed)")]
    EmotionalManipulation,
    #[serde(rename = "Fear-Induced Compliance")]
    FearInducedCompliance,
}

impl Trigger {
    pub fn label(&self) -> &'static str {
        match self {
            Trigger::ArtificialUrgency => "Artificial Urgency",
            Trigger::AuthorityBias => "Authority Bias",
            Trigger::EmotionalManipulation => "Emotional Manipulation (Reward/Greed)",
            Trigger::FearInducedCompliance => "Fear-Induced Compliance",
        }
    }
}

/// Qualitative tier summarizing manipulation likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VulnerabilityRating {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl VulnerabilityRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            VulnerabilityRating::Low => "Low",
            VulnerabilityRating::Moderate => "Moderate",
            VulnerabilityRating::High => "High",
            VulnerabilityRating::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for VulnerabilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How likely a human target is to be manipulated by the content.
/// Trigger order is evaluation order and is part of the narrative contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityAssessment {
    pub score: u32,
    pub rating: VulnerabilityRating,
    pub triggers: Vec<Trigger>,
}

// ============================================================================
// ANALYSIS REPORT
// ============================================================================

/// Immutable result of the analysis stage, consumed by the explanation
/// generator and the orchestrator.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub risk_score: u32,
    pub classification: Classification,
    pub findings: Vec<Finding>,
    pub persona: Persona,
    pub vulnerability: VulnerabilityAssessment,
}
