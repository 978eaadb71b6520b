//! Threat Assessment
//!
//! Pure functions over extracted signals: risk scoring and three-tier
//! classification, attacker-persona inference, human-vulnerability
//! assessment, and the action decision. No side effects anywhere in this
//! module.

pub mod decision;
pub mod persona;
pub mod scorer;
pub mod types;
pub mod vulnerability;

pub use types::{
    AnalysisReport, Classification, Decision, Persona, Trigger, VulnerabilityAssessment,
    VulnerabilityRating,
};
