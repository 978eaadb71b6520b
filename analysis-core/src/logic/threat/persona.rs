//! Persona Classifier
//!
//! Maps risk score and signal composition to an attacker-persona label.
//! First matching rule wins; the order below is the contract.

use super::scorer::SUSPICIOUS_THRESHOLD;
use super::types::Persona;
use crate::logic::signals::SignalCounts;

/// Infer the attacker persona. Pure function of (risk score, signal counts).
pub fn infer(risk_score: u32, counts: &SignalCounts) -> Persona {
    if risk_score < SUSPICIOUS_THRESHOLD {
        Persona::Benign
    } else if counts.brands > 0 && counts.credentials > 0 {
        Persona::BrandImpersonator
    } else if counts.credentials > 0 {
        Persona::CredentialHarvester
    } else if counts.urgency > 0 || counts.financial > 0 {
        Persona::SocialEngineer
    } else {
        Persona::UnknownThreat
    }
}
