//! Risk Scorer
//!
//! Converts distinct pattern matches into a bounded risk score and the
//! three-tier classification. Deterministic and explainable.

use super::types::Classification;
use crate::logic::signals::ExtractedSignals;
use crate::logic::signals::rules::{RISK_WEIGHT_CRITICAL, RISK_WEIGHT_SUSPICIOUS};

/// Risk score upper bound.
pub const MAX_RISK_SCORE: u32 = 100;

/// At or above this score = Phishing / Block and Alert.
pub const PHISHING_THRESHOLD: u32 = 70;

/// At or above this score = Suspicious / Warn User.
pub const SUSPICIOUS_THRESHOLD: u32 = 40;

/// Weighted score over distinct critical/suspicious matches, capped at 100.
pub fn score(signals: &ExtractedSignals) -> u32 {
    let raw = RISK_WEIGHT_CRITICAL * signals.critical_matches()
        + RISK_WEIGHT_SUSPICIOUS * signals.suspicious_matches();
    raw.min(MAX_RISK_SCORE)
}

/// Classification is a total function of the risk score alone.
pub fn classify(risk_score: u32) -> Classification {
    if risk_score >= PHISHING_THRESHOLD {
        Classification::Phishing
    } else if risk_score >= SUSPICIOUS_THRESHOLD {
        Classification::Suspicious
    } else {
        Classification::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::signals::extract;

    #[test]
    fn clean_text_scores_zero() {
        let signals = extract("Hi, let's meet for coffee tomorrow");
        assert_eq!(score(&signals), 0);
        assert_eq!(classify(0), Classification::Safe);
    }

    #[test]
    fn three_suspicious_patterns_score_45() {
        let signals = extract("Your account is suspended, click here to verify now");
        assert_eq!(score(&signals), 45);
        assert_eq!(classify(45), Classification::Suspicious);
    }

    #[test]
    fn score_caps_at_100() {
        let signals =
            extract("Please enter your password and ssn to verify identity immediately");
        // 3 critical + 1 suspicious = 120 raw
        assert_eq!(score(&signals), 100);
        assert_eq!(classify(100), Classification::Phishing);
    }

    #[test]
    fn score_is_monotonic_in_matches() {
        let one = score(&extract("urgent"));
        let two = score(&extract("urgent, act immediately"));
        let three = score(&extract("urgent, act immediately, account suspended"));
        assert!(one < two && two < three);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(39), Classification::Safe);
        assert_eq!(classify(40), Classification::Suspicious);
        assert_eq!(classify(69), Classification::Suspicious);
        assert_eq!(classify(70), Classification::Phishing);
        assert_eq!(classify(100), Classification::Phishing);
    }
}
