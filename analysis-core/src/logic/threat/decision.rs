//! Decision Engine
//!
//! Maps risk score to an action. Total function, same thresholds as the
//! classification tiers.

use super::scorer::{PHISHING_THRESHOLD, SUSPICIOUS_THRESHOLD};
use super::types::Decision;

/// Decide the recommended action from the risk score alone.
pub fn decide(risk_score: u32) -> Decision {
    if risk_score >= PHISHING_THRESHOLD {
        Decision::BlockAndAlert
    } else if risk_score >= SUSPICIOUS_THRESHOLD {
        Decision::WarnUser
    } else {
        Decision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_boundaries() {
        assert_eq!(decide(0), Decision::Allow);
        assert_eq!(decide(39), Decision::Allow);
        assert_eq!(decide(40), Decision::WarnUser);
        assert_eq!(decide(69), Decision::WarnUser);
        assert_eq!(decide(70), Decision::BlockAndAlert);
        assert_eq!(decide(100), Decision::BlockAndAlert);
    }
}
