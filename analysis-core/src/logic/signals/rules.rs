//! Signal Extraction Rules
//!
//! Fixed pattern sets and term lists. No extraction logic here - only the
//! tables the extractor walks, plus the risk weights the scorer applies.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// SIGNAL ROUTING
// ============================================================================

/// Signal category a matched pattern feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTag {
    Credentials,
    Urgency,
    Financial,
}

/// How a pattern is matched against the lowercased input.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Plain substring presence check.
    Substring(&'static str),
    /// `http://` URL with an IPv4 literal host.
    IpLiteralUrl,
}

static IP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http://\d+\.\d+\.\d+\.\d+").expect("valid IP-literal URL regex"));

impl Matcher {
    pub fn matches(&self, text_lower: &str) -> bool {
        match self {
            Matcher::Substring(needle) => text_lower.contains(needle),
            Matcher::IpLiteralUrl => IP_URL_RE.is_match(text_lower),
        }
    }
}

/// One configured indicator pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    /// Text rendered into findings (the pattern as written).
    pub label: &'static str,
    pub matcher: Matcher,
    /// Signal category this pattern increments, if any.
    pub signal: Option<SignalTag>,
}

const fn substring(
    needle: &'static str,
    signal: Option<SignalTag>,
) -> PatternRule {
    PatternRule {
        label: needle,
        matcher: Matcher::Substring(needle),
        signal,
    }
}

// ============================================================================
// PATTERN SETS
// ============================================================================

/// Explicit malicious markers. Patterns relating to password/verify/ssn
/// feed the `credentials` signal.
pub const CRITICAL_PATTERNS: [PatternRule; 7] = [
    substring("password", Some(SignalTag::Credentials)),
    substring("ssn", Some(SignalTag::Credentials)),
    substring("credit card", None),
    substring("pin", None),
    substring("bank account", None),
    PatternRule {
        label: r"http://\d+\.\d+\.\d+\.\d+",
        matcher: Matcher::IpLiteralUrl,
        signal: None,
    },
    substring("verify identity", Some(SignalTag::Credentials)),
];

/// Manipulative-but-not-explicit markers. Urgent/immediately feed `urgency`;
/// claim/congratulations feed `financial`.
pub const SUSPICIOUS_PATTERNS: [PatternRule; 7] = [
    substring("urgent", Some(SignalTag::Urgency)),
    substring("immediately", Some(SignalTag::Urgency)),
    substring("suspended", None),
    substring("claim your", Some(SignalTag::Financial)),
    substring("congratulations", Some(SignalTag::Financial)),
    substring("click here", None),
    substring("verify now", None),
];

/// Commonly impersonated brands.
pub const BRAND_TERMS: [&str; 6] = [
    "paypal",
    "microsoft",
    "amazon",
    "google",
    "apple",
    "netflix",
];

/// Institutional-authority language.
pub const AUTHORITY_TERMS: [&str; 6] = [
    "security",
    "alert",
    "official",
    "bank",
    "support",
    "department",
];

// ============================================================================
// RISK WEIGHTS
// ============================================================================

/// Score contribution per distinct critical pattern present.
pub const RISK_WEIGHT_CRITICAL: u32 = 35;

/// Score contribution per distinct suspicious pattern present.
pub const RISK_WEIGHT_SUSPICIOUS: u32 = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_literal_url_matches() {
        assert!(Matcher::IpLiteralUrl.matches("visit http://192.168.0.1/login"));
        assert!(!Matcher::IpLiteralUrl.matches("visit http://example.com/login"));
        assert!(!Matcher::IpLiteralUrl.matches("https://10.0.0.1"));
    }

    #[test]
    fn substring_matcher_is_presence_based() {
        let m = Matcher::Substring("urgent");
        assert!(m.matches("urgent urgent urgent"));
        assert!(!m.matches("calm message"));
    }
}
