//! Signal Extractor
//!
//! Walks the configured pattern tables over the lowercased input. Presence,
//! not occurrence count, drives the result: a pattern repeated ten times
//! still contributes one signal and one finding.

use super::rules::{
    PatternRule, SignalTag, AUTHORITY_TERMS, BRAND_TERMS, CRITICAL_PATTERNS, SUSPICIOUS_PATTERNS,
};
use super::types::{ExtractedSignals, Finding, FindingKind};

/// Extract signal counts and ordered findings from trimmed input text.
pub fn extract(text: &str) -> ExtractedSignals {
    let text_lower = text.to_lowercase();
    let mut out = ExtractedSignals::default();

    scan_patterns(
        &text_lower,
        &CRITICAL_PATTERNS,
        FindingKind::Critical,
        &mut out,
    );
    scan_patterns(
        &text_lower,
        &SUSPICIOUS_PATTERNS,
        FindingKind::Suspicious,
        &mut out,
    );

    for brand in BRAND_TERMS {
        if text_lower.contains(brand) {
            out.counts.brands += 1;
            out.findings.push(Finding::new(FindingKind::Brand, brand));
        }
    }

    for term in AUTHORITY_TERMS {
        if text_lower.contains(term) {
            out.counts.authority += 1;
            out.findings.push(Finding::new(FindingKind::Authority, term));
        }
    }

    out
}

fn scan_patterns(
    text_lower: &str,
    patterns: &[PatternRule],
    kind: FindingKind,
    out: &mut ExtractedSignals,
) {
    for rule in patterns {
        if !rule.matcher.matches(text_lower) {
            continue;
        }
        out.findings.push(Finding::new(kind, rule.label));
        match rule.signal {
            Some(SignalTag::Credentials) => out.counts.credentials += 1,
            Some(SignalTag::Urgency) => out.counts.urgency += 1,
            Some(SignalTag::Financial) => out.counts.financial += 1,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_yields_nothing() {
        let out = extract("Hi, let's meet for coffee tomorrow");
        assert!(out.counts.is_empty());
        assert!(out.findings.is_empty());
    }

    #[test]
    fn credential_harvest_text() {
        let out = extract("Please enter your password and ssn to verify identity immediately");
        assert_eq!(out.critical_matches(), 3);
        assert_eq!(out.suspicious_matches(), 1);
        assert_eq!(out.counts.credentials, 3);
        assert_eq!(out.counts.urgency, 1);
        assert_eq!(out.counts.financial, 0);
    }

    #[test]
    fn suspicious_only_text() {
        let out = extract("Your account is suspended, click here to verify now");
        assert_eq!(out.critical_matches(), 0);
        assert_eq!(out.suspicious_matches(), 3);
        // suspended / click here / verify now route to no signal category
        assert!(out.counts.is_empty());
    }

    #[test]
    fn repeated_pattern_counts_once() {
        let once = extract("urgent action required");
        let many = extract("urgent urgent URGENT action required");
        assert_eq!(once.counts.urgency, 1);
        assert_eq!(many.counts.urgency, 1);
        assert_eq!(once.suspicious_matches(), many.suspicious_matches());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let out = extract("URGENT: your PayPal SECURITY alert");
        assert_eq!(out.counts.urgency, 1);
        assert_eq!(out.counts.brands, 1);
        assert_eq!(out.counts.authority, 2); // security + alert
    }

    #[test]
    fn ip_literal_url_is_critical() {
        let out = extract("login at http://45.33.21.9/account");
        assert_eq!(out.critical_matches(), 1);
        assert_eq!(out.findings[0].matched, r"http://\d+\.\d+\.\d+\.\d+");
        assert_eq!(out.counts.credentials, 0);
    }

    #[test]
    fn findings_preserve_table_order() {
        let out = extract("password urgent paypal support");
        let kinds: Vec<_> = out.findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FindingKind::Critical,
                FindingKind::Suspicious,
                FindingKind::Brand,
                FindingKind::Authority,
            ]
        );
    }
}
