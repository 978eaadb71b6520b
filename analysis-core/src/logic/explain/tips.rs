//! Security Tips
//!
//! Fixed tip rotation. Selection uses a CRC32 checksum of the UTF-8 input
//! bytes so the same text picks the same tip across calls and restarts.

pub const SECURITY_TIPS: [&str; 5] = [
    "Tip: Always hover over links before clicking to see the actual destination URL.",
    "Tip: Legitimate organizations will never ask for your password or SSN via email/message.",
    "Tip: If a message creates extreme urgency, slow down. Attackers use time pressure to bypass logic.",
    "Tip: When in doubt, contact the sender through a known, official channel or website.",
    "Tip: Check for subtle misspellings in brand names (e.g., 'PayPa1' instead of 'PayPal').",
];

/// Pick the tip for this input.
pub fn select(text: &str) -> &'static str {
    let checksum = crc32fast::hash(text.as_bytes()) as usize;
    SECURITY_TIPS[checksum % SECURITY_TIPS.len()]
}
