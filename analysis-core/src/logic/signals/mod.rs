//! Signal Extraction
//!
//! Scans text for categorized indicator patterns and named brand/authority
//! terms. Matching is case-insensitive and presence-based: each configured
//! pattern contributes at most one signal increment and one finding,
//! regardless of how many times it occurs in the text.

pub mod extractor;
pub mod rules;
pub mod types;

pub use extractor::extract;
pub use types::{ExtractedSignals, Finding, FindingKind, SignalCounts};
