//! Explanation Generator
//!
//! Renders a deterministic natural-language narrative for the analysis:
//! decision and persona, historical context, evidentiary findings, the
//! vulnerability picture, and a rotating security tip. No randomness - the
//! same input always produces the same text.

pub mod engine;
pub mod tips;

pub use engine::explain;
