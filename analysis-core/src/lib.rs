//! PhishGuard Analysis Core
//!
//! Deterministic phishing / social-engineering analysis for short free text
//! (messages, emails). The pipeline extracts indicator signals, scores risk,
//! infers an attacker persona, assesses human manipulation likelihood,
//! decides an action, and renders an explanation — correlating the input
//! against a short-term SQLite history of prior classifications.
//!
//! Everything except the history store is a pure, reentrant function of its
//! inputs; [`SecurityAgent`] is the single entry point a transport calls.

pub mod error;
pub mod logic;

pub use error::{CoreError, CoreResult};
pub use logic::agent::{AnalysisOutcome, SecurityAgent};
pub use logic::memory::MemoryStore;
