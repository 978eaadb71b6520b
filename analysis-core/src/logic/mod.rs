//! Logic Module - Analysis Pipeline & Engines
//!
//! - `signals/` - Pattern-based signal extraction (rules, extractor)
//! - `threat/`  - Risk scoring, persona inference, vulnerability, decision
//! - `memory/`  - Historical-context store (SQLite)
//! - `explain/` - Deterministic explanation rendering
//! - `agent`    - Orchestrator sequencing the fixed pipeline

pub mod agent;
pub mod explain;
pub mod memory;
pub mod signals;
pub mod threat;
