//! SQLite-backed Memory Store
//!
//! One connection behind a mutex gives single-writer ordering: an append is
//! one atomic INSERT, and a count never observes a partially written row.
//! The lock is scoped per operation and released on every exit path.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection};

use super::types::HistoricalRecord;
use crate::error::{CoreError, CoreResult};
use crate::logic::threat::Persona;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS memory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT,
    input_text TEXT,
    classification TEXT,
    attacker_persona TEXT,
    risk_score INTEGER
)";

/// Append-only historical-context store.
pub struct MemoryStore {
    conn: Mutex<Connection>,
}

impl MemoryStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> CoreResult<Self> {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Could not create data directory {:?}: {}", parent, e);
            }
        }
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        log::info!("Memory store opened: {:?}", path);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store for tests and ephemeral runs.
    pub fn open_in_memory() -> CoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(SCHEMA, [])?;
        Ok(())
    }

    /// Default on-disk location under the local data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("phishguard")
            .join("agent_memory.db")
    }

    /// Durably persist one record.
    pub fn append(&self, record: &HistoricalRecord) -> CoreResult<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO memory (timestamp, input_text, classification, attacker_persona, risk_score)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.timestamp,
                record.input_text,
                record.classification.as_str(),
                record.persona.as_str(),
                record.risk_score,
            ],
        )?;
        Ok(())
    }

    /// Count records with the given persona inside the trailing window,
    /// measured against wall-clock time at query time.
    ///
    /// Benign must be short-circuited by the caller; a Benign query here is
    /// an inconsistency and fails closed.
    pub fn count_since(&self, persona: Persona, window_days: i64) -> CoreResult<u32> {
        if persona == Persona::Benign {
            return Err(CoreError::Inconsistency(
                "history lookup attempted for Benign persona".to_string(),
            ));
        }

        // RFC 3339 UTC strings order lexicographically, so the cutoff can be
        // compared as text.
        let cutoff = (Utc::now() - Duration::days(window_days)).to_rfc3339();
        let conn = self.conn.lock();
        let count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM memory WHERE attacker_persona = ?1 AND timestamp > ?2",
            params![persona.as_str(), cutoff],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::super::HISTORY_WINDOW_DAYS;
    use super::*;
    use crate::logic::threat::Classification;
    use tempfile::TempDir;

    fn record(persona: Persona, timestamp: String) -> HistoricalRecord {
        HistoricalRecord {
            timestamp,
            input_text: "enter your password now".to_string(),
            classification: Classification::Phishing,
            persona,
            risk_score: 70,
        }
    }

    #[test]
    fn count_matches_appends_within_window() {
        let store = MemoryStore::open_in_memory().unwrap();
        for _ in 0..3 {
            store
                .append(&record(Persona::CredentialHarvester, Utc::now().to_rfc3339()))
                .unwrap();
        }
        store
            .append(&record(Persona::SocialEngineer, Utc::now().to_rfc3339()))
            .unwrap();

        let count = store
            .count_since(Persona::CredentialHarvester, HISTORY_WINDOW_DAYS)
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn records_outside_window_are_excluded() {
        let store = MemoryStore::open_in_memory().unwrap();
        let stale = (Utc::now() - Duration::days(10)).to_rfc3339();
        store
            .append(&record(Persona::CredentialHarvester, stale))
            .unwrap();
        store
            .append(&record(Persona::CredentialHarvester, Utc::now().to_rfc3339()))
            .unwrap();

        let count = store
            .count_since(Persona::CredentialHarvester, HISTORY_WINDOW_DAYS)
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn benign_query_fails_closed() {
        let store = MemoryStore::open_in_memory().unwrap();
        let err = store.count_since(Persona::Benign, HISTORY_WINDOW_DAYS);
        assert!(matches!(err, Err(CoreError::Inconsistency(_))));
    }

    #[test]
    fn on_disk_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("memory.db");
        {
            let store = MemoryStore::open(&path).unwrap();
            store
                .append(&record(Persona::SocialEngineer, Utc::now().to_rfc3339()))
                .unwrap();
        }
        let store = MemoryStore::open(&path).unwrap();
        let count = store
            .count_since(Persona::SocialEngineer, HISTORY_WINDOW_DAYS)
            .unwrap();
        assert_eq!(count, 1);
    }
}
