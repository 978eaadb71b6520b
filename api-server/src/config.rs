//! Server configuration

use std::env;
use std::path::PathBuf;

use phishguard_core::MemoryStore;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PHISHGUARD_PORT`).
    pub port: u16,
    /// SQLite memory database path (`PHISHGUARD_DB`).
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PHISHGUARD_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let db_path = env::var("PHISHGUARD_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| MemoryStore::default_path());

        Self { port, db_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        // Not set in the test environment
        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.db_path.ends_with("agent_memory.db"));
    }
}
