//! Core error taxonomy
//!
//! A store failure is never downgraded to "no history" — the whole analysis
//! fails instead. An inconsistency (e.g. a history query for a persona that
//! must never be queried) fails closed.

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug)]
pub enum CoreError {
    /// The persistence layer could not be reached or an operation failed.
    Store(rusqlite::Error),
    /// A pipeline invariant was violated; treated as a defect.
    Inconsistency(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::Store(e) => write!(f, "Store Error: {}", e),
            CoreError::Inconsistency(msg) => write!(f, "Internal Inconsistency: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Store(err)
    }
}
