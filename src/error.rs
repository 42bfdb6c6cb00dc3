//! Error types for the team roster console

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Player {last_name} has no owning team")]
    MissingTeam { last_name: String },

    #[error("Team {team} must be persisted before its players")]
    TransientTeam { team: String },

    #[error("A team named {name} already exists")]
    DuplicateTeam { name: String },

    #[error("{kind} with id {id} is already persisted")]
    AlreadyPersisted { kind: &'static str, id: i64 },

    #[error("{kind} has not been persisted yet")]
    NotPersisted { kind: &'static str },

    #[error("Named query {query} cannot be used this way")]
    WrongQueryKind { query: &'static str },

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Data directory error: {message}")]
    DataDir { message: String },

    #[error("Identity cache size must be at least 1")]
    InvalidCacheSize,
}

impl RosterError {
    /// Whether the error came from a violated store constraint.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            RosterError::MissingTeam { .. }
            | RosterError::TransientTeam { .. }
            | RosterError::DuplicateTeam { .. } => true,
            RosterError::Database(rusqlite::Error::SqliteFailure(e, _)) => {
                e.code == rusqlite::ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
