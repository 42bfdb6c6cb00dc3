//! Database schema and connection management

use crate::core::config::{DatabaseLocation, DEFAULT_IDENTITY_CACHE_SIZE};
use crate::core::identity::IdentityMap;
use crate::error::Result;
use rusqlite::Connection;
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::debug;

/// Persistence session over one SQLite connection
///
/// Held for the whole process and reused by every command. Reads go through
/// the identity map; writes happen inside a [`super::session::UnitOfWork`].
pub struct RosterDatabase {
    pub(crate) conn: Connection,
    pub(crate) identity: IdentityMap,
}

impl RosterDatabase {
    /// Open (or create) the database at `location` and ensure tables exist
    pub fn open(location: &DatabaseLocation, identity_cache_size: NonZeroUsize) -> Result<Self> {
        match location {
            DatabaseLocation::File(path) => Self::open_path(path, identity_cache_size),
            DatabaseLocation::InMemory => {
                Self::with_connection(Connection::open_in_memory()?, identity_cache_size)
            }
        }
    }

    /// Open a database file, creating its parent directory if needed
    pub fn open_path(path: &Path, identity_cache_size: NonZeroUsize) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening database");
        Self::with_connection(Connection::open(path)?, identity_cache_size)
    }

    /// Private in-memory database with the default identity map size
    pub fn new_in_memory() -> Result<Self> {
        let capacity = NonZeroUsize::new(DEFAULT_IDENTITY_CACHE_SIZE)
            .unwrap_or(NonZeroUsize::MIN);
        Self::with_connection(Connection::open_in_memory()?, capacity)
    }

    fn with_connection(conn: Connection, identity_cache_size: NonZeroUsize) -> Result<Self> {
        let mut db = Self {
            conn,
            identity: IdentityMap::new(identity_cache_size),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Enforce player -> team references
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team (
                id INTEGER PRIMARY KEY,
                team_name TEXT NOT NULL UNIQUE CHECK (length(team_name) <= 100),
                league TEXT
            )",
            [],
        )?;

        // No quote column: a player's quote lives only in memory
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player (
                id INTEGER PRIMARY KEY,
                first_name TEXT,
                last_name TEXT NOT NULL CHECK (length(last_name) <= 50),
                jersey_number INTEGER NOT NULL,
                team_id INTEGER NOT NULL,
                FOREIGN KEY (team_id) REFERENCES team(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_team ON player(team_id)",
            [],
        )?;

        Ok(())
    }

    /// Detach every cached record so subsequent reads hit the store
    pub fn clear(&mut self) {
        debug!("clearing identity map");
        self.identity.clear();
    }

    pub fn count_teams(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM team", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn count_players(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM player", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Identity map usage, keyed by record kind
    pub fn identity_stats(&self) -> std::collections::HashMap<String, (usize, usize)> {
        self.identity.stats()
    }
}
