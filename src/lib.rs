//! Team Roster Console Library
//!
//! A small Rust library demonstrating object-relational mapping ideas over
//! SQLite: two related records (`Team` owns a roster of `Player`s), cascading
//! deletes, orphan removal, named queries, a transient field and id-based
//! equality, driven from a menu-based console.
//!
//! ## Features
//!
//! - **Records**: `Team` and `Player` with a bidirectional, consistency-checked relationship
//! - **Persistence Session**: transactions, persist/merge/remove, find by id with an identity map
//! - **Named Queries**: a fixed catalog of parameterized selects and bulk deletes
//! - **Console**: `reload`, `find`, `roster`, `remove player`, `remove team`, `quit`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use team_roster::{commands::reload::handle_reload, storage::{NamedQuery, RosterDatabase}};
//!
//! # fn example() -> team_roster::Result<()> {
//! let mut db = RosterDatabase::new_in_memory()?;
//! handle_reload(&mut db)?;
//!
//! let lakers = db.query_players(&NamedQuery::PlayersByTeamName {
//!     name: "Los Angeles Lakers",
//! })?;
//! assert_eq!(lakers.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the console at a database file without passing `--db` every time:
//! ```bash
//! export TEAM_ROSTER_DB=$HOME/sports.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::command::MenuCommand;
pub use cli::types::ids::{PlayerId, TeamId};
pub use error::{Result, RosterError};
pub use storage::{Player, RosterDatabase, Team, TeamRef};

pub const DATABASE_ENV_VAR: &str = "TEAM_ROSTER_DB";
