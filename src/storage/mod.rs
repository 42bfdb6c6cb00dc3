//! Storage layer for the team roster console
//!
//! This module provides a thin persistence session over the SQLite database,
//! organized into logical components:
//! - `models`: Team and Player records
//! - `schema`: Database connection and schema management
//! - `queries`: Named query catalog and reads
//! - `session`: Transactions, persist, merge and bulk updates

pub mod models;
pub mod queries;
pub mod schema;
pub mod session;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use queries::{NamedQuery, QueryKind};
pub use schema::RosterDatabase;
pub use session::UnitOfWork;
