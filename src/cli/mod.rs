//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "team-roster",
    about = "Menu-driven console over a Team/Player database"
)]
pub struct TeamRoster {
    /// SQLite database file (or set `TEAM_ROSTER_DB` env var).
    #[clap(long, conflicts_with = "in_memory")]
    pub db: Option<PathBuf>,

    /// Use a private in-memory database that disappears on exit.
    #[clap(long)]
    pub in_memory: bool,

    /// Keep existing records instead of reloading the sample data at start-up.
    #[clap(long)]
    pub keep_data: bool,

    /// Output records as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Number of players kept in the session's identity map.
    #[clap(long, default_value_t = crate::core::config::DEFAULT_IDENTITY_CACHE_SIZE)]
    pub identity_cache_size: usize,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[clap(long, short)]
    pub verbose: bool,
}
