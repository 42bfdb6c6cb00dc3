//! Runtime configuration resolved from CLI arguments and the environment.

use crate::cli::TeamRoster;
use crate::error::{Result, RosterError};
use crate::DATABASE_ENV_VAR;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_IDENTITY_CACHE_SIZE: usize = 64;

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

/// Everything the console needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub location: DatabaseLocation,
    pub keep_data: bool,
    pub json: bool,
    pub identity_cache_size: NonZeroUsize,
    pub verbose: bool,
}

impl AppConfig {
    /// Build the configuration from parsed arguments and `TEAM_ROSTER_DB`.
    pub fn from_args(args: &TeamRoster) -> Result<Self> {
        let env_value = std::env::var(DATABASE_ENV_VAR).ok();
        Self::resolve(args, env_value)
    }

    /// Same as [`AppConfig::from_args`] with the environment value passed in.
    pub fn resolve(args: &TeamRoster, env_value: Option<String>) -> Result<Self> {
        let location = if args.in_memory {
            DatabaseLocation::InMemory
        } else {
            DatabaseLocation::File(resolve_database_path(args.db.clone(), env_value)?)
        };

        let identity_cache_size =
            NonZeroUsize::new(args.identity_cache_size).ok_or(RosterError::InvalidCacheSize)?;

        Ok(Self {
            location,
            keep_data: args.keep_data,
            json: args.json,
            identity_cache_size,
            verbose: args.verbose,
        })
    }
}

/// Explicit path wins, then a non-empty env value, then the default location.
pub fn resolve_database_path(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(value) => Ok(PathBuf::from(value)),
        None => default_database_path(),
    }
}

/// Path: ~/.local/share/team-roster/sports.db (platform data dir)
pub fn default_database_path() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .ok_or_else(|| RosterError::DataDir {
            message: "Could not determine data directory".to_string(),
        })?;
    Ok(base.join("team-roster").join("sports.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> TeamRoster {
        TeamRoster::parse_from(std::iter::once("team-roster").chain(args.iter().copied()))
    }

    #[test]
    fn test_explicit_path_overrides_env() {
        let path = resolve_database_path(
            Some(PathBuf::from("/tmp/explicit.db")),
            Some("/tmp/env.db".to_string()),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/explicit.db"));
    }

    #[test]
    fn test_env_path_used_when_no_flag() {
        let path = resolve_database_path(None, Some("/tmp/env.db".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        let path = resolve_database_path(None, Some("   ".to_string())).unwrap();
        assert!(path.ends_with("team-roster/sports.db"));
    }

    #[test]
    fn test_in_memory_flag() {
        let config = AppConfig::resolve(&parse(&["--in-memory", "--json"]), None).unwrap();
        assert_eq!(config.location, DatabaseLocation::InMemory);
        assert!(config.json);
        assert!(!config.keep_data);
        assert_eq!(config.identity_cache_size.get(), DEFAULT_IDENTITY_CACHE_SIZE);
    }

    #[test]
    fn test_db_flag() {
        let config = AppConfig::resolve(
            &parse(&["--db", "/tmp/roster.db", "--keep-data", "-v"]),
            Some("/tmp/ignored.db".to_string()),
        )
        .unwrap();
        assert_eq!(
            config.location,
            DatabaseLocation::File(PathBuf::from("/tmp/roster.db"))
        );
        assert!(config.keep_data);
        assert!(config.verbose);
    }

    #[test]
    fn test_zero_cache_size_rejected() {
        let result = AppConfig::resolve(
            &parse(&["--in-memory", "--identity-cache-size", "0"]),
            None,
        );
        assert!(matches!(result, Err(RosterError::InvalidCacheSize)));
    }

    #[test]
    fn test_db_conflicts_with_in_memory() {
        let result = TeamRoster::try_parse_from(["team-roster", "--db", "x.db", "--in-memory"]);
        assert!(result.is_err());
    }
}
