//! Integration tests for on-disk storage

use std::num::NonZeroUsize;

use tempfile::tempdir;
use team_roster::{
    commands::reload::{handle_reload, prepare_database},
    core::DatabaseLocation,
    storage::{NamedQuery, Player, RosterDatabase, Team},
    PlayerId, RosterError,
};

fn cache_size() -> NonZeroUsize {
    NonZeroUsize::new(16).unwrap()
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("sports.db");

    let db = RosterDatabase::open(&DatabaseLocation::File(path.clone()), cache_size()).unwrap();
    assert!(path.exists());
    assert_eq!(db.count_teams().unwrap(), 0);
}

#[test]
fn test_records_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sports.db");

    {
        let mut db = RosterDatabase::open_path(&path, cache_size()).unwrap();
        handle_reload(&mut db).unwrap();
    }

    let mut db = RosterDatabase::open_path(&path, cache_size()).unwrap();
    assert_eq!(db.count_teams().unwrap(), 5);
    assert_eq!(db.count_players().unwrap(), 6);

    let kobe = db.find_player(PlayerId::new(1)).unwrap().unwrap();
    assert_eq!(kobe.full_name(), "Kobe Bryant");
    // Transient field comes back empty
    assert!(kobe.quote.is_empty());
}

#[test]
fn test_keep_data_on_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sports.db");

    {
        let mut db = RosterDatabase::open_path(&path, cache_size()).unwrap();
        prepare_database(&mut db, true).unwrap();
        let mut nets = db
            .query_team(&NamedQuery::TeamByName {
                name: "Brooklyn Nets",
            })
            .unwrap()
            .unwrap();
        nets.add_player(Player::new("Deron", "Williams", 8, "D-Will"));
        db.transaction(|uow| uow.merge_team(&mut nets)).unwrap();
    }

    let mut db = RosterDatabase::open_path(&path, cache_size()).unwrap();
    assert!(!prepare_database(&mut db, true).unwrap());
    assert_eq!(db.count_players().unwrap(), 7);

    // A plain start-up reload restores the sample state
    assert!(prepare_database(&mut db, false).unwrap());
    assert_eq!(db.count_players().unwrap(), 6);
}

#[test]
fn test_unique_team_name_across_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sports.db");

    {
        let mut db = RosterDatabase::open_path(&path, cache_size()).unwrap();
        let mut heat = Team::new("Miami Heat", "East");
        db.transaction(|uow| uow.persist_team(&mut heat)).unwrap();
    }

    let mut db = RosterDatabase::open_path(&path, cache_size()).unwrap();
    let mut again = Team::new("Miami Heat", "East");
    again.add_player(Player::new("Dwyane", "Wade", 3, ""));
    let result = db.transaction(|uow| uow.persist_team(&mut again));

    assert!(matches!(result, Err(RosterError::DuplicateTeam { .. })));
    assert!(result.unwrap_err().is_constraint_violation());
    assert_eq!(db.count_teams().unwrap(), 1);
    assert_eq!(db.count_players().unwrap(), 0);
}

#[test]
fn test_in_memory_location() {
    let mut db = RosterDatabase::open(&DatabaseLocation::InMemory, cache_size()).unwrap();
    handle_reload(&mut db).unwrap();
    assert_eq!(db.count_teams().unwrap(), 5);
}

#[test]
fn test_identity_cache_capacity_respected() {
    let mut db =
        RosterDatabase::open(&DatabaseLocation::InMemory, NonZeroUsize::new(2).unwrap()).unwrap();
    handle_reload(&mut db).unwrap();

    for id in 1..=6 {
        db.find_player(PlayerId::new(id)).unwrap();
    }
    assert_eq!(db.identity_stats()["players"], (2, 2));
}
