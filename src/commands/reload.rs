//! Reload command: wipe the store and load the sample teams

use crate::{
    storage::{NamedQuery, Player, RosterDatabase, Team},
    Result,
};
use tracing::info;

/// Counts reported after loading the sample data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadSummary {
    pub teams: usize,
    pub players: usize,
}

/// Transient sample teams; only the Lakers and Clippers have players.
pub fn seed_teams() -> Vec<Team> {
    let mut lakers = Team::new("Los Angeles Lakers", "West");
    lakers.set_roster([
        Player::new("Kobe", "Bryant", 24, "The Black Mamba"),
        Player::new("Steve", "Nash", 10, "Canadian wonder"),
        Player::new("Lin", "Jeremy", 7, "Linmania"),
    ]);

    let mut clippers = Team::new("Los Angeles Clippers", "West");
    clippers.set_roster([
        Player::new("Blake", "Griffin", 32, "The new Highlight Film"),
        Player::new("Jamal", "Crawford", 11, "It's raining three pointers"),
        Player::new("Chris", "Paul", 3, "The nonstop assist generator"),
    ]);

    vec![
        lakers,
        clippers,
        Team::new("Miami Heat", "East"),
        Team::new("Brooklyn Nets", "East"),
        Team::new("Oklahoma City Thunder", "West"),
    ]
}

/// Delete every player, then every team, and detach cached records
pub fn delete_all(db: &mut RosterDatabase) -> Result<()> {
    let (players, teams) = db.transaction(|uow| {
        let players = uow.execute_update(&NamedQuery::DeleteAllPlayers)?;
        let teams = uow.execute_update(&NamedQuery::DeleteAllTeams)?;
        Ok((players, teams))
    })?;
    db.clear();

    info!(players, teams, "deleted all records");
    Ok(())
}

/// Persist the sample teams (cascading to their players) in one transaction
pub fn load_database(db: &mut RosterDatabase) -> Result<Vec<Team>> {
    let mut teams = seed_teams();
    db.transaction(|uow| {
        for team in teams.iter_mut() {
            uow.persist_team(team)?;
        }
        Ok(())
    })?;

    let players: usize = teams.iter().map(|t| t.roster().len()).sum();
    info!(teams = teams.len(), players, "loaded sample data");
    Ok(teams)
}

/// Handle the reload command
pub fn handle_reload(db: &mut RosterDatabase) -> Result<ReloadSummary> {
    delete_all(db)?;
    let teams = load_database(db)?;
    Ok(ReloadSummary {
        teams: teams.len(),
        players: teams.iter().map(|t| t.roster().len()).sum(),
    })
}

/// Start-up load: reload unless `keep_data` is set and teams already exist.
/// Returns whether the sample data was loaded.
pub fn prepare_database(db: &mut RosterDatabase, keep_data: bool) -> Result<bool> {
    if keep_data && db.count_teams()? > 0 {
        info!("keeping existing records");
        return Ok(false);
    }
    handle_reload(db)?;
    Ok(true)
}
