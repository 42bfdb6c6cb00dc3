//! Roster command

use crate::{
    storage::{NamedQuery, Player, RosterDatabase},
    Result,
};
use tracing::debug;

/// Outcome of looking up a team's players.
///
/// The console prints the same message for both "no such team" and "team
/// without players", but callers can tell them apart.
#[derive(Debug, Clone)]
pub enum RosterLookup {
    UnknownTeam,
    Players(Vec<Player>),
}

impl RosterLookup {
    pub fn players(&self) -> &[Player] {
        match self {
            RosterLookup::UnknownTeam => &[],
            RosterLookup::Players(players) => players,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.players().is_empty()
    }
}

/// Players of the team named exactly `team_name`
pub fn get_roster(db: &mut RosterDatabase, team_name: &str) -> Result<RosterLookup> {
    if db
        .query_team(&NamedQuery::TeamByName { name: team_name })?
        .is_none()
    {
        debug!(team_name, "no such team");
        return Ok(RosterLookup::UnknownTeam);
    }

    let players = db.query_players(&NamedQuery::PlayersByTeamName { name: team_name })?;
    Ok(RosterLookup::Players(players))
}
