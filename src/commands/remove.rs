//! Remove player / remove team commands

use crate::{
    storage::{NamedQuery, RosterDatabase},
    Result,
};
use tracing::info;

/// Delete players matching both names exactly. Zero matches is not an error.
pub fn remove_player_by_name(
    db: &mut RosterDatabase,
    first_name: &str,
    last_name: &str,
) -> Result<usize> {
    let count = db.transaction(|uow| {
        uow.execute_update(&NamedQuery::DeletePlayerByName {
            first_name,
            last_name,
        })
    })?;
    db.clear();

    info!(first_name, last_name, count, "removed players");
    Ok(count)
}

/// Delete the named team and, with it, all of its players.
/// Returns the number of teams deleted (0 or 1).
pub fn remove_team_by_name(db: &mut RosterDatabase, team_name: &str) -> Result<usize> {
    let count =
        db.transaction(|uow| uow.execute_update(&NamedQuery::DeleteTeamByName { name: team_name }))?;
    db.clear();

    info!(team_name, count, "removed teams");
    Ok(count)
}
