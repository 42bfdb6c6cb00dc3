//! Find command: look players up by id

use crate::{cli::types::ids::PlayerId, storage::Player, storage::RosterDatabase, Result};

/// Upper bound on lookups made by one find command
pub const MAX_FIND_ATTEMPTS: usize = 10;

/// Players with ids 1, 2, ... up to the first missing id, at most
/// [`MAX_FIND_ATTEMPTS`] lookups.
pub fn find_first_players(db: &mut RosterDatabase) -> Result<Vec<Player>> {
    let mut found = Vec::new();
    let mut id = PlayerId::new(1);

    for _ in 0..MAX_FIND_ATTEMPTS {
        match db.find_player(id)? {
            Some(player) => found.push(player),
            None => break,
        }
        id = id.next();
    }
    Ok(found)
}
