//! Transactional write operations
//!
//! A [`UnitOfWork`] wraps one SQLite transaction. Every mutation of the store
//! happens through it; dropping it without [`UnitOfWork::commit`] rolls back
//! everything done inside.

use super::{models::*, queries::NamedQuery, queries::QueryKind, schema::RosterDatabase};
use crate::cli::types::ids::{PlayerId, TeamId};
use crate::core::identity::IdentityMap;
use crate::error::{Result, RosterError};
use rusqlite::{named_params, Transaction};
use std::collections::HashSet;
use tracing::{debug, warn};

/// An open transaction on a [`RosterDatabase`]
pub struct UnitOfWork<'db> {
    pub(super) tx: Transaction<'db>,
    identity: &'db mut IdentityMap,
}

impl RosterDatabase {
    /// Begin a transaction
    pub fn begin(&mut self) -> Result<UnitOfWork<'_>> {
        let tx = self.conn.transaction()?;
        Ok(UnitOfWork {
            tx,
            identity: &mut self.identity,
        })
    }

    /// Run `work` in a transaction, committing on `Ok` and rolling back on `Err`.
    ///
    /// The error from `work` is returned even if the rollback itself fails.
    /// A failed persist call leaves its records transient, but records made
    /// durable by earlier successful calls inside `work` keep their ids.
    pub fn transaction<T, F>(&mut self, work: F) -> Result<T>
    where
        F: FnOnce(&mut UnitOfWork<'_>) -> Result<T>,
    {
        let mut uow = self.begin()?;
        match work(&mut uow) {
            Ok(value) => {
                uow.commit()?;
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, "rolling back transaction");
                if let Err(rollback_err) = uow.rollback() {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(e)
            }
        }
    }
}

impl UnitOfWork<'_> {
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        debug!("transaction committed");
        Ok(())
    }

    pub fn rollback(self) -> Result<()> {
        self.tx.rollback()?;
        debug!("transaction rolled back");
        Ok(())
    }

    /// Make a transient team durable, cascading to every transient player on
    /// its roster. Ids are written back into `team` and its players.
    ///
    /// All or nothing: if any insert fails, the rows written by this call are
    /// rolled back and `team` and its new players are transient again.
    pub fn persist_team(&mut self, team: &mut Team) -> Result<TeamId> {
        if let Some(id) = team.id() {
            return Err(RosterError::AlreadyPersisted {
                kind: "Team",
                id: id.as_i64(),
            });
        }

        let pending: Vec<usize> = team
            .roster()
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_persisted())
            .map(|(idx, _)| idx)
            .collect();

        self.tx.execute_batch("SAVEPOINT persist_team")?;
        match self.insert_team_cascade(team, &pending) {
            Ok(id) => {
                self.tx.execute_batch("RELEASE persist_team")?;
                Ok(id)
            }
            Err(e) => {
                if let Err(rollback_err) = self
                    .tx
                    .execute_batch("ROLLBACK TO persist_team; RELEASE persist_team")
                {
                    warn!(error = %rollback_err, "savepoint rollback failed");
                }
                team.unassign_ids(&pending);
                Err(e)
            }
        }
    }

    fn insert_team_cascade(&mut self, team: &mut Team, pending: &[usize]) -> Result<TeamId> {
        let inserted = self.tx.execute(
            "INSERT INTO team (team_name, league) VALUES (:name, :league)",
            named_params! { ":name": team.name(), ":league": team.league },
        );
        if let Err(e) = inserted {
            return Err(map_team_insert_error(e, team.name()));
        }

        let id = TeamId::new(self.tx.last_insert_rowid());
        team.assign_id(id);
        self.identity.evict_team(id);
        debug!(%id, name = team.name(), "persisted team");

        let roster = team.roster_mut();
        for &idx in pending {
            self.persist_player(&mut roster[idx])?;
        }
        Ok(id)
    }

    /// Make a transient player durable. The player must already belong to a
    /// persisted team.
    pub fn persist_player(&mut self, player: &mut Player) -> Result<PlayerId> {
        if let Some(id) = player.id() {
            return Err(RosterError::AlreadyPersisted {
                kind: "Player",
                id: id.as_i64(),
            });
        }

        let team_id = match player.team() {
            None => {
                return Err(RosterError::MissingTeam {
                    last_name: player.last_name.clone(),
                })
            }
            Some(TeamRef { id: None, name }) => {
                return Err(RosterError::TransientTeam { team: name.clone() })
            }
            Some(TeamRef { id: Some(id), .. }) => *id,
        };

        self.tx.execute(
            "INSERT INTO player (first_name, last_name, jersey_number, team_id)
             VALUES (:first_name, :last_name, :jersey_number, :team_id)",
            named_params! {
                ":first_name": player.first_name,
                ":last_name": player.last_name,
                ":jersey_number": player.jersey_number,
                ":team_id": team_id,
            },
        )?;

        let id = PlayerId::new(self.tx.last_insert_rowid());
        player.assign_id(id);
        // A cached copy of the team would be missing this player
        self.identity.evict_team(team_id);
        debug!(%id, name = %player.full_name(), %team_id, "persisted player");
        Ok(id)
    }

    /// Write a persisted team's current state back to the store: update its
    /// columns, persist new roster players, and delete players that were
    /// removed from the roster (orphan removal). Returns the orphan count.
    pub fn merge_team(&mut self, team: &mut Team) -> Result<usize> {
        let team_id = team.id().ok_or(RosterError::NotPersisted { kind: "Team" })?;

        let updated = self.tx.execute(
            "UPDATE team SET team_name = :name, league = :league WHERE id = :id",
            named_params! { ":name": team.name(), ":league": team.league, ":id": team_id },
        );
        if let Err(e) = updated {
            return Err(map_team_insert_error(e, team.name()));
        }

        for player in team.roster_mut() {
            match player.id() {
                None => {
                    self.persist_player(player)?;
                }
                Some(id) => {
                    self.tx.execute(
                        "UPDATE player
                         SET first_name = :first_name, last_name = :last_name,
                             jersey_number = :jersey_number, team_id = :team_id
                         WHERE id = :id",
                        named_params! {
                            ":first_name": player.first_name,
                            ":last_name": player.last_name,
                            ":jersey_number": player.jersey_number,
                            ":team_id": team_id,
                            ":id": id,
                        },
                    )?;
                }
            }
        }

        let kept: HashSet<PlayerId> = team.roster().iter().filter_map(|p| p.id()).collect();
        let mut stmt = self
            .tx
            .prepare("SELECT id FROM player WHERE team_id = :team_id")?;
        let stored = stmt.query_map(named_params! { ":team_id": team_id }, |row| {
            row.get::<_, PlayerId>(0)
        })?;
        let mut orphans = Vec::new();
        for id in stored {
            let id = id?;
            if !kept.contains(&id) {
                orphans.push(id);
            }
        }
        drop(stmt);

        for id in &orphans {
            self.tx
                .execute("DELETE FROM player WHERE id = :id", named_params! { ":id": id })?;
            self.identity.evict_player(*id);
        }

        self.identity.evict_team(team_id);
        debug!(%team_id, orphans = orphans.len(), "merged team");
        Ok(orphans.len())
    }

    /// Delete a persisted player. Its team is left untouched.
    pub fn remove_player(&mut self, player: &Player) -> Result<bool> {
        let id = player.id().ok_or(RosterError::NotPersisted { kind: "Player" })?;
        let removed = self
            .tx
            .execute("DELETE FROM player WHERE id = :id", named_params! { ":id": id })?;

        self.identity.evict_player(id);
        if let Some(team_id) = player.team().and_then(|t| t.id) {
            self.identity.evict_team(team_id);
        }
        Ok(removed > 0)
    }

    /// Delete a persisted team together with all of its players.
    pub fn remove_team(&mut self, team: &Team) -> Result<bool> {
        let id = team.id().ok_or(RosterError::NotPersisted { kind: "Team" })?;

        let players = self.tx.execute(
            "DELETE FROM player WHERE team_id = :id",
            named_params! { ":id": id },
        )?;
        let removed = self
            .tx
            .execute("DELETE FROM team WHERE id = :id", named_params! { ":id": id })?;

        self.identity.evict_team(id);
        for player in team.roster() {
            if let Some(player_id) = player.id() {
                self.identity.evict_player(player_id);
            }
        }
        debug!(%id, players, "removed team");
        Ok(removed > 0)
    }

    /// Run a bulk delete/update named query and return the number of rows it
    /// affected in its target table. Cached records are not refreshed; call
    /// [`RosterDatabase::clear`] after committing.
    pub fn execute_update(&mut self, query: &NamedQuery<'_>) -> Result<usize> {
        if query.kind() != QueryKind::Update {
            return Err(RosterError::WrongQueryKind {
                query: query.name(),
            });
        }

        let params = query.params();
        let mut affected = 0;
        for sql in query.statements() {
            affected = self.tx.execute(sql, params.as_slice())?;
        }

        debug!(query = query.name(), rows = affected, "executed update");
        Ok(affected)
    }
}

fn map_team_insert_error(err: rusqlite::Error, name: &str) -> RosterError {
    match &err {
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
                && msg.contains("team.team_name") =>
        {
            RosterError::DuplicateTeam {
                name: name.to_string(),
            }
        }
        _ => RosterError::Database(err),
    }
}
