//! Named query catalog and read operations

use super::{models::*, schema::RosterDatabase};
use crate::cli::types::ids::{PlayerId, TeamId};
use crate::error::{Result, RosterError};
use rusqlite::{named_params, types::ToSql, OptionalExtension, Row};
use tracing::debug;

/// What a named query produces when run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Returns a list of players
    SelectPlayers,
    /// Returns at most one team
    SelectTeam,
    /// Bulk delete/update returning an affected-row count
    Update,
}

/// Predefined, parameterized queries identified by name.
///
/// Field values are matched exactly (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedQuery<'a> {
    DeleteAllPlayers,
    DeleteAllTeams,
    PlayersByTeamName {
        name: &'a str,
    },
    DeletePlayerByName {
        first_name: &'a str,
        last_name: &'a str,
    },
    TeamByName {
        name: &'a str,
    },
    DeleteTeamByName {
        name: &'a str,
    },
}

const SELECT_PLAYERS: &str = "SELECT p.id, p.first_name, p.last_name, p.jersey_number,
                                     t.id, t.team_name
                              FROM player p
                              JOIN team t ON p.team_id = t.id";

impl NamedQuery<'_> {
    /// Symbolic name of the query
    pub fn name(&self) -> &'static str {
        match self {
            NamedQuery::DeleteAllPlayers => "Player.delete_all",
            NamedQuery::DeleteAllTeams => "Team.delete",
            NamedQuery::PlayersByTeamName { .. } => "Player.get_player_list",
            NamedQuery::DeletePlayerByName { .. } => "Player.delete_name",
            NamedQuery::TeamByName { .. } => "Team.get_by_name",
            NamedQuery::DeleteTeamByName { .. } => "Team.delete_by_name",
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            NamedQuery::PlayersByTeamName { .. } => QueryKind::SelectPlayers,
            NamedQuery::TeamByName { .. } => QueryKind::SelectTeam,
            NamedQuery::DeleteAllPlayers
            | NamedQuery::DeleteAllTeams
            | NamedQuery::DeletePlayerByName { .. }
            | NamedQuery::DeleteTeamByName { .. } => QueryKind::Update,
        }
    }

    /// SQL for the query. Team deletes start with the statement that removes
    /// the teams' players; the count returned is that of the final statement.
    pub(crate) fn statements(&self) -> &'static [&'static str] {
        match self {
            NamedQuery::DeleteAllPlayers => &["DELETE FROM player"],
            NamedQuery::DeleteAllTeams => &["DELETE FROM player", "DELETE FROM team"],
            NamedQuery::PlayersByTeamName { .. } => &[
                "SELECT p.id, p.first_name, p.last_name, p.jersey_number, t.id, t.team_name
                 FROM player p
                 JOIN team t ON p.team_id = t.id
                 WHERE t.team_name = :name
                 ORDER BY p.id",
            ],
            NamedQuery::DeletePlayerByName { .. } => &[
                "DELETE FROM player WHERE first_name = :first_name AND last_name = :last_name",
            ],
            NamedQuery::TeamByName { .. } => {
                &["SELECT id, team_name, league FROM team WHERE team_name = :name"]
            }
            NamedQuery::DeleteTeamByName { .. } => &[
                "DELETE FROM player
                 WHERE team_id IN (SELECT id FROM team WHERE team_name = :name)",
                "DELETE FROM team WHERE team_name = :name",
            ],
        }
    }

    /// Named parameters bound to every statement of the query
    pub(crate) fn params(&self) -> Vec<(&'static str, &dyn ToSql)> {
        match self {
            NamedQuery::DeleteAllPlayers | NamedQuery::DeleteAllTeams => Vec::new(),
            NamedQuery::PlayersByTeamName { name }
            | NamedQuery::TeamByName { name }
            | NamedQuery::DeleteTeamByName { name } => vec![(":name", name as &dyn ToSql)],
            NamedQuery::DeletePlayerByName {
                first_name,
                last_name,
            } => vec![
                (":first_name", first_name as &dyn ToSql),
                (":last_name", last_name as &dyn ToSql),
            ],
        }
    }
}

impl RosterDatabase {
    /// Find a player by id; a missing id is `Ok(None)`, never an error
    pub fn find_player(&mut self, id: PlayerId) -> Result<Option<Player>> {
        if let Some(cached) = self.identity.player(id) {
            return Ok(Some(cached));
        }

        let sql = format!("{SELECT_PLAYERS} WHERE p.id = :id");
        let player = self
            .conn
            .query_row(&sql, named_params! { ":id": id }, row_to_player)
            .optional()?;

        match &player {
            Some(p) => self.identity.put_player(p),
            None => debug!(%id, "no player with id"),
        }
        Ok(player)
    }

    /// Find a team by id, with its roster loaded
    pub fn find_team(&mut self, id: TeamId) -> Result<Option<Team>> {
        if let Some(cached) = self.identity.team(id) {
            return Ok(Some(cached));
        }

        let team = self
            .conn
            .query_row(
                "SELECT id, team_name, league FROM team WHERE id = :id",
                named_params! { ":id": id },
                row_to_team,
            )
            .optional()?;

        self.with_roster(team)
    }

    /// Run a named query that returns players
    pub fn query_players(&mut self, query: &NamedQuery<'_>) -> Result<Vec<Player>> {
        if query.kind() != QueryKind::SelectPlayers {
            return Err(RosterError::WrongQueryKind {
                query: query.name(),
            });
        }

        let mut stmt = self.conn.prepare(query.statements()[0])?;
        let rows = stmt.query_map(query.params().as_slice(), row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        drop(stmt);

        for player in &players {
            self.identity.put_player(player);
        }
        debug!(query = query.name(), rows = players.len(), "ran named query");
        Ok(players)
    }

    /// Run a named query that returns a single team, with its roster loaded
    pub fn query_team(&mut self, query: &NamedQuery<'_>) -> Result<Option<Team>> {
        if query.kind() != QueryKind::SelectTeam {
            return Err(RosterError::WrongQueryKind {
                query: query.name(),
            });
        }

        let team = self
            .conn
            .query_row(query.statements()[0], query.params().as_slice(), row_to_team)
            .optional()?;

        debug!(query = query.name(), found = team.is_some(), "ran named query");
        self.with_roster(team)
    }

    /// Every team with its roster, ordered by id
    pub fn all_teams(&mut self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, team_name, league FROM team ORDER BY id")?;
        let rows = stmt.query_map([], row_to_team)?;

        let mut bare = Vec::new();
        for row in rows {
            bare.push(row?);
        }
        drop(stmt);

        let mut teams = Vec::with_capacity(bare.len());
        for team in bare {
            if let Some(team) = self.with_roster(Some(team))? {
                teams.push(team);
            }
        }
        Ok(teams)
    }

    fn with_roster(&mut self, team: Option<Team>) -> Result<Option<Team>> {
        let Some(mut team) = team else {
            return Ok(None);
        };
        let Some(team_id) = team.id() else {
            return Ok(Some(team));
        };

        let sql = format!("{SELECT_PLAYERS} WHERE p.team_id = :team_id ORDER BY p.id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(named_params! { ":team_id": team_id }, row_to_player)?;
        for row in rows {
            team.push_stored_player(row?);
        }
        drop(stmt);

        self.identity.put_team(&team);
        Ok(Some(team))
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    let first_name: Option<String> = row.get(1)?;
    Ok(Player::stored(
        row.get(0)?,
        first_name.unwrap_or_default(),
        row.get(2)?,
        row.get(3)?,
        TeamRef {
            id: Some(row.get(4)?),
            name: row.get(5)?,
        },
    ))
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team::stored(row.get(0)?, row.get(1)?, row.get(2)?))
}
