//! Data models for the storage layer
//!
//! `Team` owns its roster. Each `Player` carries a [`TeamRef`] back to its
//! owner, and the mutators on `Team` keep both sides in step: a player in
//! `team.roster()` always refers back to `team`.

use crate::cli::types::ids::{PlayerId, TeamId};
use serde::Serialize;
use std::fmt;

/// Lightweight back-reference from a player to its owning team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: Option<TeamId>,
    pub name: String,
}

/// A player on a team's roster.
///
/// Equality is by id only; a transient player (no id yet) equals nothing,
/// itself included, which is why only `PartialEq` is implemented.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    id: Option<PlayerId>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: i32,
    /// Kept in memory only; never written to the store.
    #[serde(skip)]
    pub quote: String,
    team: Option<TeamRef>,
}

impl Player {
    /// Create a transient player with no team.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        jersey_number: i32,
        quote: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            jersey_number,
            quote: quote.into(),
            team: None,
        }
    }

    /// Rebuild a player read from the store.
    pub(crate) fn stored(
        id: PlayerId,
        first_name: String,
        last_name: String,
        jersey_number: i32,
        team: TeamRef,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            jersey_number,
            quote: String::new(),
            team: Some(team),
        }
    }

    pub fn id(&self) -> Option<PlayerId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn team(&self) -> Option<&TeamRef> {
        self.team.as_ref()
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.name.as_str())
    }

    /// "First Last", or just the last name when there is no first name.
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// Point this player at a team without touching the team's roster.
    ///
    /// Prefer [`Team::add_player`], which keeps both sides consistent.
    pub fn set_team(&mut self, team: Option<TeamRef>) {
        self.team = team;
    }

    pub(crate) fn assign_id(&mut self, id: PlayerId) {
        self.id = Some(id);
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id.is_some() && self.id == other.id
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Name: {} {}, Jersey Number: {}, Team: {}]",
            self.first_name,
            self.last_name,
            self.jersey_number,
            self.team_name().unwrap_or("none")
        )
    }
}

/// A team and the players it owns.
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    id: Option<TeamId>,
    name: String,
    pub league: Option<String>,
    roster: Vec<Player>,
}

impl Team {
    /// Create a transient team with an empty roster.
    pub fn new(name: impl Into<String>, league: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            league: Some(league.into()),
            roster: Vec::new(),
        }
    }

    pub(crate) fn stored(id: TeamId, name: String, league: Option<String>) -> Self {
        Self {
            id: Some(id),
            name,
            league,
            roster: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<TeamId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub(crate) fn roster_mut(&mut self) -> &mut [Player] {
        &mut self.roster
    }

    /// Back-reference handed to players on this team.
    pub fn team_ref(&self) -> TeamRef {
        TeamRef {
            id: self.id,
            name: self.name.clone(),
        }
    }

    /// Rename the team, updating every roster player's back-reference.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.sync_back_references();
    }

    /// Add a player, making this team its owner.
    ///
    /// A persisted player already on the roster is replaced rather than
    /// duplicated.
    pub fn add_player(&mut self, mut player: Player) {
        player.team = Some(self.team_ref());
        match self.roster.iter().position(|p| *p == player) {
            Some(idx) => self.roster[idx] = player,
            None => self.roster.push(player),
        }
    }

    /// Add every player in `players`.
    pub fn set_roster(&mut self, players: impl IntoIterator<Item = Player>) {
        for player in players {
            self.add_player(player);
        }
    }

    /// Detach a player from the roster, clearing its team.
    ///
    /// Merging the team afterwards deletes the detached player from the store.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let idx = self.roster.iter().position(|p| p.id == Some(id))?;
        let mut player = self.roster.remove(idx);
        player.team = None;
        Some(player)
    }

    /// True when every roster player refers back to this team.
    pub fn is_consistent(&self) -> bool {
        let expected = self.team_ref();
        self.roster
            .iter()
            .all(|p| p.team.as_ref() == Some(&expected))
    }

    pub(crate) fn assign_id(&mut self, id: TeamId) {
        self.id = Some(id);
        self.sync_back_references();
    }

    /// Undo [`Team::assign_id`] for the team and for the roster players at
    /// `players`, after the inserts that produced those ids were rolled back.
    pub(crate) fn unassign_ids(&mut self, players: &[usize]) {
        self.id = None;
        for &idx in players {
            if let Some(player) = self.roster.get_mut(idx) {
                player.id = None;
            }
        }
        self.sync_back_references();
    }

    pub(crate) fn push_stored_player(&mut self, player: Player) {
        self.roster.push(player);
    }

    fn sync_back_references(&mut self) {
        let team_ref = self.team_ref();
        for player in &mut self.roster {
            player.team = Some(team_ref.clone());
        }
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id.is_some() && self.id == other.id
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team[name={}, league={}, roster=[",
            self.name,
            self.league.as_deref().unwrap_or("none")
        )?;
        for (i, player) in self.roster.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", player)?;
        }
        f.write_str("]]")
    }
}
