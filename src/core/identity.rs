//! Session identity map backed by an in-memory LRU cache
//!
//! Records loaded by id are kept here so repeated lookups within a session
//! return the same state without touching SQLite. Bulk updates bypass the map,
//! so callers `clear()` it afterwards to make later reads reflect the store.

use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;

use crate::cli::types::ids::{PlayerId, TeamId};
use crate::storage::models::{Player, Team};

/// Identity map for the two record kinds
pub struct IdentityMap {
    players: LruCache<PlayerId, Player>,
    teams: LruCache<TeamId, Team>,
    capacity: NonZeroUsize,
}

impl IdentityMap {
    /// Create an identity map holding up to `capacity` records of each kind
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            players: LruCache::new(capacity),
            teams: LruCache::new(capacity),
            capacity,
        }
    }

    pub fn player(&mut self, id: PlayerId) -> Option<Player> {
        self.players.get(&id).cloned()
    }

    pub fn put_player(&mut self, player: &Player) {
        if let Some(id) = player.id() {
            self.players.put(id, player.clone());
        }
    }

    pub fn evict_player(&mut self, id: PlayerId) {
        self.players.pop(&id);
    }

    pub fn team(&mut self, id: TeamId) -> Option<Team> {
        self.teams.get(&id).cloned()
    }

    /// Cache a team along with every persisted player on its roster
    pub fn put_team(&mut self, team: &Team) {
        if let Some(id) = team.id() {
            for player in team.roster() {
                self.put_player(player);
            }
            self.teams.put(id, team.clone());
        }
    }

    pub fn evict_team(&mut self, id: TeamId) {
        self.teams.pop(&id);
    }

    /// Detach every record
    pub fn clear(&mut self) {
        self.players.clear();
        self.teams.clear();
    }

    /// (used, capacity) per record kind
    pub fn stats(&self) -> HashMap<String, (usize, usize)> {
        let mut stats = HashMap::new();
        stats.insert(
            "players".to_string(),
            (self.players.len(), self.capacity.get()),
        );
        stats.insert("teams".to_string(), (self.teams.len(), self.capacity.get()));
        stats
    }
}
