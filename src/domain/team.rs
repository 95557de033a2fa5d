use std::sync::Arc;

use strum_macros::Display;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Ground {
    Home,
    Away,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    pub id: String,
    /// Identity of the owning team; identity only, never dereferenced here.
    pub team_id: String,
    pub name: String,
    pub jersey_no: u8,
    pub starting: bool,
}

/// A team and its full player list for one match.
///
/// Players are populated once during roster building and shared by reference
/// from every event that involves them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub ground: Ground,
    pub players: Vec<Arc<Player>>,
}

impl Team {
    #[must_use]
    pub fn player_by_id(&self, player_id: &str) -> Option<Arc<Player>> {
        self.players.iter().find(|p| p.id == player_id).cloned()
    }
}

/// A home/away pair of anything.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Matchup<T> {
    pub home: T,
    pub away: T,
}

impl<T> Matchup<T> {
    pub const fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub const fn get(&self, ground: Ground) -> &T {
        match ground {
            Ground::Home => &self.home,
            Ground::Away => &self.away,
        }
    }
}
