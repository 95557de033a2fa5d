//! Wire shapes of the StatsBomb event and lineup feeds.
//!
//! Only the fields the pipeline consumes are modeled; everything else in the
//! vendor records is ignored on deserialization. Missing required fields and
//! wrongly-typed values surface as serde errors.

use serde::Deserialize;

/// The vendor's universal id/name reference pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: Tag,
    pub period: u8,
    pub timestamp: String,
    pub team: Tag,
    pub possession_team: Tag,
    #[serde(default)]
    pub player: Option<Tag>,
    #[serde(default)]
    pub location: Option<Vec<f64>>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub pass: Option<RawPass>,
    #[serde(default)]
    pub shot: Option<RawShot>,
    #[serde(default)]
    pub dribble: Option<RawDribble>,
    #[serde(default)]
    pub carry: Option<RawCarry>,
    #[serde(default)]
    pub substitution: Option<RawSubstitution>,
    #[serde(default)]
    pub foul_committed: Option<RawDiscipline>,
    #[serde(default)]
    pub bad_behaviour: Option<RawDiscipline>,
    #[serde(default)]
    pub tactics: Option<RawTactics>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPass {
    #[serde(default)]
    pub outcome: Option<Tag>,
    #[serde(default)]
    pub recipient: Option<Tag>,
    pub end_location: Vec<f64>,
    /// Pass type (corner, free kick, ...), the set-piece signal.
    #[serde(rename = "type", default)]
    pub kind: Option<Tag>,
    #[serde(default)]
    pub body_part: Option<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawShot {
    pub outcome: Tag,
    #[serde(rename = "type", default)]
    pub kind: Option<Tag>,
    #[serde(default)]
    pub body_part: Option<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDribble {
    #[serde(default)]
    pub outcome: Option<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCarry {
    pub end_location: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubstitution {
    pub replacement: Tag,
}

/// Shared shape of the foul-committed and bad-behaviour payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDiscipline {
    #[serde(default)]
    pub card: Option<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTactics {
    pub lineup: Vec<RawTacticsEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTacticsEntry {
    pub player: Tag,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLineup {
    pub team_id: u64,
    pub team_name: String,
    pub lineup: Vec<RawLineupPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLineupPlayer {
    pub player_id: u64,
    pub player_name: String,
    pub jersey_number: u8,
}
