use std::sync::Arc;

use strum_macros::Display;

use crate::domain::event::{Event, EventType};
use crate::domain::period::Period;
use crate::domain::pitch::{CoordinateSystem, PitchDimensions};
use crate::domain::team::{Matchup, Team};

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    StatsBomb,
    Wyscout,
    Opta,
}

/// Which way event coordinates point after transformation.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Coordinates always run toward the attacking goal of the acting team.
    ActionExecutingTeam,
    StaticHomeAway,
    BallOwningTeam,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DatasetFlag {
    BallOwningTeam,
    BallState,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

/// Everything known about the dataset besides the events themselves.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub teams: Matchup<Arc<Team>>,
    pub periods: Vec<Period>,
    pub pitch_dimensions: PitchDimensions,
    pub frame_rate: Option<f64>,
    pub orientation: Orientation,
    pub flags: Vec<DatasetFlag>,
    pub score: Option<Score>,
    pub provider: Provider,
    pub coordinate_system: CoordinateSystem,
}

#[derive(Debug, Clone)]
pub struct EventDataset {
    pub metadata: Metadata,
    pub events: Vec<Event>,
}

impl EventDataset {
    pub fn events_of_type(&self, event_type: EventType) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |e| e.event_type() == event_type)
    }
}
