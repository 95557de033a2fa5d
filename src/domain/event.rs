use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;
use strum_macros::Display;

use crate::domain::pitch::Point;
use crate::domain::team::{Player, Team};

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BallState {
    Alive,
    Dead,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
pub enum PassResult {
    Complete,
    Incomplete,
    Out,
    Offside,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
pub enum ShotResult {
    Goal,
    OffTarget,
    Post,
    Blocked,
    Saved,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
pub enum TakeOnResult {
    Complete,
    Incomplete,
    Out,
}

/// Carries have no failure mode in this model; the enum keeps the result
/// column uniform across event families.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
pub enum CarryResult {
    Complete,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
pub enum CardType {
    FirstYellow,
    SecondYellow,
    Red,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
pub enum SetPieceType {
    CornerKick,
    FreeKick,
    Penalty,
    ThrowIn,
    KickOff,
    GoalKick,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
pub enum BodyPart {
    BothHands,
    Chest,
    Head,
    LeftFoot,
    LeftHand,
    RightFoot,
    RightHand,
    DropKick,
    KeeperArm,
    Other,
    NoTouch,
}

/// A tagged auxiliary fact attached to an event.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Qualifier {
    SetPiece(SetPieceType),
    BodyPart(BodyPart),
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EventType {
    Generic,
    Pass,
    Shot,
    TakeOn,
    Carry,
    Substitution,
    Card,
    PlayerOn,
    PlayerOff,
    Recovery,
    FoulCommitted,
    BallOut,
}

/// Variant-specific payload of a normalized event.
#[derive(Debug, Clone)]
pub enum EventData {
    Pass {
        result: Option<PassResult>,
        receiver: Option<Arc<Player>>,
        receiver_coordinates: Point,
        receive_timestamp: f64,
    },
    Shot {
        result: ShotResult,
    },
    TakeOn {
        result: TakeOnResult,
    },
    Carry {
        result: CarryResult,
        end_coordinates: Point,
        end_timestamp: f64,
    },
    Substitution {
        replacement: Arc<Player>,
    },
    Card {
        card_type: CardType,
    },
    PlayerOn,
    PlayerOff,
    Recovery,
    FoulCommitted,
    BallOut,
    Generic {
        name: String,
    },
}

/// One normalized event on the match timeline.
///
/// `timestamp` is in seconds relative to the owning period's start; the
/// period itself lives in the dataset metadata, keyed by `period_id`.
/// `raw` retains the untouched provider record the event was built from.
#[derive(Debug, Clone)]
pub struct Event {
    pub event_id: String,
    pub period_id: u8,
    pub timestamp: f64,
    pub ball_owning_team: Arc<Team>,
    pub ball_state: BallState,
    pub team: Arc<Team>,
    pub player: Option<Arc<Player>>,
    pub coordinates: Option<Point>,
    pub qualifiers: Vec<Qualifier>,
    pub raw: Arc<Value>,
    pub data: EventData,
}

impl Event {
    #[must_use]
    pub fn event_type(&self) -> EventType {
        match self.data {
            EventData::Pass { .. } => EventType::Pass,
            EventData::Shot { .. } => EventType::Shot,
            EventData::TakeOn { .. } => EventType::TakeOn,
            EventData::Carry { .. } => EventType::Carry,
            EventData::Substitution { .. } => EventType::Substitution,
            EventData::Card { .. } => EventType::Card,
            EventData::PlayerOn => EventType::PlayerOn,
            EventData::PlayerOff => EventType::PlayerOff,
            EventData::Recovery => EventType::Recovery,
            EventData::FoulCommitted => EventType::FoulCommitted,
            EventData::BallOut => EventType::BallOut,
            EventData::Generic { .. } => EventType::Generic,
        }
    }
}

/// Inclusion predicate over normalized events.
///
/// An absent type set keeps everything; otherwise only events whose type is
/// in the set survive.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    types: Option<HashSet<EventType>>,
}

impl EventFilter {
    #[must_use]
    pub const fn include_all() -> Self {
        Self { types: None }
    }

    pub fn with_types<I: IntoIterator<Item = EventType>>(types: I) -> Self {
        Self {
            types: Some(types.into_iter().collect()),
        }
    }

    #[must_use]
    pub fn should_include(&self, event: &Event) -> bool {
        self.types
            .as_ref()
            .map_or(true, |types| types.contains(&event.event_type()))
    }
}
