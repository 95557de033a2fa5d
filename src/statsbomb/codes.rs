//! The vendor's integer code tables as closed enumerations.
//!
//! Every table is total over the codes the format documents; anything else is
//! rejected at the call site rather than silently defaulted.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::domain::event::{BodyPart, SetPieceType, ShotResult};

/// Resolves a raw id against one of the code tables below.
pub(crate) fn lookup<T>(id: u64) -> Option<T>
where
    T: TryFromPrimitive<Primitive = u16>,
{
    u16::try_from(id)
        .ok()
        .and_then(|code| T::try_from_primitive(code).ok())
}

/// Event categories the pipeline maps to dedicated variants. Ids outside this
/// table deserialize as generic events.
#[derive(Debug, Eq, PartialEq, TryFromPrimitive, IntoPrimitive, Copy, Clone, Hash)]
#[repr(u16)]
pub enum EventKind {
    Recovery = 2,
    /// The vendor's "dribble" is the domain's take-on; the vendor's "carry"
    /// is the domain's ball carry.
    Dribble = 14,
    Shot = 16,
    HalfStart = 18,
    Substitution = 19,
    FoulCommitted = 22,
    BadBehaviour = 24,
    PlayerOn = 26,
    PlayerOff = 27,
    Pass = 30,
    HalfEnd = 34,
    StartingXi = 35,
    Carry = 43,
}

impl EventKind {
    /// Pass, carry, and dribble share one coordinate-fidelity tier.
    pub const fn is_movement(self) -> bool {
        matches!(self, Self::Pass | Self::Carry | Self::Dribble)
    }
}

/// Outcome codes shared by passes and take-ons.
#[derive(Debug, Eq, PartialEq, TryFromPrimitive, IntoPrimitive, Copy, Clone, Hash)]
#[repr(u16)]
pub enum PassOutcome {
    Complete = 8,
    Incomplete = 9,
    InjuryClearance = 74,
    Out = 75,
    Offside = 76,
    Unknown = 77,
}

#[derive(Debug, Eq, PartialEq, TryFromPrimitive, IntoPrimitive, Copy, Clone, Hash)]
#[repr(u16)]
pub enum ShotOutcome {
    Blocked = 96,
    Goal = 97,
    OffTarget = 98,
    Post = 99,
    Saved = 100,
    Wayward = 101,
    SavedOffTarget = 115,
    SavedToPost = 116,
}

impl From<ShotOutcome> for ShotResult {
    fn from(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Goal => Self::Goal,
            ShotOutcome::OffTarget | ShotOutcome::Wayward => Self::OffTarget,
            ShotOutcome::Post => Self::Post,
            ShotOutcome::Blocked => Self::Blocked,
            ShotOutcome::Saved | ShotOutcome::SavedOffTarget | ShotOutcome::SavedToPost => {
                Self::Saved
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq, TryFromPrimitive, IntoPrimitive, Copy, Clone, Hash)]
#[repr(u16)]
pub enum SetPieceCode {
    CornerKick = 61,
    FreeKick = 62,
    GoalKick = 63,
    KickOff = 65,
    ThrowIn = 67,
    Penalty = 88,
}

impl From<SetPieceCode> for SetPieceType {
    fn from(code: SetPieceCode) -> Self {
        match code {
            SetPieceCode::CornerKick => Self::CornerKick,
            SetPieceCode::FreeKick => Self::FreeKick,
            SetPieceCode::GoalKick => Self::GoalKick,
            SetPieceCode::KickOff => Self::KickOff,
            SetPieceCode::ThrowIn => Self::ThrowIn,
            SetPieceCode::Penalty => Self::Penalty,
        }
    }
}

#[derive(Debug, Eq, PartialEq, TryFromPrimitive, IntoPrimitive, Copy, Clone, Hash)]
#[repr(u16)]
pub enum BodyPartCode {
    BothHands = 35,
    Chest = 36,
    Head = 37,
    LeftFoot = 38,
    LeftHand = 39,
    RightFoot = 40,
    RightHand = 41,
    DropKick = 68,
    KeeperArm = 69,
    Other = 70,
    NoTouch = 106,
}

impl From<BodyPartCode> for BodyPart {
    fn from(code: BodyPartCode) -> Self {
        match code {
            BodyPartCode::BothHands => Self::BothHands,
            BodyPartCode::Chest => Self::Chest,
            BodyPartCode::Head => Self::Head,
            BodyPartCode::LeftFoot => Self::LeftFoot,
            BodyPartCode::LeftHand => Self::LeftHand,
            BodyPartCode::RightFoot => Self::RightFoot,
            BodyPartCode::RightHand => Self::RightHand,
            BodyPartCode::DropKick => Self::DropKick,
            BodyPartCode::KeeperArm => Self::KeeperArm,
            BodyPartCode::Other => Self::Other,
            BodyPartCode::NoTouch => Self::NoTouch,
        }
    }
}
