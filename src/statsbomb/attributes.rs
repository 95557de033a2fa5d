//! Per-category mappers from vendor payloads to normalized field bundles.
//!
//! Each mapper is a pure function over the raw sub-object plus whatever
//! context it needs; none of them builds a full event. Unknown codes and
//! unresolvable ids are hard errors.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::domain::event::{
    CardType, CarryResult, PassResult, Qualifier, ShotResult, TakeOnResult,
};
use crate::domain::pitch::Point;
use crate::domain::team::{Player, Team};
use crate::statsbomb::codes::{lookup, BodyPartCode, PassOutcome, SetPieceCode, ShotOutcome};
use crate::statsbomb::fidelity::{resolve_coordinates, Fidelity};
use crate::statsbomb::raw::{RawCarry, RawDribble, RawPass, RawShot, RawSubstitution, Tag};

#[derive(Debug)]
pub(crate) struct PassAttributes {
    pub result: Option<PassResult>,
    pub receiver: Option<Arc<Player>>,
    pub receiver_coordinates: Point,
    pub qualifiers: Vec<Qualifier>,
}

pub(crate) fn pass_attributes(
    raw: &RawPass,
    team: &Team,
    fidelity: Fidelity,
) -> Result<PassAttributes> {
    let (result, receiver) = match &raw.outcome {
        Some(outcome) => (pass_result(outcome)?, None),
        // No outcome on the wire means the pass arrived
        None => {
            let recipient = raw
                .recipient
                .as_ref()
                .context("Complete pass missing recipient")?;
            let receiver = team
                .player_by_id(&recipient.id.to_string())
                .with_context(|| {
                    format!(
                        "Unknown pass recipient {} for team {}",
                        recipient.id, team.name
                    )
                })?;
            (Some(PassResult::Complete), Some(receiver))
        }
    };

    Ok(PassAttributes {
        result,
        receiver,
        receiver_coordinates: resolve_coordinates(&raw.end_location, fidelity)
            .context("Bad pass end location")?,
        qualifiers: qualifiers(raw.kind.as_ref(), raw.body_part.as_ref())?,
    })
}

fn pass_result(outcome: &Tag) -> Result<Option<PassResult>> {
    let result = match lookup::<PassOutcome>(outcome.id) {
        Some(PassOutcome::Out | PassOutcome::InjuryClearance) => Some(PassResult::Out),
        Some(PassOutcome::Incomplete) => Some(PassResult::Incomplete),
        Some(PassOutcome::Offside) => Some(PassResult::Offside),
        Some(PassOutcome::Unknown) => None,
        // An explicit "complete" outcome never appears on passes
        Some(PassOutcome::Complete) | None => bail!("Unknown pass outcome: {}", outcome.id),
    };
    Ok(result)
}

pub(crate) struct ShotAttributes {
    pub result: ShotResult,
    pub qualifiers: Vec<Qualifier>,
}

pub(crate) fn shot_attributes(raw: &RawShot) -> Result<ShotAttributes> {
    let outcome = lookup::<ShotOutcome>(raw.outcome.id)
        .with_context(|| format!("Unknown shot outcome: {}", raw.outcome.id))?;
    Ok(ShotAttributes {
        result: outcome.into(),
        qualifiers: qualifiers(raw.kind.as_ref(), raw.body_part.as_ref())?,
    })
}

pub(crate) struct CarryAttributes {
    pub result: CarryResult,
    pub end_coordinates: Point,
}

pub(crate) fn carry_attributes(raw: &RawCarry, fidelity: Fidelity) -> Result<CarryAttributes> {
    Ok(CarryAttributes {
        result: CarryResult::Complete,
        end_coordinates: resolve_coordinates(&raw.end_location, fidelity)
            .context("Bad carry end location")?,
    })
}

pub(crate) fn take_on_result(raw: &RawDribble) -> Result<TakeOnResult> {
    let Some(outcome) = &raw.outcome else {
        return Ok(TakeOnResult::Complete);
    };
    match lookup::<PassOutcome>(outcome.id) {
        Some(PassOutcome::Out) => Ok(TakeOnResult::Out),
        Some(PassOutcome::Incomplete) => Ok(TakeOnResult::Incomplete),
        Some(PassOutcome::Complete) => Ok(TakeOnResult::Complete),
        _ => bail!(
            "Unknown take-on outcome: {}({})",
            outcome.name.as_deref().unwrap_or("?"),
            outcome.id
        ),
    }
}

pub(crate) fn replacement_player(raw: &RawSubstitution, team: &Team) -> Result<Arc<Player>> {
    team.player_by_id(&raw.replacement.id.to_string())
        .with_context(|| format!("Could not find replacement player {}", raw.replacement.id))
}

pub(crate) fn card_type(card: &Tag) -> Result<CardType> {
    match card.id {
        5 | 65 => Ok(CardType::Red),
        6 | 66 => Ok(CardType::SecondYellow),
        7 | 67 => Ok(CardType::FirstYellow),
        id => bail!("Unknown card id {id}"),
    }
}

/// Builds the qualifier list from the two independent optional signals on a
/// pass or shot payload: the set-piece type and the body part used.
pub(crate) fn qualifiers(kind: Option<&Tag>, body_part: Option<&Tag>) -> Result<Vec<Qualifier>> {
    let mut qualifiers = Vec::new();
    if let Some(kind) = kind {
        // Kinds outside the set-piece table (e.g. "recovery") carry no qualifier
        if let Some(code) = lookup::<SetPieceCode>(kind.id) {
            qualifiers.push(Qualifier::SetPiece(code.into()));
        }
    }
    if let Some(part) = body_part {
        let code = lookup::<BodyPartCode>(part.id)
            .with_context(|| format!("Unknown body part: {}", part.id))?;
        qualifiers.push(Qualifier::BodyPart(code.into()));
    }
    Ok(qualifiers)
}
