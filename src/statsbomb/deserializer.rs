use std::io::Read;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::dataset::{DatasetFlag, EventDataset, Metadata, Orientation, Provider};
use crate::domain::event::{
    BallState, Event, EventData, EventFilter, PassResult, Qualifier, TakeOnResult,
};
use crate::domain::period::Period;
use crate::domain::pitch::CoordinateSystem;
use crate::domain::team::{Matchup, Team};
use crate::domain::transform::CoordinateTransformer;
use crate::statsbomb::attributes;
use crate::statsbomb::codes::{lookup, EventKind};
use crate::statsbomb::fidelity::{detect_fidelity, resolve_coordinates, Fidelity, FidelityVersions};
use crate::statsbomb::raw::{RawEvent, RawLineup};
use crate::statsbomb::roster;
use crate::util::parse_clock;

/// Gap inserted between consecutive periods so their clock ranges never touch.
const PERIOD_GAP: f64 = 0.001;

/// Turns one match's event and lineup feeds into a normalized event dataset.
///
/// One call deserializes one match; the deserializer itself is stateless
/// between calls and holds only configuration: the inclusion filter and the
/// coordinate system events are transformed into.
pub struct StatsBombDeserializer {
    filter: EventFilter,
    coordinate_system: CoordinateSystem,
}

impl Default for StatsBombDeserializer {
    fn default() -> Self {
        Self::new(EventFilter::include_all(), CoordinateSystem::default())
    }
}

impl StatsBombDeserializer {
    #[must_use]
    pub const fn new(filter: EventFilter, coordinate_system: CoordinateSystem) -> Self {
        Self {
            filter,
            coordinate_system,
        }
    }

    #[must_use]
    pub const fn provider(&self) -> Provider {
        Provider::StatsBomb
    }

    /// Deserializes the event feed plus the two-record lineup feed.
    ///
    /// The first lineup record is taken as the home side. Any mapping
    /// inconsistency aborts the whole call with a descriptive error; there is
    /// no partial-result mode.
    pub fn deserialize(
        &self,
        event_data: impl Read,
        lineup_data: impl Read,
    ) -> Result<EventDataset> {
        let raw_values: Vec<Value> =
            serde_json::from_reader(event_data).context("Failed to parse event data")?;
        let raw_events = raw_values
            .iter()
            .map(|value| serde_json::from_value::<RawEvent>(value.clone()))
            .collect::<Result<Vec<_>, _>>()
            .context("Malformed event record")?;
        debug!("Loaded {} raw events", raw_events.len());

        let lineups: Vec<RawLineup> =
            serde_json::from_reader(lineup_data).context("Failed to parse lineup data")?;
        let [home_lineup, away_lineup]: [RawLineup; 2] = lineups
            .try_into()
            .map_err(|l: Vec<RawLineup>| {
                anyhow!("Expected exactly two lineup records, got {}", l.len())
            })?;

        let fidelity = detect_fidelity(&raw_events)?;
        info!(
            "Determined coordinate fidelity: shot {:?} / movement {:?}",
            fidelity.shot, fidelity.movement
        );

        let teams = roster::build_rosters(&raw_events, &home_lineup, &away_lineup);
        let transformer =
            CoordinateTransformer::new(CoordinateSystem::statsbomb(), self.coordinate_system);

        let mut assembler = Assembler {
            teams: &teams,
            fidelity,
            filter: &self.filter,
            transformer: &transformer,
            period: None,
            periods: Vec::new(),
            events: Vec::new(),
        };
        for (raw, value) in raw_events.iter().zip(raw_values) {
            assembler.process(raw, Arc::new(value))?;
        }
        let (periods, events) = assembler.finish();
        debug!(
            "Assembled {} events across {} periods",
            events.len(),
            periods.len()
        );

        Ok(EventDataset {
            metadata: Metadata {
                teams,
                periods,
                pitch_dimensions: transformer.to_coordinate_system().pitch_dimensions,
                frame_rate: None,
                orientation: Orientation::ActionExecutingTeam,
                flags: vec![DatasetFlag::BallOwningTeam],
                score: None,
                provider: self.provider(),
                coordinate_system: *transformer.to_coordinate_system(),
            },
            events,
        })
    }
}

/// Loop state threaded through the event iteration: the open period, the
/// closed period list, and the normalized events accumulated so far.
struct Assembler<'a> {
    teams: &'a Matchup<Arc<Team>>,
    fidelity: FidelityVersions,
    filter: &'a EventFilter,
    transformer: &'a CoordinateTransformer,
    period: Option<Period>,
    periods: Vec<Period>,
    events: Vec<Event>,
}

impl Assembler<'_> {
    fn process(&mut self, raw: &RawEvent, raw_value: Arc<Value>) -> Result<()> {
        let team = self.find_team(raw.team.id).with_context(|| {
            format!("Unknown team id {} on event {}", raw.team.id, raw.id)
        })?;
        let ball_owning_team = self.find_team(raw.possession_team.id).with_context(|| {
            format!(
                "Unknown possession team id {} on event {}",
                raw.possession_team.id, raw.id
            )
        })?;

        let timestamp = parse_clock(&raw.timestamp)
            .with_context(|| format!("Bad timestamp on event {}", raw.id))?;
        let period_id = self.advance_period(raw.period, timestamp)?;

        let player = match &raw.player {
            Some(p) => Some(team.player_by_id(&p.id.to_string()).with_context(|| {
                format!("Unknown player {} for team {} on event {}", p.id, team.name, raw.id)
            })?),
            None => None,
        };

        let kind = lookup::<EventKind>(raw.event_type.id);
        let fidelity = self.select_fidelity(kind);
        let coordinates = raw
            .location
            .as_deref()
            .map(|location| resolve_coordinates(location, fidelity))
            .transpose()
            .with_context(|| format!("Bad location on event {}", raw.id))?;

        for (data, qualifiers) in build_event_payloads(raw, kind, &team, fidelity, timestamp)? {
            self.emit(Event {
                event_id: raw.id.clone(),
                period_id,
                timestamp,
                ball_owning_team: ball_owning_team.clone(),
                ball_state: BallState::Alive,
                team: team.clone(),
                player: player.clone(),
                coordinates,
                qualifiers,
                raw: raw_value.clone(),
                data,
            });
        }
        Ok(())
    }

    fn find_team(&self, team_id: u64) -> Option<Arc<Team>> {
        let team_id = team_id.to_string();
        if self.teams.home.id == team_id {
            Some(self.teams.home.clone())
        } else if self.teams.away.id == team_id {
            Some(self.teams.away.clone())
        } else {
            None
        }
    }

    /// Opens, extends, or rolls over the current period for an event carrying
    /// the given period number and elapsed timestamp.
    fn advance_period(&mut self, period_id: u8, timestamp: f64) -> Result<u8> {
        match &mut self.period {
            Some(period) if period.id == period_id => {
                period.end_timestamp = Some(period.start_timestamp + timestamp);
            }
            open => {
                let start_timestamp = match open.take() {
                    None => timestamp,
                    Some(previous) => {
                        let previous_end = previous.end_timestamp.with_context(|| {
                            format!("Period {} was never closed before period {period_id} began", previous.id)
                        })?;
                        self.periods.push(previous);
                        timestamp + previous_end + PERIOD_GAP
                    }
                };
                *open = Some(Period {
                    id: period_id,
                    start_timestamp,
                    end_timestamp: None,
                });
            }
        }
        Ok(period_id)
    }

    fn select_fidelity(&self, kind: Option<EventKind>) -> Fidelity {
        match kind {
            Some(EventKind::Shot) => self.fidelity.shot,
            Some(kind) if kind.is_movement() => self.fidelity.movement,
            // TODO: verify which tier applies to the remaining categories;
            // movement is an unconfirmed default
            _ => self.fidelity.movement,
        }
    }

    /// Applies filtering and coordinate transformation, then appends; an
    /// out-of-bounds outcome also synthesizes a dead-ball `BallOut` event at
    /// the point where the ball crossed the line.
    fn emit(&mut self, event: Event) {
        let out_coordinates = match &event.data {
            EventData::Pass {
                result: Some(PassResult::Out),
                receiver_coordinates,
                ..
            } => Some(*receiver_coordinates),
            EventData::TakeOn {
                result: TakeOnResult::Out,
            } => event.coordinates,
            _ => None,
        };
        let ball_out = out_coordinates.map(|coordinates| Event {
            ball_state: BallState::Dead,
            coordinates: Some(coordinates),
            qualifiers: Vec::new(),
            data: EventData::BallOut,
            ..event.clone()
        });

        self.push(event);
        if let Some(ball_out) = ball_out {
            self.push(ball_out);
        }
    }

    fn push(&mut self, event: Event) {
        if self.filter.should_include(&event) {
            self.events.push(self.transformer.transform_event(event));
        }
    }

    fn finish(mut self) -> (Vec<Period>, Vec<Event>) {
        if let Some(period) = self.period.take() {
            self.periods.push(period);
        }
        (self.periods, self.events)
    }
}

/// Builds the variant payload(s) for one raw event: usually one, two for a
/// carded foul, none for cardless bad behaviour.
fn build_event_payloads(
    raw: &RawEvent,
    kind: Option<EventKind>,
    team: &Team,
    fidelity: Fidelity,
    timestamp: f64,
) -> Result<Vec<(EventData, Vec<Qualifier>)>> {
    let mut payloads = Vec::with_capacity(1);
    match kind {
        Some(EventKind::Pass) => {
            let pass = raw
                .pass
                .as_ref()
                .with_context(|| format!("Pass event {} missing pass payload", raw.id))?;
            let attrs = attributes::pass_attributes(pass, team, fidelity)?;
            let duration = raw
                .duration
                .with_context(|| format!("Pass event {} missing duration", raw.id))?;
            payloads.push((
                EventData::Pass {
                    result: attrs.result,
                    receiver: attrs.receiver,
                    receiver_coordinates: attrs.receiver_coordinates,
                    receive_timestamp: timestamp + duration,
                },
                attrs.qualifiers,
            ));
        }
        Some(EventKind::Shot) => {
            let shot = raw
                .shot
                .as_ref()
                .with_context(|| format!("Shot event {} missing shot payload", raw.id))?;
            let attrs = attributes::shot_attributes(shot)?;
            payloads.push((EventData::Shot { result: attrs.result }, attrs.qualifiers));
        }
        Some(EventKind::Dribble) => {
            let dribble = raw
                .dribble
                .as_ref()
                .with_context(|| format!("Take-on event {} missing dribble payload", raw.id))?;
            payloads.push((
                EventData::TakeOn {
                    result: attributes::take_on_result(dribble)?,
                },
                Vec::new(),
            ));
        }
        Some(EventKind::Carry) => {
            let carry = raw
                .carry
                .as_ref()
                .with_context(|| format!("Carry event {} missing carry payload", raw.id))?;
            let attrs = attributes::carry_attributes(carry, fidelity)?;
            payloads.push((
                EventData::Carry {
                    result: attrs.result,
                    end_coordinates: attrs.end_coordinates,
                    end_timestamp: timestamp + raw.duration.unwrap_or(0.0),
                },
                Vec::new(),
            ));
        }
        Some(EventKind::Substitution) => {
            let substitution = raw.substitution.as_ref().with_context(|| {
                format!("Substitution event {} missing substitution payload", raw.id)
            })?;
            payloads.push((
                EventData::Substitution {
                    replacement: attributes::replacement_player(substitution, team)?,
                },
                Vec::new(),
            ));
        }
        Some(EventKind::FoulCommitted) => {
            payloads.push((EventData::FoulCommitted, Vec::new()));
            if let Some(card) = raw.foul_committed.as_ref().and_then(|d| d.card.as_ref()) {
                payloads.push((
                    EventData::Card {
                        card_type: attributes::card_type(card)?,
                    },
                    Vec::new(),
                ));
            }
        }
        Some(EventKind::BadBehaviour) => {
            // No standalone event; only a card, when one was shown
            if let Some(card) = raw.bad_behaviour.as_ref().and_then(|d| d.card.as_ref()) {
                payloads.push((
                    EventData::Card {
                        card_type: attributes::card_type(card)?,
                    },
                    Vec::new(),
                ));
            }
        }
        Some(EventKind::PlayerOn) => payloads.push((EventData::PlayerOn, Vec::new())),
        Some(EventKind::PlayerOff) => payloads.push((EventData::PlayerOff, Vec::new())),
        Some(EventKind::Recovery) => payloads.push((EventData::Recovery, Vec::new())),
        Some(EventKind::HalfStart | EventKind::HalfEnd | EventKind::StartingXi) | None => {
            let name = raw.event_type.name.clone().with_context(|| {
                format!(
                    "Event type {} missing display name on event {}",
                    raw.event_type.id, raw.id
                )
            })?;
            payloads.push((EventData::Generic { name }, Vec::new()));
        }
    }
    Ok(payloads)
}
