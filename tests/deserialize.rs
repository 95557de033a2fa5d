use std::fs;
use std::path::PathBuf;

use serde_json::json;

use touchline::domain::dataset::{DatasetFlag, EventDataset, Orientation, Provider};
use touchline::domain::event::{
    BallState, BodyPart, CardType, EventData, EventFilter, EventType, PassResult, Qualifier,
    SetPieceType, ShotResult, TakeOnResult,
};
use touchline::domain::pitch::CoordinateSystem;
use touchline::domain::team::Ground;
use touchline::statsbomb::deserializer::StatsBombDeserializer;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// Deserializes the fixtures into the vendor's native coordinate system so
/// coordinate assertions stay in raw pitch units.
fn native_dataset() -> EventDataset {
    StatsBombDeserializer::new(EventFilter::include_all(), CoordinateSystem::statsbomb())
        .deserialize(
            read_fixture("events.json").as_bytes(),
            read_fixture("lineups.json").as_bytes(),
        )
        .expect("fixtures should deserialize")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn full_timeline_shape() {
    let dataset = native_dataset();

    // 17 raw events, plus a synthetic ball-out and a card on the foul,
    // minus nothing (no filter)
    assert_eq!(dataset.events.len(), 19);

    let metadata = &dataset.metadata;
    assert_eq!(metadata.provider, Provider::StatsBomb);
    assert_eq!(metadata.orientation, Orientation::ActionExecutingTeam);
    assert_eq!(metadata.flags, vec![DatasetFlag::BallOwningTeam]);
    assert_eq!(metadata.frame_rate, None);
    assert!(metadata.score.is_none());
    assert_eq!(metadata.pitch_dimensions.x.max, 120.0);
    assert_eq!(metadata.pitch_dimensions.y.max, 80.0);
    assert_eq!(metadata.teams.home.name, "Alpha FC");
    assert_eq!(metadata.teams.home.ground, Ground::Home);
    assert_eq!(metadata.teams.away.name, "Beta United");

    assert_eq!(metadata.periods.len(), 2);
    let first = metadata.periods[0];
    let second = metadata.periods[1];
    assert_eq!(first.id, 1);
    assert!(approx(first.start_timestamp, 0.0));
    assert!(approx(first.end_timestamp.unwrap(), 45.0));
    assert_eq!(second.id, 2);
    assert!(second.start_timestamp > first.end_timestamp.unwrap());
    assert!(approx(second.start_timestamp, 45.001));
    assert!(approx(second.end_timestamp.unwrap(), 45.001 + 190.0));
}

#[test]
fn complete_pass_carries_receiver_and_qualifiers() {
    let dataset = native_dataset();
    let pass = &dataset.events[3];
    assert_eq!(pass.event_id, "e4");
    assert_eq!(pass.team.id, "100");
    assert_eq!(pass.player.as_ref().unwrap().name, "Ann Archer");
    assert_eq!(pass.ball_state, BallState::Alive);
    assert_eq!(pass.period_id, 1);
    assert!(approx(pass.timestamp, 5.5));

    let coords = pass.coordinates.unwrap();
    assert!(approx(coords.x, 60.5));
    assert!(approx(coords.y, 40.5));
    assert_eq!(
        pass.qualifiers,
        vec![
            Qualifier::SetPiece(SetPieceType::KickOff),
            Qualifier::BodyPart(BodyPart::RightFoot)
        ]
    );

    match &pass.data {
        EventData::Pass {
            result,
            receiver,
            receiver_coordinates,
            receive_timestamp,
        } => {
            assert_eq!(*result, Some(PassResult::Complete));
            assert_eq!(receiver.as_ref().unwrap().id, "2");
            assert!(approx(receiver_coordinates.x, 64.5));
            assert!(approx(receiver_coordinates.y, 42.5));
            assert!(approx(*receive_timestamp, 6.75));
        }
        other => panic!("expected a pass, got {other:?}"),
    }

    // The untouched raw record rides along on the event
    assert_eq!(pass.raw["type"]["id"], json!(30));
}

#[test]
fn out_pass_is_followed_by_a_matching_ball_out() {
    let dataset = native_dataset();
    let pass = &dataset.events[4];
    assert_eq!(pass.event_id, "e5");
    let receiver_coordinates = match &pass.data {
        EventData::Pass {
            result,
            receiver_coordinates,
            ..
        } => {
            assert_eq!(*result, Some(PassResult::Out));
            *receiver_coordinates
        }
        other => panic!("expected a pass, got {other:?}"),
    };

    let ball_out = &dataset.events[5];
    assert_eq!(ball_out.event_type(), EventType::BallOut);
    assert_eq!(ball_out.event_id, "e5");
    assert_eq!(ball_out.ball_state, BallState::Dead);
    let coords = ball_out.coordinates.unwrap();
    assert!(approx(coords.x, receiver_coordinates.x));
    assert!(approx(coords.y, receiver_coordinates.y));
    assert!(approx(coords.x, 79.5));
    assert!(approx(coords.y, 0.5));
    assert!(ball_out.qualifiers.is_empty());
}

#[test]
fn shot_uses_its_own_fidelity_tier() {
    let dataset = native_dataset();
    let shot = &dataset.events[6];
    assert_eq!(shot.event_id, "e6");

    // The only fractional location in the fixture is on this shot, so the
    // shot tier is sub-cell while movement events stay on the whole-cell grid
    let coords = shot.coordinates.unwrap();
    assert!(approx(coords.x, 100.25));
    assert!(approx(coords.y, 40.65));

    match &shot.data {
        EventData::Shot { result } => assert_eq!(*result, ShotResult::Goal),
        other => panic!("expected a shot, got {other:?}"),
    }
    assert_eq!(
        shot.qualifiers,
        vec![
            Qualifier::SetPiece(SetPieceType::FreeKick),
            Qualifier::BodyPart(BodyPart::Head)
        ]
    );
}

#[test]
fn vendor_dribble_and_carry_map_to_take_on_and_carry() {
    let dataset = native_dataset();

    let take_on = &dataset.events[7];
    assert_eq!(take_on.event_id, "e7");
    match &take_on.data {
        EventData::TakeOn { result } => assert_eq!(*result, TakeOnResult::Incomplete),
        other => panic!("expected a take-on, got {other:?}"),
    }

    let carry = &dataset.events[8];
    assert_eq!(carry.event_id, "e8");
    match &carry.data {
        EventData::Carry {
            end_coordinates,
            end_timestamp,
            ..
        } => {
            assert!(approx(end_coordinates.x, 24.5));
            assert!(approx(end_coordinates.y, 23.5));
            assert!(approx(*end_timestamp, 23.0));
        }
        other => panic!("expected a carry, got {other:?}"),
    }
}

#[test]
fn carded_foul_yields_foul_then_card() {
    let dataset = native_dataset();
    let foul = &dataset.events[10];
    let card = &dataset.events[11];
    assert_eq!(foul.event_id, "e10");
    assert_eq!(foul.event_type(), EventType::FoulCommitted);
    assert_eq!(card.event_id, "e10");
    match &card.data {
        EventData::Card { card_type } => assert_eq!(*card_type, CardType::Red),
        other => panic!("expected a card, got {other:?}"),
    }
}

#[test]
fn bad_behaviour_card_stands_alone() {
    let dataset = native_dataset();
    let cards: Vec<_> = dataset
        .events
        .iter()
        .filter(|e| e.event_id == "e14")
        .collect();
    assert_eq!(cards.len(), 1);
    match &cards[0].data {
        EventData::Card { card_type } => assert_eq!(*card_type, CardType::FirstYellow),
        other => panic!("expected a card, got {other:?}"),
    }
}

#[test]
fn starting_flags_follow_the_announcement() {
    let dataset = native_dataset();
    let home = &dataset.metadata.teams.home;
    let away = &dataset.metadata.teams.away;
    assert!(home.player_by_id("1").unwrap().starting);
    assert!(home.player_by_id("2").unwrap().starting);
    assert!(!home.player_by_id("3").unwrap().starting);
    assert!(away.player_by_id("11").unwrap().starting);
    assert!(away.player_by_id("12").unwrap().starting);
}

#[test]
fn substitution_resolves_the_replacement_in_the_roster() {
    let dataset = native_dataset();
    let substitution = dataset
        .events_of_type(EventType::Substitution)
        .next()
        .unwrap();
    assert_eq!(substitution.event_id, "e13");
    match &substitution.data {
        EventData::Substitution { replacement } => {
            assert_eq!(replacement.id, "3");
            assert_eq!(replacement.name, "Cal Cole");
        }
        other => panic!("expected a substitution, got {other:?}"),
    }
}

#[test]
fn remaining_categories_deserialize_as_their_variants() {
    let dataset = native_dataset();
    assert_eq!(dataset.events_of_type(EventType::Recovery).count(), 1);
    assert_eq!(dataset.events_of_type(EventType::PlayerOn).count(), 1);
    assert_eq!(dataset.events_of_type(EventType::PlayerOff).count(), 1);
    let generic_names: Vec<_> = dataset
        .events_of_type(EventType::Generic)
        .map(|e| match &e.data {
            EventData::Generic { name } => name.as_str(),
            other => panic!("expected generic, got {other:?}"),
        })
        .collect();
    assert_eq!(
        generic_names,
        vec![
            "Starting XI",
            "Starting XI",
            "Half Start",
            "Half End",
            "Half Start",
            "Pressure"
        ]
    );
}

#[test]
fn inclusion_filter_applies_to_synthetic_events_independently() {
    let deserializer = StatsBombDeserializer::new(
        EventFilter::with_types([EventType::BallOut]),
        CoordinateSystem::statsbomb(),
    );
    let dataset = deserializer
        .deserialize(
            read_fixture("events.json").as_bytes(),
            read_fixture("lineups.json").as_bytes(),
        )
        .expect("fixtures should deserialize");
    // The pass that produced it is filtered out, the ball-out survives
    assert_eq!(dataset.events.len(), 1);
    assert_eq!(dataset.events[0].event_type(), EventType::BallOut);
}

#[test]
fn default_target_system_rescales_and_flips() {
    let dataset = StatsBombDeserializer::default()
        .deserialize(
            read_fixture("events.json").as_bytes(),
            read_fixture("lineups.json").as_bytes(),
        )
        .expect("fixtures should deserialize");
    assert_eq!(dataset.metadata.pitch_dimensions.x.max, 1.0);
    let pass = &dataset.events[3];
    let coords = pass.coordinates.unwrap();
    assert!(approx(coords.x, 60.5 / 120.0));
    assert!(approx(coords.y, 1.0 - 40.5 / 80.0));
}

#[test]
fn unknown_replacement_id_fails_naming_the_id() {
    let events = json!([{
        "id": "s1",
        "type": {"id": 19, "name": "Substitution"},
        "period": 1,
        "timestamp": "00:00:10.000",
        "team": {"id": 100, "name": "Alpha FC"},
        "possession_team": {"id": 100, "name": "Alpha FC"},
        "substitution": {"replacement": {"id": 99, "name": "Nobody"}}
    }])
    .to_string();
    let err = StatsBombDeserializer::default()
        .deserialize(events.as_bytes(), read_fixture("lineups.json").as_bytes())
        .unwrap_err();
    assert!(format!("{err:#}").contains("replacement player 99"));
}

#[test]
fn unknown_outcome_and_team_ids_abort_the_call() {
    let bad_outcome = json!([{
        "id": "p1",
        "type": {"id": 30, "name": "Pass"},
        "period": 1,
        "timestamp": "00:00:10.000",
        "team": {"id": 100, "name": "Alpha FC"},
        "possession_team": {"id": 100, "name": "Alpha FC"},
        "duration": 1.0,
        "pass": {"outcome": {"id": 999, "name": "???"}, "end_location": [50.0, 40.0]}
    }])
    .to_string();
    let err = StatsBombDeserializer::default()
        .deserialize(bad_outcome.as_bytes(), read_fixture("lineups.json").as_bytes())
        .unwrap_err();
    assert!(format!("{err:#}").contains("Unknown pass outcome: 999"));

    let bad_team = json!([{
        "id": "g1",
        "type": {"id": 17, "name": "Pressure"},
        "period": 1,
        "timestamp": "00:00:10.000",
        "team": {"id": 300, "name": "Gamma Town"},
        "possession_team": {"id": 100, "name": "Alpha FC"}
    }])
    .to_string();
    let err = StatsBombDeserializer::default()
        .deserialize(bad_team.as_bytes(), read_fixture("lineups.json").as_bytes())
        .unwrap_err();
    assert!(format!("{err:#}").contains("Unknown team id 300"));
}

#[test]
fn lineup_feed_must_hold_exactly_two_records() {
    let lineups = json!([{
        "team_id": 100,
        "team_name": "Alpha FC",
        "lineup": []
    }])
    .to_string();
    let err = StatsBombDeserializer::default()
        .deserialize("[]".as_bytes(), lineups.as_bytes())
        .unwrap_err();
    assert!(format!("{err:#}").contains("exactly two lineup records"));
}
