use std::collections::HashSet;
use std::sync::Arc;

use itertools::Itertools;
use tracing::debug;

use crate::domain::team::{Ground, Matchup, Player, Team};
use crate::statsbomb::codes::{lookup, EventKind};
use crate::statsbomb::raw::{RawEvent, RawLineup};

/// Player ids named in either side's pregame starting-eleven announcement.
///
/// Feeds without a starting-eleven event yield an empty set, leaving every
/// player flagged as a non-starter.
pub(crate) fn starting_player_ids(events: &[RawEvent]) -> HashSet<String> {
    events
        .iter()
        .filter(|e| lookup::<EventKind>(e.event_type.id) == Some(EventKind::StartingXi))
        .filter_map(|e| e.tactics.as_ref())
        .flat_map(|tactics| &tactics.lineup)
        .map(|entry| entry.player.id.to_string())
        .collect()
}

pub(crate) fn build_team(
    lineup: &RawLineup,
    ground: Ground,
    starters: &HashSet<String>,
) -> Arc<Team> {
    let team_id = lineup.team_id.to_string();
    let players = lineup
        .lineup
        .iter()
        .map(|p| {
            let id = p.player_id.to_string();
            Arc::new(Player {
                starting: starters.contains(&id),
                id,
                team_id: team_id.clone(),
                name: p.player_name.clone(),
                jersey_no: p.jersey_number,
            })
        })
        .collect_vec();
    Arc::new(Team {
        id: team_id,
        name: lineup.team_name.clone(),
        ground,
        players,
    })
}

pub(crate) fn build_rosters(
    events: &[RawEvent],
    home: &RawLineup,
    away: &RawLineup,
) -> Matchup<Arc<Team>> {
    let starters = starting_player_ids(events);
    debug!("Collected {} starting-eleven ids", starters.len());
    Matchup::new(
        build_team(home, Ground::Home, &starters),
        build_team(away, Ground::Away, &starters),
    )
}
