use anyhow::{Context, Result};

use crate::domain::pitch::Point;
use crate::statsbomb::codes::{lookup, EventKind};
use crate::statsbomb::raw::RawEvent;

/// Precision tier of recorded coordinates.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Fidelity {
    /// Whole-cell positions on a 1-unit grid.
    Cell,
    /// Sub-cell positions on a 0.1-unit grid.
    SubCell,
}

impl Fidelity {
    pub(crate) const fn cell_side(self) -> f64 {
        match self {
            Self::Cell => 1.0,
            Self::SubCell => 0.1,
        }
    }
}

impl Default for Fidelity {
    fn default() -> Self {
        Self::Cell
    }
}

/// Shots carry their own tier; passes, carries, and dribbles share one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub(crate) struct FidelityVersions {
    pub shot: Fidelity,
    pub movement: Fidelity,
}

/// One linear pass over the feed: the first fractional coordinate seen for a
/// category upgrades that category's tier for the whole match.
pub(crate) fn detect_fidelity(events: &[RawEvent]) -> Result<FidelityVersions> {
    let mut versions = FidelityVersions::default();
    for event in events {
        let Some(location) = event.location.as_deref() else {
            continue;
        };
        let (x, y) = first_two(location)
            .with_context(|| format!("Malformed location on event {}", event.id))?;
        if x.fract() == 0.0 && y.fract() == 0.0 {
            continue;
        }
        match lookup::<EventKind>(event.event_type.id) {
            Some(EventKind::Shot) => versions.shot = Fidelity::SubCell,
            Some(kind) if kind.is_movement() => versions.movement = Fidelity::SubCell,
            _ => {}
        }
    }
    Ok(versions)
}

/// Raw locations index cells from (1, 1); shifting back by half a cell side
/// recovers the cell center as a continuous point.
pub(crate) fn resolve_coordinates(location: &[f64], fidelity: Fidelity) -> Result<Point> {
    let (x, y) = first_two(location)
        .with_context(|| format!("Location needs at least two components: {location:?}"))?;
    let half_cell = fidelity.cell_side() / 2.0;
    Ok(Point {
        x: x - half_cell,
        y: y - half_cell,
    })
}

fn first_two(values: &[f64]) -> Option<(f64, f64)> {
    match values {
        [x, y, ..] => Some((*x, *y)),
        _ => None,
    }
}
