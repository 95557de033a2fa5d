use crate::domain::event::{Event, EventData};
use crate::domain::pitch::{CoordinateSystem, Point};

/// Remaps event coordinates from one coordinate system into another.
///
/// Built once per deserialization call with the provider's native system as
/// the source. The remap is a linear rescale of both axes, with a vertical
/// flip when the two systems disagree on which way y grows.
#[derive(Debug, Clone)]
pub struct CoordinateTransformer {
    from: CoordinateSystem,
    to: CoordinateSystem,
}

impl CoordinateTransformer {
    #[must_use]
    pub const fn new(from: CoordinateSystem, to: CoordinateSystem) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn to_coordinate_system(&self) -> &CoordinateSystem {
        &self.to
    }

    #[must_use]
    pub fn transform_point(&self, point: Point) -> Point {
        let from = self.from.pitch_dimensions;
        let to = self.to.pitch_dimensions;
        let x_rel = (point.x - from.x.min) / from.x.size();
        let mut y_rel = (point.y - from.y.min) / from.y.size();
        if self.from.vertical_orientation != self.to.vertical_orientation {
            y_rel = 1.0 - y_rel;
        }
        Point {
            x: to.x.min + x_rel * to.x.size(),
            y: to.y.min + y_rel * to.y.size(),
        }
    }

    /// Remaps every coordinate-bearing field of the event.
    #[must_use]
    pub fn transform_event(&self, mut event: Event) -> Event {
        event.coordinates = event.coordinates.map(|p| self.transform_point(p));
        match &mut event.data {
            EventData::Pass {
                receiver_coordinates,
                ..
            } => *receiver_coordinates = self.transform_point(*receiver_coordinates),
            EventData::Carry {
                end_coordinates, ..
            } => *end_coordinates = self.transform_point(*end_coordinates),
            _ => {}
        }
        event
    }
}
