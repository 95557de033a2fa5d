/// A continuous position on the pitch, in the owning coordinate system's units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dimension {
    pub min: f64,
    pub max: f64,
}

impl Dimension {
    #[must_use]
    pub fn size(self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PitchDimensions {
    pub x: Dimension,
    pub y: Dimension,
}

/// Direction of increasing y when looking at the pitch from the main stand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VerticalOrientation {
    TopToBottom,
    BottomToTop,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateSystem {
    pub pitch_dimensions: PitchDimensions,
    pub vertical_orientation: VerticalOrientation,
}

impl CoordinateSystem {
    /// StatsBomb's native system: 120x80 units, y growing toward the bottom.
    #[must_use]
    pub const fn statsbomb() -> Self {
        Self {
            pitch_dimensions: PitchDimensions {
                x: Dimension { min: 0.0, max: 120.0 },
                y: Dimension { min: 0.0, max: 80.0 },
            },
            vertical_orientation: VerticalOrientation::TopToBottom,
        }
    }

    /// Provider-neutral unit square, y growing toward the top.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            pitch_dimensions: PitchDimensions {
                x: Dimension { min: 0.0, max: 1.0 },
                y: Dimension { min: 0.0, max: 1.0 },
            },
            vertical_orientation: VerticalOrientation::BottomToTop,
        }
    }
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::unit()
    }
}
