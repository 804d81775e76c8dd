/// Measuring direction of a sensor
///
/// The backend encodes "measures in every direction" as the degree pair
/// `(-180, 180)`. That pair, and only that exact pair, becomes [`FullCircle`];
/// every other pair is a [`Cone`], including near-degenerate ones.
///
/// Angles are not range-checked. Values outside ±180° give a valid, if
/// unusual, cone.
///
/// [`FullCircle`]: DirectionInterval::FullCircle
/// [`Cone`]: DirectionInterval::Cone
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectionInterval {
    FullCircle,
    /// Angular interval in degrees, clockwise from north
    Cone { start_deg: f64, end_deg: f64 },
}

impl DirectionInterval {
    pub const FULL_CIRCLE_DEGREES: (f64, f64) = (-180.0, 180.0);

    /// Build from a raw `(start, end)` degree pair
    pub fn from_degrees(start_deg: f64, end_deg: f64) -> Self {
        if (start_deg, end_deg) == Self::FULL_CIRCLE_DEGREES {
            DirectionInterval::FullCircle
        } else {
            DirectionInterval::Cone { start_deg, end_deg }
        }
    }

    /// The raw degree pair, as the backend would send it
    pub fn to_degrees(&self) -> (f64, f64) {
        match *self {
            DirectionInterval::FullCircle => Self::FULL_CIRCLE_DEGREES,
            DirectionInterval::Cone { start_deg, end_deg } => (start_deg, end_deg),
        }
    }

    pub fn is_finite(&self) -> bool {
        let (start, end) = self.to_degrees();
        start.is_finite() && end.is_finite()
    }
}
