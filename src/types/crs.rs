use crate::types::{GeoPoint, ProjectedPoint};
use std::fmt;

/// Coordinate reference system tag
///
/// Only the two systems the sensor backend produces are recognized. Any other
/// tag is carried along verbatim and never converted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Crs {
    /// ETRS-TM35FIN, the projected system used by Finnish authorities
    Etrs89Tm35Fin,
    /// WGS84 latitude/longitude, used by web map tiles
    Wgs84,
    /// Unrecognized tag
    Other(String),
}

impl Crs {
    pub const EPSG_3067: &'static str = "EPSG:3067";
    pub const EPSG_4326: &'static str = "EPSG:4326";

    /// Parse from an `EPSG:xxxx` tag (exact match, as sent by the backend)
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::EPSG_3067 => Crs::Etrs89Tm35Fin,
            Self::EPSG_4326 => Crs::Wgs84,
            other => Crs::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Crs::Etrs89Tm35Fin => Self::EPSG_3067,
            Crs::Wgs84 => Self::EPSG_4326,
            Crs::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Device coordinates together with the system they are expressed in
///
/// The CRS tag of a device is derived from this value, so replacing the
/// position is the only way to change the tag and the coordinates can never
/// disagree with it.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    /// EPSG:3067 easting/northing
    Projected(ProjectedPoint),
    /// EPSG:4326 latitude/longitude
    Geographic(GeoPoint),
    /// Coordinates under an unrecognized tag, `x` first as the backend orders them
    Other { crs: String, x: f64, y: f64 },
}

impl Position {
    /// Build from a CRS tag and raw `(x, y)` values
    ///
    /// `x` is easting or longitude, `y` is northing or latitude.
    pub fn from_raw(crs: Crs, x: f64, y: f64) -> Self {
        match crs {
            Crs::Etrs89Tm35Fin => Position::Projected(ProjectedPoint::new(x, y)),
            Crs::Wgs84 => Position::Geographic(GeoPoint::new(y, x)),
            Crs::Other(crs) => Position::Other { crs, x, y },
        }
    }

    pub fn crs(&self) -> Crs {
        match self {
            Position::Projected(_) => Crs::Etrs89Tm35Fin,
            Position::Geographic(_) => Crs::Wgs84,
            Position::Other { crs, .. } => Crs::Other(crs.clone()),
        }
    }

    /// Raw `(x, y)` values, easting/longitude first
    pub fn xy(&self) -> (f64, f64) {
        match *self {
            Position::Projected(p) => (p.easting, p.northing),
            Position::Geographic(p) => (p.lng, p.lat),
            Position::Other { x, y, .. } => (x, y),
        }
    }

    pub fn as_geographic(&self) -> Option<GeoPoint> {
        match self {
            Position::Geographic(point) => Some(*point),
            _ => None,
        }
    }
}
