use serde::{Deserialize, Serialize};

/// A geographic point (EPSG:4326)
///
/// Latitude and longitude in decimal degrees. Serializes as `{"lat": .., "lng": ..}`,
/// the shape map renderers consume directly as polygon/polyline vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check that both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Check that the point is finite and its latitude lies within ±90°
    pub fn is_valid(&self) -> bool {
        self.is_finite() && (-90.0..=90.0).contains(&self.lat)
    }
}

/// A projected point in ETRS-TM35FIN (EPSG:3067)
///
/// Easting and northing in meters. The false easting of the projection is
/// 500 000 m, so values near 500 000 lie on the central meridian (27°E).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Easting in meters (x)
    pub easting: f64,
    /// Northing in meters (y)
    pub northing: f64,
}

impl ProjectedPoint {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }

    pub fn is_finite(&self) -> bool {
        self.easting.is_finite() && self.northing.is_finite()
    }
}
