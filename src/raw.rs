//! Device records as the backend sends them
//!
//! Every field is optional here. Validation into [`Device`](crate::Device)
//! happens in [`decode`](crate::decode).

use crate::types::GeoPoint;
use serde::Deserialize;

/// One entry of the backend's `Devices` list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDevice {
    pub id: Option<String>,
    pub crs_type: Option<String>,
    pub icon_name: Option<String>,
    pub location: Option<RawLocation>,
    pub status: Option<String>,
    pub sensor_type: Option<String>,
    pub sensor_model: Option<String>,
    pub description: Option<String>,
    pub is_data_secret: Option<bool>,
    /// Older backends send `dataSecret` instead of `isDataSecret`
    pub data_secret: Option<bool>,
    /// Expected to be `[start, end]` in degrees, checked in decoding
    pub measuring_direction: Option<serde_json::Value>,
    pub measuring_radius: Option<f64>,
    pub measuring_interval: Option<f64>,
    pub measuring_description: Option<String>,
    pub stationary: Option<bool>,
    pub data_link: Option<String>,
    /// Usually a string, but numbers show up too
    pub data_latest_value: Option<serde_json::Value>,
}

/// Device location
///
/// Either `lat`/`lng` (northing/easting for EPSG:3067 records) or a
/// `coordinates` array `[x, y, z?]` with x = easting or longitude.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub elevation: Option<f64>,
    pub coordinates: Option<Vec<f64>>,
    pub path: Option<Vec<GeoPoint>>,
    pub area: Option<Vec<GeoPoint>>,
}
