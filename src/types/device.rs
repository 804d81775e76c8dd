use crate::types::{Crs, DirectionInterval, GeoPoint, Position};

/// Sensor category
///
/// The backend's display string doubles as the layer key in the map view, so
/// [`SensorType::as_str`] returns exactly what was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensorType {
    TrafficLight,
    WeatherStation,
    Counter,
    Other(String),
}

impl SensorType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Traffic Light" => SensorType::TrafficLight,
            "Weather Station" => SensorType::WeatherStation,
            "Counter" => SensorType::Counter,
            other => SensorType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SensorType::TrafficLight => "Traffic Light",
            SensorType::WeatherStation => "Weather Station",
            SensorType::Counter => "Counter",
            SensorType::Other(name) => name,
        }
    }
}

/// Operational status, drives the marker color class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Online,
    Offline,
    Maintenance,
    Other(String),
}

impl Status {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Online" => Status::Online,
            "Offline" => Status::Offline,
            "Maintenance" => Status::Maintenance,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Online => "Online",
            Status::Offline => "Offline",
            Status::Maintenance => "Maintenance",
            Status::Other(name) => name,
        }
    }
}

/// A sensor device, validated from the backend's device list
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: String,

    // Location
    pub position: Position,
    pub elevation: Option<f64>,
    /// Route a moving sensor follows (EPSG:4326)
    pub path: Option<Vec<GeoPoint>>,
    /// Area a moving sensor covers (EPSG:4326)
    pub area: Option<Vec<GeoPoint>>,

    // Classification
    pub sensor_type: SensorType,
    pub sensor_model: Option<String>,
    pub status: Status,
    pub icon_name: String,
    pub description: String,

    // Measurement
    pub measuring_direction: Option<DirectionInterval>,
    pub measuring_radius: f64,
    pub measuring_interval: f64,
    pub measuring_description: Option<String>,
    pub stationary: bool,

    // Data access
    pub is_data_secret: bool,
    pub data_link: Option<String>,
    pub data_latest_value: Option<String>,
}

impl Device {
    /// Create a device with the given id and position, all other fields empty
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            elevation: None,
            path: None,
            area: None,
            sensor_type: SensorType::Other(String::new()),
            sensor_model: None,
            status: Status::Other(String::new()),
            icon_name: String::new(),
            description: String::new(),
            measuring_direction: None,
            measuring_radius: 0.0,
            measuring_interval: 0.0,
            measuring_description: None,
            stationary: true,
            is_data_secret: false,
            data_link: None,
            data_latest_value: None,
        }
    }

    /// CRS tag of the current position
    pub fn crs(&self) -> Crs {
        self.position.crs()
    }

    /// Whether the device reports wait times through the traffic light API
    pub fn is_traffic_light(&self) -> bool {
        self.sensor_type == SensorType::TrafficLight || self.data_latest_value.is_some()
    }
}
