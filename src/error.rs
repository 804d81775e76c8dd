use std::io;

/// Unrecoverable conversion and decoding errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid coordinate: ({x}, {y})")]
    InvalidCoordinate { x: f64, y: f64 },

    #[error("Invalid measuring direction: ({start_deg}, {end_deg})")]
    InvalidDirection { start_deg: f64, end_deg: f64 },

    #[error("Invalid overlay radius: {0}")]
    InvalidRadius(f64),

    #[error("Unsupported projection definition: {0}")]
    InvalidProjection(String),

    #[error("Device {id:?} is missing required field `{field}`")]
    MissingField { id: String, field: &'static str },

    #[error("Device {id:?} is not in EPSG:4326 (found {crs})")]
    NotNormalized { id: String, crs: String },
}

/// Non-fatal issues encountered during lenient device decoding
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// `measuringDirection` was not a pair of numbers, dropped
    MalformedDirection { device_id: String, value: String },

    /// CRS tag not recognized, coordinates kept as-is
    UnknownCrs { device_id: String, crs: String },

    /// Device record failed validation and was skipped
    InvalidDevice { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
